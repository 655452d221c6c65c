/// Whether every letter in `s` is upper-case.
///
/// Non-letters are ignored, so `"ID2"`, `"_"` and `""` all count as upper.
///
/// # Examples
/// ```
/// use typebridge_core::utils::is_upper;
/// assert!(is_upper("URL"));
/// assert!(!is_upper("UserID"));
/// ```
pub fn is_upper(s: &str) -> bool {
    s.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
}

/// Lower-case the first character, leaving the rest unchanged.
///
/// # Examples
/// ```
/// use typebridge_core::utils::to_lower_first;
/// assert_eq!(to_lower_first("UserID"), "userID");
/// ```
pub fn to_lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
