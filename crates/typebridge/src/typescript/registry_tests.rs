use super::Registry;

#[test]
fn new_registry_is_empty() {
    let registry = Registry::<u32>::new();

    assert_eq!(registry.overrides_count(), 0);
    assert_eq!(registry.param_names_count(), 0);
    assert_eq!(registry.override_for(1), None);
}

#[test]
fn later_entries_replace_earlier_ones() {
    let mut registry = Registry::new();
    registry.add_overrides([(1u32, "A"), (2, "B")]);
    registry.add_overrides([(1, "C".to_string())]);

    assert_eq!(registry.override_for(1), Some("C"));
    assert_eq!(registry.override_for(2), Some("B"));
    assert_eq!(registry.overrides_count(), 2);
}

#[test]
fn param_names_are_separate_from_overrides() {
    let mut registry = Registry::new();
    registry.add_param_names([(7u32, "item")]);
    registry.add_param_name(7, "entry");

    assert_eq!(registry.param_name_for(7), Some("entry"));
    assert_eq!(registry.override_for(7), None);
    assert_eq!(registry.param_names_count(), 1);
}

#[test]
fn converter_seeds_primitives() {
    let fx = crate::test_utils::Fixture::new();
    let c = crate::Converter::new(&fx.graph);

    assert_eq!(c.registry().override_for(fx.string), Some("string"));
    assert_eq!(c.registry().param_name_for(fx.string), Some("str"));
    assert_eq!(c.registry().overrides_count(), 15);
    // uintptr has a declaration but no abbreviation
    assert_eq!(c.registry().param_names_count(), 14);
    assert_eq!(c.registry().override_for(fx.user), None);
}
