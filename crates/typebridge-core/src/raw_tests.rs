use indoc::indoc;

use crate::{GraphError, TypeKind, TypeSource, parse_type_graph};

#[test]
fn loads_structs_and_forward_refs() {
    let graph = parse_type_graph(indoc! {r#"
        {
          "types": [
            { "id": "Nested", "kind": "struct", "fields": { "Owner": "User", "count": "int" } },
            { "id": "User", "kind": "struct", "fields": { "Name": { "type": "string" } } }
          ]
        }
    "#})
    .unwrap();

    let nested = graph.lookup("Nested").unwrap();
    let user = graph.lookup("User").unwrap();
    assert_eq!(graph.kind(nested), TypeKind::Struct);
    assert_eq!(graph.name(nested), "Nested");

    let fields = graph.fields(nested);
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name, "Owner");
    assert_eq!(fields[0].ty, user);
    assert_eq!(fields[1].name, "count");
    assert_eq!(Some(fields[1].ty), graph.builtin(TypeKind::Int));
    assert_eq!(graph.fields(user)[0].name, "Name");
}

#[test]
fn wrapper_names_default_to_empty() {
    let graph = parse_type_graph(indoc! {r#"
        {
          "types": [
            { "id": "UserPtr", "kind": "pointer", "elem": "User" },
            { "id": "User", "kind": "struct" },
            { "id": "Lookup", "kind": "map", "key": "string", "elem": "UserPtr" },
            { "id": "Pair", "kind": "array", "elem": "string", "len": 2 }
          ]
        }
    "#})
    .unwrap();

    let ptr = graph.lookup("UserPtr").unwrap();
    assert_eq!(graph.name(ptr), "");
    assert_eq!(graph.elem(ptr), graph.lookup("User"));

    let lookup = graph.lookup("Lookup").unwrap();
    assert_eq!(graph.key(lookup), graph.builtin(TypeKind::String));
    assert_eq!(graph.elem(lookup), Some(ptr));

    let pair = graph.lookup("Pair").unwrap();
    assert_eq!(graph.get(pair).unwrap().len, Some(2));
}

#[test]
fn loads_funcs_and_error_interfaces() {
    let graph = parse_type_graph(indoc! {r#"
        {
          "types": [
            { "id": "Context", "kind": "interface" },
            { "id": "NotFound", "kind": "interface", "error": true },
            { "id": "Find", "kind": "func", "params": ["Context", "string"], "returns": ["any", "error"] }
          ]
        }
    "#})
    .unwrap();

    let find = graph.lookup("Find").unwrap();
    let context = graph.lookup("Context").unwrap();
    assert_eq!(graph.name(find), "");
    assert_eq!(graph.params(find)[0], context);
    assert_eq!(graph.returns(find), &[graph.any(), graph.error()]);
    assert!(graph.implements_error(graph.lookup("NotFound").unwrap()));
    assert!(!graph.implements_error(context));
}

#[test]
fn explicit_name_wins() {
    let graph = parse_type_graph(
        r#"{ "types": [ { "id": "pkg.Celsius", "kind": "float64", "name": "Celsius" } ] }"#,
    )
    .unwrap();

    let celsius = graph.lookup("pkg.Celsius").unwrap();
    assert_eq!(graph.name(celsius), "Celsius");
    assert_eq!(graph.kind(celsius), TypeKind::Float64);
}

#[test]
fn rejects_unknown_ref() {
    let err = parse_type_graph(
        r#"{ "types": [ { "id": "A", "kind": "slice", "elem": "Missing" } ] }"#,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        GraphError::UnknownRef { ref from, ref target } if from == "A" && target == "Missing"
    ));
    assert_eq!(err.to_string(), "type `A` references unknown type `Missing`");
}

#[test]
fn rejects_duplicate_ids() {
    let err = parse_type_graph(
        r#"{ "types": [ { "id": "A", "kind": "struct" }, { "id": "A", "kind": "struct" } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, GraphError::DuplicateId(ref id) if id == "A"));

    let err = parse_type_graph(r#"{ "types": [ { "id": "string", "kind": "struct" } ] }"#)
        .unwrap_err();
    assert!(matches!(err, GraphError::DuplicateId(ref id) if id == "string"));
}

#[test]
fn user_types_may_reuse_unqualified_builtin_names() {
    let graph = parse_type_graph(
        r#"{ "types": [ { "id": "Pointer", "kind": "struct", "fields": { "Addr": "uintptr" } } ] }"#,
    )
    .unwrap();

    let pointer = graph.lookup("Pointer").unwrap();
    assert_eq!(graph.kind(pointer), TypeKind::Struct);
    assert_eq!(graph.fields(pointer)[0].name, "Addr");
    assert_ne!(graph.lookup("unsafe.Pointer"), Some(pointer));
}

#[test]
fn rejects_missing_elem_and_key() {
    let err = parse_type_graph(r#"{ "types": [ { "id": "P", "kind": "pointer" } ] }"#)
        .unwrap_err();
    assert_eq!(err.to_string(), "pointer type `P` has no element type");

    let err = parse_type_graph(
        r#"{ "types": [ { "id": "M", "kind": "map", "elem": "int" } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, GraphError::MissingKey(ref id) if id == "M"));
}

#[test]
fn rejects_malformed_json() {
    let err = parse_type_graph(r#"{ "types": [ { "id": "A", "kind": "tuple" } ] }"#)
        .unwrap_err();
    assert!(matches!(err, GraphError::Json(_)));
}
