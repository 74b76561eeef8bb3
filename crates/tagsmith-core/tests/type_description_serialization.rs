use tagsmith_core::{
    FieldDescriptor, IntKind, StructDescriptor, TypeDescriptor, parse_type_description,
};

#[test]
fn serializes_struct_description_deterministically() {
    let ty = TypeDescriptor::Struct(StructDescriptor::new(
        "Person",
        vec![
            FieldDescriptor::tagged("Name", TypeDescriptor::String, "first_name"),
            FieldDescriptor::new("Age", TypeDescriptor::int(IntKind::U8)),
        ],
    ));

    let json = serde_json::to_string(&ty).expect("serialize description");
    let expected = concat!(
        r#"{"kind":"struct","name":"Person","fields":["#,
        r#"{"name":"Name","ty":{"kind":"string"},"tag":"first_name","settable":true},"#,
        r#"{"name":"Age","ty":{"kind":"int","int":"u8"},"tag":"","settable":true}"#,
        r#"]}"#
    );
    assert_eq!(json, expected);
}

#[test]
fn parses_nested_description_with_defaults() {
    let json = r#"{
      "kind": "struct",
      "name": "Order",
      "fields": [
        {"name": "Id", "ty": {"kind": "string"}, "tag": "uuid_hyphenated"},
        {"name": "Lines", "ty": {"kind": "slice", "of": {"kind": "float", "float": "f64"}}},
        {"name": "Parent", "ty": {"kind": "pointer", "to": {"kind": "named", "name": "OrderRef", "ty": {"kind": "string"}}}}
      ]
    }"#;

    let ty = parse_type_description(json).expect("parse description");
    let TypeDescriptor::Struct(desc) = ty else {
        panic!("expected struct description");
    };
    assert_eq!(desc.fields.len(), 3);
    assert_eq!(desc.fields[1].tag, "");
    assert!(desc.fields[2].settable);
    assert_eq!(desc.fields[2].ty.to_string(), "*OrderRef");
}

#[test]
fn rejects_unknown_kind() {
    let result = parse_type_description(r#"{"kind": "complex128"}"#);
    assert!(result.is_err());
}
