use tabula_core::{
    extract::select_extractor,
    schema::{Field, FieldDecl},
    stmt::{Type, Value},
};

fn extractor(ty: Type) -> tabula_core::Extractor {
    select_extractor(&ty, false, false).unwrap()
}

#[test]
fn signed_round_trip() {
    for ty in [Type::I8, Type::I16, Type::I32, Type::I64] {
        let extract = extractor(ty);
        for v in [0, -1, 1, i8::MAX as i64] {
            assert_eq!(extract(Value::from(v)).unwrap(), Value::I64(v));
        }
    }

    let extract = extractor(Type::I64);
    assert_eq!(extract(Value::I64(i64::MAX)).unwrap(), Value::I64(i64::MAX));
    assert_eq!(extract(Value::I64(i64::MIN)).unwrap(), Value::I64(i64::MIN));
}

#[test]
fn unsigned_collapses_to_u64() {
    let extract = extractor(Type::U16);
    assert_eq!(extract(Value::from(7u16)).unwrap(), Value::U64(7));
    assert_eq!(extract(Value::I64(7)).unwrap(), Value::U64(7));
    assert_eq!(extract(Value::U64(u64::MAX)).unwrap(), Value::U64(u64::MAX));
}

#[test]
fn float_round_trip() {
    let extract = extractor(Type::F32);
    assert_eq!(extract(Value::from(1.5f32)).unwrap(), Value::F64(1.5));
    assert_eq!(extract(Value::F64(-0.25)).unwrap(), Value::F64(-0.25));
}

#[test]
fn string_round_trip() {
    let extract = extractor(Type::String);
    for s in ["", "hello", "héllo wörld", "日本語", "🦀"] {
        assert_eq!(extract(Value::from(s)).unwrap(), Value::from(s));
        assert_eq!(
            extract(Value::Bytes(s.as_bytes().to_vec())).unwrap(),
            Value::from(s)
        );
    }
}

#[test]
fn bool_round_trip() {
    let extract = extractor(Type::Bool);
    assert_eq!(extract(Value::Bool(true)).unwrap(), Value::Bool(true));
    assert_eq!(extract(Value::Bool(false)).unwrap(), Value::Bool(false));
    assert_eq!(extract(Value::I64(1)).unwrap(), Value::Bool(true));
    assert!(extract(Value::I64(2)).is_err());
}

#[test]
fn timestamp_from_text() {
    let extract = extractor(Type::Timestamp);
    let ts: jiff::Timestamp = "2024-03-01T12:30:00Z".parse().unwrap();

    assert_eq!(extract(Value::Timestamp(ts)).unwrap(), Value::Timestamp(ts));
    assert_eq!(
        extract(Value::from("2024-03-01T12:30:00Z")).unwrap(),
        Value::Timestamp(ts)
    );
    assert_eq!(
        extract(Value::Bytes(b"2024-03-01T12:30:00Z".to_vec())).unwrap(),
        Value::Timestamp(ts)
    );
}

#[test]
fn wrong_kind_is_type_conversion() {
    let extract = extractor(Type::String);
    let err = extract(Value::I64(3)).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert I64 to String");
}

#[test]
fn json_map_decodes_bytes() {
    let field = Field::from_decl(FieldDecl::new("tags", Type::Map).column("u_tags").json()).unwrap();
    let extract = field.extractor();

    let raw = Value::Bytes(br#"{"a": 1, "b": ["x", "y"]}"#.to_vec());
    assert_eq!(
        extract(raw).unwrap(),
        Value::Json(serde_json::json!({"a": 1, "b": ["x", "y"]}))
    );
}

#[test]
fn nullable_json_map_yields_null() {
    let field = Field::from_decl(
        FieldDecl::new("tags", Type::Map)
            .column("u_tags")
            .json()
            .nullable(),
    )
    .unwrap();

    assert_eq!((field.extractor())(Value::Null).unwrap(), Value::Null);
}

#[test]
fn json_struct_decodes_text() {
    let field =
        Field::from_decl(FieldDecl::new("profile", Type::Struct).column("u_profile").json())
            .unwrap();

    assert_eq!(
        (field.extractor())(Value::from(r#"[1, 2, 3]"#)).unwrap(),
        Value::Json(serde_json::json!([1, 2, 3]))
    );
}

#[test]
fn malformed_json_is_reported() {
    let field = Field::from_decl(FieldDecl::new("tags", Type::Map).column("u_tags").json()).unwrap();
    let err = (field.extractor())(Value::Bytes(b"{not json".to_vec())).unwrap_err();
    assert!(err.is_json());
}
