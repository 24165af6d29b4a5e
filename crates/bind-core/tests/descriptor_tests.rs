//! Construcción, binding y regex de `ParameterDescriptor`.

use bind_core::{BindingError, DataType, ParameterDescriptor, ParameterSource};

#[test]
fn create_then_bind_argument() {
    let d = ParameterDescriptor::new(ParameterSource::Query, "id").expect("valid descriptor");
    assert!(!d.is_used_as_argument());

    let d = d.bind_argument(DataType::Integer, 0).expect("index 0 is valid");
    assert!(d.is_used_as_argument());
    assert_eq!(d.argument_index(), Some(0));
    assert_eq!(d.data_type(), Some(&DataType::Integer));

    let d = d.bind_argument(DataType::Text, 5).expect("rebinding is allowed");
    assert_eq!(d.argument_index(), Some(5));
}

#[test]
fn bind_negative_index_fails() {
    for idx in [-1, -2, i32::MIN] {
        let res = ParameterDescriptor::new(ParameterSource::Path, "id").unwrap().bind_argument(DataType::Text, idx);
        assert_eq!(res.unwrap_err(), BindingError::InvalidArgument("Can't set negative argument index!".into()));
    }
}

#[test]
fn with_argument_constructor() {
    let d = ParameterDescriptor::with_argument(ParameterSource::Path, "name", DataType::Text, 1).unwrap();
    assert_eq!(d.source(), ParameterSource::Path);
    assert_eq!(d.argument_index(), Some(1));

    let err = ParameterDescriptor::with_argument(ParameterSource::Path, " ", DataType::Text, 1).unwrap_err();
    assert!(matches!(err, BindingError::InvalidArgument(_)));
}

#[test]
fn regex_binding() {
    let d = ParameterDescriptor::new(ParameterSource::Path, "id").unwrap();
    assert!(!d.is_regex());

    let d = d.with_regex(Some("[0-9]+"), 2).expect("valid regex");
    assert!(d.is_regex());
    assert_eq!(d.regex_group_index(), Some(2));
    assert_eq!(d.regular_expression(), Some("[0-9]+"));
}

#[test]
fn regex_invalid_pattern_fails() {
    let d = ParameterDescriptor::new(ParameterSource::Path, "id").unwrap();
    match d.with_regex(Some("("), 0) {
        Err(BindingError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "("),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn regex_negative_group_fails() {
    let d = ParameterDescriptor::new(ParameterSource::Path, "id").unwrap();
    let err = d.with_regex(Some("[0-9]+"), -1).unwrap_err();
    assert!(matches!(err, BindingError::InvalidArgument(_)));
}

#[test]
fn diagnostic_strings() {
    assert_eq!(ParameterDescriptor::body().to_string(), "Request Body");

    let q = ParameterDescriptor::new(ParameterSource::Query, "id").unwrap();
    assert_eq!(q.to_string(), "Query Param(\"id\")");

    let p = ParameterDescriptor::new(ParameterSource::Path, "user").unwrap();
    assert_eq!(p.to_string(), "Path Param(\"user\")");

    // un body con nombre propio sigue mostrando sólo la descripción
    let b = ParameterDescriptor::new(ParameterSource::Body, "payload").unwrap();
    assert_eq!(b.to_string(), "Request Body");
}

#[test]
fn descriptor_serializes_to_json() {
    let d = ParameterDescriptor::with_argument(ParameterSource::Query, "limit", DataType::Integer, 0)
        .unwrap()
        .with_default_value(Some("10"));
    let v = serde_json::to_value(&d).unwrap();
    assert_eq!(v["source"], "query");
    assert_eq!(v["name"], "limit");
    assert_eq!(v["argument"]["index"], 0);
    assert_eq!(v["default_value"], "10");
    assert!(v["regular_expression"].is_null());
}
