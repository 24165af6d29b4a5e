//! Resolución de lectores y conversión de argumentos.

use std::sync::Arc;

use bind_core::{DataType, HandlerParameters, ParameterDescriptor, ParameterSource, ReaderId};
use bind_readers::{ConversionError, RawValue, ReaderConfig, ReaderError, ReaderRegistry, ValueReader};
use serde_json::{json, Value};

/// Lector propio: lista separada por comas.
#[derive(Debug)]
struct CsvReader;

impl ValueReader for CsvReader {
    fn read(&self, raw: RawValue<'_>, target: &DataType) -> Result<Value, ConversionError> {
        let text = raw.as_text(target)?;
        if text.is_empty() {
            return Err(ConversionError::new("", target.type_name(), "empty list"));
        }
        Ok(Value::from(text.split(',').map(str::trim).collect::<Vec<_>>()))
    }
}

fn csv_id() -> ReaderId {
    ReaderId::new("csv").unwrap()
}

fn query(name: &str, data_type: DataType) -> ParameterDescriptor {
    ParameterDescriptor::with_argument(ParameterSource::Query, name, data_type, 0).unwrap()
}

#[test]
fn default_readers_by_type() {
    let registry = ReaderRegistry::default();
    assert_eq!(registry.read(&query("n", DataType::Integer), Some(RawValue::Token(" 12 "))).unwrap(), json!(12));
    assert_eq!(registry.read(&query("f", DataType::Boolean), Some(RawValue::Token("true"))).unwrap(), json!(true));
    assert_eq!(registry.read(&query("s", DataType::Text), Some(RawValue::Token("abc"))).unwrap(), json!("abc"));
}

#[test]
fn tokens_kept_untrimmed_when_configured() {
    let registry = ReaderRegistry::with_defaults(ReaderConfig { trim_tokens: false, strict_overrides: true });
    let err = registry.read(&query("n", DataType::Integer), Some(RawValue::Token(" 12"))).unwrap_err();
    assert!(matches!(err, ReaderError::Conversion(_)));
}

#[test]
fn default_value_used_when_missing() {
    let registry = ReaderRegistry::default();
    let page = query("page", DataType::Integer).with_default_value(Some("1"));
    assert_eq!(registry.read(&page, None).unwrap(), json!(1));

    let no_default = query("page", DataType::Integer);
    assert_eq!(registry.read(&no_default, None).unwrap(), Value::Null);
}

#[test]
fn override_reader_takes_precedence() {
    let mut registry = ReaderRegistry::default();
    registry.register(csv_id(), Arc::new(CsvReader)).unwrap();

    let tags = query("tags", DataType::Named("Tags".into())).with_value_reader(csv_id());
    let value = registry.read(&tags, Some(RawValue::Token("a, b,c"))).unwrap();
    assert_eq!(value, json!(["a", "b", "c"]));
}

#[test]
fn conversion_errors_propagate() {
    let registry = ReaderRegistry::default();
    let err = registry.read(&query("n", DataType::Integer), Some(RawValue::Token("abc"))).unwrap_err();
    match err {
        ReaderError::Conversion(e) => {
            assert_eq!(e.input, "abc");
            assert_eq!(e.target, "integer");
        }
        other => panic!("expected conversion error, got {other:?}"),
    }
}

#[test]
fn duplicate_registration_fails() {
    let mut registry = ReaderRegistry::default();
    let err = registry.register(ReaderId::new("json").unwrap(), Arc::new(CsvReader)).unwrap_err();
    assert_eq!(err, ReaderError::DuplicateReader(ReaderId::new("json").unwrap()));
}

#[test]
fn unknown_override_strict_and_lenient() {
    let d = query("n", DataType::Integer).with_value_reader(csv_id());

    let strict = ReaderRegistry::default();
    assert_eq!(strict.reader_for(&d).unwrap_err(), ReaderError::UnknownReader(csv_id()));

    let lenient = ReaderRegistry::with_defaults(ReaderConfig { trim_tokens: true, strict_overrides: false });
    assert_eq!(lenient.read(&d, Some(RawValue::Token("3"))).unwrap(), json!(3));
}

#[test]
fn named_type_without_override_has_no_reader() {
    let registry = ReaderRegistry::default();
    let err = registry.reader_for(&query("user", DataType::Named("User".into()))).unwrap_err();
    assert_eq!(err, ReaderError::NoDefaultReader("User".into()));
}

#[test]
fn unbound_descriptor_has_no_reader() {
    let registry = ReaderRegistry::default();
    let d = ParameterDescriptor::new(ParameterSource::Path, "id").unwrap();
    assert!(matches!(registry.reader_for(&d), Err(ReaderError::Unbound(_))));
}

#[test]
fn validate_resolved_route() {
    let mut params = HandlerParameters::new("PostRest::create");
    params
        .add(ParameterDescriptor::with_argument(ParameterSource::Path, "id", DataType::Integer, 0).unwrap())
        .add(ParameterDescriptor::body().bind_argument(DataType::Named("Post".into()), 1).unwrap());
    let resolved = params.resolve(2).unwrap();

    let mut registry = ReaderRegistry::default();
    assert!(matches!(registry.validate(&resolved), Err(ReaderError::NoDefaultReader(_))));

    let mut params = HandlerParameters::new("PostRest::create");
    params
        .add(ParameterDescriptor::with_argument(ParameterSource::Path, "id", DataType::Integer, 0).unwrap())
        .add(
            ParameterDescriptor::body()
                .bind_argument(DataType::Named("Post".into()), 1)
                .unwrap()
                .with_value_reader(ReaderId::new("json").unwrap()),
        );
    let resolved = params.resolve(2).unwrap();
    registry.register(csv_id(), Arc::new(CsvReader)).unwrap();
    registry.validate(&resolved).expect("every argument has a reader");

    let body = br#"{"title": "hola"}"#;
    let value = registry.read(resolved.get(1).unwrap(), Some(RawValue::Body(body))).unwrap();
    assert_eq!(value["title"], "hola");
}

#[test]
fn builtin_readers_are_all_registered() {
    let registry = ReaderRegistry::default();
    for id in ["text", "integer", "float", "boolean", "json"] {
        assert!(registry.get(&ReaderId::new(id).unwrap()).is_some(), "missing built-in reader {id}");
    }
}
