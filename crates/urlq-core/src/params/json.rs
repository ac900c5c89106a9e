//! Decoding parameter sources from JSON text.

use serde_json::Value;

use super::{ParamSource, ParamValue};

/// Errors from decoding a JSON parameter source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid JSON source")]
    Json(#[from] serde_json::Error),
    /// Top-level value is not an object, pair array, or string.
    #[error("unsupported JSON source shape: expected object, array of [key, value] pairs, or string, got {0}")]
    UnsupportedShape(&'static str),
    /// A value is an array or object.
    #[error("parameter {key:?} must be null, boolean, number, or string")]
    NestedValue { key: String },
    /// An array element is not a `[string, scalar]` pair.
    #[error("pair #{index} must be a two-element [key, value] array with a string key")]
    MalformedPair { index: usize },
}

impl ParamSource {
    /// Decodes a JSON object (mapping, document order), an array of
    /// `[key, value]` pairs, or a string (query text).
    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        let value: Value = serde_json::from_str(text)?;
        match value {
            Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, v) in map {
                    let v = scalar(&key, v)?;
                    entries.push((key, v));
                }
                Ok(ParamSource::mapping(entries))
            }
            Value::Array(items) => {
                let mut pairs = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    let (key, v) = match item {
                        Value::Array(pair) if pair.len() == 2 => {
                            let mut it = pair.into_iter();
                            match (it.next(), it.next()) {
                                (Some(Value::String(k)), Some(v)) => (k, v),
                                _ => return Err(SourceError::MalformedPair { index }),
                            }
                        }
                        _ => return Err(SourceError::MalformedPair { index }),
                    };
                    let v = scalar(&key, v)?;
                    pairs.push((key, v));
                }
                Ok(ParamSource::Pairs(pairs))
            }
            Value::String(s) => Ok(ParamSource::Query(s)),
            Value::Null => Err(SourceError::UnsupportedShape("null")),
            Value::Bool(_) => Err(SourceError::UnsupportedShape("boolean")),
            Value::Number(_) => Err(SourceError::UnsupportedShape("number")),
        }
    }
}

fn scalar(key: &str, value: Value) -> Result<ParamValue, SourceError> {
    match value {
        Value::Null => Ok(ParamValue::Null),
        Value::Bool(b) => Ok(ParamValue::Bool(b)),
        Value::Number(n) => Ok(match n.as_i64() {
            Some(i) => ParamValue::Int(i),
            None => ParamValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        }),
        Value::String(s) => Ok(ParamValue::Text(s)),
        Value::Array(_) | Value::Object(_) => Err(SourceError::NestedValue {
            key: key.to_string(),
        }),
    }
}
