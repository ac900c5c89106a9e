//! Primitive parameter values and their fixed string coercion.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single parameter value as supplied by a source.
///
/// `Null` is the removal marker. An absent value (`Option::None`) converts
/// into `Null`, so both mean "drop this key".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    /// True for the removal marker.
    pub fn is_removal(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    /// String form written into the query, or `None` for the removal marker.
    ///
    /// - booleans: `true` / `false`
    /// - integers: plain decimal
    /// - floats: shortest round-trip plain decimal, never exponent form;
    ///   `-0.0` is `0`, non-finite values are `NaN`, `Infinity`, `-Infinity`
    /// - strings: verbatim
    pub fn coerce(&self) -> Option<Cow<'_, str>> {
        match self {
            ParamValue::Null => None,
            ParamValue::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            ParamValue::Int(n) => Some(Cow::Owned(n.to_string())),
            ParamValue::Float(f) => Some(Cow::Owned(format_float(*f))),
            ParamValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        let s = if f > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if f == 0.0 {
        "0".to_string()
    } else {
        // f64's Display never uses exponent notation.
        f.to_string()
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(n: $t) -> Self {
                    ParamValue::Int(i64::from(n))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

// Values past i64::MAX become floats, like oversized JSON numbers.
macro_rules! from_wide_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(n: $t) -> Self {
                    match i64::try_from(n) {
                        Ok(i) => ParamValue::Int(i),
                        Err(_) => ParamValue::Float(n as f64),
                    }
                }
            }
        )*
    };
}

from_wide_unsigned!(u64, usize);

impl From<f32> for ParamValue {
    fn from(f: f32) -> Self {
        ParamValue::Float(f64::from(f))
    }
}

impl From<f64> for ParamValue {
    fn from(f: f64) -> Self {
        ParamValue::Float(f)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(ParamValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coerced(v: impl Into<ParamValue>) -> Option<String> {
        v.into().coerce().map(Cow::into_owned)
    }

    #[test]
    fn booleans_and_integers() {
        assert_eq!(coerced(true).as_deref(), Some("true"));
        assert_eq!(coerced(false).as_deref(), Some("false"));
        assert_eq!(coerced(200).as_deref(), Some("200"));
        assert_eq!(coerced(-3i64).as_deref(), Some("-3"));
    }

    #[test]
    fn floats_use_plain_decimal() {
        assert_eq!(coerced(98.6).as_deref(), Some("98.6"));
        assert_eq!(coerced(1.0).as_deref(), Some("1"));
        assert_eq!(coerced(0.0000001).as_deref(), Some("0.0000001"));
        assert_eq!(coerced(1e21).as_deref(), Some("1000000000000000000000"));
        assert_eq!(coerced(-0.0).as_deref(), Some("0"));
    }

    #[test]
    fn wide_unsigned_integers() {
        assert_eq!(ParamValue::from(42u64), ParamValue::Int(42));
        assert_eq!(ParamValue::from(7usize), ParamValue::Int(7));
        assert_eq!(
            ParamValue::from(i64::MAX as u64),
            ParamValue::Int(i64::MAX)
        );
        assert!(matches!(ParamValue::from(u64::MAX), ParamValue::Float(_)));
        assert_eq!(coerced(3usize).as_deref(), Some("3"));
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(coerced(f64::NAN).as_deref(), Some("NaN"));
        assert_eq!(coerced(f64::INFINITY).as_deref(), Some("Infinity"));
        assert_eq!(coerced(f64::NEG_INFINITY).as_deref(), Some("-Infinity"));
    }

    #[test]
    fn absent_is_removal() {
        let v: ParamValue = None::<i32>.into();
        assert!(v.is_removal());
        assert_eq!(v.coerce(), None);
        assert_eq!(coerced(Some("x")).as_deref(), Some("x"));
    }

    #[test]
    fn empty_string_is_kept() {
        assert_eq!(coerced("").as_deref(), Some(""));
    }

    #[test]
    fn deserialize_from_json_scalars() {
        let vals: Vec<ParamValue> =
            serde_json::from_str(r#"[null, true, 200, 98.6, "foo"]"#).unwrap();
        assert_eq!(
            vals,
            vec![
                ParamValue::Null,
                ParamValue::Bool(true),
                ParamValue::Int(200),
                ParamValue::Float(98.6),
                ParamValue::Text("foo".to_string()),
            ]
        );
    }
}
