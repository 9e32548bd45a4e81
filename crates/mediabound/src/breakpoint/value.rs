//! Breakpoint table entries.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value stored under a breakpoint name.
///
/// Any number is a pixel value: negative integers are kept as they are and
/// fractional numbers are rounded to the nearest pixel. Everything else read
/// from configuration (strings, booleans, null, lists, maps) is kept
/// verbatim as [`BreakpointValue::Malformed`], so that resolving that key, and
/// only that key, reports the problem. Malformed values serialize back to
/// exactly what was read.
///
/// # Example
///
/// ```rust
/// use mediabound::BreakpointValue;
///
/// let ok: BreakpointValue = 768.into();
/// assert_eq!(ok.as_pixels(), Some(768));
///
/// let bad = BreakpointValue::malformed("not-a-number");
/// assert_eq!(bad.as_pixels(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakpointValue {
    /// A pixel threshold.
    Pixels(i64),
    /// A value that is not a number, as it was read.
    Malformed(serde_json::Value),
}

impl BreakpointValue {
    /// Creates a malformed entry holding the string `raw`.
    pub fn malformed(raw: impl Into<String>) -> Self {
        BreakpointValue::Malformed(serde_json::Value::String(raw.into()))
    }

    /// Returns the pixel value, or `None` for malformed entries.
    pub fn as_pixels(&self) -> Option<i64> {
        match self {
            BreakpointValue::Pixels(px) => Some(*px),
            BreakpointValue::Malformed(_) => None,
        }
    }

    /// Returns true when the entry holds a pixel value.
    pub fn is_pixels(&self) -> bool {
        matches!(self, BreakpointValue::Pixels(_))
    }

    fn from_raw(raw: serde_json::Value) -> Self {
        let serde_json::Value::Number(number) = &raw else {
            return BreakpointValue::Malformed(raw);
        };
        match (number.as_i64(), number.as_f64()) {
            (Some(px), _) => BreakpointValue::Pixels(px),
            // `as` saturates at the i64 range.
            (None, Some(px)) => BreakpointValue::Pixels(px.round() as i64),
            (None, None) => BreakpointValue::Malformed(raw),
        }
    }
}

impl std::fmt::Display for BreakpointValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreakpointValue::Pixels(px) => write!(f, "{}px", px),
            BreakpointValue::Malformed(serde_json::Value::String(text)) => f.write_str(text),
            BreakpointValue::Malformed(raw) => write!(f, "{}", raw),
        }
    }
}

impl From<i64> for BreakpointValue {
    fn from(px: i64) -> Self {
        BreakpointValue::Pixels(px)
    }
}

impl From<i32> for BreakpointValue {
    fn from(px: i32) -> Self {
        BreakpointValue::Pixels(px.into())
    }
}

impl From<u32> for BreakpointValue {
    fn from(px: u32) -> Self {
        BreakpointValue::Pixels(px.into())
    }
}

impl From<u16> for BreakpointValue {
    fn from(px: u16) -> Self {
        BreakpointValue::Pixels(px.into())
    }
}

impl Serialize for BreakpointValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BreakpointValue::Pixels(px) => serializer.serialize_i64(*px),
            BreakpointValue::Malformed(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for BreakpointValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(BreakpointValue::from_raw(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_from_integer() {
        let value = BreakpointValue::from(1100u32);
        assert_eq!(value, BreakpointValue::Pixels(1100));
        assert!(value.is_pixels());
        assert_eq!(value.to_string(), "1100px");
    }

    #[test]
    fn test_malformed_keeps_raw_text() {
        let value = BreakpointValue::malformed("wide");
        assert_eq!(value.as_pixels(), None);
        assert_eq!(value.to_string(), "wide");
    }

    #[test]
    fn test_deserialize_accepts_zero() {
        let value: BreakpointValue = serde_json::from_str("0").unwrap();
        assert_eq!(value, BreakpointValue::Pixels(0));
    }

    #[test]
    fn test_deserialize_string_is_malformed() {
        let value: BreakpointValue = serde_json::from_str(r#""not-a-number""#).unwrap();
        assert_eq!(value, BreakpointValue::malformed("not-a-number"));
    }

    #[test]
    fn test_deserialize_numeric_string_is_malformed() {
        // Quoted numbers are text, not pixel values.
        let value: BreakpointValue = serde_json::from_str(r#""768""#).unwrap();
        assert_eq!(value, BreakpointValue::malformed("768"));
    }

    #[test]
    fn test_deserialize_negative_integer() {
        let value: BreakpointValue = serde_json::from_str("-5").unwrap();
        assert_eq!(value, BreakpointValue::Pixels(-5));
    }

    #[test]
    fn test_deserialize_integral_float() {
        let value: BreakpointValue = serde_json::from_str("768.0").unwrap();
        assert_eq!(value, BreakpointValue::Pixels(768));
    }

    #[test]
    fn test_deserialize_fractional_float_rounds() {
        let up: BreakpointValue = serde_json::from_str("768.5").unwrap();
        let down: BreakpointValue = serde_json::from_str("991.2").unwrap();
        assert_eq!(up, BreakpointValue::Pixels(769));
        assert_eq!(down, BreakpointValue::Pixels(991));
    }

    #[test]
    fn test_deserialize_beyond_u32() {
        let value: BreakpointValue = serde_json::from_str("5000000000").unwrap();
        assert_eq!(value, BreakpointValue::Pixels(5_000_000_000));
    }

    #[test]
    fn test_deserialize_non_scalar_is_malformed() {
        let list: BreakpointValue = serde_json::from_str("[1, 2]").unwrap();
        let null: BreakpointValue = serde_json::from_str("null").unwrap();
        assert_eq!(list, BreakpointValue::Malformed(serde_json::json!([1, 2])));
        assert_eq!(list.to_string(), "[1,2]");
        assert_eq!(null, BreakpointValue::Malformed(serde_json::Value::Null));
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let value: BreakpointValue = serde_yaml::from_str("992").unwrap();
        assert_eq!(value, BreakpointValue::Pixels(992));

        let negative: BreakpointValue = serde_yaml::from_str("-20").unwrap();
        assert_eq!(negative, BreakpointValue::Pixels(-20));

        let float: BreakpointValue = serde_yaml::from_str("1100.0").unwrap();
        assert_eq!(float, BreakpointValue::Pixels(1100));

        let bool_value: BreakpointValue = serde_yaml::from_str("true").unwrap();
        assert_eq!(bool_value, BreakpointValue::Malformed(serde_json::Value::Bool(true)));
        assert_eq!(bool_value.to_string(), "true");
    }

    #[test]
    fn test_serialize_pixels_and_strings() {
        assert_eq!(serde_json::to_string(&BreakpointValue::Pixels(320)).unwrap(), "320");
        assert_eq!(serde_json::to_string(&BreakpointValue::Pixels(-5)).unwrap(), "-5");
        assert_eq!(
            serde_json::to_string(&BreakpointValue::malformed("wide")).unwrap(),
            r#""wide""#
        );
    }

    #[test]
    fn test_malformed_values_serialize_as_read() {
        for raw in ["[1,2]", r#"{"px":768}"#, "true", "null"] {
            let value: BreakpointValue = serde_json::from_str(raw).unwrap();
            assert!(!value.is_pixels());
            assert_eq!(serde_json::to_string(&value).unwrap(), raw);
        }
    }
}
