//! Persisted session record

use crate::config::ShellConfig;
use crate::error::SessionError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Session record written by the login flow.
///
/// Only `authenticated` and `name` are interpreted; any other field is carried
/// along untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, deserialize_with = "truthy")]
    pub authenticated: bool,
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionRecord {
    pub fn authenticated(name: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            name: Some(name.into()),
            extra: Map::new(),
        }
    }

    /// Parse a stored JSON value
    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Name for the header badge, falling back to a generic label
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(ShellConfig::FALLBACK_USER_NAME)
    }
}

/// Any JSON value is accepted for the flag and read with JavaScript truthiness.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(name) => Some(name),
        Value::Number(n) if n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()) => {
            Some(n.to_string())
        }
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_authenticated_record() {
        let record = SessionRecord::parse(r#"{"authenticated":true,"name":"Alice"}"#).unwrap();
        assert!(record.authenticated);
        assert_eq!(record.display_name(), "Alice");
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_falsy_flags() {
        for raw in [
            r#"{"authenticated":false}"#,
            r#"{"authenticated":null}"#,
            r#"{"authenticated":0}"#,
            r#"{"authenticated":""}"#,
            r#"{"name":"Bob"}"#,
        ] {
            let record = SessionRecord::parse(raw).unwrap();
            assert!(!record.authenticated, "{raw} should not authenticate");
        }
    }

    #[test]
    fn test_truthy_non_boolean_flags() {
        for raw in [
            r#"{"authenticated":1}"#,
            r#"{"authenticated":"yes"}"#,
            r#"{"authenticated":{}}"#,
        ] {
            assert!(SessionRecord::parse(raw).unwrap().authenticated, "{raw}");
        }
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert!(matches!(
            SessionRecord::parse("{not json"),
            Err(SessionError::Malformed(_))
        ));
        assert!(SessionRecord::parse("null").is_err());
        assert!(SessionRecord::parse("5").is_err());
    }

    #[test]
    fn test_display_name_fallback() {
        let mut record = SessionRecord::authenticated("");
        assert_eq!(record.display_name(), "User");

        record.name = None;
        assert_eq!(record.display_name(), "User");

        for raw in [
            r#"{"authenticated":true,"name":0}"#,
            r#"{"authenticated":true,"name":false}"#,
            r#"{"authenticated":true,"name":null}"#,
            r#"{"authenticated":true,"name":["Alice"]}"#,
        ] {
            let record = SessionRecord::parse(raw).unwrap();
            assert_eq!(record.name, None, "{raw}");
            assert_eq!(record.display_name(), "User", "{raw}");
        }
    }

    #[test]
    fn test_truthy_scalar_name_is_shown() {
        let record = SessionRecord::parse(r#"{"authenticated":true,"name":42}"#).unwrap();
        assert_eq!(record.display_name(), "42");

        let record = SessionRecord::parse(r#"{"authenticated":true,"name":true}"#).unwrap();
        assert_eq!(record.display_name(), "true");
    }

    #[test]
    fn test_extra_fields_survive() {
        let raw = r#"{"authenticated":true,"name":"Alice","email":"alice@example.com"}"#;
        let record = SessionRecord::parse(raw).unwrap();
        assert_eq!(
            record.extra.get("email"),
            Some(&Value::String("alice@example.com".into()))
        );

        let round = serde_json::to_value(&record).unwrap();
        assert_eq!(round["email"], "alice@example.com");
        assert_eq!(round["authenticated"], true);
    }
}
