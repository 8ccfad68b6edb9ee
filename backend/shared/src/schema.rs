use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EMAIL_FIELD: &str = "email";

// one `@`, no whitespace, at least one dot in the domain, no empty labels
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@(?:[^\s@.]+\.)+[^\s@.]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: u64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubscriber {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    pub fn for_field(message: impl Into<String>, field: &str) -> Self {
        Self {
            message: message.into(),
            field: Some(field.to_string()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    Empty,

    #[error("Invalid email address")]
    Malformed,
}

/// Returns the trimmed email if it is syntactically valid.
pub fn validate_email(input: &str) -> Result<String, ValidationError> {
    let email = input.trim();

    if email.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !EMAIL.is_match(email) {
        return Err(ValidationError::Malformed);
    }

    Ok(email.to_string())
}

impl NewSubscriber {
    pub fn validated(&self) -> Result<String, ValidationError> {
        validate_email(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_valid_emails() {
        assert_eq!(validate_email("a@b.com"), Ok("a@b.com".to_string()));
        assert_eq!(
            validate_email("  test@example.com "),
            Ok("test@example.com".to_string())
        );
        assert!(validate_email("first.last+tag@mail.example.co.uk").is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_email(""), Err(ValidationError::Empty));
        assert_eq!(validate_email("    "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_malformed() {
        for bad in [
            "plainaddress",
            "@example.com",
            "user@",
            "user@example",
            "user@@example.com",
            "user@exa mple.com",
            "user@example..com",
            "user@.example.com",
            "user@example.com.",
        ] {
            assert_eq!(validate_email(bad), Err(ValidationError::Malformed), "{bad}");
        }
    }

    #[test]
    fn test_subscriber_wire_format() {
        let subscriber = Subscriber {
            id: 1,
            email: "a@b.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&subscriber).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_error_body_omits_missing_field() {
        let json = serde_json::to_string(&ErrorBody::new("nope")).unwrap();
        assert_eq!(json, r#"{"message":"nope"}"#);

        let json = serde_json::to_string(&ErrorBody::for_field("bad", EMAIL_FIELD)).unwrap();
        assert_eq!(json, r#"{"message":"bad","field":"email"}"#);
    }
}
