use axum::body::Bytes;
use shared::NewSubscriber;

use crate::error::AppError;

/// Decodes a signup body and returns its validated email.
pub fn get_email_from_body(body: &Bytes) -> Result<String, AppError> {
    let payload: NewSubscriber =
        serde_json::from_slice(body).map_err(|_| AppError::MalformedPayload)?;

    #[cfg(feature = "verbose")]
    tracing::debug!("Signup payload: {:?}", payload);

    Ok(payload.validated()?)
}

#[cfg(test)]
mod tests {
    use shared::ValidationError;

    use super::*;

    fn body(json: &str) -> Bytes {
        Bytes::copy_from_slice(json.as_bytes())
    }

    #[test]
    fn test_valid() {
        let email = get_email_from_body(&body(r#"{"email":" test@example.com "}"#)).unwrap();
        assert_eq!(email, "test@example.com");
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            get_email_from_body(&body("email=test@example.com")),
            Err(AppError::MalformedPayload)
        ));
    }

    #[test]
    fn test_missing_field() {
        assert!(matches!(
            get_email_from_body(&body(r#"{"mail":"test@example.com"}"#)),
            Err(AppError::MalformedPayload)
        ));
    }

    #[test]
    fn test_invalid_email() {
        assert!(matches!(
            get_email_from_body(&body(r#"{"email":"not-an-email"}"#)),
            Err(AppError::InvalidEmail(ValidationError::Malformed))
        ));
    }
}
