//! Path identifier parsing.

use uuid::Uuid;

use crate::error::AppError;

/// Parses a path segment into an entity id.
///
/// `label` names the entity for the error message, e.g. "video id".
pub fn parse_id(value: &str, label: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|_| AppError::bad_request(format!("Invalid {label}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_uuid_parses() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "video id").unwrap(), id);
    }

    #[test]
    fn test_malformed_id_is_validation_error() {
        let err = parse_id("abc123", "video id").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_error_message_names_the_field() {
        let err = parse_id("", "comment id").unwrap_err();
        match err {
            AppError::Validation { message, .. } => assert_eq!(message, "Invalid comment id"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
