//! Requesting-user identity extraction.
//!
//! Authentication happens upstream; the gateway forwards the verified
//! user id in the `x-user-id` header. Handlers that mutate owned
//! resources require it via [`CurrentUser`]; the comment listing only
//! uses it to compute like state and accepts its absence via
//! [`OptionalUser`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::error::AppError;

/// Header carrying the authenticated user id, set by the auth gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

fn user_id_from_parts(parts: &Parts) -> Option<Uuid> {
    parts
        .headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| Uuid::parse_str(raw).ok())
}

/// Required requesting-user identity.
///
/// Rejects with `401 Unauthorized` when the header is missing or not a
/// valid UUID.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Uuid);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        user_id_from_parts(parts)
            .map(CurrentUser)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Optional requesting-user identity.
///
/// Never rejects; a missing or malformed header yields an anonymous
/// request.
#[derive(Debug, Clone, Copy)]
pub struct OptionalUser(pub Option<Uuid>);

impl<S: Send + Sync> FromRequestParts<S> for OptionalUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalUser(user_id_from_parts(parts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(v) = value {
            builder = builder.header(USER_ID_HEADER, v);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn test_current_user_requires_header() {
        let mut parts = parts_with_header(None);
        let result = CurrentUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_current_user_rejects_malformed_id() {
        let mut parts = parts_with_header(Some("not-a-uuid"));
        let result = CurrentUser::from_request_parts(&mut parts, &()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_current_user_parses_valid_id() {
        let id = Uuid::new_v4();
        let mut parts = parts_with_header(Some(&id.to_string()));
        let CurrentUser(parsed) = CurrentUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(parsed, id);
    }

    #[tokio::test]
    async fn test_optional_user_tolerates_absence() {
        let mut parts = parts_with_header(None);
        let OptionalUser(user) = OptionalUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(user.is_none());
    }
}
