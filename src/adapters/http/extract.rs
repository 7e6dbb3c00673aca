//! JSON body extractor that answers with [`ApiError`] instead of axum's
//! plain-text rejection.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::domain::foundation::DomainError;

use super::error::ApiError;

/// Request body parsed as JSON. Malformed or mistyped bodies are a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(DomainError::validation("body", rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn well_formed_body_is_extracted() {
        let ApiJson(named) = ApiJson::<Named>::from_request(json_request(r#"{"name":"Ana"}"#), &())
            .await
            .unwrap();
        assert_eq!(named.name, "Ana");
    }

    #[tokio::test]
    async fn syntax_errors_are_bad_requests() {
        let err = ApiJson::<Named>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn mistyped_fields_are_bad_requests() {
        let err = ApiJson::<Named>::from_request(json_request(r#"{"name": 7}"#), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref e) if e.is_validation()));
    }

    #[tokio::test]
    async fn missing_content_type_is_a_bad_request() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"name":"Ana"}"#))
            .unwrap();
        let err = ApiJson::<Named>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
