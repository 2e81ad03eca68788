use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use profile_core::services::field_messages;
use profile_core::ServiceError;

use crate::response::json_response;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Not acceptable")]
    NotAcceptable,

    #[error("Unprocessable entity: {0:?}")]
    Unprocessable(BTreeMap<String, Vec<String>>),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::MalformedRequest(msg) => ApiError::BadRequest(msg),
            ServiceError::NotFound => ApiError::NotFound,
            ServiceError::ValidationFailed(errors) => ApiError::Unprocessable(field_messages(&errors)),
            ServiceError::NotAcceptable => ApiError::NotAcceptable,
            ServiceError::Domain(e) => ApiError::InternalError(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    // Client errors carry no body (and so no Content-Type), except 422 which is always JSON
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                StatusCode::BAD_REQUEST.into_response()
            }
            ApiError::NotFound => {
                tracing::debug!("Not found");
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::NotAcceptable => {
                tracing::warn!("Not acceptable");
                StatusCode::NOT_ACCEPTABLE.into_response()
            }
            // Already logged with the user id where validation ran
            ApiError::Unprocessable(fields) => json_response(StatusCode::UNPROCESSABLE_ENTITY, &fields),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                let body = Json(ErrorResponse {
                    error: "InternalError".to_string(),
                    message: msg,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use profile_shared::constants::JSON_CONTENT_TYPE;

    #[test]
    fn test_unprocessable_is_json() {
        let mut fields = BTreeMap::new();
        fields.insert("login".to_string(), vec!["Login is required".to_string()]);

        let response = ApiError::Unprocessable(fields).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), JSON_CONTENT_TYPE);
    }

    #[test]
    fn test_client_errors_have_no_body_type() {
        for error in [ApiError::NotFound, ApiError::NotAcceptable, ApiError::BadRequest("x".into())] {
            let response = error.into_response();
            assert!(response.headers().get(header::CONTENT_TYPE).is_none());
        }
    }
}
