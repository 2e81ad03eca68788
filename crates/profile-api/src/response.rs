//! Rendering of negotiated representations into HTTP responses

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use profile_core::services::Representation;
use profile_shared::constants::{JSON_CONTENT_TYPE, XML_CONTENT_TYPE};

use crate::dto::{CreatedUserId, UserDto, UserListDto, UserListXml, UserXml};
use crate::error::ApiError;

/// A body that can be written as either JSON or XML
pub trait Representable: Serialize {
    fn to_xml(&self) -> Result<String, ApiError>;
}

impl Representable for UserDto {
    fn to_xml(&self) -> Result<String, ApiError> {
        quick_xml::se::to_string_with_root("UserDto", &UserXml::from(self)).map_err(xml_error)
    }
}

impl Representable for CreatedUserId {
    fn to_xml(&self) -> Result<String, ApiError> {
        quick_xml::se::to_string_with_root("guid", &self.0).map_err(xml_error)
    }
}

impl Representable for UserListDto {
    fn to_xml(&self) -> Result<String, ApiError> {
        quick_xml::se::to_string_with_root("ArrayOfUserDto", &UserListXml::from(self)).map_err(xml_error)
    }
}

fn xml_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::InternalError(format!("XML serialization failed: {}", err))
}

/// Serialize `value` in the negotiated representation with its Content-Type.
pub fn represented<T: Representable>(
    status: StatusCode,
    value: &T,
    representation: Representation,
) -> Result<Response, ApiError> {
    let (content_type, body) = match representation {
        Representation::Json => (
            JSON_CONTENT_TYPE,
            serde_json::to_vec(value).map_err(|e| ApiError::InternalError(e.to_string()))?,
        ),
        Representation::Xml => (
            XML_CONTENT_TYPE,
            value.to_xml()?.into_bytes(),
        ),
    };

    Ok((
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(content_type))],
        Body::from(body),
    )
        .into_response())
}

/// JSON body with the charset-qualified Content-Type.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            Body::from(body),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize response body: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
