use axum::{
    body::{Body, Bytes},
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use profile_core::domain::UserDraft;
use profile_core::services::{PatchOperation, ReplaceOutcome, Representation};
use profile_shared::constants::{PAGINATION_HEADER, USERS_ROUTE};
use profile_shared::PageQuery;

use crate::dto::{CreatedUserId, UserDto, UserListDto};
use crate::error::ApiError;
use crate::response::represented;
use crate::state::AppState;

fn accept(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::ACCEPT).and_then(|v| v.to_str().ok())
}

/// Absolute origin for generated links: the request Host when present, else the configured public URL.
fn base_url(headers: &HeaderMap, state: &AppState) -> String {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|host| !host.is_empty())
        .map(|host| format!("http://{}", host))
        .unwrap_or_else(|| state.config.app.public_url.trim_end_matches('/').to_string())
}

/// Deserialize a JSON body, treating anything unparseable (or `null`) as absent.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Option<T> {
    match serde_json::from_slice::<Option<T>>(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Ignoring unparseable body: {}", e);
            None
        }
    }
}

fn created_response(base: &str, id: Uuid, representation: Representation) -> Result<Response, ApiError> {
    let mut response = represented(StatusCode::CREATED, &CreatedUserId(id), representation)?;

    let location = format!("{}{}/{}", base, USERS_ROUTE, id);
    let location = HeaderValue::from_str(&location)
        .map_err(|e| ApiError::InternalError(format!("Invalid Location header: {}", e)))?;
    response.headers_mut().insert(header::LOCATION, location);

    Ok(response)
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let found = state.users.get_user(&user_id, accept(&headers)).await?;
    represented(StatusCode::OK, &UserDto::from(&found.value), found.representation)
}

/// Same status and headers as GET, without the body
pub async fn head_user(
    state: State<AppState>,
    user_id: Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let (parts, _) = get_user(state, user_id, headers).await?.into_parts();
    Ok(Response::from_parts(parts, Body::empty()))
}

pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let draft = parse_body::<UserDraft>(&body);
    let created = state.users.create_user(draft, accept(&headers)).await?;

    created_response(&base_url(&headers, &state), created.value.id, created.representation)
}

pub async fn replace_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let draft = parse_body::<UserDraft>(&body);

    match state.users.replace_user(&user_id, draft, accept(&headers)).await? {
        ReplaceOutcome::Created(created) => {
            created_response(&base_url(&headers, &state), created.value.id, created.representation)
        }
        ReplaceOutcome::Updated => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

pub async fn patch_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let operations = parse_body::<Vec<PatchOperation>>(&body);
    state.users.patch_user(&user_id, operations).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.users.delete_user(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    // Raw pairs so repeated or unknown parameters never reject the listing
    let query = PageQuery::from_pairs(&pairs);
    let listed = state
        .users
        .list_users(&query, &base_url(&headers, &state), accept(&headers))
        .await?;

    let pagination = serde_json::to_string(&listed.metadata)
        .map_err(|e| ApiError::InternalError(e.to_string()))?;
    let pagination = HeaderValue::from_str(&pagination)
        .map_err(|e| ApiError::InternalError(format!("Invalid pagination header: {}", e)))?;

    let mut response = represented(
        StatusCode::OK,
        &UserListDto::from_users(&listed.users),
        listed.representation,
    )?;
    response.headers_mut().insert(PAGINATION_HEADER, pagination);

    Ok(response)
}

pub async fn list_options(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, state.users.collection_methods().join(", "))])
}
