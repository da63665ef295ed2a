use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;
use users_shared::models::{messages, ApiResponse, User, UserInput, UserPatch};
use users_shared::store::UserStore;

use super::{parse_user_id, read_json_body};
use crate::error::{AppError, Result};

fn user_id(raw: &str) -> Result<u64> {
    parse_user_id(raw).ok_or_else(|| {
        tracing::debug!("Path segment {:?} is not a user ID", raw);
        AppError::user_not_found()
    })
}

// An unknown id wins over a malformed body
async fn body_for_user<S, T>(store: &S, id: u64, headers: &HeaderMap, body: &Bytes) -> Result<T>
where
    S: UserStore,
    T: serde::de::DeserializeOwned + Default,
{
    match read_json_body(headers, body) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            store.get_user(id).await?;
            Err(err)
        }
    }
}

// GET /api/users
pub async fn get_users<S>(State(store): State<Arc<S>>) -> Result<Json<ApiResponse<Vec<User>>>>
where
    S: UserStore,
{
    let users = store.list_users().await?;
    Ok(Json(ApiResponse::ok(users)))
}

// GET /api/users/:id
pub async fn get_user<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<User>>>
where
    S: UserStore,
{
    let user = store.get_user(user_id(&id)?).await?;
    Ok(Json(ApiResponse::ok(user)))
}

// POST /api/users
pub async fn create_user<S>(
    State(store): State<Arc<S>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse<User>>)>
where
    S: UserStore,
{
    // An unreadable body carries no name or email
    let input: UserInput = read_json_body(&headers, &body).map_err(|_| AppError::required_fields())?;

    let created = store.create_user(input).await?;
    tracing::info!("Created user {}", created.id);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(created, messages::USER_CREATED)),
    ))
}

// PUT /api/users/:id
pub async fn replace_user<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse<User>>>
where
    S: UserStore,
{
    let id = user_id(&id)?;
    let input: UserInput = body_for_user(store.as_ref(), id, &headers, &body).await?;

    let updated = store.replace_user(id, input).await?;
    tracing::info!("Replaced user {}", updated.id);

    Ok(Json(ApiResponse::ok_with_message(
        updated,
        messages::USER_UPDATED,
    )))
}

// PATCH /api/users/:id
pub async fn patch_user<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse<User>>>
where
    S: UserStore,
{
    let id = user_id(&id)?;
    let patch: UserPatch = body_for_user(store.as_ref(), id, &headers, &body).await?;
    if patch.is_empty() {
        tracing::debug!("Patch for user {} names no known fields", id);
    }

    let updated = store.patch_user(id, patch).await?;
    tracing::info!("Patched user {}", updated.id);

    Ok(Json(ApiResponse::ok_with_message(
        updated,
        messages::USER_UPDATED,
    )))
}

// DELETE /api/users/:id
pub async fn delete_user<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<User>>>
where
    S: UserStore,
{
    let deleted = store.delete_user(user_id(&id)?).await?;
    tracing::info!("Deleted user {}", deleted.id);

    Ok(Json(ApiResponse::ok_with_message(
        deleted,
        messages::USER_DELETED,
    )))
}
