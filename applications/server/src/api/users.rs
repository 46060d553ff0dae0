/// Users API routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    Json,
};
use roster_core::{CreateUser, UpdateUser, User, UserId};

/// GET /api/users
/// Get the full collection in insertion order
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.store.get_all_users().await?;
    Ok(Json(users))
}

/// POST /api/users
/// Create a new user; `email` is the only required field
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(req): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>)> {
    if req.email.as_deref().map_or(true, str::is_empty) {
        return Err(ServerError::Validation("Email is required".to_string()));
    }

    let user = app_state.store.create_user(req).await?;
    tracing::debug!(id = %user.id, "Created user");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users?id=:id
/// Shallow-merge the payload into an existing record
pub async fn update_user(
    Query(params): Query<Vec<(String, String)>>,
    State(app_state): State<AppState>,
    Json(req): Json<UpdateUser>,
) -> Result<Json<User>> {
    let id = single_id(&params)?;
    let user = app_state.store.update_user(&id, req).await?;
    tracing::debug!(id = %user.id, "Updated user");
    Ok(Json(user))
}

/// DELETE /api/users?id=:id
/// Remove a record and confirm with its id
pub async fn delete_user(
    Query(params): Query<Vec<(String, String)>>,
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    let id = single_id(&params)?;
    app_state.store.delete_user(&id).await?;
    tracing::debug!(id = %id, "Deleted user");
    Ok(Json(serde_json::json!({ "success": true, "id": id })))
}

/// Fallback for any other verb on the users resource
pub async fn method_not_allowed(method: Method) -> ServerError {
    ServerError::MethodNotAllowed(method.to_string())
}

/// Extract the `id` query parameter, rejecting absent, empty, or repeated
/// values.
fn single_id(params: &[(String, String)]) -> Result<UserId> {
    let mut ids = params
        .iter()
        .filter(|(key, _)| key == "id")
        .map(|(_, value)| value.as_str());

    match (ids.next(), ids.next()) {
        (Some(id), None) if !id.is_empty() => Ok(UserId::new(id)),
        _ => Err(ServerError::BadRequest(
            "Missing or invalid user ID".to_string(),
        )),
    }
}
