use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginResponse, RegisteredUser},
        jwt::JwtKeys,
        password::{hash_password_blocking, verify_password_blocking},
        validation::{ensure_username_available, find_existing_user, Credentials},
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, creds), fields(username = %creds.username))]
pub async fn register(
    State(state): State<AppState>,
    creds: Credentials,
) -> Result<(StatusCode, Json<RegisteredUser>), ApiError> {
    ensure_username_available(state.store.as_ref(), &creds).await?;

    let hash = hash_password_blocking(creds.password, state.config.hash.clone()).await?;

    // A concurrent registration can still win the race; the store reports it
    // as UsernameTaken.
    let user = state.store.insert(&creds.username, &hash).await?;

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok((StatusCode::CREATED, Json(RegisteredUser::from(user))))
}

#[instrument(skip(state, creds), fields(username = %creds.username))]
pub async fn login(
    State(state): State<AppState>,
    creds: Credentials,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = find_existing_user(state.store.as_ref(), &creds).await?;

    if !verify_password_blocking(creds.password, user.password_hash.clone()).await? {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user)?;

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(Json(LoginResponse {
        message: format!("welcome, {}", user.username),
        token,
    }))
}
