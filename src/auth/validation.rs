//! Request gating for the register and login endpoints.
//!
//! Each step either yields the value the next stage needs or an [`ApiError`]
//! that short-circuits the request.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::{Map, Value};
use tracing::warn;

use crate::{
    auth::{repo::UserStore, repo_types::User},
    error::ApiError,
};

/// A username and password that are both present, non-empty strings.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

fn non_empty_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Only a JSON object is read; arrays and scalars carry no named fields.
impl TryFrom<Value> for Credentials {
    type Error = ApiError;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut fields) = body else {
            return Err(ApiError::MissingCredentials);
        };
        match (
            non_empty_string(&mut fields, "username"),
            non_empty_string(&mut fields, "password"),
        ) {
            (Some(username), Some(password)) => Ok(Credentials { username, password }),
            _ => Err(ApiError::MissingCredentials),
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // An unreadable body is treated the same as an empty one.
        let body = match Json::<Value>::from_request(req, state).await {
            Ok(Json(body)) => body,
            Err(rejection) => {
                warn!(error = %rejection, "credentials body rejected");
                Value::Null
            }
        };
        Credentials::try_from(body).inspect_err(|_| warn!("username and password required"))
    }
}

/// Best-effort pre-check; the store's unique constraint has the final word.
pub async fn ensure_username_available(
    store: &dyn UserStore,
    creds: &Credentials,
) -> Result<(), ApiError> {
    match store.find_by_username(&creds.username).await? {
        Some(_) => {
            warn!(username = %creds.username, "username taken");
            Err(ApiError::UsernameTaken)
        }
        None => Ok(()),
    }
}

/// Resolves the user a login attempt refers to. A missing user is reported
/// exactly like a wrong password.
pub async fn find_existing_user(
    store: &dyn UserStore,
    creds: &Credentials,
) -> Result<User, ApiError> {
    store
        .find_by_username(&creds.username)
        .await?
        .ok_or_else(|| {
            warn!(username = %creds.username, "login unknown username");
            ApiError::InvalidCredentials
        })
}
