mod data;

use axum::{middleware, routing::get, Extension, Json, Router};
use tracing::{debug, instrument};

use crate::{
    auth::{claims::Claims, middleware::require_token},
    state::AppState,
};

pub use data::{Joke, JOKES};

/// Token-gated routes. Needs the state up front for the verification layer.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/jokes", get(list_jokes))
        .route_layer(middleware::from_fn_with_state(state, require_token))
}

#[instrument(skip_all)]
pub async fn list_jokes(Extension(claims): Extension<Claims>) -> Json<&'static [Joke]> {
    debug!(user_id = claims.subject, "serving jokes");
    Json(JOKES)
}
