use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct Settings {
    pub auth: bool,
}

/// Lets the front-end decide whether to show the login flow.
pub async fn get(State(state): State<SharedState>) -> Json<Settings> {
    Json(Settings {
        auth: state.config.auth.is_active(),
    })
}
