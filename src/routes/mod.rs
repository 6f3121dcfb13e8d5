pub mod form;
pub mod projects;
pub mod settings;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/settings", get(settings::get))
        // Projects
        .route("/api/projects", get(projects::list).post(projects::create))
        .route(
            "/api/projects/{project_id}",
            get(projects::get).patch(projects::update),
        )
}
