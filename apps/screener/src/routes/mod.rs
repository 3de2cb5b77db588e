pub mod health;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers as screening;
use crate::session::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_request_bytes);

    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        // Sessions
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/resumes",
            post(sessions::handle_upload_resumes)
                .layer(upload_limit)
                .delete(sessions::handle_clear_resumes),
        )
        // Screening actions
        .route(
            "/api/v1/sessions/:id/analyze",
            post(screening::handle_analyze),
        )
        .route(
            "/api/v1/sessions/:id/match-percentages",
            post(screening::handle_match_percentages),
        )
        .route(
            "/api/v1/sessions/:id/pick-best",
            post(screening::handle_pick_best),
        )
        .route(
            "/api/v1/sessions/:id/statistics",
            post(screening::handle_statistics),
        )
        .with_state(state)
}
