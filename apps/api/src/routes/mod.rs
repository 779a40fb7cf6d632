pub mod dashboard;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use jobdesc_contract::GENERATE_PATH;

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::dashboard_handler))
        .route("/health", get(health::health_handler))
        .route(GENERATE_PATH, post(handlers::handle_generate))
        .with_state(state)
}
