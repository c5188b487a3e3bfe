use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::expense_routes())
        .merge(handlers::savings_jar_routes())
        .merge(handlers::reminder_routes())
}
