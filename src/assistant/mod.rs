use crate::state::AppState;
use axum::Router;

pub mod client;
pub mod context;
mod dto;
pub mod handlers;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::assistant_routes())
}
