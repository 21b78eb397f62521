use crate::state::NestedRouter;
use axum::routing::get;

pub mod user;

pub fn route() -> NestedRouter {
    axum::Router::new().route("/users/:username/notes", get(user::notes))
}
