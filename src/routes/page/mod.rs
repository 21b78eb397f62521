use crate::error::Error;
use crate::state::NestedRouter;
use crate::view::error_boundary::ErrorBoundary;
use crate::view::escape;
use axum::http::StatusCode;
use axum::routing::get;

mod notes;
mod user;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/users/:username", get(user::get))
        .route("/users/:username/notes", get(notes::index))
        .route("/users/:username/notes/:note_id", get(notes::detail))
}

#[derive(Debug)]
pub(super) struct RouteParams {
    pub username: String,
    pub note_id: Option<String>,
}

fn error_boundary() -> ErrorBoundary<RouteParams> {
    ErrorBoundary::new().on(StatusCode::NOT_FOUND, |params: &RouteParams, error| {
        match (error, params.note_id.as_deref()) {
            (Error::NoteNotFound, Some(note_id)) => {
                format!(r#"<p>No note with the id "{}" exists</p>"#, escape(note_id))
            }
            _ => format!(
                r#"<p>No user with the username "{}" exists</p>"#,
                escape(&params.username)
            ),
        }
    })
}
