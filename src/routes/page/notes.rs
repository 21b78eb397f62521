use super::RouteParams;
use crate::db;
use crate::error::Error;
use crate::notes::{Lookup, OwnerNotes};
use crate::routes::api;
use crate::state::SharedState;
use crate::view;
use crate::view::error_boundary::ErrorPage;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;

pub(super) async fn index(
    State(state): SharedState,
    Path(username): Path<String>,
) -> Result<Html<String>, ErrorPage> {
    let params = RouteParams {
        username,
        note_id: None,
    };
    let render_error = |err: Error| super::error_boundary().render(&params, &err);

    let Json(payload) = api::user::notes(State(state), Path(params.username.clone()))
        .await
        .map_err(render_error)?;

    Ok(page(&payload, None, &view::notes::index()))
}

pub(super) async fn detail(
    State(state): SharedState,
    Path((username, note_id)): Path<(String, String)>,
) -> Result<Html<String>, ErrorPage> {
    let params = RouteParams {
        username,
        note_id: Some(note_id.clone()),
    };
    let render_error = |err: Error| super::error_boundary().render(&params, &err);

    let Json(payload) = api::user::notes(State(state.clone()), Path(params.username.clone()))
        .await
        .map_err(render_error)?;

    let note = match db::find_note_of_owner(&state.db, &params.username, &note_id).await {
        Ok(Lookup::Found(note)) => note,
        Ok(Lookup::NotFound) => return Err(render_error(Error::NoteNotFound)),
        Err(err) => return Err(render_error(err.into())),
    };

    Ok(page(&payload, Some(&note.id), &view::notes::detail(&note)))
}

fn page(payload: &OwnerNotes, active_note_id: Option<&str>, outlet: &str) -> Html<String> {
    Html(view::document(
        &format!("{}'s Notes", payload.owner.display_name()),
        &view::notes::layout(payload, active_note_id, outlet),
    ))
}
