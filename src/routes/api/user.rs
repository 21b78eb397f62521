use crate::db;
use crate::error::Error;
use crate::notes::{Lookup, OwnerNotes};
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::Json;

/// The owner named `username` with their notes reduced to `{id, title}`.
pub async fn notes(
    State(state): SharedState,
    Path(username): Path<String>,
) -> Result<Json<OwnerNotes>, Error> {
    match db::find_owner_with_notes(&state.db, &username).await? {
        Lookup::Found(payload) => Ok(Json(payload)),
        Lookup::NotFound => {
            tracing::debug!(%username, "no owner with this username");
            Err(Error::OwnerNotFound)
        }
    }
}
