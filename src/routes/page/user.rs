use super::RouteParams;
use crate::db;
use crate::error::Error;
use crate::notes::Lookup;
use crate::state::SharedState;
use crate::view;
use crate::view::error_boundary::ErrorPage;
use axum::extract::{Path, State};
use axum::response::Html;

pub(super) async fn get(
    State(state): SharedState,
    Path(username): Path<String>,
) -> Result<Html<String>, ErrorPage> {
    let params = RouteParams {
        username,
        note_id: None,
    };

    let user = match db::find_user_by_username(&state.db, &params.username).await {
        Ok(Lookup::Found(user)) => user,
        Ok(Lookup::NotFound) => {
            return Err(super::error_boundary().render(&params, &Error::OwnerNotFound))
        }
        Err(err) => return Err(super::error_boundary().render(&params, &err.into())),
    };

    Ok(Html(view::document(
        &format!("{} | Profile", user.display_name()),
        &view::user::profile(&user),
    )))
}
