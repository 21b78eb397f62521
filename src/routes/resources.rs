use crate::db;
use crate::error::Error;
use crate::notes::Lookup;
use crate::state::{NestedRouter, SharedState};
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

pub fn route() -> NestedRouter {
    axum::Router::new().route("/user-images/:image_id", get(user_image))
}

async fn user_image(
    State(state): SharedState,
    Path(image_id): Path<String>,
) -> Result<Response, Error> {
    let Lookup::Found(image) = db::find_user_image(&state.db, &image_id).await? else {
        return Err(Error::ImageNotFound);
    };

    Ok((
        [
            (header::CONTENT_TYPE, image.content_type),
            (
                header::CACHE_CONTROL,
                String::from("public, max-age=31536000, immutable"),
            ),
        ],
        image.blob,
    )
        .into_response())
}
