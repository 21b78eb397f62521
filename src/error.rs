use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Owner not found")]
    OwnerNotFound,
    #[error("Note not found")]
    NoteNotFound,
    #[error("User image not found")]
    ImageNotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::OwnerNotFound | Error::NoteNotFound | Error::ImageNotFound => {
                StatusCode::NOT_FOUND
            }
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What a client may see; internal faults are reduced to a generic message.
    pub fn public_message(&self) -> String {
        match self {
            Error::Database(_) => String::from("Internal Server Error"),
            other => other.to_string(),
        }
    }

    pub fn log_if_internal(&self) {
        if let Error::Database(err) = self {
            tracing::error!(error = %err, "database error while handling request");
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.log_if_internal();
        let status = self.status();
        let body = serde_json::json!({ "error": self.public_message() });
        (status, Json(body)).into_response()
    }
}
