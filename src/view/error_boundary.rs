use super::escape;
use crate::error::Error;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

pub type StatusHandler<P> = fn(&P, &Error) -> String;

/// Turns a failed page load into an error page, picking the renderer by the
/// error's status. Statuses without a handler get the generic message.
pub struct ErrorBoundary<P> {
    status_handlers: Vec<(StatusCode, StatusHandler<P>)>,
}

/// A rendered error document together with the status it is served with.
#[derive(Debug)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub html: String,
}

impl<P> ErrorBoundary<P> {
    pub fn new() -> Self {
        ErrorBoundary {
            status_handlers: Vec::new(),
        }
    }

    pub fn on(mut self, status: StatusCode, handler: StatusHandler<P>) -> Self {
        self.status_handlers.push((status, handler));
        self
    }

    pub fn render(&self, params: &P, error: &Error) -> ErrorPage {
        error.log_if_internal();
        let status = error.status();
        let message = match self
            .status_handlers
            .iter()
            .find(|(handled, _)| *handled == status)
        {
            Some((_, handler)) => handler(params, error),
            None => generic_message(status, error),
        };

        ErrorPage {
            status,
            html: super::document(
                status.canonical_reason().unwrap_or("Error"),
                &format!(
                    r#"<div class="container mx-auto flex h-full w-full items-center justify-center bg-destructive p-20 text-h2 text-destructive-foreground">{message}</div>"#
                ),
            ),
        }
    }
}

fn generic_message(status: StatusCode, error: &Error) -> String {
    if status.is_server_error() {
        return String::from("<p>Oh no, something went wrong.</p>");
    }

    format!(
        "<p>{} {}</p>",
        status.as_u16(),
        escape(&error.public_message())
    )
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        (self.status, Html(self.html)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Params {
        username: String,
    }

    fn params() -> Params {
        Params {
            username: String::from("<nobody>"),
        }
    }

    #[test]
    fn status_handler_renders_for_matching_status() {
        let boundary = ErrorBoundary::<Params>::new().on(StatusCode::NOT_FOUND, |params, _| {
            format!("<p>missing {}</p>", escape(&params.username))
        });

        let page = boundary.render(&params(), &Error::OwnerNotFound);
        assert_eq!(page.status, StatusCode::NOT_FOUND);
        assert!(page.html.contains("<p>missing &lt;nobody&gt;</p>"));
    }

    #[test]
    fn unhandled_statuses_fall_back_to_generic_message() {
        let boundary = ErrorBoundary::<Params>::new();

        let page = boundary.render(&params(), &Error::NoteNotFound);
        assert_eq!(page.status, StatusCode::NOT_FOUND);
        assert!(page.html.contains("<p>404 Note not found</p>"));

        let page = boundary.render(&params(), &Error::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(page.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(page.html.contains("Oh no, something went wrong."));
        assert!(!page.html.contains("pool"));
    }
}
