use crate::state::State;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod page;
pub mod resources;

pub fn app(state: Arc<State>, public_dir: &std::path::Path) -> axum::Router {
    axum::Router::new()
        .nest("/api", api::route())
        .nest("/resources", resources::route())
        .merge(page::route())
        .nest_service("/img", ServeDir::new(public_dir.join("img")))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// [`app`] with trailing slashes trimmed before routing, which is what gets served.
pub fn service(state: Arc<State>, public_dir: &std::path::Path) -> NormalizePath<axum::Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app(state, public_dir))
}


#[cfg(test)]
mod tests {
    use super::testing;
    use axum::http::{header, StatusCode};

    #[tokio::test]
    async fn serves_placeholder_avatar() {
        let (status, headers, body) = testing::get(testing::app().await, "/img/user.png").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "image/png");
        assert!(body.starts_with(b"\x89PNG"));
    }

    #[tokio::test]
    async fn trailing_slashes_are_trimmed() {
        let (status, body) = testing::get_text(testing::app().await, "/users/kody/notes/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Kody's Notes"));
        assert!(body.contains("Select a note"));

        let (status, _) = testing::get_text(testing::app().await, "/api/users/kody/notes/").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn database_faults_surface_as_500_without_details() {
        let pool = crate::db::fixtures::seeded_pool().await;
        sqlx::query("DROP TABLE note")
            .execute(&pool)
            .await
            .expect("note table should drop");

        let (status, body) =
            testing::get_text(testing::app_with(pool.clone()), "/api/users/kody/notes").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"Internal Server Error"}"#);

        let (status, body) = testing::get_text(testing::app_with(pool), "/users/kody/notes").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Oh no, something went wrong."));
        assert!(!body.contains("no such table"));
    }
}
