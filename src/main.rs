use anyhow::Context;
use axum::ServiceExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod db;
mod error;
mod notes;
mod routes;
mod settings;
mod state;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = settings::Settings::new().context("error loading settings")?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| settings.log.filter.as_str().into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::connect(&settings.database)
        .await
        .context("error opening database")?;
    let state = std::sync::Arc::new(state::State::new(pool));

    let app = routes::service(state, std::path::Path::new(&settings.assets.public_dir));

    let address = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("error binding {address}"))?;
    tracing::info!(%address, "serving notes");

    axum::serve(
        listener,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await
    .context("error serving app")
}
