mod app;
mod config;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;
mod templates;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "picture_web=debug,picture_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load()?;
    let bind_addr = config.bind_addr;

    let state = AppState::new(config);
    state.store.ensure_dir()?;
    tracing::info!("Storing pictures in {}", state.store.root().display());
    if !state.config.assets.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} does not exist; /static requests will 404",
            state.config.assets.static_dir.display()
        );
    }

    let app = app::router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("picture-web listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
