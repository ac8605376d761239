use crate::controller::build_router;
use crate::model::app_state::AppState;
use crate::shared::configuration::{initialize, resolve_blog_directory};
use std::str::FromStr;
use tracing::Level;

mod controller;
mod model;
mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let configuration = initialize()?;
    let log_level = Level::from_str(&configuration.log_level).unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(log_level).init();

    let blog_directory =
        resolve_blog_directory(&configuration.blog_directory, &std::env::current_dir()?);
    tracing::info!("Saving blogs under {}", blog_directory.display());

    let app = build_router(AppState::new(blog_directory));

    let listener = tokio::net::TcpListener::bind(&configuration.server_bind_point).await?;
    tracing::info!("Listening on {}", &configuration.server_bind_point);
    axum::serve(listener, app).await?;
    Ok(())
}
