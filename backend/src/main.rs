use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use timetable_backend::{config, create_router, initialize_backend, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = config::load_config()?;
    logging::init(&settings.logging)?;

    let app_state = initialize_backend(&settings)?;
    let app = create_router(app_state, &settings.server)?;

    let addr = settings.server.bind_address();
    info!("Starting timetable server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
