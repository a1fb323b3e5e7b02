use anyhow::{Context, Result};
use app_showcase::config::Settings;
use app_showcase::infrastructure::init_tracing;
use app_showcase::Application;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new().context("Failed to load configuration")?;

    init_tracing(&settings.logging)?;

    info!(
        environment = %settings.application.environment,
        "Starting app showcase"
    );

    let app = Application::from_settings(settings)?;
    app.run().await?;

    Ok(())
}
