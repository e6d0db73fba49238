//! Terminal browser command

use crate::config::CliConfigLoader;
use crate::interactive::app::run_browser;
use anyhow::Result;
use tracing::debug;

/// Start the full-screen site browser
pub async fn browse_command(config_loader: CliConfigLoader, debug_output: bool) -> Result<()> {
    let config = config_loader.load().await?;
    if debug_output {
        debug!("UI config: {:?}", config.ui);
    }

    run_browser(config).await
}
