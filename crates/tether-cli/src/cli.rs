//! Command handlers for the Tether CLI.

use anyhow::{Context, Result};
use log::info;
use tether_core::{ConnectionInfo, ConnectionManager};

/// Runs CLI commands against one connection manager.
pub struct Cli {
    manager: ConnectionManager,
    json: bool,
}

impl Cli {
    pub fn new(manager: ConnectionManager, json: bool) -> Self {
        Self { manager, json }
    }

    /// Opens the database, prints its status and closes it.
    pub fn status(&self) -> Result<()> {
        self.open()?;
        self.print(&self.manager.info())?;
        self.close()
    }

    /// Keeps the database open until the process receives Ctrl-C.
    pub async fn hold(&self) -> Result<()> {
        self.open()?;
        self.print(&self.manager.info())?;

        info!("Holding database open, press Ctrl-C to close");
        tokio::signal::ctrl_c()
            .await
            .context("Failed to listen for shutdown signal")?;

        info!("Shutdown requested");
        self.close()
    }

    fn open(&self) -> Result<()> {
        self.manager.init().with_context(|| {
            format!(
                "Failed to open database at {}",
                self.manager.path().display()
            )
        })
    }

    fn close(&self) -> Result<()> {
        self.manager
            .close()
            .context("Failed to close database")?;
        Ok(())
    }

    fn print(&self, info: &ConnectionInfo) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(info).context("Failed to serialize status")?;
            println!("{json}");
        } else {
            println!("{info}");
        }
        Ok(())
    }
}
