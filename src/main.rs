use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tui_snake::game::GameConfig;
use tui_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "tui_snake")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Board width in cells
    #[arg(long, default_value = "20")]
    width: usize,

    /// Board height in cells
    #[arg(long, default_value = "20")]
    height: usize,

    /// Tick interval at score 0, in milliseconds
    #[arg(long, default_value = "200")]
    tick_ms: u64,

    /// Write session logs to this file (the terminal belongs to the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Install a fmt subscriber writing to `path`. Logging is file-only: the
/// alternate screen would garble anything printed to stdout or stderr.
fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    anyhow::ensure!(
        cli.width >= 5 && cli.height >= 5,
        "board must be at least 5x5 cells"
    );

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let mut config = GameConfig::new(cli.width, cli.height);
    config.base_tick_ms = cli.tick_ms;

    let mut mode = PlayMode::new(config);
    mode.run().await?;

    Ok(())
}
