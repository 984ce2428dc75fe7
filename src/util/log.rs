use std::path::Path;

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE: &str = "kiosk.log";
const LOG_ENV: &str = "KIOSK_LOG_LEVEL";

// stdout belongs to the terminal UI
pub fn initialize_logging(data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let log_file = std::fs::File::create(data_dir.join(LOG_FILE))?;

    let filter = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "kiosk_tui=info".to_string());

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}
