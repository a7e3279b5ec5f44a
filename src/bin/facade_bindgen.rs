//! facade-bindgen: client binding generator
//!
//! Writes the TypeScript or JavaScript module for the sample command table.
//!
//! ## Usage
//! ```text
//! facade-bindgen [config.yaml]
//! ```
//!
//! ## Configuration
//! - FACADE_CONFIG: Path to a YAML configuration file (optional)
//! - FACADE__BINDINGS__LANGUAGE: `typescript` or `javascript`
//! - FACADE__BINDINGS__OUTPUT: Output path (default: src/bindings.ts)
//! - FACADE_LOG: Log filter (default: info)

use tracing::info;

use invoke_facade::bindings;
use invoke_facade::commands::sample_commands;
use invoke_facade::config::Config;
use invoke_facade::utils::bootstrap::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let path = std::env::args().nth(1);
    let config = Config::load(path.as_deref())?;

    let table = sample_commands()?;
    let written = bindings::export(&table, &config.bindings)?;

    info!(path = %written.display(), "facade-bindgen finished");
    Ok(())
}
