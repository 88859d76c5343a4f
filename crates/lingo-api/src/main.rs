//! Lingo API Server
//!
//! Configuration comes from the TOML file named by `LINGO_CONFIG`, if set,
//! overridden by environment variables.
//!
//! Author: hephaex@gmail.com

use lingo_api::{init_tracing, serve};
use lingo_core::config::AppConfig;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("LINGO_CONFIG").ok().map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    init_tracing(&config.logging);

    serve(config).await
}
