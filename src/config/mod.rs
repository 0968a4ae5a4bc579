pub mod toml_config;

use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "flipp")]
#[command(version, about = "Prints the Flipp greeting")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the file named by `--config`, or defaults when none was given.
    pub fn load_toml(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }
}
