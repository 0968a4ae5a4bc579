pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::greeter::Greeter;
pub use domain::{model::Greeting, ports::Flipp};
pub use utils::error::{FlippError, Result};
