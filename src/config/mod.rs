mod types;

pub use types::{Config, SeedConfig, ServerConfig};

use crate::error::{Result, ShelfqlError};
use std::fs;

/// Load configuration from a TOML file
pub fn load_config(path: &str) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ShelfqlError::Config(format!("Failed to read config file '{}': {}", path, e))
    })?;

    let config: Config = toml::from_str(&contents)?;

    // Validate the seed section (if present)
    if let Some(ref seed) = config.seed {
        seed.validate().map_err(ShelfqlError::Config)?;
    }

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    if let Some(ref seed) = config.seed {
        seed.validate().map_err(ShelfqlError::Config)?;
    }

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string).map_err(|e| {
        ShelfqlError::Config(format!("Failed to write config file '{}': {}", path, e))
    })?;

    Ok(())
}
