use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// Optional seed data section (absent means start with empty collections)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind the server to
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
        }
    }
}

fn default_port() -> u16 {
    4000
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

/// Seed data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Path to a JSON document holding the initial author and book collections
    pub path: String,
}

impl SeedConfig {
    /// Validate seed configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("Seed path must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_validation_valid() {
        let seed = SeedConfig {
            path: "seed.json".to_string(),
        };

        assert!(seed.validate().is_ok());
    }

    #[test]
    fn test_seed_validation_empty_path() {
        let seed = SeedConfig {
            path: "   ".to_string(),
        };

        assert!(seed.validate().is_err());
    }

    #[test]
    fn test_server_defaults() {
        let server = ServerConfig::default();

        assert_eq!(server.port, 4000);
        assert_eq!(server.bind, "0.0.0.0");
    }

    #[test]
    fn test_config_without_seed_section() {
        let config: Config = toml::from_str("[server]\nport = 9000\n").unwrap();

        assert!(config.seed.is_none());
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.bind, "0.0.0.0");
    }
}
