use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Client configuration for the meal search API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the search endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "https://www.themealdb.com/api/json/v1/1/search.php".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl ApiConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__ENDPOINT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("MEALDB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // An empty source set falls back to the serde defaults
        settings.try_deserialize()
    }
}
