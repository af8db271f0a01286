use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main service configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ChefConfig {
    /// Address to bind the HTTP server to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind the HTTP server to
    #[serde(default = "default_port")]
    pub port: u16,
    /// Generation provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Configuration for the Gemini generation provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Model identifier (must support mixed TEXT/IMAGE output)
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key (can also be set via the GEMINI_API_KEY environment variable)
    pub api_key: Option<String>,
    /// Base URL for the API endpoint (for proxy or test endpoints)
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
            timeout: default_timeout(),
        }
    }
}

impl Default for ChefConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            provider: ProviderConfig::default(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_model() -> String {
    "gemini-2.0-flash-preview-image-generation".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_timeout() -> u64 {
    30
}

impl ChefConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with AICHEF prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: AICHEF__PROVIDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: AICHEF__PROVIDER__MODEL
            .add_source(
                Environment::with_prefix("AICHEF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

impl ProviderConfig {
    /// API key from config, falling back to the GEMINI_API_KEY environment
    /// variable. `None` puts the service in offline mode rather than
    /// failing startup.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
    }
}
