use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings shared by both converters
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ImportConfig {
    /// Dish input used when no path is given on the command line
    #[serde(default = "default_dishes_input")]
    pub dishes_input: String,
    /// Dish output used when no path is given on the command line
    #[serde(default = "default_dishes_output")]
    pub dishes_output: String,
    /// Number of leading bytes inspected to detect the delimiter
    #[serde(default = "default_sniff_sample_bytes")]
    pub sniff_sample_bytes: usize,
    /// Candidate delimiters, each character is one candidate
    #[serde(default = "default_delimiters")]
    pub delimiters: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            dishes_input: default_dishes_input(),
            dishes_output: default_dishes_output(),
            sniff_sample_bytes: default_sniff_sample_bytes(),
            delimiters: default_delimiters(),
        }
    }
}

// Default value functions
fn default_dishes_input() -> String {
    "dishes.csv".to_string()
}

fn default_dishes_output() -> String {
    "dishes.json".to_string()
}

fn default_sniff_sample_bytes() -> usize {
    4096
}

fn default_delimiters() -> String {
    ",;\t|".to_string()
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with MENU_IMPORT__ prefix
    /// 2. menu-import.toml in the current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Candidate delimiters as bytes. Non-ASCII characters are ignored
    /// since the CSV reader only accepts single-byte delimiters.
    pub fn delimiter_bytes(&self) -> Vec<u8> {
        self.delimiters
            .chars()
            .filter(char::is_ascii)
            .map(|c| c as u8)
            .collect()
    }
}

/// Load configuration from `menu-import.toml` and the environment
///
/// Environment variable format: MENU_IMPORT__SNIFF_SAMPLE_BYTES=8192
pub fn load_config() -> Result<ImportConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("menu-import").required(false))
        .add_source(
            Environment::with_prefix("MENU_IMPORT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
