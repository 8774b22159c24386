use crate::config::types::{Config, CrawlBudget, FileConfig};
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses an optional TOML settings file
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(FileConfig)` - Parsed settings; absent sections take their defaults
/// * `Err(ConfigError)` - Failed to read or parse the file
pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let file: FileConfig = toml::from_str(&content)?;
    Ok(file)
}

/// Builds and validates the configuration for a crawl run
///
/// # Arguments
///
/// * `budget` - Concurrency and page limits taken from the command line
/// * `path` - Optional TOML file with HTTP and user agent settings
///
/// # Example
///
/// ```no_run
/// use linkcount::config::{load_config, CrawlBudget};
///
/// let config = load_config(CrawlBudget::new(2, 10), None).unwrap();
/// assert_eq!(config.budget.max_pages, 10);
/// ```
pub fn load_config(budget: CrawlBudget, path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };

    let config = Config::from_file(budget, file);
    validate(&config)?;

    Ok(config)
}
