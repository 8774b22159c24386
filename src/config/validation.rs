use crate::config::types::{Config, CrawlBudget, HttpConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Upper bound on simultaneously active crawl tasks
pub const MAX_CONCURRENCY_LIMIT: usize = 1024;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_budget(&config.budget)?;
    validate_http_config(&config.http)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates the crawl budget
fn validate_budget(budget: &CrawlBudget) -> Result<(), ConfigError> {
    if budget.max_concurrency < 1 || budget.max_concurrency > MAX_CONCURRENCY_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max concurrency must be between 1 and {}, got {}",
            MAX_CONCURRENCY_LIMIT, budget.max_concurrency
        )));
    }

    if budget.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max pages must be >= 1, got {}",
            budget.max_pages
        )));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.request_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "request-timeout-secs must be > 0".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be > 0".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-version cannot be empty".to_string(),
        ));
    }

    if let Some(contact) = &config.contact_url {
        Url::parse(contact).map_err(|e| {
            ConfigError::Validation(format!("Invalid contact-url '{}': {}", contact, e))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config::new(CrawlBudget::new(4, 20))
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_budget() {
        assert!(validate_budget(&CrawlBudget::new(1, 1)).is_ok());
        assert!(validate_budget(&CrawlBudget::new(MAX_CONCURRENCY_LIMIT, 1)).is_ok());

        assert!(validate_budget(&CrawlBudget::new(0, 1)).is_err());
        assert!(validate_budget(&CrawlBudget::new(MAX_CONCURRENCY_LIMIT + 1, 1)).is_err());
        assert!(validate_budget(&CrawlBudget::new(1, 0)).is_err());
    }

    #[test]
    fn test_validate_crawler_name() {
        let mut config = valid_config();
        config.user_agent.crawler_name = "link count".to_string();
        assert!(validate(&config).is_err());

        config.user_agent.crawler_name = String::new();
        assert!(validate(&config).is_err());

        config.user_agent.crawler_name = "link-count2".to_string();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_contact_url() {
        let mut config = valid_config();
        config.user_agent.contact_url = Some("not a url".to_string());
        assert!(validate(&config).is_err());

        config.user_agent.contact_url = Some("https://example.com/bot".to_string());
        assert!(validate(&config).is_ok());
    }
}
