//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use url::Url;

/// Largest page size any Mastodon endpoint accepts.
const MAX_PAGE_SIZE: u32 = 80;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_base_url(&config.mastodon.api_base_url)?;
    validate_token(&config.mastodon.access_token)?;
    validate_page_size(config.options.page_size)?;
    validate_status_limit(config.options.status_limit)?;

    Ok(())
}

/// Validate the instance base URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    let base_url = base_url.trim();
    if base_url.is_empty() {
        return Err(Error::MissingConfig("mastodon.api_base_url".to_string()));
    }

    let parsed = Url::parse(base_url).map_err(|e| Error::ConfigValidation {
        field: "api_base_url".to_string(),
        message: format!("'{}' is not a valid URL: {}", base_url, e),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "api_base_url".to_string(),
            message: format!("URL scheme must be http or https (got '{}')", parsed.scheme()),
        });
    }

    if parsed.host_str().is_none() {
        return Err(Error::ConfigValidation {
            field: "api_base_url".to_string(),
            message: format!("URL has no host: {}", base_url),
        });
    }

    Ok(())
}

/// Validate the access token.
pub fn validate_token(token: &str) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::MissingConfig("mastodon.access_token".to_string()));
    }

    // Check for placeholder values
    let token_lower = token.to_lowercase();
    if token_lower.contains("replaceme") || token_lower.contains("your_access_token") {
        return Err(Error::ConfigValidation {
            field: "access_token".to_string(),
            message: "Token appears to be a placeholder. Please provide your actual access token."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the page size.
pub fn validate_page_size(page_size: u32) -> Result<()> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(Error::ConfigValidation {
            field: "page_size".to_string(),
            message: format!(
                "Page size must be between 1 and {} (got {})",
                MAX_PAGE_SIZE, page_size
            ),
        });
    }

    Ok(())
}

/// Validate the optional status limit.
pub fn validate_status_limit(limit: Option<u32>) -> Result<()> {
    if limit == Some(0) {
        return Err(Error::ConfigValidation {
            field: "status_limit".to_string(),
            message: "Limit must be at least 1; omit it to back up every status".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MastodonConfig;

    fn valid_config() -> Config {
        Config {
            mastodon: MastodonConfig {
                api_base_url: "https://mastodon.example".to_string(),
                access_token: "token-123".to_string(),
            },
            options: Default::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_base_url() {
        let mut config = valid_config();
        config.mastodon.api_base_url.clear();
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(field)) if field == "mastodon.api_base_url"
        ));
    }

    #[test]
    fn test_missing_token() {
        let mut config = valid_config();
        config.mastodon.access_token = "   ".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(field)) if field == "mastodon.access_token"
        ));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(validate_base_url("mastodon.example").is_err());
        assert!(validate_base_url("ftp://mastodon.example").is_err());
        assert!(validate_base_url("http://localhost:3000").is_ok());
    }

    #[test]
    fn test_placeholder_token() {
        assert!(validate_token("REPLACEME").is_err());
        assert!(validate_token("your_access_token_here").is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(validate_page_size(0).is_err());
        assert!(validate_page_size(81).is_err());
        assert!(validate_page_size(40).is_ok());
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(validate_status_limit(Some(0)).is_err());
        assert!(validate_status_limit(Some(5)).is_ok());
        assert!(validate_status_limit(None).is_ok());
    }
}
