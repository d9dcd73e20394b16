//! 配置值验证模块
//!
//! Runs once after all sources are merged; any failure aborts startup.

use super::StaticConfig;
use crate::errors::{Result, ShortenerError};

/// Log formats understood by the logging initializer
pub const LOG_FORMATS: [&str; 2] = ["text", "json"];

pub fn validate_config(config: &StaticConfig) -> Result<()> {
    if config.server.address.trim().is_empty() {
        return Err(ShortenerError::config("server.address must not be empty"));
    }

    if config.server.response_prefix.trim().is_empty() {
        return Err(ShortenerError::config(
            "server.response_prefix must not be empty",
        ));
    }

    if config.server.max_body_size == 0 {
        return Err(ShortenerError::config(
            "server.max_body_size must be at least 1 byte",
        ));
    }

    if config.links.max_alias_attempts == 0 {
        return Err(ShortenerError::config(
            "links.max_alias_attempts must be at least 1",
        ));
    }

    if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
        return Err(ShortenerError::config(format!(
            "Invalid logging.format '{}'. Valid: {}",
            config.logging.format,
            LOG_FORMATS.join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&StaticConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_address() {
        let mut config = StaticConfig::default();
        config.server.address = "  ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.message().contains("server.address"));
    }

    #[test]
    fn test_empty_prefix() {
        let mut config = StaticConfig::default();
        config.server.response_prefix = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_body_size() {
        let mut config = StaticConfig::default();
        config.server.max_body_size = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_unknown_log_format() {
        let mut config = StaticConfig::default();
        config.logging.format = "xml".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.message().contains("xml"));
    }
}
