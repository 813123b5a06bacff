//! Configuration management for the contact dispatch service.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is loaded first when present.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default Resend API base URL.
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Operator inbox that receives new-lead notifications.
pub const DEFAULT_OPERATOR_EMAIL: &str = "comunicaciones@lexasconsultores.cl";

/// Sender owned by the email provider.
pub const DEFAULT_FROM_ADDRESS: &str = "LexPro ERP <onboarding@resend.dev>";

/// Configuration for the email dispatch server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resend API base URL
    pub resend_api_url: String,

    /// Resend API key, held server-side only
    pub resend_api_key: String,

    /// Destination of notification emails
    pub operator_email: String,

    /// "From" header used for both emails
    pub from_address: String,

    /// Socket address the HTTP server binds to
    pub bind_address: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `RESEND_API_KEY`: API key for the email provider
    ///
    /// Optional environment variables:
    /// - `RESEND_API_BASE_URL`: Provider base URL (default: `https://api.resend.com`)
    /// - `CONTACT_OPERATOR_EMAIL`: Notification recipient
    /// - `CONTACT_FROM_ADDRESS`: Sender address
    /// - `BIND_ADDRESS`: Listen address (default: `0.0.0.0:8000`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let resend_api_key = env::var("RESEND_API_KEY")
            .map_err(|_| ConfigError::MissingVar("RESEND_API_KEY".to_string()))?;

        if resend_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let resend_api_url = env::var("RESEND_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_RESEND_API_URL.to_string());
        validate_url("RESEND_API_BASE_URL", &resend_api_url)?;

        let operator_email = env::var("CONTACT_OPERATOR_EMAIL")
            .unwrap_or_else(|_| DEFAULT_OPERATOR_EMAIL.to_string());
        EmailAddress::new(operator_email.as_str()).map_err(|_| ConfigError::InvalidValue {
            var: "CONTACT_OPERATOR_EMAIL".to_string(),
            reason: format!("Not an email address: {}", operator_email),
        })?;

        let from_address =
            env::var("CONTACT_FROM_ADDRESS").unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string());
        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let request_timeout = parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            resend_api_url,
            resend_api_key,
            operator_email,
            from_address,
            bind_address,
            request_timeout,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
            resend_api_key: String::new(),
            operator_email: DEFAULT_OPERATOR_EMAIL.to_string(),
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
            bind_address: "0.0.0.0:8000".to_string(),
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration for callers of the dispatch function.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the dispatch function endpoint
    pub function_url: String,

    /// Public key sent as bearer token and `apikey` header
    pub function_key: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,
}

impl ClientConfig {
    /// Load client configuration from environment variables.
    ///
    /// Required: `CONTACT_FUNCTION_URL`, `CONTACT_FUNCTION_KEY`.
    /// Optional: `REQUEST_TIMEOUT` (default: 10).
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let function_url = env::var("CONTACT_FUNCTION_URL")
            .map_err(|_| ConfigError::MissingVar("CONTACT_FUNCTION_URL".to_string()))?;
        validate_url("CONTACT_FUNCTION_URL", &function_url)?;

        let function_key = env::var("CONTACT_FUNCTION_KEY")
            .map_err(|_| ConfigError::MissingVar("CONTACT_FUNCTION_KEY".to_string()))?;
        if function_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_FUNCTION_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(ClientConfig {
            function_url,
            function_key,
            request_timeout: parse_env_u64("REQUEST_TIMEOUT", 10)?,
        })
    }
}

fn validate_url(var: &str, url: &str) -> ConfigResult<()> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidValue {
            var: var.to_string(),
            reason: "Must start with http:// or https://".to_string(),
        });
    }
    Ok(())
}

/// Parse an environment variable as u64 with a default value.
fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
    match env::var(var_name) {
        Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: format!("Must be a positive number, got: {}", val),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Sets env vars for one test and removes them on drop
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.resend_api_url, "https://api.resend.com");
        assert_eq!(config.operator_email, "comunicaciones@lexasconsultores.cl");
        assert_eq!(config.from_address, "LexPro ERP <onboarding@resend.dev>");
        assert_eq!(config.request_timeout, 10);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("RESEND_API_KEY", "re_test_123");
        guard.set("BIND_ADDRESS", "127.0.0.1:9000");
        guard.set("REQUEST_TIMEOUT", "5");
        guard.unset("RESEND_API_BASE_URL");
        guard.unset("CONTACT_OPERATOR_EMAIL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.resend_api_key, "re_test_123");
        assert_eq!(config.resend_api_url, DEFAULT_RESEND_API_URL);
        assert_eq!(config.operator_email, DEFAULT_OPERATOR_EMAIL);
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.request_timeout, 5);
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_api_key() {
        let mut guard = EnvGuard::new();
        guard.set("RESEND_API_KEY", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "RESEND_API_KEY"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("RESEND_API_KEY", "re_test_123");
        guard.set("RESEND_API_BASE_URL", "api.resend.com");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "RESEND_API_BASE_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_operator_email() {
        for value in ["ops@localhost", "ops @empresa.cl", "<ops>@empresa.cl"] {
            let mut guard = EnvGuard::new();
            guard.set("RESEND_API_KEY", "re_test_123");
            guard.set("CONTACT_OPERATOR_EMAIL", value);

            match Config::from_env() {
                Err(ConfigError::InvalidValue { var, .. }) => {
                    assert_eq!(var, "CONTACT_OPERATOR_EMAIL")
                }
                other => panic!("Expected InvalidValue for {:?}, got: {:?}", value, other),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_timeout() {
        let mut guard = EnvGuard::new();
        guard.set("RESEND_API_KEY", "re_test_123");
        guard.set("REQUEST_TIMEOUT", "soon");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "REQUEST_TIMEOUT"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_client_config_from_env() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_FUNCTION_URL", "https://example.test/functions/v1/send-contact-email");
        guard.set("CONTACT_FUNCTION_KEY", "anon-key");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.function_key, "anon-key");
        assert_eq!(config.request_timeout, 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        assert_eq!(parse_env_u64("TEST_U64", 10).unwrap(), 42);
        assert_eq!(parse_env_u64("NONEXISTENT_U64", 10).unwrap(), 10);
    }
}
