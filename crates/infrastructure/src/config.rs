//! Client configuration.
//!
//! Defaults point at the public QA deployment; environment variables
//! override them.

use itemcheck_application::ItemRoutes;
use thiserror::Error;
use url::Url;

/// Default service the scenarios run against.
pub const DEFAULT_BASE_URL: &str = "https://qa-internship.avito.com";

/// Overrides the base URL.
pub const BASE_URL_VAR: &str = "ITEMCHECK_BASE_URL";

/// Overrides the `User-Agent` header.
pub const USER_AGENT_VAR: &str = "ITEMCHECK_USER_AGENT";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The base URL does not parse or is not an `http`/`https` base.
    #[error("invalid {var} '{value}': {reason}")]
    InvalidBaseUrl {
        /// Where the value came from.
        var: &'static str,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The user agent is blank.
    #[error("{0} must not be blank")]
    BlankUserAgent(&'static str),
}

/// Where the client sends requests and how it identifies itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    routes: ItemRoutes,
    user_agent: String,
}

impl ClientConfig {
    /// Builds a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is unusable or `user_agent` is
    /// blank.
    pub fn new(base_url: &str, user_agent: impl Into<String>) -> Result<Self, ConfigError> {
        let routes = parse_base_url("base URL", base_url)?;
        let user_agent = user_agent.into();
        if user_agent.trim().is_empty() {
            return Err(ConfigError::BlankUserAgent("user agent"));
        }
        Ok(Self { routes, user_agent })
    }

    /// Reads `ITEMCHECK_BASE_URL` and `ITEMCHECK_USER_AGENT`, falling back
    /// to the defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let routes = match lookup(BASE_URL_VAR) {
            Some(value) => parse_base_url(BASE_URL_VAR, &value)?,
            None => parse_base_url("default base URL", DEFAULT_BASE_URL)?,
        };
        let user_agent = match lookup(USER_AGENT_VAR) {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::BlankUserAgent(USER_AGENT_VAR));
            }
            Some(value) => value,
            None => default_user_agent(),
        };
        Ok(Self { routes, user_agent })
    }

    /// Base URL all endpoints hang off.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        self.routes.base()
    }

    /// Endpoint routes rooted at the base URL.
    #[must_use]
    pub const fn routes(&self) -> &ItemRoutes {
        &self.routes
    }

    /// `User-Agent` sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// `itemcheck/<crate version>`
#[must_use]
pub fn default_user_agent() -> String {
    format!("itemcheck/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_base_url(var: &'static str, value: &str) -> Result<ItemRoutes, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        var,
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value.trim()).map_err(|e| invalid(e.to_string()))?;
    ItemRoutes::new(url).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url().as_str(), "https://qa-internship.avito.com/");
        assert!(config.user_agent().starts_with("itemcheck/"));
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "http://127.0.0.1:8080/prefix"),
            (USER_AGENT_VAR, "qa-bot/2"),
        ]))
        .unwrap();

        assert_eq!(config.base_url().as_str(), "http://127.0.0.1:8080/prefix");
        assert_eq!(config.user_agent(), "qa-bot/2");
        assert_eq!(
            config.routes().create().as_str(),
            "http://127.0.0.1:8080/prefix/api/1/item"
        );
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = ClientConfig::from_lookup(lookup(&[(BASE_URL_VAR, "ftp://example.com")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidBaseUrl { var: BASE_URL_VAR, .. }
        ));
    }

    #[test]
    fn test_rejects_unparseable_base_url() {
        let err = ClientConfig::from_lookup(lookup(&[(BASE_URL_VAR, "not a url")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid ITEMCHECK_BASE_URL 'not a url'"));
    }

    #[test]
    fn test_rejects_blank_user_agent() {
        let err = ClientConfig::from_lookup(lookup(&[(USER_AGENT_VAR, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::BlankUserAgent(USER_AGENT_VAR));
        assert!(ClientConfig::new(DEFAULT_BASE_URL, "").is_err());
    }
}
