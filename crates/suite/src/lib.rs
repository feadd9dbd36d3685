//! itemcheck Suite - Wiring for the contract tests
//!
//! Connects configuration, the reqwest adapter and the `ItemApi` use case.
//!
//! # Running Tests
//!
//! ```bash
//! # Offline contract tests against a local mock server
//! cargo test -p itemcheck-suite
//!
//! # Live scenarios against ITEMCHECK_BASE_URL (default: the QA service)
//! cargo test -p itemcheck-suite -- --ignored
//! ```

use std::sync::Arc;

use itemcheck_application::{HttpClientError, ItemApi};
use itemcheck_infrastructure::{ClientConfig, ConfigError, ReqwestHttpClient, telemetry};
use thiserror::Error;
use tracing::info;

pub use itemcheck_application::scenarios::{
    self, create_and_fetch_by_id, create_and_fetch_statistics, create_and_list_by_seller,
    create_item, fixtures,
};

/// The item API client used by the suite.
pub type SuiteApi = ItemApi<ReqwestHttpClient>;

/// Errors raised while wiring the suite together.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] HttpClientError),
}

/// Builds an API client for `config`.
///
/// # Errors
///
/// Returns `SuiteError::Client` if the HTTP client cannot be built.
pub fn api_for(config: &ClientConfig) -> Result<SuiteApi, SuiteError> {
    let client = ReqwestHttpClient::new(config.user_agent())?;
    Ok(ItemApi::new(Arc::new(client), config.routes().clone()))
}

/// Builds an API client from the environment and installs logging.
///
/// # Errors
///
/// Returns `SuiteError` if configuration is invalid or the client cannot
/// be built.
pub fn live_api() -> Result<SuiteApi, SuiteError> {
    telemetry::init();
    let config = ClientConfig::from_env()?;
    info!(base_url = %config.base_url(), user_agent = config.user_agent(), "live target");
    api_for(&config)
}
