//! itemcheck Infrastructure - Adapters and implementations
//!
//! This crate provides the concrete implementation of the `HttpClient`
//! port, environment configuration and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::ReqwestHttpClient;
pub use config::{ClientConfig, ConfigError};
