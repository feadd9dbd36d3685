//! itemcheck Domain - Core types
//!
//! This crate defines the records exchanged with the item API and the
//! verification vocabulary used by the scenarios.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod item;
pub mod request;
pub mod response;
pub mod state;
pub mod status;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use item::{ItemId, ItemRequest, ItemResponse, Statistics};
pub use state::ScenarioState;
pub use status::{STATUS_SEPARATOR, StatusMessage};
pub use testing::{Assertion, AssertionResult, StatusExpectation, TestResults};
