//! itemcheck Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - The `HttpClient` port
//! - Request encoding, endpoint routing and response decoding
//! - The `ItemApi` use case
//! - The verification layer and the canonical scenarios

pub mod codec;
pub mod error;
pub mod item_api;
pub mod ports;
pub mod routes;
pub mod scenario;
pub mod scenarios;
pub mod verify;

pub use codec::{CreateResponse, FormatError, SerializationError, StatisticsPayload};
pub use error::{ApplicationError, ApplicationResult};
pub use item_api::{ItemApi, Reply};
pub use ports::{HttpClient, HttpClientError};
pub use routes::ItemRoutes;
pub use scenario::{ScenarioReport, ScenarioRun};
pub use verify::Verifier;
