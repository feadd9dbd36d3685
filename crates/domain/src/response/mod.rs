//! HTTP response types

mod spec;

pub use spec::{BODY_PREVIEW_LIMIT, ResponseSpec, StatusCode, preview};
