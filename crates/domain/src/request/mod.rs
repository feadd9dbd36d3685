//! HTTP request types

mod body;
mod header;
mod method;
mod spec;

pub use body::RequestBody;
pub use header::{ACCEPT, CONTENT_TYPE, Header, Headers, JSON_MEDIA_TYPE};
pub use method::HttpMethod;
pub use spec::RequestSpec;
