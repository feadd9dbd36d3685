//! Request encoding and response decoding.
//!
//! The item API answers some endpoints with more than one JSON shape.
//! Each decoder tries the shapes in a fixed order and reports a
//! `FormatError` only when none of them fits.

mod decode;
mod json;

pub use decode::{
    CreateResponse, FormatError, StatisticsPayload, decode_created, decode_items,
    decode_statistics,
};
pub use json::{SerializationError, encode_item, to_json_bytes};
