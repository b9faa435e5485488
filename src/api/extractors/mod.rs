//! Custom request extractors.

mod json_payload;

pub use json_payload::JsonPayload;
