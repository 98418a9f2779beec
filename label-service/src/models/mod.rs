pub mod json;
pub mod label;

pub use json::{bson_to_json, document_to_json};
pub use label::{Label, OrderHeader};
