//! Custom extractors.

mod repositories;
mod validated_json;

pub use validated_json::ValidatedJson;
