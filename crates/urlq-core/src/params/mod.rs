//! Parameter data model: primitive values, sources, and the working collection.
//!
//! Every source shape normalizes into an ordered `(key, value)` sequence via
//! [`ParamSource::into_pairs`], which [`QueryParams`] applies with upsert
//! semantics.

mod collection;
mod json;
mod source;
mod value;

pub use collection::QueryParams;
pub use json::SourceError;
pub use source::ParamSource;
pub use value::ParamValue;
