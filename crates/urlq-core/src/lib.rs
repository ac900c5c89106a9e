pub mod config;
pub mod logging;

pub mod encode;
pub mod merge;
pub mod params;

pub use encode::encode_query;
pub use merge::{merge_url_params, BaseUrl, MergeError};
pub use params::{ParamSource, ParamValue, QueryParams, SourceError};
