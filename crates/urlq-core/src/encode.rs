//! Query-only encoding of parameter sources.

use crate::params::{ParamSource, QueryParams};

/// Applies `sources` to an empty collection and returns the encoded query,
/// without a leading `?`. Returns an empty string when nothing survives.
pub fn encode_query<I>(sources: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ParamSource>,
{
    let mut params = QueryParams::new();
    for source in sources {
        params.apply_source(source.into());
    }
    params.to_query_string()
}
