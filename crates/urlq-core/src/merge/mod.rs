//! URL parameter merging.
//!
//! Seeds a [`QueryParams`] from the base URL's own query, applies every
//! source in argument order, and reattaches the result to the base. The
//! base keeps its form: absolute stays absolute, relative comes back as
//! path + query + fragment.

mod base;
mod error;

pub use base::{is_absolute, BaseUrl};
pub use error::MergeError;

use crate::params::{ParamSource, QueryParams};
use base::WorkingUrl;

/// Merges `sources` into the query of `base` and returns the new URL.
///
/// For a key set by several sources the last non-removal value wins, but
/// the key stays at its first-seen position. A removal marker drops the
/// key even if the base or an earlier source set it. The fragment is kept
/// and always follows the query.
///
/// # Examples
///
/// - `merge_url_params("/page#section1", ["q=test"])` → `"/page?q=test#section1"`
/// - `merge_url_params("https://google.com/?q=foo", ["q=bar"])` → `"https://google.com/?q=bar"`
pub fn merge_url_params<'a, B, I>(base: B, sources: I) -> Result<String, MergeError>
where
    B: Into<BaseUrl<'a>>,
    I: IntoIterator,
    I::Item: Into<ParamSource>,
{
    let working = WorkingUrl::parse(base.into())?;
    let mut params = QueryParams::parse(working.query().unwrap_or(""));
    let seeded = params.len();

    let mut applied = 0usize;
    for source in sources {
        params.apply_source(source.into());
        applied += 1;
    }

    let query = params.to_query_string();
    tracing::debug!(
        "merged {} source(s) into {} base param(s); {} param(s) in result",
        applied,
        seeded,
        params.len()
    );
    Ok(working.finish(&query))
}
