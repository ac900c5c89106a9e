//! `urlq merge <base> [source]...` – merge sources into a URL's query.

use anyhow::{Context, Result};
use urlq_core::config::UrlqConfig;
use urlq_core::merge_url_params;

use super::sources::collect_sources;

/// Returns the merged URL.
pub fn run_merge(
    cfg: &UrlqConfig,
    base: &str,
    args: &[String],
    unset: &[String],
) -> Result<String> {
    let sources = collect_sources(args, unset, cfg)?;
    merge_url_params(base, sources).with_context(|| format!("merge into {base}"))
}
