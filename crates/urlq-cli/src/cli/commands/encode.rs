//! `urlq encode [source]...` – sources as a query string.

use anyhow::Result;
use urlq_core::config::UrlqConfig;
use urlq_core::encode_query;

use super::sources::collect_sources;

pub fn run_encode(cfg: &UrlqConfig, args: &[String], unset: &[String]) -> Result<String> {
    let sources = collect_sources(args, unset, cfg)?;
    Ok(encode_query(sources))
}
