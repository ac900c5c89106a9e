//! Turning SOURCE arguments into parameter sources.

use anyhow::{Context, Result};
use urlq_core::config::UrlqConfig;
use urlq_core::{ParamSource, ParamValue};

/// Interprets one SOURCE argument by its first character:
/// `@name` is a preset, `{` or `[` is JSON, anything else is query text.
pub(crate) fn parse_source(arg: &str, cfg: &UrlqConfig) -> Result<ParamSource> {
    if let Some(name) = arg.strip_prefix('@') {
        return cfg
            .preset(name)
            .with_context(|| format!("unknown preset: {name}"));
    }
    if arg.starts_with('{') || arg.starts_with('[') {
        return ParamSource::from_json(arg).with_context(|| format!("JSON source: {arg}"));
    }
    Ok(ParamSource::query(arg))
}

/// All sources in argument order, followed by one removal source for `unset`.
pub(crate) fn collect_sources(
    args: &[String],
    unset: &[String],
    cfg: &UrlqConfig,
) -> Result<Vec<ParamSource>> {
    let mut sources = args
        .iter()
        .map(|arg| parse_source(arg, cfg))
        .collect::<Result<Vec<_>>>()?;
    if !unset.is_empty() {
        sources.push(ParamSource::pairs(
            unset.iter().map(|key| (key.as_str(), ParamValue::Null)),
        ));
    }
    Ok(sources)
}
