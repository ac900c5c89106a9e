//! `urlq presets` – table of configured presets.

use std::fmt::Write;

use anyhow::Result;
use urlq_core::config::UrlqConfig;
use urlq_core::encode_query;

pub fn run_presets(cfg: &UrlqConfig) -> Result<String> {
    if cfg.presets.is_empty() {
        return Ok("No presets configured.".to_string());
    }
    let mut out = format!("{:<16} {}", "NAME", "PARAMS");
    for name in cfg.presets.keys() {
        let params = cfg.preset(name).map(|p| encode_query([p])).unwrap_or_default();
        write!(out, "\n{:<16} {}", format!("@{name}"), params)?;
    }
    Ok(out)
}
