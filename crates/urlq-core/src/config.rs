use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::params::{ParamSource, ParamValue};

/// Named parameter sets, kept in document order.
pub type Presets = IndexMap<String, IndexMap<String, ParamValue>>;

/// Global configuration loaded from `~/.config/urlq/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlqConfig {
    /// Presets usable as `@name` sources on the command line.
    #[serde(default)]
    pub presets: Presets,
}

impl Default for UrlqConfig {
    fn default() -> Self {
        let mut paging = IndexMap::new();
        paging.insert("limit".to_string(), ParamValue::Int(50));
        paging.insert("page".to_string(), ParamValue::Int(1));

        let mut presets = Presets::new();
        presets.insert("paging".to_string(), paging);
        Self { presets }
    }
}

impl UrlqConfig {
    /// The named preset as a mapping source, if configured.
    pub fn preset(&self, name: &str) -> Option<ParamSource> {
        self.presets
            .get(name)
            .map(|params| ParamSource::Mapping(params.clone()))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlq")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlqConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlqConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<UrlqConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: UrlqConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_has_paging_preset() {
        let cfg = UrlqConfig::default();
        let names: Vec<&str> = cfg.presets.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["paging"]);
        assert_eq!(
            cfg.preset("paging").unwrap().into_pairs(),
            vec![
                ("limit".to_string(), ParamValue::Int(50)),
                ("page".to_string(), ParamValue::Int(1)),
            ]
        );
        assert!(cfg.preset("missing").is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlqConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        assert!(toml.contains("[presets.paging]"));
        let parsed: UrlqConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.presets, cfg.presets);
    }

    #[test]
    fn config_toml_empty_file() {
        let cfg: UrlqConfig = toml::from_str("").unwrap();
        assert!(cfg.presets.is_empty());
    }

    #[test]
    fn config_toml_presets_keep_document_order() {
        let toml = r#"
            [presets.paging]
            page = 1
            limit = 50

            [presets.debug]
            verbose = true
            ratio = 0.5
            tag = "dev"
        "#;
        let cfg: UrlqConfig = toml::from_str(toml).unwrap();
        let names: Vec<&str> = cfg.presets.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["paging", "debug"]);

        let paging = cfg.preset("paging").unwrap().into_pairs();
        assert_eq!(
            paging,
            vec![
                ("page".to_string(), ParamValue::Int(1)),
                ("limit".to_string(), ParamValue::Int(50)),
            ]
        );

        let debug = &cfg.presets["debug"];
        assert_eq!(debug["verbose"], ParamValue::Bool(true));
        assert_eq!(debug["ratio"], ParamValue::Float(0.5));
        assert_eq!(debug["tag"], ParamValue::Text("dev".to_string()));
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"[presets.p]\nq = \"x\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert!(cfg.preset("p").is_some());
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("read config"));
    }

    #[test]
    fn load_from_invalid_toml_fails() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"presets = 3\n").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());
    }
}
