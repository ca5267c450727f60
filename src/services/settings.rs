use crate::cli::Cli;
use crate::domain::models::{ConfigFile, Settings};
use anyhow::Context;
use std::path::{Path, PathBuf};

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/judgebox/config.toml"))
}

pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(ConfigFile::default()),
        },
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg = toml::from_str(&raw).with_context(|| format!("parse config {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Flags only switch options on; the file supplies the defaults.
pub fn merge(cfg: &ConfigFile, json_flag: bool, strict_flag: bool) -> Settings {
    Settings {
        json: json_flag || cfg.general.json,
        strict: strict_flag || cfg.general.strict,
    }
}

pub fn resolve_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let cfg = load_config(cli.config.as_deref())?;
    Ok(merge(&cfg, cli.json, cli.strict))
}
