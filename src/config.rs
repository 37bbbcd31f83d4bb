//! Configuration discovery and effective settings resolution.
//!
//! The auditor reads `rerender.toml|yaml|yml` from the closest ancestor of
//! the scan target (stopping at a `.git` directory) and merges it with CLI
//! flags to produce an `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `strict`: false
//! - `exclude`: none beyond the built-in directory list
//! - `[complexity]`: 250/150 lines, 10/7 props, 5/3 `useState` calls
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::detectors::ComplexityLimits;
use crate::error::AuditError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_NAMES: [&str; 3] = ["rerender.toml", "rerender.yaml", "rerender.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `rerender.toml|yaml`.
pub struct AuditConfig {
    pub output: Option<String>,
    pub strict: Option<bool>,
    #[serde(default)]
    pub exclude: Vec<String>,
    pub complexity: Option<ComplexityLimits>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the binary after applying precedence.
pub struct Effective {
    /// Directory the config was searched from (or found in)
    pub config_root: PathBuf,
    pub json: bool,
    pub strict: bool,
    pub exclude: Vec<String>,
    pub limits: ComplexityLimits,
}

/// Walk upward from `start` to the directory holding a config file.
///
/// Stops when a `rerender.toml|yaml|yml` or a `.git` directory is found;
/// otherwise returns `start`.
pub fn detect_config_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).is_file()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `AuditConfig` from `rerender.toml` or `rerender.yaml|yml` if present.
pub fn load_config(root: &Path) -> Result<Option<AuditConfig>, AuditError> {
    let toml_path = root.join("rerender.toml");
    if toml_path.is_file() {
        let s = read(&toml_path)?;
        let cfg = toml::from_str(&s).map_err(|e| AuditError::Config {
            path: toml_path.clone(),
            message: e.to_string(),
        })?;
        return Ok(Some(cfg));
    }
    for yml in ["rerender.yaml", "rerender.yml"] {
        let p = root.join(yml);
        if p.is_file() {
            let s = read(&p)?;
            let cfg = serde_yaml::from_str(&s).map_err(|e| AuditError::Config {
                path: p.clone(),
                message: e.to_string(),
            })?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

fn read(path: &Path) -> Result<String, AuditError> {
    fs::read_to_string(path).map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// `cli_json` / `cli_strict` are `Some(true)` only when the flag was passed,
/// so an absent flag falls through to the config file.
pub fn resolve_effective(target: &Path, cli_json: Option<bool>, cli_strict: Option<bool>) -> Effective {
    let start = if target.is_file() {
        target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf()
    } else {
        target.to_path_buf()
    };
    // relative targets like `.` have no parents to walk
    let start = std::path::absolute(&start).unwrap_or(start);
    let config_root = detect_config_root(&start);
    let cfg = match load_config(&config_root) {
        Ok(Some(cfg)) => {
            debug!(root = %config_root.display(), "loaded config");
            cfg
        }
        Ok(None) => AuditConfig::default(),
        Err(e) => {
            warn!("{e}; using defaults");
            AuditConfig::default()
        }
    };

    let json = cli_json
        .or_else(|| cfg.output.as_deref().map(|o| o.eq_ignore_ascii_case("json")))
        .unwrap_or(false);
    let strict = cli_strict.or(cfg.strict).unwrap_or(false);

    Effective {
        config_root,
        json,
        strict,
        exclude: cfg.exclude,
        limits: cfg.complexity.unwrap_or_default(),
    }
}
