//! Configuration discovery and effective settings resolution.
//!
//! drawlint reads `drawlint.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags. Defaults:
//! - `variant`: `debug`
//! - `output`: `human`
//! - `events.patterns`: `build/drawlint/*.json`
//! - every detector category enabled, no custom patterns, no exclusions
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::rules::DetectorToggles;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// `[exclude]` section: glob patterns gating which classes are analyzed.
pub struct ExcludeCfg {
    #[serde(default)]
    pub packages: Vec<String>,
    #[serde(default)]
    pub classes: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// `[detectors]` section: per-category toggles plus custom call patterns.
pub struct DetectorsCfg {
    #[serde(flatten)]
    pub toggles: Option<DetectorToggles>,
    #[serde(default)]
    pub custom_patterns: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// `[events]` section: where the bytecode walker drops its dumps.
pub struct EventsCfg {
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `drawlint.toml|yaml`.
pub struct DrawlintConfig {
    pub variant: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub exclude: Option<ExcludeCfg>,
    #[serde(default)]
    pub detectors: Option<DetectorsCfg>,
    #[serde(default)]
    pub events: Option<EventsCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub variant: String,
    pub output: String,
    pub event_patterns: Vec<String>,
    pub exclude_packages: Vec<String>,
    pub exclude_classes: Vec<String>,
    pub toggles: DetectorToggles,
    pub custom_patterns: Vec<String>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `drawlint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("drawlint.toml").exists()
            || cur.join("drawlint.yaml").exists()
            || cur.join("drawlint.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `DrawlintConfig` from `drawlint.toml` or `drawlint.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<DrawlintConfig> {
    let toml_path = root.join("drawlint.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: DrawlintConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["drawlint.yaml", "drawlint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: DrawlintConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_variant: Option<&str>,
    cli_output: Option<&str>,
    cli_events: &[String],
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let variant = cli_variant
        .map(|s| s.to_string())
        .or(cfg.variant)
        .unwrap_or_else(|| "debug".to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let event_patterns = if !cli_events.is_empty() {
        cli_events.to_vec()
    } else {
        cfg.events
            .as_ref()
            .map(|e| e.patterns.clone())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| vec!["build/drawlint/*.json".to_string()])
    };

    let exclude = cfg.exclude.unwrap_or_default();
    let detectors = cfg.detectors.unwrap_or_default();

    Effective {
        repo_root,
        variant,
        output,
        event_patterns,
        exclude_packages: exclude.packages,
        exclude_classes: exclude.classes,
        toggles: detectors.toggles.unwrap_or_default(),
        custom_patterns: detectors.custom_patterns,
    }
}
