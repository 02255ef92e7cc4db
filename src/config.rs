//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The stock defaults
//! are serialized to a TOML value and the user's file is deep-merged on top,
//! so a config file only needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! ```text
//! docs/
//! ├── config.toml              # Site config (optional)
//! ├── 01-getting-started/
//! │   └── 01-installation.md
//! └── 02-core-concepts/
//!     └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! base = "docs"                  # URL segment the docs live under
//!
//! [fallback_link]                # Optional. Lists unpublished pages, linking here
//! href = "/docs/coming-soon"
//! as = "/docs/coming-soon"
//!
//! [nav]
//! active_match = "slug"          # "slug" | "category"
//!
//! [versions]
//! current = "v1.9"
//! available = [{ label = "v1.9", href = "/" }]
//!
//! [layout]
//! title = "Documentation"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::{ActiveMatch, CategoryMap, FallbackLink, SidebarContext};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// URL segment every docs page lives under.
    pub base: String,
    /// Target for unpublished pages. Setting it also lists them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_link: Option<FallbackLink>,
    /// Active-state matching.
    pub nav: NavConfig,
    /// Version switcher entries.
    pub versions: VersionsConfig,
    /// Page chrome.
    pub layout: LayoutConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base: "docs".to_string(),
            fallback_link: None,
            nav: NavConfig::default(),
            versions: VersionsConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate values that the type system can't.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base.is_empty() || self.base.contains('/') {
            return Err(ConfigError::Validation(
                "base must be a single non-empty path segment".into(),
            ));
        }
        if let Some(fallback) = &self.fallback_link {
            if !fallback.href.starts_with('/') || !fallback.as_path.starts_with('/') {
                return Err(ConfigError::Validation(
                    "fallback_link.href and fallback_link.as must start with '/'".into(),
                ));
            }
        }
        if let Some(current) = &self.versions.current {
            if !self.versions.available.is_empty()
                && !self.versions.available.iter().any(|v| &v.label == current)
            {
                return Err(ConfigError::Validation(format!(
                    "versions.current '{current}' is not listed in versions.available"
                )));
            }
        }
        Ok(())
    }

    /// Bundle this config with a category index for the composer.
    pub fn sidebar_context(&self, pages: CategoryMap) -> SidebarContext {
        let ctx = SidebarContext::new(self.base.clone(), pages)
            .with_active_match(self.nav.active_match);
        match &self.fallback_link {
            Some(fallback) => ctx.with_fallback(fallback.clone()),
            None => ctx,
        }
    }
}

/// Navigation matching settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// `slug` compares only the last route segment; `category` also requires
    /// the segment before it to be the page's category.
    pub active_match: ActiveMatch,
}

/// Version switcher settings. Nothing is rendered when `available` is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VersionsConfig {
    /// Label of the version being built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    pub available: Vec<VersionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionEntry {
    pub label: String,
    pub href: String,
}

/// Page chrome settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Suffix for every `<title>` and the home page heading.
    pub title: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// `Ok(None)` when the file doesn't exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the docs root.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Fully-commented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# docs-nav configuration
# ======================
# All settings are optional. Values shown are the defaults.
# Unknown keys cause an error.

# URL segment the docs live under. Pages resolve to
#   /{base}/{category}/{slug}   (canonical route)
#   /{base}/{slug}              (visitor-facing path, order prefix stripped)
base = "docs"

# ---------------------------------------------------------------------------
# Fallback link
# ---------------------------------------------------------------------------
# When set, unpublished pages are listed in the sidebar and link here.
# When absent, unpublished pages are hidden and categories without a
# published page are dropped.
# [fallback_link]
# href = "/docs/coming-soon"
# as = "/docs/coming-soon"

# ---------------------------------------------------------------------------
# Navigation
# ---------------------------------------------------------------------------
[nav]
# "slug":     a page is active when the last route segment equals its slug.
# "category": additionally require the segment before it to be the category.
active_match = "slug"

# ---------------------------------------------------------------------------
# Version switcher
# ---------------------------------------------------------------------------
[versions]
# current = "v1.9"
# available = [
#   { label = "v1.9", href = "/" },
#   { label = "v0.7", href = "https://v0.example.com" },
# ]
available = []

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[layout]
title = "Documentation"
"##
}
