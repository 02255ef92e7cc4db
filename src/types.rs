//! Shared types for navigation resolution.
//!
//! The category index is serialized into the scan manifest and read back by
//! the generate stage, so everything here round-trips through JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A documentation page as seen by the navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Raw page key including any ordering prefix (`01-installation`).
    pub slug: String,
    /// Link text.
    pub title: String,
    /// Unpublished pages are hidden, or redirected to the fallback link.
    pub published: bool,
}

impl PageDescriptor {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, published: bool) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            published,
        }
    }
}

/// Category key → pages. Insertion order is display order.
pub type CategoryMap = IndexMap<String, Vec<PageDescriptor>>;

/// Target substituted for unpublished pages.
///
/// Configuring one also opts into listing unpublished pages at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackLink {
    /// Route the link resolves to.
    pub href: String,
    /// Path shown to the visitor.
    #[serde(rename = "as")]
    pub as_path: String,
}

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkTarget {
    /// Route inside the site, with the path the visitor sees.
    Internal { href: String, as_path: String },
    /// Absolute `http(s)://` URL.
    External { url: String },
}

impl LinkTarget {
    /// Classify an href once. `as_path` defaults to `href` for internal links.
    pub fn parse(href: &str, as_path: Option<&str>) -> Self {
        if href.starts_with("http://") || href.starts_with("https://") {
            LinkTarget::External {
                url: href.to_string(),
            }
        } else {
            LinkTarget::Internal {
                href: href.to_string(),
                as_path: as_path.unwrap_or(href).to_string(),
            }
        }
    }

    /// The URL an anchor should carry.
    pub fn anchor_href(&self) -> &str {
        match self {
            LinkTarget::Internal { as_path, .. } => as_path,
            LinkTarget::External { url } => url,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, LinkTarget::External { .. })
    }
}

/// How strictly a page link is matched against the current route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveMatch {
    /// Last route segment equals the raw slug.
    #[default]
    Slug,
    /// As `Slug`, and the segment before it equals the category key.
    Category,
}

/// Everything the sidebar needs besides the current route.
///
/// Passed explicitly to the composer and the layout renderer.
#[derive(Debug, Clone, Default)]
pub struct SidebarContext {
    /// URL segment the docs live under (`docs`).
    pub base: String,
    pub pages: CategoryMap,
    pub fallback_link: Option<FallbackLink>,
    pub active_match: ActiveMatch,
}

impl SidebarContext {
    pub fn new(base: impl Into<String>, pages: CategoryMap) -> Self {
        Self {
            base: base.into(),
            pages,
            fallback_link: None,
            active_match: ActiveMatch::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackLink) -> Self {
        self.fallback_link = Some(fallback);
        self
    }

    pub fn with_active_match(mut self, active_match: ActiveMatch) -> Self {
        self.active_match = active_match;
        self
    }
}
