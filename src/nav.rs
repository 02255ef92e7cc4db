//! Category navigation: per-page resolution and sidebar composition.
//!
//! Everything here is a pure function of the current route and a
//! [`SidebarContext`]. Results are recomputed on every call; nothing is cached
//! and no input is mutated.
//!
//! ## Resolution
//!
//! A page `01-installation` in category `01-getting-started` under base `docs`
//! resolves to:
//!
//! ```text
//! href     /docs/01-getting-started/01-installation   (canonical route)
//! as_path  /docs/installation                         (what the visitor sees)
//! ```
//!
//! Unpublished pages take both paths from the fallback link when one is set.
//!
//! ## Composition
//!
//! Categories are emitted in map order. Without a fallback link only published
//! pages are listed and a category left empty is dropped. With a fallback link
//! every page is listed.

use crate::naming::{display_label, remove_order_prefix};
use crate::types::{ActiveMatch, FallbackLink, PageDescriptor, SidebarContext};
use serde::Serialize;

/// Visual state of a page link. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStyle {
    Active,
    Published,
    Unpublished,
}

impl LinkStyle {
    /// Active wins over the publish state.
    pub fn from_state(is_active: bool, is_published: bool) -> Self {
        match (is_active, is_published) {
            (true, _) => LinkStyle::Active,
            (false, true) => LinkStyle::Published,
            (false, false) => LinkStyle::Unpublished,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            LinkStyle::Active => "text-teal-600 font-medium",
            LinkStyle::Published => {
                "hover:translate-x-2px hover:text-gray-900 text-gray-600 font-medium"
            }
            LinkStyle::Unpublished => "hover:translate-x-2px text-gray-400 font-medium",
        }
    }
}

/// A page link ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNavItem {
    pub slug: String,
    pub title: String,
    pub href: String,
    pub as_path: String,
    pub is_active: bool,
    pub is_published: bool,
    pub style: LinkStyle,
}

/// A labelled category with its resolved links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Raw category key.
    pub key: String,
    /// Display heading.
    pub label: String,
    /// False when every listed page is unpublished (muted heading).
    pub has_published: bool,
    pub items: Vec<ResolvedNavItem>,
}

/// Canonical route of a page: `/{base}/{category}/{slug}`.
pub fn canonical_href(base: &str, category: &str, slug: &str) -> String {
    format!("/{base}/{category}/{slug}")
}

/// Visitor-facing path of a page: `/{base}/{slug without prefix}`.
pub fn display_path(base: &str, slug: &str) -> String {
    format!("/{base}/{}", remove_order_prefix(slug))
}

/// Split a route into its `/`-separated segments.
///
/// Trailing slashes are ignored so `/docs/a/` and `/docs/a` match alike.
fn route_segments(route: &str) -> impl DoubleEndedIterator<Item = &str> {
    route.trim_end_matches('/').split('/')
}

/// Does `route` point at this page?
pub fn is_active(route: &str, category: &str, slug: &str, active_match: ActiveMatch) -> bool {
    let mut segments = route_segments(route);
    if segments.next_back() != Some(slug) {
        return false;
    }
    match active_match {
        ActiveMatch::Slug => true,
        ActiveMatch::Category => segments.next_back() == Some(category),
    }
}

/// Resolve one page against the current route.
pub fn resolve_nav_item(
    route: &str,
    page: &PageDescriptor,
    category: &str,
    base: &str,
    fallback: Option<&FallbackLink>,
    active_match: ActiveMatch,
) -> ResolvedNavItem {
    let (href, as_path) = match fallback {
        Some(fallback) if !page.published => (fallback.href.clone(), fallback.as_path.clone()),
        _ => (
            canonical_href(base, category, &page.slug),
            display_path(base, &page.slug),
        ),
    };
    let is_active = is_active(route, category, &page.slug, active_match);

    ResolvedNavItem {
        slug: page.slug.clone(),
        title: page.title.clone(),
        href,
        as_path,
        is_active,
        is_published: page.published,
        style: LinkStyle::from_state(is_active, page.published),
    }
}

/// Build the category groups for `route`.
pub fn compose_nav(ctx: &SidebarContext, route: &str) -> Vec<NavGroup> {
    let fallback = ctx.fallback_link.as_ref();

    ctx.pages
        .iter()
        .filter_map(|(category, pages)| {
            let has_published = pages.iter().any(|p| p.published);
            if !has_published && fallback.is_none() {
                return None;
            }

            let items = pages
                .iter()
                .filter(|p| p.published || fallback.is_some())
                .map(|p| resolve_nav_item(route, p, category, &ctx.base, fallback, ctx.active_match))
                .collect();

            Some(NavGroup {
                key: category.clone(),
                label: display_label(category),
                has_published,
                items,
            })
        })
        .collect()
}

/// First published page in map order, with its category key.
pub fn first_published_page(ctx: &SidebarContext) -> Option<(&str, &PageDescriptor)> {
    ctx.pages.iter().find_map(|(category, pages)| {
        pages
            .iter()
            .find(|p| p.published)
            .map(|page| (category.as_str(), page))
    })
}

/// The active page across all groups, if any.
pub fn active_item(groups: &[NavGroup]) -> Option<&ResolvedNavItem> {
    groups
        .iter()
        .flat_map(|g| g.items.iter())
        .find(|item| item.is_active)
}
