//! # docs-nav
//!
//! Sidebar navigation for documentation sites, plus a small static generator
//! that puts it to work. The filesystem is the data source: directories become
//! categories, markdown files become pages, and numeric prefixes set the order.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      docs/     →  manifest.json   (filesystem → category index)
//! 2. Generate  manifest  →  dist/           (static HTML with the sidebar)
//! ```
//!
//! The manifest is plain JSON so it can be inspected between stages, and both
//! stages are functions from data to data that tests exercise directly.
//!
//! # Navigation Model
//!
//! The sidebar is recomputed from scratch for every route. Nothing is cached
//! and nothing is global: the category index, base segment and fallback link
//! travel together in a [`types::SidebarContext`] that callers pass in.
//!
//! ```rust
//! use docs_nav::nav::compose_nav;
//! use docs_nav::types::{CategoryMap, PageDescriptor, SidebarContext};
//!
//! let mut pages = CategoryMap::new();
//! pages.insert(
//!     "01-getting-started".to_string(),
//!     vec![
//!         PageDescriptor::new("01-installation", "Installation", true),
//!         PageDescriptor::new("02-upgrading", "Upgrading", false),
//!     ],
//! );
//! let ctx = SidebarContext::new("docs", pages);
//!
//! let groups = compose_nav(&ctx, "/docs/01-getting-started/01-installation");
//! assert_eq!(groups[0].label, "Getting Started");
//! assert_eq!(groups[0].items.len(), 1);
//! assert!(groups[0].items[0].is_active);
//! assert_eq!(groups[0].items[0].as_path, "/docs/installation");
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `NN-kebab-name` keys: prefix stripping and title-case labels |
//! | [`types`] | Page descriptors, category index, fallback link, link targets |
//! | [`nav`] | Per-page resolution and category group composition |
//! | [`top_level`] | Fixed section links and their active rules |
//! | [`render`] | Maud rendering of the sidebar layout |
//! | [`config`] | `config.toml` loading, merging and validation |
//! | [`scan`] | Stage 1: docs directory → manifest |
//! | [`generate`] | Stage 2: manifest → static HTML |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Link targets are decided once
//!
//! Internal routes and external URLs are different variants of
//! [`types::LinkTarget`], chosen when a link is built. Rendering matches on
//! the variant instead of re-testing the href.
//!
//! ## Unpublished pages
//!
//! Without a fallback link, unpublished pages are hidden and a category with
//! nothing published disappears. With one, every page is listed and the
//! unpublished ones point at the fallback.
//!
//! ## Slug-based active state
//!
//! A page is active when the last route segment equals its slug. Two
//! categories sharing a slug are then both highlighted; setting
//! `nav.active_match = "category"` also checks the category segment.

pub mod config;
pub mod generate;
pub mod naming;
pub mod nav;
pub mod output;
pub mod render;
pub mod scan;
pub mod top_level;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
