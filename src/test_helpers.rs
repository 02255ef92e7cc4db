//! Shared test utilities for the docs-nav test suite.
//!
//! Fixture setup plus lookup helpers over scan-phase data (`Manifest`,
//! `Category`, `Page`) and composed navigation (`NavGroup`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let page = find_page(&manifest, "02-core-concepts", "03-dark-mode");
//! assert!(!page.published);
//!
//! assert_category_shape(&manifest, "01-getting-started", &[
//!     ("01-installation", true),
//!     ("02-release-notes", true),
//! ]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::nav::NavGroup;
use crate::scan::{Category, Manifest, Page};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/docs/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups (panic with a clear message on miss)
// =========================================================================

/// Find a category by key. Panics if not found.
pub fn find_category<'a>(manifest: &'a Manifest, key: &str) -> &'a Category {
    manifest
        .categories
        .iter()
        .find(|c| c.key == key)
        .unwrap_or_else(|| {
            let keys = category_keys(manifest);
            panic!("category '{key}' not found. Available: {keys:?}")
        })
}

/// Find a page by category key and slug. Panics if not found.
pub fn find_page<'a>(manifest: &'a Manifest, category: &str, slug: &str) -> &'a Page {
    let cat = find_category(manifest, category);
    cat.pages.iter().find(|p| p.slug == slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = cat.pages.iter().map(|p| p.slug.as_str()).collect();
        panic!("page '{slug}' not found in '{category}'. Available: {slugs:?}")
    })
}

/// All category keys in manifest order.
pub fn category_keys(manifest: &Manifest) -> Vec<&str> {
    manifest.categories.iter().map(|c| c.key.as_str()).collect()
}

/// Assert a category's pages as `(slug, published)` pairs, in order.
pub fn assert_category_shape(manifest: &Manifest, key: &str, expected: &[(&str, bool)]) {
    let actual: Vec<(&str, bool)> = find_category(manifest, key)
        .pages
        .iter()
        .map(|p| (p.slug.as_str(), p.published))
        .collect();
    assert_eq!(actual, expected.to_vec(), "pages of '{key}' mismatch");
}

// =========================================================================
// Navigation helpers
// =========================================================================

/// Group labels in display order.
pub fn group_labels(groups: &[NavGroup]) -> Vec<&str> {
    groups.iter().map(|g| g.label.as_str()).collect()
}

/// Item titles of the group with `label`. Panics if not found.
pub fn group_item_titles<'a>(groups: &'a [NavGroup], label: &str) -> Vec<&'a str> {
    groups
        .iter()
        .find(|g| g.label == label)
        .map(|g| g.items.iter().map(|i| i.title.as_str()).collect())
        .unwrap_or_else(|| {
            let labels = group_labels(groups);
            panic!("group '{label}' not found. Available: {labels:?}")
        })
}
