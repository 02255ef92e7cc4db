//! CLI output formatting for all commands.
//!
//! Output is information-first: each entity leads with its positional index
//! and title, with source paths and state shown as indented context lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Categories
//! 001 Getting Started (2 pages)
//!     Source: 01-getting-started/
//!     001 Installation
//!         Source: 01-getting-started/01-installation.md
//!     002 Release Notes
//!         Source: 01-getting-started/02-release-notes.md
//! 003 Upcoming (1 page, 1 unpublished)
//!     Source: 03-upcoming/
//!     001 Writing Plugins (unpublished)
//!         Source: 03-upcoming/01-plugins.md
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 Installation → docs/installation/index.html
//!
//! Skipped (unpublished)
//!     03-upcoming/01-plugins.md
//!
//! Generated 4 pages, skipped 2
//! ```
//!
//! ## Nav
//!
//! ```text
//! Route /docs/01-getting-started/01-installation
//!     Documentation → /docs/installation  *
//!     Blog → https://blog.tailwindcss.com  (external)
//! Getting Started
//!     Installation → /docs/installation  *
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::GenerateReport;
use crate::naming::display_label;
use crate::nav::{LinkStyle, NavGroup};
use crate::scan::Manifest;
use crate::top_level::TopLevelItem;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format scan output: categories with their pages, then config sources.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];

    for (i, category) in manifest.categories.iter().enumerate() {
        let unpublished = category.pages.iter().filter(|p| !p.published).count();
        let count = if unpublished > 0 {
            format!(
                "{}, {} unpublished",
                plural(category.pages.len(), "page"),
                unpublished
            )
        } else {
            plural(category.pages.len(), "page")
        };
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            display_label(&category.key),
            count
        ));
        lines.push(format!("    Source: {}/", category.key));

        for (j, page) in category.pages.iter().enumerate() {
            let marker = if page.published { "" } else { " (unpublished)" };
            lines.push(format!("    {} {}{}", format_index(j + 1), page.title, marker));
            lines.push(format!("        Source: {}", page.source_path));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    } else {
        lines.push("    (defaults)".to_string());
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format generate output: each written page with its output path.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec!["Home → index.html".to_string()];

    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            page.title,
            page.output_path
        ));
    }

    if !report.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped (unpublished)".to_string());
        for source in &report.skipped {
            lines.push(format!("    {}", source));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, skipped {}",
        plural(report.pages.len(), "page"),
        report.skipped.len()
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Nav output
// ============================================================================

/// Format a resolved sidebar. Active entries are marked with `*`.
pub fn format_nav_output(route: &str, top_level: &[TopLevelItem], groups: &[NavGroup]) -> Vec<String> {
    let mut lines = vec![format!("Route {}", route)];

    for item in top_level {
        let marker = if item.is_active {
            "  *"
        } else if item.target.is_external() {
            "  (external)"
        } else {
            ""
        };
        lines.push(format!(
            "    {} → {}{}",
            item.label,
            item.target.anchor_href(),
            marker
        ));
    }

    for group in groups {
        lines.push(group.label.clone());
        for item in &group.items {
            let marker = match item.style {
                LinkStyle::Active => "  *",
                LinkStyle::Published => "",
                LinkStyle::Unpublished => "  (unpublished)",
            };
            lines.push(format!("    {} → {}{}", item.title, item.as_path, marker));
        }
    }

    lines
}

/// Print a resolved sidebar to stdout.
pub fn print_nav_output(route: &str, top_level: &[TopLevelItem], groups: &[NavGroup]) {
    for line in format_nav_output(route, top_level, groups) {
        println!("{}", line);
    }
}
