//! Docs directory scanning and manifest generation.
//!
//! Stage 1 of the build. Walks the docs root to discover categories and pages,
//! producing a [`Manifest`] the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! docs/                            # Docs root
//! ├── config.toml                  # Site configuration (optional)
//! ├── assets/                      # Ignored by the scanner
//! ├── 01-getting-started/          # Category (prefix = display order)
//! │   ├── 01-installation.md       # Page (prefix = display order)
//! │   └── 02-release-notes.md
//! └── 02-core-concepts/
//!     ├── 01-utility-first.md
//!     └── 02-responsive-design.md
//! ```
//!
//! ## Pages
//!
//! A page may start with TOML front matter between `+++` lines:
//!
//! ```text
//! +++
//! title = "Responsive Design"
//! published = false
//! +++
//! # Responsive Design
//! ...
//! ```
//!
//! Title resolution (first available wins): front matter `title`, first
//! `# heading`, slug label (`02-responsive-design` → "Responsive Design").
//! Pages are published unless the front matter says otherwise.

use crate::config::{self, SiteConfig};
use crate::naming::{display_label, split_order_prefix};
use crate::types::{CategoryMap, PageDescriptor};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid front matter in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Docs root is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub categories: Vec<Category>,
    pub config: SiteConfig,
}

impl Manifest {
    /// The navigation's view of the scanned pages.
    pub fn category_map(&self) -> CategoryMap {
        self.categories
            .iter()
            .map(|c| (c.key.clone(), c.pages.iter().map(Page::descriptor).collect()))
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.categories.iter().map(|c| c.pages.len()).sum()
    }
}

/// A category directory and its pages in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Directory name, prefix included.
    pub key: String,
    pub pages: Vec<Page>,
}

/// A markdown page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// File stem, prefix included.
    pub slug: String,
    pub title: String,
    pub published: bool,
    /// Path relative to the docs root.
    pub source_path: String,
    /// Markdown with front matter removed.
    pub body: String,
}

impl Page {
    pub fn descriptor(&self) -> PageDescriptor {
        PageDescriptor::new(&self.slug, &self.title, self.published)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FrontMatter {
    title: Option<String>,
    published: Option<bool>,
}

const SKIPPED_DIRS: &[&str] = &["assets"];

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut categories = Vec::new();
    for dir in sorted_entries(root, |p| p.is_dir())? {
        let key = file_name(&dir);
        if SKIPPED_DIRS.contains(&key.as_str()) {
            continue;
        }
        categories.push(scan_category(&dir, root, key)?);
    }

    // Load site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;

    Ok(Manifest { categories, config })
}

fn scan_category(dir: &Path, root: &Path, key: String) -> Result<Category, ScanError> {
    let markdown = sorted_entries(dir, |p| {
        p.is_file()
            && p.extension()
                .map(|e| e.eq_ignore_ascii_case("md"))
                .unwrap_or(false)
    })?;

    let pages = markdown
        .iter()
        .map(|path| parse_page(path, root))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Category { key, pages })
}

fn parse_page(path: &Path, root: &Path) -> Result<Page, ScanError> {
    let slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let content = fs::read_to_string(path)?;
    let (front, body) = split_front_matter(&content);

    let front: FrontMatter = match front {
        Some(raw) => toml::from_str(raw).map_err(|source| ScanError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })?,
        None => FrontMatter::default(),
    };

    let title = front
        .title
        .or_else(|| first_heading(body))
        .unwrap_or_else(|| display_label(&slug));

    Ok(Page {
        title,
        published: front.published.unwrap_or(true),
        source_path: relative_path(path, root),
        body: body.to_string(),
        slug,
    })
}

/// Split `+++`-delimited front matter from the body.
///
/// Both delimiters must be whole lines. Content without an opening and
/// closing delimiter has no front matter.
fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("+++\n")
        .or_else(|| content.strip_prefix("+++\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "+++" {
            let front = rest[..offset].trim_end_matches(['\r', '\n']);
            return (Some(front), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, content)
}

/// Text of the first level-one heading, ignoring `#` lines in code blocks.
fn first_heading(body: &str) -> Option<String> {
    let mut heading: Option<String> = None;
    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => heading = Some(String::new()),
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = heading.as_mut() {
                    heading.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = heading.take().unwrap_or_default();
                let title = title.trim();
                if !title.is_empty() {
                    return Some(title.to_string());
                }
            }
            _ => {}
        }
    }
    None
}

/// Immediate children of `dir` matching `keep`, in display order: numbered
/// entries by number, then unnumbered ones by name.
fn sorted_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>, ScanError> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') || name == "config.toml" {
            continue;
        }
        if keep(entry.path()) {
            entries.push(entry.into_path());
        }
    }

    entries.sort_by_cached_key(|p| {
        let name = file_name(p);
        (split_order_prefix(&name).order.unwrap_or(u32::MAX), name)
    });
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn relative_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
