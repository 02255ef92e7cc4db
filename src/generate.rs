//! HTML site generation.
//!
//! Stage 2 of the build. Takes the scan manifest and writes a static page for
//! every published doc, each with the sidebar resolved for that page's route.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Home layout, resolved for route "/"
//! └── docs/
//!     ├── installation/
//!     │   └── index.html         # 01-getting-started/01-installation.md
//!     └── responsive-design/
//!         └── index.html         # 02-core-concepts/02-responsive-design.md
//! ```
//!
//! Pages are written at their display path (order prefix stripped) while the
//! sidebar is resolved against the canonical route
//! `/{base}/{category}/{slug}`. Unpublished pages get no output file.
//!
//! Pages render independently, so the work is spread over the rayon pool.

use crate::config::SiteConfig;
use crate::nav::{canonical_href, display_path, first_published_page};
use crate::render::{LayoutOptions, render_sidebar_layout};
use crate::scan::{Manifest, Page};
use crate::types::SidebarContext;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{first} and {second} both publish to {path}")]
    DuplicateOutput {
        path: String,
        first: String,
        second: String,
    },
}

/// A page written by the generate stage.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    pub title: String,
    /// Route the sidebar was resolved for.
    pub route: String,
    /// Output file relative to the output directory.
    pub output_path: String,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
    /// Source paths of unpublished pages that got no output.
    pub skipped: Vec<String>,
}

struct PagePlan<'a> {
    page: &'a Page,
    route: String,
    output_path: String,
}

const JS: &str = include_str!("../static/sidebar.js");

/// Read a manifest written by the scan stage and generate the site.
pub fn generate(manifest_path: &Path, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_site(&manifest, output_dir)
}

pub fn generate_site(manifest: &Manifest, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let config = &manifest.config;
    let ctx = config.sidebar_context(manifest.category_map());
    let (plans, skipped) = plan_pages(manifest)?;

    fs::create_dir_all(output_dir)?;

    let index_html = render_index(&ctx, config);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;

    let pages = plans
        .par_iter()
        .map(|plan| write_page(plan, &ctx, config, output_dir))
        .collect::<Result<Vec<_>, GenerateError>>()?;

    Ok(GenerateReport { pages, skipped })
}

/// Decide where each published page goes; reject display-path collisions.
fn plan_pages(manifest: &Manifest) -> Result<(Vec<PagePlan<'_>>, Vec<String>), GenerateError> {
    let base = &manifest.config.base;
    let mut plans = Vec::new();
    let mut skipped = Vec::new();
    let mut claimed: HashMap<String, &str> = HashMap::new();

    for category in &manifest.categories {
        for page in &category.pages {
            if !page.published {
                skipped.push(page.source_path.clone());
                continue;
            }
            let display = display_path(base, &page.slug);
            if let Some(first) = claimed.insert(display.clone(), page.source_path.as_str()) {
                return Err(GenerateError::DuplicateOutput {
                    path: display,
                    first: first.to_string(),
                    second: page.source_path.clone(),
                });
            }
            plans.push(PagePlan {
                page,
                route: canonical_href(base, &category.key, &page.slug),
                output_path: format!("{}/index.html", display.trim_start_matches('/')),
            });
        }
    }
    Ok((plans, skipped))
}

fn write_page(
    plan: &PagePlan<'_>,
    ctx: &SidebarContext,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<GeneratedPage, GenerateError> {
    let html = render_doc_page(plan.page, &plan.route, ctx, config);
    let target: PathBuf = output_dir.join(&plan.output_path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, html.into_string())?;

    Ok(GeneratedPage {
        title: plan.page.title.clone(),
        route: plan.route.clone(),
        output_path: plan.output_path.clone(),
    })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body class="antialiased text-gray-900" {
                button id="sidebar-toggle" type="button" class="lg:hidden fixed bottom-0 right-0 z-50 m-4 p-3 rounded-full bg-teal-500 text-white"
                    aria-controls="sidebar" aria-expanded="false" {
                    "Menu"
                }
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

fn markdown_to_html(body: &str) -> String {
    let parser = Parser::new_ext(body, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

fn page_title(title: &str, config: &SiteConfig) -> String {
    format!("{} - {}", title, config.layout.title)
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders one doc page inside the sidebar layout.
fn render_doc_page(page: &Page, route: &str, ctx: &SidebarContext, config: &SiteConfig) -> Markup {
    let content = html! {
        main class="w-full px-6 pt-12 pb-16 lg:px-12" {
            article class="markdown" {
                (PreEscaped(markdown_to_html(&page.body)))
            }
        }
    };

    let layout = render_sidebar_layout(
        ctx,
        route,
        &config.versions,
        LayoutOptions::default(),
        content,
    );
    base_document(&page_title(&page.title, config), layout)
}

/// Renders the home page: the home layout variant resolved for `/`.
fn render_index(ctx: &SidebarContext, config: &SiteConfig) -> Markup {
    let first_page = first_published_page(ctx).map(|(_, page)| page);

    let content = html! {
        main class="w-full px-6 pt-12 pb-16 lg:px-12" {
            h1 class="text-3xl font-light" { (config.layout.title) }
            @if let Some(page) = first_page {
                p class="mt-4" {
                    a class="text-teal-600 font-medium" href=(display_path(&ctx.base, &page.slug)) {
                        "Start with " (page.title)
                    }
                }
            }
        }
    };

    let options = LayoutOptions {
        nav_is_open: false,
        is_home: true,
    };
    let layout = render_sidebar_layout(ctx, "/", &config.versions, options, content);
    base_document(&config.layout.title, layout)
}

// ============================================================================
// Tests
// ============================================================================
