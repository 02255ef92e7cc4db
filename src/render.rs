//! Sidebar layout rendering with Maud.
//!
//! [`render_sidebar_layout`] is the library's main entry point: it resolves the
//! navigation for a route and returns the sidebar plus the passthrough content
//! container as one [`Markup`] fragment. The class names are utility classes
//! emitted verbatim; no stylesheet is bundled.
//!
//! ## Responsive toggling
//!
//! | Element            | Condition       | Classes                               |
//! |--------------------|-----------------|---------------------------------------|
//! | `#sidebar`         | nav closed      | `hidden`                              |
//! | `#sidebar`         | home / not home | `pt-24` / `pt-16`                     |
//! | `#navWrapper`      | home / not home | `lg:top-0 bg-gray-100` / `lg:top-16 bg-white` |
//! | `#content-wrapper` | nav open        | `overflow-hidden max-h-screen fixed`  |

use crate::config::VersionsConfig;
use crate::nav::{NavGroup, ResolvedNavItem, compose_nav};
use crate::top_level::{Icon, IconShape, TopLevelItem, top_level_nav};
use crate::types::{LinkTarget, SidebarContext};
use maud::{Markup, html};

/// Per-render layout switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Mobile nav expanded.
    pub nav_is_open: bool,
    /// Rendering the site root.
    pub is_home: bool,
}

const SIDEBAR_CLASS: &str = "fixed inset-0 h-full bg-white z-90 w-full border-b -mb-16 lg:-mb-0 lg:static lg:h-auto lg:overflow-y-visible lg:border-b-0 lg:pt-0 lg:w-1/4 lg:block lg:border-0 xl:w-1/5";
const NAV_WRAPPER_CLASS: &str = "h-full overflow-y-auto scrolling-touch lg:h-auto lg:block lg:relative lg:sticky lg:bg-transparent overflow-hidden";
const NAV_CLASS: &str = "px-6 pt-6 overflow-y-auto text-base lg:text-sm lg:py-12 lg:pl-6 lg:pr-8 sticky?lg:h-(screen-16)";
const CONTENT_WRAPPER_CLASS: &str =
    "min-h-screen w-full lg:static lg:max-h-full lg:overflow-visible lg:w-3/4 xl:w-4/5";
const NAV_LINK_CLASS: &str = "px-2 -mx-2 py-1 transition duration-200 ease-in-out relative block";
const TOP_LEVEL_CLASS: &str = "flex items-center px-2 -mx-2 py-1 hover:text-gray-900 font-medium";
const GROUP_HEADING_CLASS: &str =
    "mb-3 lg:mb-2 uppercase tracking-wide font-bold text-sm lg:text-xs";

/// Join non-empty class fragments with single spaces.
fn classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn sidebar_class(options: LayoutOptions) -> String {
    classes(&[
        SIDEBAR_CLASS,
        if options.nav_is_open { "" } else { "hidden" },
        if options.is_home { "pt-24" } else { "pt-16" },
    ])
}

pub fn nav_wrapper_class(options: LayoutOptions) -> String {
    classes(&[
        NAV_WRAPPER_CLASS,
        if options.is_home {
            "lg:top-0 bg-gray-100"
        } else {
            "lg:top-16 bg-white"
        },
    ])
}

pub fn content_wrapper_class(options: LayoutOptions) -> String {
    classes(&[
        CONTENT_WRAPPER_CLASS,
        if options.nav_is_open {
            "overflow-hidden max-h-screen fixed"
        } else {
            ""
        },
    ])
}

/// One page link.
pub fn render_nav_item(item: &ResolvedNavItem) -> Markup {
    let highlight = if item.is_active {
        "rounded absolute inset-0 bg-teal-200 opacity-25"
    } else {
        "rounded absolute inset-0 bg-teal-200 opacity-0"
    };

    html! {
        li class="mb-3 lg:mb-1" {
            a class=(classes(&[NAV_LINK_CLASS, item.style.class()]))
                href=(item.as_path)
                data-route=(item.href)
                aria-current=[item.is_active.then_some("page")] {
                span class=(highlight) {}
                span class="relative" { (item.title) }
            }
        }
    }
}

/// A category heading and its links.
pub fn render_nav_group(group: &NavGroup) -> Markup {
    let tone = if group.has_published {
        "text-gray-500"
    } else {
        "text-gray-400"
    };

    html! {
        div class="mb-8" data-category=(group.key) {
            h5 class=(classes(&[GROUP_HEADING_CLASS, tone])) { (group.label) }
            ul {
                @for item in &group.items {
                    (render_nav_item(item))
                }
            }
        }
    }
}

pub fn render_icon(icon: &Icon) -> Markup {
    let shapes = html! {
        @for shape in icon.shapes {
            @match shape {
                IconShape::Path { class, d } => { path class=(class) d=(d) {} }
                IconShape::Polygon { class, points } => { polygon class=(class) points=(points) {} }
                IconShape::Filled { fill, d } => { path fill=(fill) d=(d) {} }
            }
        }
    };

    html! {
        svg class="h-6 w-6" viewBox="0 0 24 24" {
            @if icon.even_odd {
                g fill-rule="evenodd" clip-rule="evenodd" { (shapes) }
            } @else {
                (shapes)
            }
        }
    }
}

/// The section links. Internal links carry their route in `data-route`.
pub fn render_top_level(items: &[TopLevelItem]) -> Markup {
    html! {
        div class="mb-10" {
            @for (idx, item) in items.iter().enumerate() {
                @let class = classes(&[
                    TOP_LEVEL_CLASS,
                    if idx > 0 { "mt-3 lg:mt-1" } else { "" },
                    item.class(),
                ]);
                @match &item.target {
                    LinkTarget::External { url } => {
                        a class=(class) href=(url) {
                            (render_icon(&item.icon))
                            span class="ml-3" { (item.label) }
                        }
                    }
                    LinkTarget::Internal { href, as_path } => {
                        a class=(class) href=(as_path) data-route=(href) {
                            (render_icon(&item.icon))
                            span class="ml-3" { (item.label) }
                        }
                    }
                }
            }
        }
    }
}

/// Version `<select>`; empty markup when no versions are configured.
pub fn render_version_switcher(versions: &VersionsConfig) -> Markup {
    let current = versions.current.as_deref();

    html! {
        @if !versions.available.is_empty() {
            div class="relative -mx-2 w-24 mb-8 lg:hidden" {
                select class="appearance-none block w-full px-2 py-1 pr-8 rounded-lg bg-transparent border border-gray-400 font-medium text-gray-700"
                    aria-label="Documentation version"
                    data-version-switcher="true" {
                    @for version in &versions.available {
                        option value=(version.href) selected[current == Some(version.label.as_str())] {
                            (version.label)
                        }
                    }
                }
                div class="pointer-events-none absolute inset-y-0 right-0 flex items-center px-2 text-gray-500" {
                    svg class="fill-current h-4 w-4" viewBox="0 0 20 20" {
                        path d="M9.293 12.95l.707.707L15.657 8l-1.414-1.414L10 10.828 5.757 6.586 4.343 8z" {}
                    }
                }
            }
        }
    }
}

/// Sidebar nav: version switcher, section links, then category groups.
pub fn render_sidebar(ctx: &SidebarContext, route: &str, versions: &VersionsConfig) -> Markup {
    let top_level = top_level_nav(ctx, route);
    let groups = compose_nav(ctx, route);

    html! {
        nav id="nav" class=(NAV_CLASS) {
            (render_version_switcher(versions))
            (render_top_level(&top_level))
            @for group in &groups {
                (render_nav_group(group))
            }
        }
    }
}

/// Full layout: sidebar next to the `children` content container.
pub fn render_sidebar_layout(
    ctx: &SidebarContext,
    route: &str,
    versions: &VersionsConfig,
    options: LayoutOptions,
    children: Markup,
) -> Markup {
    html! {
        div class="w-full max-w-screen-xl mx-auto px-6" {
            div class="lg:flex -mx-6" {
                div id="sidebar" class=(sidebar_class(options)) {
                    div id="navWrapper" class=(nav_wrapper_class(options)) {
                        div id="navGradient" class="hidden" {}
                        (render_sidebar(ctx, route, versions))
                    }
                }
                div id="content-wrapper" class=(content_wrapper_class(options)) {
                    div id="content" {
                        div id="app" class="flex" {
                            (children)
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VersionEntry;
    use crate::types::{CategoryMap, FallbackLink, PageDescriptor};

    fn ctx() -> SidebarContext {
        let mut pages = CategoryMap::new();
        pages.insert(
            "01-getting-started".into(),
            vec![
                PageDescriptor::new("01-installation", "Installation", true),
                PageDescriptor::new("02-upgrading", "Upgrading", false),
            ],
        );
        pages.insert(
            "02-drafts".into(),
            vec![PageDescriptor::new("01-plugins", "Plugins", false)],
        );
        SidebarContext::new("docs", pages)
    }

    fn versions() -> VersionsConfig {
        VersionsConfig {
            current: Some("v2".into()),
            available: vec![
                VersionEntry {
                    label: "v1".into(),
                    href: "https://v1.example.com".into(),
                },
                VersionEntry {
                    label: "v2".into(),
                    href: "/".into(),
                },
            ],
        }
    }

    fn layout(ctx: &SidebarContext, route: &str, options: LayoutOptions) -> String {
        render_sidebar_layout(ctx, route, &VersionsConfig::default(), options, html! { p { "body" } })
            .into_string()
    }

    #[test]
    fn layout_renders_groups_and_content() {
        let html = layout(&ctx(), "/docs/01-getting-started/01-installation", LayoutOptions::default());
        assert!(html.contains("Getting Started"));
        assert!(html.contains(r#"href="/docs/installation""#));
        assert!(html.contains(r#"data-route="/docs/01-getting-started/01-installation""#));
        assert!(html.contains("<p>body</p>"));
        assert!(!html.contains("Upgrading"));
        assert!(!html.contains("Drafts"));
    }

    #[test]
    fn active_item_is_highlighted() {
        let html = layout(&ctx(), "/docs/01-getting-started/01-installation", LayoutOptions::default());
        assert!(html.contains("text-teal-600"));
        assert!(html.contains("opacity-25"));
        assert!(html.contains(r#"aria-current="page""#));
    }

    #[test]
    fn inactive_item_has_no_highlight() {
        let html = layout(&ctx(), "/components", LayoutOptions::default());
        assert!(!html.contains("opacity-25"));
        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn fallback_shows_muted_groups() {
        let ctx = ctx().with_fallback(FallbackLink {
            href: "/docs/soon".into(),
            as_path: "/soon".into(),
        });
        let html = layout(&ctx, "/", LayoutOptions::default());
        assert!(html.contains("Upgrading"));
        assert!(html.contains("Drafts"));
        assert!(html.contains(r#"href="/soon""#));
        assert!(html.contains("lg:text-xs text-gray-400"));
    }

    #[test]
    fn closed_nav_hides_sidebar() {
        let options = LayoutOptions::default();
        assert!(sidebar_class(options).split(' ').any(|c| c == "hidden"));
        assert!(sidebar_class(options).ends_with("pt-16"));
        assert!(!content_wrapper_class(options).contains("fixed"));
    }

    #[test]
    fn open_nav_locks_content() {
        let options = LayoutOptions {
            nav_is_open: true,
            is_home: false,
        };
        assert!(!sidebar_class(options).split(' ').any(|c| c == "hidden"));
        assert!(content_wrapper_class(options).ends_with("overflow-hidden max-h-screen fixed"));
    }

    #[test]
    fn home_variant_classes() {
        let options = LayoutOptions {
            nav_is_open: false,
            is_home: true,
        };
        assert!(sidebar_class(options).ends_with("pt-24"));
        assert!(nav_wrapper_class(options).ends_with("lg:top-0 bg-gray-100"));
        assert!(nav_wrapper_class(LayoutOptions::default()).ends_with("lg:top-16 bg-white"));
    }

    #[test]
    fn top_level_external_link_has_no_route() {
        let html = render_top_level(&top_level_nav(&ctx(), "/")).into_string();
        assert!(html.contains(r#"href="https://blog.tailwindcss.com""#));
        assert!(html.contains(r#"data-route="/components""#));
        assert!(html.contains("Community"));
    }

    #[test]
    fn top_level_active_class() {
        let html = render_top_level(&top_level_nav(&ctx(), "/resources")).into_string();
        let resources = html.split("<a ").find(|a| a.contains("Resources")).unwrap();
        assert!(resources.contains("lg:mt-1 text-gray-900"));
        let docs = html.split("<a ").find(|a| a.contains("Documentation")).unwrap();
        assert!(docs.contains("font-medium text-gray-600"));
    }

    #[test]
    fn icons_render_closed_svg_elements() {
        let html = render_top_level(&top_level_nav(&ctx(), "/")).into_string();
        assert!(html.contains("</path>"));
        assert!(html.contains("</polygon>"));
        assert!(html.contains(r#"fill-rule="evenodd""#));
    }

    #[test]
    fn version_switcher_selects_current() {
        let html = render_version_switcher(&versions()).into_string();
        assert!(html.contains("<select"));
        let v2 = html.split("<option").find(|o| o.contains(">v2<")).unwrap();
        assert!(v2.contains("selected"));
        let v1 = html.split("<option").find(|o| o.contains(">v1<")).unwrap();
        assert!(!v1.contains("selected"));
    }

    #[test]
    fn version_switcher_empty_without_versions() {
        let html = render_version_switcher(&VersionsConfig::default()).into_string();
        assert!(html.is_empty());
    }

    #[test]
    fn titles_are_escaped() {
        let mut pages = CategoryMap::new();
        pages.insert(
            "cat".into(),
            vec![PageDescriptor::new("x", "<script>alert('xss')</script>", true)],
        );
        let html = layout(&SidebarContext::new("docs", pages), "/", LayoutOptions::default());
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
