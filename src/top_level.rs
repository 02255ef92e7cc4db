//! Top-level section links shown above the category groups.
//!
//! The list is fixed. Each link decides its target kind once at construction
//! and carries a static rule for when it counts as active: the first segment
//! of the current route must equal the link's section key. External links are
//! never active.
//!
//! Documentation is the one entry built from the [`SidebarContext`]: its
//! section key is the configured base and it points at the first published
//! page.

use crate::nav::{canonical_href, display_path, first_published_page};
use crate::types::{LinkTarget, SidebarContext};
use serde::Serialize;

/// One SVG element of a two-tone icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconShape {
    /// `<path>` tinted through a utility class.
    Path {
        class: &'static str,
        d: &'static str,
    },
    /// `<polygon>` tinted through a utility class.
    Polygon {
        class: &'static str,
        points: &'static str,
    },
    /// `<path>` with an explicit fill; used inside an even-odd group.
    Filled {
        fill: &'static str,
        d: &'static str,
    },
}

/// A 24×24 icon. `even_odd` wraps the shapes in a `fill-rule="evenodd"` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub shapes: &'static [IconShape],
    pub even_odd: bool,
}

/// When a top-level link is highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActiveRule {
    /// First route segment equals `key`; `on_root` also matches the site root.
    Section { key: String, on_root: bool },
    Never,
}

impl ActiveRule {
    pub fn matches(&self, first_segment: Option<&str>) -> bool {
        match (self, first_segment) {
            (ActiveRule::Section { key, on_root }, Some(segment)) => {
                segment == key.as_str() || (*on_root && segment.is_empty())
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelLink {
    pub label: &'static str,
    pub target: LinkTarget,
    pub rule: ActiveRule,
    pub icon: Icon,
}

impl TopLevelLink {
    /// Internal links match on `key`; external hrefs get [`ActiveRule::Never`].
    pub fn new(
        label: &'static str,
        href: &str,
        as_path: Option<&str>,
        key: impl Into<String>,
        icon: Icon,
    ) -> Self {
        let target = LinkTarget::parse(href, as_path);
        let rule = if target.is_external() {
            ActiveRule::Never
        } else {
            ActiveRule::Section {
                key: key.into(),
                on_root: false,
            }
        };
        Self {
            label,
            target,
            rule,
            icon,
        }
    }

    /// Also treat the site root as this link's section.
    pub fn default_on_root(mut self) -> Self {
        if let ActiveRule::Section { on_root, .. } = &mut self.rule {
            *on_root = true;
        }
        self
    }
}

/// A top-level link resolved against the current route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopLevelItem {
    pub label: &'static str,
    pub target: LinkTarget,
    pub is_active: bool,
    #[serde(skip)]
    pub icon: Icon,
}

impl TopLevelItem {
    pub fn class(&self) -> &'static str {
        if self.is_active {
            "text-gray-900"
        } else {
            "text-gray-600"
        }
    }
}

/// `None` when the route has no leading `/`-separated segment at all.
pub fn first_segment(route: &str) -> Option<&str> {
    route.split('/').nth(1)
}

const DEFAULT_DOCS_HREF: &str = "/docs/01-getting-started/01-installation";
const DEFAULT_DOCS_AS: &str = "/docs/installation";

/// The Documentation entry: keyed on the base segment, targeting the first
/// published page. Falls back to the stock installation page when nothing is
/// published.
pub fn documentation_link(ctx: &SidebarContext) -> TopLevelLink {
    let (href, as_path) = match first_published_page(ctx) {
        Some((category, page)) => (
            canonical_href(&ctx.base, category, &page.slug),
            display_path(&ctx.base, &page.slug),
        ),
        None => (DEFAULT_DOCS_HREF.to_string(), DEFAULT_DOCS_AS.to_string()),
    };
    TopLevelLink::new("Documentation", &href, Some(as_path.as_str()), ctx.base.as_str(), DOCS_ICON)
        .default_on_root()
}

/// The fixed section list, Documentation first.
pub fn top_level_links(ctx: &SidebarContext) -> Vec<TopLevelLink> {
    vec![
        documentation_link(ctx),
        TopLevelLink::new("Components", "/components", None, "components", COMPONENTS_ICON),
        TopLevelLink::new("Screencasts", "/screencasts", None, "screencasts", SCREENCASTS_ICON),
        TopLevelLink::new("Blog", "https://blog.tailwindcss.com", None, "blog", BLOG_ICON),
        TopLevelLink::new("Resources", "/resources", None, "resources", RESOURCES_ICON),
        TopLevelLink::new("Community", "/community", None, "community", COMMUNITY_ICON),
    ]
}

/// Resolve `links` against the current route.
pub fn resolve_top_level(links: &[TopLevelLink], route: &str) -> Vec<TopLevelItem> {
    let current = first_segment(route);
    links
        .iter()
        .map(|link| TopLevelItem {
            label: link.label,
            target: link.target.clone(),
            is_active: link.rule.matches(current),
            icon: link.icon,
        })
        .collect()
}

/// The stock list resolved against `route`.
pub fn top_level_nav(ctx: &SidebarContext, route: &str) -> Vec<TopLevelItem> {
    resolve_top_level(&top_level_links(ctx), route)
}

// ============================================================================
// Icons
// ============================================================================

const MUTED: &str = "text-gray-400 fill-current";
const STRONG: &str = "text-gray-700 fill-current";

const DOCS_ICON: Icon = Icon {
    shapes: &[
        IconShape::Path {
            class: MUTED,
            d: "M12 21a2 2 0 0 1-1.41-.59l-.83-.82A2 2 0 0 0 8.34 19H4a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1h4a5 5 0 0 1 4 2v16z",
        },
        IconShape::Path {
            class: STRONG,
            d: "M12 21V5a5 5 0 0 1 4-2h4a1 1 0 0 1 1 1v14a1 1 0 0 1-1 1h-4.34a2 2 0 0 0-1.42.59l-.83.82A2 2 0 0 1 12 21z",
        },
    ],
    even_odd: false,
};

const COMPONENTS_ICON: Icon = Icon {
    shapes: &[
        IconShape::Path {
            class: MUTED,
            d: "M3 6l9 4v12l-9-4V6zm14-3v2c0 1.1-2.24 2-5 2s-5-.9-5-2V3c0 1.1 2.24 2 5 2s5-.9 5-2z",
        },
        IconShape::Polygon {
            class: STRONG,
            points: "21 6 12 10 12 22 21 18",
        },
    ],
    even_odd: false,
};

const SCREENCASTS_ICON: Icon = Icon {
    shapes: &[
        IconShape::Path {
            class: MUTED,
            d: "M4 3h16a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5c0-1.1.9-2 2-2zm0 2v2h2V5H4zm0 4v2h2V9H4zm0 4v2h2v-2H4zm0 4v2h2v-2H4zM18 5v2h2V5h-2zm0 4v2h2V9h-2zm0 4v2h2v-2h-2zm0 4v2h2v-2h-2z",
        },
        IconShape::Path {
            class: STRONG,
            d: "M9 5h6a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1H9a1 1 0 0 1-1-1V6a1 1 0 0 1 1-1zm0 8h6a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1H9a1 1 0 0 1-1-1v-4a1 1 0 0 1 1-1z",
        },
    ],
    even_odd: false,
};

const BLOG_ICON: Icon = Icon {
    shapes: &[
        IconShape::Filled {
            fill: "#CBD5E0",
            d: "M5 3a2 2 0 00-2 2v14a2 2 0 002 2h14a2 2 0 002-2V5a2 2 0 00-2-2H5zm2 3a1 1 0 00-1 1v4a1 1 0 001 1h3a1 1 0 001-1V7a1 1 0 00-1-1H7z",
        },
        IconShape::Filled {
            fill: "#4A5568",
            d: "M13 7a1 1 0 011-1h3a1 1 0 110 2h-3a1 1 0 01-1-1zm-7 8a1 1 0 011-1h10a1 1 0 011 1v2a1 1 0 01-1 1H7a1 1 0 01-1-1v-2zm8-5a1 1 0 100 2h3a1 1 0 100-2h-3z",
        },
    ],
    even_odd: true,
};

const RESOURCES_ICON: Icon = Icon {
    shapes: &[
        IconShape::Path {
            class: MUTED,
            d: "M9 22c.19-.14.37-.3.54-.46L17.07 14H20a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H9zM4 2h4a2 2 0 0 1 2 2v14a4 4 0 1 1-8 0V4c0-1.1.9-2 2-2zm2 17.5a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3z",
        },
        IconShape::Path {
            class: STRONG,
            d: "M11 18.66V7.34l2.07-2.07a2 2 0 0 1 2.83 0l2.83 2.83a2 2 0 0 1 0 2.83L11 18.66z",
        },
    ],
    even_odd: false,
};

const COMMUNITY_ICON: Icon = Icon {
    shapes: &[
        IconShape::Path {
            class: MUTED,
            d: "M20.3 12.04l1.01 3a1 1 0 0 1-1.26 1.27l-3.01-1a7 7 0 1 1 3.27-3.27zM11 10a1 1 0 1 0 0-2 1 1 0 0 0 0 2zm3 0a1 1 0 1 0 0-2 1 1 0 0 0 0 2zm3 0a1 1 0 1 0 0-2 1 1 0 0 0 0 2z",
        },
        IconShape::Path {
            class: STRONG,
            d: "M15.88 17.8a7 7 0 0 1-8.92 2.5l-3 1.01a1 1 0 0 1-1.27-1.26l1-3.01A6.97 6.97 0 0 1 5 9.1a9 9 0 0 0 10.88 8.7z",
        },
    ],
    even_odd: false,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryMap, PageDescriptor};

    fn ctx(base: &str) -> SidebarContext {
        let mut pages = CategoryMap::new();
        pages.insert(
            "01-getting-started".into(),
            vec![
                PageDescriptor::new("01-draft", "Draft", false),
                PageDescriptor::new("02-installation", "Installation", true),
            ],
        );
        SidebarContext::new(base, pages)
    }

    fn active_labels(route: &str) -> Vec<&'static str> {
        top_level_nav(&ctx("docs"), route)
            .into_iter()
            .filter(|i| i.is_active)
            .map(|i| i.label)
            .collect()
    }

    #[test]
    fn stock_list_order() {
        let labels: Vec<&str> = top_level_links(&ctx("docs")).iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            ["Documentation", "Components", "Screencasts", "Blog", "Resources", "Community"]
        );
    }

    #[test]
    fn only_matching_section_is_active() {
        assert_eq!(active_labels("/components/buttons"), ["Components"]);
        assert_eq!(active_labels("/community"), ["Community"]);
        assert_eq!(active_labels("/docs/01-intro/01-install"), ["Documentation"]);
    }

    #[test]
    fn root_route_activates_documentation() {
        assert_eq!(active_labels("/"), ["Documentation"]);
    }

    #[test]
    fn unknown_section_activates_nothing() {
        assert!(active_labels("/pricing").is_empty());
    }

    #[test]
    fn empty_route_activates_nothing() {
        assert!(active_labels("").is_empty());
    }

    #[test]
    fn external_link_is_never_active() {
        let blog = top_level_links(&ctx("docs"))
            .into_iter()
            .find(|l| l.label == "Blog")
            .unwrap();
        assert_eq!(blog.rule, ActiveRule::Never);
        assert!(blog.target.is_external());
        assert!(active_labels("/blog").is_empty());
    }

    #[test]
    fn documentation_link_targets_first_published_page() {
        let docs = &top_level_nav(&ctx("docs"), "/")[0];
        assert_eq!(
            docs.target,
            LinkTarget::Internal {
                href: "/docs/01-getting-started/02-installation".into(),
                as_path: "/docs/installation".into(),
            }
        );
        assert_eq!(docs.class(), "text-gray-900");
    }

    #[test]
    fn documentation_link_follows_configured_base() {
        let ctx = ctx("guide");
        let docs = &top_level_nav(&ctx, "/guide/01-getting-started/02-installation")[0];
        assert!(docs.is_active);
        assert_eq!(docs.target.anchor_href(), "/guide/installation");
        assert!(!top_level_nav(&ctx, "/docs/anything")[0].is_active);
    }

    #[test]
    fn documentation_link_defaults_without_published_pages() {
        let empty = SidebarContext::new("docs", CategoryMap::new());
        let docs = documentation_link(&empty);
        assert_eq!(docs.target.anchor_href(), "/docs/installation");
        assert_eq!(
            docs.rule,
            ActiveRule::Section {
                key: "docs".into(),
                on_root: true,
            }
        );
    }

    #[test]
    fn default_on_root_ignored_for_external() {
        let link = TopLevelLink::new("Ext", "https://example.com", None, "ext", BLOG_ICON)
            .default_on_root();
        assert_eq!(link.rule, ActiveRule::Never);
    }

    #[test]
    fn first_segment_of_routes() {
        assert_eq!(first_segment("/docs/a"), Some("docs"));
        assert_eq!(first_segment("/"), Some(""));
        assert_eq!(first_segment(""), None);
    }
}
