//! Browser sidebar tests: active highlighting and the mobile toggle.
//!
//! Run with: `cargo test --test browser_nav -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_fixtures_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_docs-nav");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(bin)
            .args([
                "build",
                "--source",
                root.join("fixtures/docs").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
                "--temp-dir",
                root.join(".docs-nav-browser-temp").to_str().unwrap(),
            ])
            .status()
            .expect("failed to run docs-nav");
        assert!(status.success(), "fixture generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        // Narrow window so the sidebar starts collapsed
        Browser::new(LaunchOptions {
            window_size: Some((640, 900)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load(rel: &str) -> Arc<Tab> {
    ensure_fixtures_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join(rel);
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval(tab: &Tab, js: &str) -> serde_json::Value {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn only_current_page_is_marked_active() {
    let tab = load("docs/utility-first/index.html");
    let val = eval(
        &tab,
        r#"Array.from(document.querySelectorAll('#sidebar a[aria-current="page"]'))
            .map(a => a.dataset.route)"#,
    );
    let routes = val.as_array().expect("not an array");
    assert_eq!(routes.len(), 1, "active links: {routes:?}");
    assert_eq!(routes[0], "/docs/02-core-concepts/01-utility-first");
}

#[test]
#[ignore]
fn documentation_section_is_active() {
    let tab = load("docs/installation/index.html");
    let val = eval(
        &tab,
        r#"Array.from(document.querySelectorAll('#sidebar nav > div.mb-10 > a'))
            .find(a => a.textContent.includes('Documentation'))
            .classList.contains('text-gray-900')"#,
    );
    assert_eq!(val, true);
}

#[test]
#[ignore]
fn toggle_opens_and_closes_sidebar() {
    let tab = load("docs/installation/index.html");
    let hidden = r#"document.getElementById('sidebar').classList.contains('hidden')"#;
    assert_eq!(eval(&tab, hidden), true);

    eval(&tab, "document.getElementById('sidebar-toggle').click(); true");
    assert_eq!(eval(&tab, hidden), false);
    let locked = eval(
        &tab,
        r#"document.getElementById('content-wrapper').classList.contains('overflow-hidden')"#,
    );
    assert_eq!(locked, true);

    eval(&tab, "document.getElementById('sidebar-toggle').click(); true");
    assert_eq!(eval(&tab, hidden), true);
}

#[test]
#[ignore]
fn version_switcher_selects_current() {
    let tab = load("index.html");
    let val = eval(&tab, r#"document.querySelector('select[data-version-switcher]').selectedOptions[0].textContent"#);
    assert_eq!(val.as_str(), Some("v1.9"));
}
