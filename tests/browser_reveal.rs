//! Browser reveal tests: run the generated page in headless Chrome.
//!
//! Run with: `cargo test --test browser_reveal -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_site_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_sm-site");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(bin)
            .args([
                "build",
                "--config",
                root.join("tests/browser/missing-site.toml").to_str().unwrap(),
                "--assets",
                root.join("tests/browser/no-assets").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run sm-site");
        assert!(status.success(), "site generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load_index() -> Arc<Tab> {
    ensure_site_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join("index.html");
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

/// Poll `js` until it returns `true`, or panic after 5 s.
fn wait_until(tab: &Tab, js: &str) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if eval(tab, js).as_bool().unwrap_or(false) {
            return;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    panic!("condition never became true: {js}");
}

fn in_view_count(tab: &Tab, selector: &str) -> u64 {
    eval(
        tab,
        &format!("document.querySelectorAll('{selector} .reveal.in-view').length"),
    )
    .as_u64()
    .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn hero_reveals_without_scrolling() {
    let tab = load_index();
    wait_until(
        &tab,
        "document.querySelectorAll('#hero .reveal.in-view').length === 2",
    );
}

#[test]
#[ignore]
fn below_the_fold_blocks_start_hidden() {
    let tab = load_index();
    wait_until(
        &tab,
        "document.querySelectorAll('#hero .reveal.in-view').length === 2",
    );
    assert_eq!(in_view_count(&tab, "#services"), 0);
    let opacity = eval(
        &tab,
        "getComputedStyle(document.querySelector('#services .reveal')).opacity",
    );
    assert_eq!(opacity.as_str(), Some("0"));
}

#[test]
#[ignore]
fn scrolling_reveals_services_and_they_stay_revealed() {
    let tab = load_index();
    eval(
        &tab,
        "document.getElementById('services').scrollIntoView({behavior: 'instant'}); true",
    );
    wait_until(
        &tab,
        "document.querySelectorAll('#services .reveal.in-view').length === 4",
    );

    eval(&tab, "window.scrollTo(0, 0); true");
    std::thread::sleep(Duration::from_millis(300));
    assert_eq!(in_view_count(&tab, "#services"), 4);
}

#[test]
#[ignore]
fn gallery_items_carry_staggered_delays() {
    let tab = load_index();
    let delays = eval(
        &tab,
        r#"Array.from(document.querySelectorAll('.gallery-item'))
            .map((el) => el.style.transitionDelay)
            .join(',')"#,
    );
    assert_eq!(delays.as_str(), Some("0ms,100ms,200ms,300ms,400ms"));
}
