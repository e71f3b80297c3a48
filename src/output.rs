//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! ## Build
//!
//! ```text
//! Page → dist/index.html (18.2 KB)
//!     Reveal blocks: 12
//!     Assets: 2 files
//! ```
//!
//! ## Plan
//!
//! ```text
//! Reveal timeline (1280×800, 100px per step)
//! 001 Hero heading
//!     Entered: scroll 0px at 0ms
//!     Transition: 0ms → 700ms
//! 002 Hero call to action
//!     Entered: scroll 0px at 0ms
//!     Transition: 400ms → 1100ms
//! ...
//! ```

use crate::config::SiteConfig;
use crate::content::{GALLERY_IMAGES, NAV_LINKS, SERVICES};
use crate::generate::GenerateReport;
use crate::simulate::{RevealEvent, ScrollPlan};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

// ============================================================================
// build
// ============================================================================

pub fn format_build_output(report: &GenerateReport) -> Vec<String> {
    vec![
        format!(
            "Page → {} ({})",
            report.index.display(),
            format_size(report.bytes)
        ),
        format!("{}Reveal blocks: {}", indent(1), report.reveal_blocks),
        format!("{}Assets: {}", indent(1), plural(report.assets_copied, "file")),
    ]
}

pub fn print_build_output(report: &GenerateReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

/// Page inventory: sections in document order with their revealable items.
pub fn format_check_output(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![
        "Sections".to_string(),
        format!("{} Navbar", format_index(1)),
    ];
    for link in &NAV_LINKS {
        lines.push(format!("{}{} → #{}", indent(1), link.label, link.anchor));
    }
    lines.push(format!("{} Hero", format_index(2)));
    lines.push(format!("{}{}&{}", indent(1), config.brand.mark_left, config.brand.mark_right));
    lines.push(format!("{} Gallery ({})", format_index(3), plural(GALLERY_IMAGES.len(), "image")));
    for (i, image) in GALLERY_IMAGES.iter().enumerate() {
        lines.push(format!("{}{} {}", indent(1), format_index(i + 1), image.alt));
    }
    lines.push(format!("{} Services ({})", format_index(4), plural(SERVICES.len(), "service")));
    for (i, service) in SERVICES.iter().enumerate() {
        lines.push(format!("{}{} {}", indent(1), format_index(i + 1), service.title));
    }
    lines.push(format!("{} Footer", format_index(5)));
    lines.push(String::new());
    lines.push("Reveal".to_string());
    lines.push(format!(
        "{}{}ms {}, offset {}",
        indent(1),
        config.reveal.duration_ms,
        config.reveal.easing,
        config.reveal.offset
    ));
    lines
}

pub fn print_check_output(config: &SiteConfig) {
    for line in format_check_output(config) {
        println!("{}", line);
    }
}

// ============================================================================
// plan
// ============================================================================

pub fn format_plan_output(events: &[RevealEvent], never: &[String], plan: &ScrollPlan) -> Vec<String> {
    let mut lines = vec![format!(
        "Reveal timeline ({}×{}, {}px per step)",
        plan.viewport_width, plan.viewport_height, plan.step
    )];
    for (i, event) in events.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), event.label));
        lines.push(format!(
            "{}Entered: scroll {}px at {}ms",
            indent(1),
            event.scroll_y,
            event.entered_at.0
        ));
        lines.push(format!(
            "{}Transition: {}ms → {}ms",
            indent(1),
            event.window.start.0,
            event.window.end.0
        ));
    }
    if !never.is_empty() {
        lines.push(String::new());
        lines.push("Never revealed".to_string());
        for label in never {
            lines.push(format!("{}{}", indent(1), label));
        }
    }
    lines
}

pub fn print_plan_output(events: &[RevealEvent], never: &[String], plan: &ScrollPlan) {
    for line in format_plan_output(events, never, plan) {
        println!("{}", line);
    }
}
