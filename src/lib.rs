//! # sm-site
//!
//! Static site generator for the S&M Construction landing page: a fixed
//! navigation bar, a full-viewport hero, an image gallery, a services grid
//! and a footer. Content blocks fade and slide into view the first time they
//! scroll into the viewport.
//!
//! # Architecture
//!
//! ```text
//!  site.toml ─► config ─┐
//!  content (static) ────┼─► page (Maud) ─► generate ─► dist/index.html
//!                       │                              (+ static/reveal.js)
//!  reveal core ─────────┴─► simulate (viewport) ─► plan timeline
//! ```
//!
//! The only real logic is the reveal core. It is headless: the viewport is an
//! injected [`reveal::IntersectionPlatform`], so the same state machine runs
//! against [`viewport::SimulatedViewport`] in tests and in the `plan`
//! command, while the generated page drives the identical contract with the
//! browser's `IntersectionObserver`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`reveal`] | Visibility observer, reveal wrapper, presentation mapping, platform trait |
//! | [`viewport`] | Rectangle geometry and the headless intersection platform |
//! | [`simulate`] | Drives wrappers through a scroll and reports the reveal timeline |
//! | [`content`] | Static gallery images, services and navigation links |
//! | [`page`] | Section markup in document order, plus its geometry estimate |
//! | [`generate`] | Writes the site: page, stylesheet, runtime, assets |
//! | [`config`] | `site.toml` loading, validation, merging, and CSS variables |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One-Shot, Self-Releasing Watches
//!
//! An observer releases its watch before it signals. A second signal for the
//! same block is therefore impossible rather than merely ignored, and the
//! wrapper's `Hidden → Revealed` transition is monotonic. Dropping an
//! observer releases a pending watch, so unmounting can never leak one.
//!
//! ## State Machine, Not Class Toggling
//!
//! Wrappers hold an explicit two-state machine. Styling comes from a pure
//! mapping to a [`reveal::Presentation`]; the generated `.reveal` CSS rules
//! are built from that same mapping.
//!
//! ## Delay Is Presentation Only
//!
//! The state commits the instant the block enters. The configured delay only
//! shifts when the visual transition starts, including for blocks that are
//! already on screen at load.

pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod page;
pub mod reveal;
pub mod simulate;
pub mod viewport;
