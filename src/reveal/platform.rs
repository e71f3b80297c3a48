//! The intersection-watch capability the reveal core depends on.
//!
//! The [`IntersectionPlatform`] trait is the only host service the observer
//! needs: attach a watch with a visibility-ratio threshold to a node, and
//! release it again. Notifications flow the other way as
//! [`IntersectionEntry`] values, which the host routes to the observer that
//! owns the matching [`WatchId`].
//!
//! Two implementations exist:
//!
//! | Implementation | Where |
//! |----------------|-------|
//! | [`SimulatedViewport`](crate::viewport::SimulatedViewport) | headless geometry, used by `plan` and tests |
//! | `static/reveal.js` | the browser's `IntersectionObserver`, shipped with the generated site |
//!
//! Everything runs on one thread. Platforms are shared through `Rc` and take
//! `&self`, so implementations keep their bookkeeping behind `Cell`/`RefCell`.

use serde::Serialize;
use std::fmt;

/// Opaque handle to one node of the render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub u64);

/// Identity of a single watch registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchId(pub u64);

impl fmt::Display for WatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "watch#{}", self.0)
    }
}

/// Point on the host's monotonic clock, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    pub fn plus(self, ms: u64) -> Millis {
        Millis(self.0.saturating_add(ms))
    }
}

/// A single intersection notification.
///
/// Ephemeral: consumed immediately by the observer that owns `watch`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub watch: WatchId,
    pub target: NodeId,
    /// Fraction (0–1) of the node's area inside the viewport.
    pub ratio: f64,
}

/// Host capability: viewport-intersection watches with a ratio threshold.
pub trait IntersectionPlatform {
    /// Start watching `node`. Notifications are delivered on a later
    /// evaluation pass, never during this call.
    fn register(&self, node: NodeId, threshold: f64) -> WatchId;

    /// Stop watching. Unknown or already released watches are ignored.
    fn deregister(&self, watch: WatchId);
}
