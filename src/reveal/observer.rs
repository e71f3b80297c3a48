//! One-shot visibility observer.
//!
//! Subscribes to one node, and on the first notification at or above
//! [`REVEAL_THRESHOLD`] unsubscribes and only then signals [`Entered`].
//! Because the watch is gone before the signal is returned, a second signal
//! cannot be produced for the same observer.
//!
//! ```text
//!  attach(Some(node))          entry ratio >= 0.15
//!  ───────────────► Watching ─────────────────────► Entered
//!                      │                               (deregistered)
//!                      │ disconnect() / drop
//!                      ▼
//!                 Disconnected
//! ```
//!
//! `attach(None)` goes straight to `Unattached`: no registration, no signal.

use super::platform::{IntersectionEntry, IntersectionPlatform, NodeId, WatchId};
use std::rc::Rc;
use tracing::{debug, trace};

/// Minimum visible ratio that counts as entering the viewport.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// The single "entered the viewport" signal. Carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entered;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchState {
    Unattached,
    Watching(WatchId),
    Entered,
    Disconnected,
}

pub struct VisibilityObserver {
    platform: Rc<dyn IntersectionPlatform>,
    node: Option<NodeId>,
    state: WatchState,
}

impl VisibilityObserver {
    /// Register a watch on `node`. An absent node is a silent no-op.
    pub fn attach(platform: Rc<dyn IntersectionPlatform>, node: Option<NodeId>) -> Self {
        let state = match node {
            Some(node) => {
                let watch = platform.register(node, REVEAL_THRESHOLD);
                debug!(%watch, node = node.0, "watch registered");
                WatchState::Watching(watch)
            }
            None => {
                trace!("no node to observe");
                WatchState::Unattached
            }
        };
        Self {
            platform,
            node,
            state,
        }
    }

    /// The live registration, if the observer is still waiting.
    pub fn watch(&self) -> Option<WatchId> {
        match self.state {
            WatchState::Watching(watch) => Some(watch),
            _ => None,
        }
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn has_entered(&self) -> bool {
        self.state == WatchState::Entered
    }

    /// Feed one notification. Returns `Some(Entered)` at most once over the
    /// observer's lifetime.
    pub fn on_intersection(&mut self, entry: &IntersectionEntry) -> Option<Entered> {
        let WatchState::Watching(watch) = self.state else {
            return None;
        };
        if entry.watch != watch || entry.ratio < REVEAL_THRESHOLD {
            return None;
        }
        self.platform.deregister(watch);
        self.state = WatchState::Entered;
        debug!(%watch, ratio = entry.ratio, "entered viewport, watch released");
        Some(Entered)
    }

    /// Release the watch if one is still registered. Safe to call repeatedly.
    pub fn disconnect(&mut self) {
        if let WatchState::Watching(watch) = self.state {
            self.platform.deregister(watch);
            debug!(%watch, "watch released before entering");
            self.state = WatchState::Disconnected;
        }
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
