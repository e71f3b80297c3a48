//! Generic reveal container.
//!
//! A [`RevealWrapper`] owns its content and exactly one
//! [`VisibilityObserver`] for its container node. It starts `Hidden` and
//! commits to `Revealed` the moment the observer signals; the visual
//! transition is only scheduled (see [`TransitionWindow`]) and never feeds
//! back into the state machine.

use super::observer::VisibilityObserver;
use super::platform::{IntersectionEntry, IntersectionPlatform, Millis, NodeId, WatchId};
use super::presentation::{Presentation, RevealState, RevealStyle, TransitionWindow};
use std::rc::Rc;
use tracing::debug;

/// Class every wrapper carries, before any caller-supplied classes.
pub const REVEAL_CLASS: &str = "reveal";

/// Caller-facing options of one wrapper.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealOptions {
    /// Presentation delay applied after the signal, in milliseconds.
    pub delay_ms: u64,
    /// Extra style classification appended to the wrapper's own.
    pub class: Option<String>,
}

impl RevealOptions {
    pub fn delayed(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

pub struct RevealWrapper<C> {
    content: C,
    options: RevealOptions,
    style: RevealStyle,
    observer: VisibilityObserver,
    state: RevealState,
    window: Option<TransitionWindow>,
    transitions: u32,
}

impl<C> RevealWrapper<C> {
    /// Mount around `content`, observing `node` (absent = never reveals).
    pub fn mount(
        content: C,
        options: RevealOptions,
        style: RevealStyle,
        platform: Rc<dyn IntersectionPlatform>,
        node: Option<NodeId>,
    ) -> Self {
        Self {
            content,
            options,
            style,
            observer: VisibilityObserver::attach(platform, node),
            state: RevealState::Hidden,
            window: None,
            transitions: 0,
        }
    }

    /// Route one notification through the observer. Returns `true` only on
    /// the call that committed the reveal.
    pub fn on_intersection(&mut self, entry: &IntersectionEntry, now: Millis) -> bool {
        if self.observer.on_intersection(entry).is_none() || self.state == RevealState::Revealed {
            return false;
        }
        self.state = RevealState::Revealed;
        self.transitions += 1;
        let window =
            TransitionWindow::scheduled(now, self.options.delay_ms, self.style.duration_ms);
        debug!(
            entered_at = now.0,
            start = window.start.0,
            end = window.end.0,
            "reveal committed"
        );
        self.window = Some(window);
        true
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn node(&self) -> Option<NodeId> {
        self.observer.node()
    }

    /// The pending watch, if the wrapper is still waiting to enter.
    pub fn watch(&self) -> Option<WatchId> {
        self.observer.watch()
    }

    /// When the visual transition runs, once revealed.
    pub fn transition_window(&self) -> Option<TransitionWindow> {
        self.window
    }

    /// Number of visible-state transitions so far (0 or 1).
    pub fn transition_count(&self) -> u32 {
        self.transitions
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::for_state(self.state, self.options.delay_ms, &self.style)
    }

    /// The wrapper's class followed by the caller's extra classification.
    pub fn class_list(&self) -> String {
        class_list(self.options.class.as_deref())
    }

    /// Tear down: release any pending watch and hand the content back.
    pub fn unmount(self) -> C {
        let Self {
            content,
            mut observer,
            ..
        } = self;
        observer.disconnect();
        content
    }
}

/// `"reveal"` plus an optional extra class, space separated.
pub fn class_list(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|c| !c.is_empty()) {
        Some(extra) => format!("{REVEAL_CLASS} {extra}"),
        None => REVEAL_CLASS.to_string(),
    }
}
