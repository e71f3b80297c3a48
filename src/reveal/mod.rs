//! Scroll-triggered reveal core.
//!
//! Content blocks start hidden and fade/slide into view the first time they
//! are at least 15% visible. Three pieces cooperate:
//!
//! - [`platform`]: the injected intersection-watch capability.
//! - [`observer`]: subscribe, and on the first qualifying entry,
//!   unsubscribe-then-signal.
//! - [`wrapper`]: the two-state machine around arbitrary content.
//!
//! [`presentation`] maps state to a styling-agnostic descriptor.

pub mod observer;
pub mod platform;
pub mod presentation;
pub mod wrapper;

pub use observer::{Entered, REVEAL_THRESHOLD, VisibilityObserver};
pub use platform::{IntersectionEntry, IntersectionPlatform, Millis, NodeId, WatchId};
pub use presentation::{Presentation, RevealState, RevealStyle, TransitionWindow};
pub use wrapper::{REVEAL_CLASS, RevealOptions, RevealWrapper};
