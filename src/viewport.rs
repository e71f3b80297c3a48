//! Headless intersection platform.
//!
//! [`SimulatedViewport`] lays nodes out as rectangles in document
//! coordinates and computes visible ratios against a scrollable viewport.
//! It follows the browser's delivery rules closely enough for the reveal
//! core to behave the same way it does on a real page:
//!
//! - A freshly registered watch gets one entry on the next [`evaluate`]
//!   pass, whatever its ratio. Nodes already on screen at mount therefore
//!   reveal without any scrolling.
//! - After that, a watch only gets an entry when the node crosses its
//!   threshold in either direction.
//! - Deregistered watches, and watches whose node was detached, stay silent.
//!
//! [`evaluate`]: SimulatedViewport::evaluate

use crate::reveal::{IntersectionEntry, IntersectionPlatform, NodeId, WatchId};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use tracing::trace;

/// Axis-aligned rectangle, document coordinates, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Fraction of this rectangle's area inside `viewport`, in `[0, 1]`.
    ///
    /// A zero-area node counts as fully visible when it lies inside the
    /// viewport, matching how browsers treat empty targets.
    pub fn visible_ratio(&self, viewport: &Rect) -> f64 {
        let left = self.x.max(viewport.x);
        let right = self.right().min(viewport.right());
        let top = self.y.max(viewport.y);
        let bottom = self.bottom().min(viewport.bottom());

        let area = self.area();
        if area == 0.0 {
            let inside = left <= right && top <= bottom;
            return if inside { 1.0 } else { 0.0 };
        }
        let overlap = (right - left).max(0.0) * (bottom - top).max(0.0);
        (overlap / area).clamp(0.0, 1.0)
    }
}

#[derive(Debug)]
struct Watch {
    node: NodeId,
    threshold: f64,
    /// Side of the threshold at the last delivered entry; `None` until the
    /// initial entry has been delivered.
    above: Option<bool>,
}

pub struct SimulatedViewport {
    viewport: Cell<Rect>,
    nodes: RefCell<BTreeMap<NodeId, Rect>>,
    watches: RefCell<BTreeMap<WatchId, Watch>>,
    next_node: Cell<u64>,
    next_watch: Cell<u64>,
}

impl SimulatedViewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Cell::new(Rect::new(0.0, 0.0, width, height)),
            nodes: RefCell::new(BTreeMap::new()),
            watches: RefCell::new(BTreeMap::new()),
            next_node: Cell::new(0),
            next_watch: Cell::new(0),
        }
    }

    /// Attach a node with the given geometry.
    pub fn place(&self, rect: Rect) -> NodeId {
        let id = NodeId(self.next_node.get() + 1);
        self.next_node.set(id.0);
        self.nodes.borrow_mut().insert(id, rect);
        id
    }

    /// Remove a node from the tree. Its watches go silent.
    pub fn detach(&self, node: NodeId) {
        self.nodes.borrow_mut().remove(&node);
    }

    pub fn scroll_to(&self, y: f64) {
        let mut rect = self.viewport.get();
        rect.y = y.max(0.0);
        self.viewport.set(rect);
    }

    pub fn resize(&self, width: f64, height: f64) {
        let mut rect = self.viewport.get();
        rect.width = width;
        rect.height = height;
        self.viewport.set(rect);
    }

    pub fn viewport(&self) -> Rect {
        self.viewport.get()
    }

    pub fn active_watches(&self) -> usize {
        self.watches.borrow().len()
    }

    /// One evaluation pass: compute ratios and return due entries in
    /// registration order.
    pub fn evaluate(&self) -> Vec<IntersectionEntry> {
        let viewport = self.viewport.get();
        let nodes = self.nodes.borrow();
        let mut watches = self.watches.borrow_mut();
        let mut entries = Vec::new();

        for (&watch_id, watch) in watches.iter_mut() {
            let Some(rect) = nodes.get(&watch.node) else {
                continue;
            };
            let ratio = rect.visible_ratio(&viewport);
            let above = ratio >= watch.threshold;
            if watch.above != Some(above) {
                watch.above = Some(above);
                entries.push(IntersectionEntry {
                    watch: watch_id,
                    target: watch.node,
                    ratio,
                });
            }
        }
        trace!(scroll_y = viewport.y, delivered = entries.len(), "evaluation pass");
        entries
    }
}

impl IntersectionPlatform for SimulatedViewport {
    fn register(&self, node: NodeId, threshold: f64) -> WatchId {
        let id = WatchId(self.next_watch.get() + 1);
        self.next_watch.set(id.0);
        self.watches.borrow_mut().insert(
            id,
            Watch {
                node,
                threshold,
                above: None,
            },
        );
        id
    }

    fn deregister(&self, watch: WatchId) {
        self.watches.borrow_mut().remove(&watch);
    }
}
