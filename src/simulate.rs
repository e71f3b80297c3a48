//! Scroll simulation: drive reveal wrappers through a headless scroll.
//!
//! Mounts one [`RevealWrapper`] per [`BlockLayout`] against a
//! [`SimulatedViewport`], then steps the viewport down the document. Each
//! step is one evaluation pass; entries are routed to the wrapper owning the
//! watch. Used by the `plan` command to print when each block of the page
//! reveals, and by tests to check the reveal contract end to end.

use crate::reveal::{
    Millis, RevealOptions, RevealState, RevealStyle, RevealWrapper, TransitionWindow,
};
use crate::viewport::{Rect, SimulatedViewport};
use serde::Serialize;
use std::rc::Rc;

/// One revealable block: a label for output, its geometry, and its delay.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    pub label: String,
    pub rect: Rect,
    pub delay_ms: u64,
}

/// A block that committed to `Revealed` during the simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealEvent {
    pub label: String,
    /// Scroll offset at which the block entered.
    pub scroll_y: f64,
    pub entered_at: Millis,
    pub window: TransitionWindow,
}

pub struct ScrollSimulation {
    viewport: Rc<SimulatedViewport>,
    wrappers: Vec<RevealWrapper<String>>,
}

impl ScrollSimulation {
    pub fn mount(
        viewport: Rc<SimulatedViewport>,
        blocks: &[BlockLayout],
        style: &RevealStyle,
    ) -> Self {
        let wrappers = blocks
            .iter()
            .map(|block| {
                let node = viewport.place(block.rect);
                RevealWrapper::mount(
                    block.label.clone(),
                    RevealOptions::delayed(block.delay_ms),
                    style.clone(),
                    viewport.clone(),
                    Some(node),
                )
            })
            .collect();
        Self { viewport, wrappers }
    }

    /// Scroll to `scroll_y`, run one evaluation pass at time `now`, and
    /// return the blocks that revealed on this pass.
    pub fn advance_to(&mut self, scroll_y: f64, now: Millis) -> Vec<RevealEvent> {
        self.viewport.scroll_to(scroll_y);
        let mut revealed = Vec::new();
        for entry in self.viewport.evaluate() {
            let Some(wrapper) = self
                .wrappers
                .iter_mut()
                .find(|w| w.watch() == Some(entry.watch))
            else {
                continue;
            };
            if !wrapper.on_intersection(&entry, now) {
                continue;
            }
            if let Some(window) = wrapper.transition_window() {
                revealed.push(RevealEvent {
                    label: wrapper.content().clone(),
                    scroll_y: self.viewport.viewport().y,
                    entered_at: now,
                    window,
                });
            }
        }
        revealed
    }

    pub fn wrappers(&self) -> &[RevealWrapper<String>] {
        &self.wrappers
    }

    /// Labels of blocks that never revealed.
    pub fn still_hidden(&self) -> Vec<&str> {
        self.wrappers
            .iter()
            .filter(|w| w.state() == RevealState::Hidden)
            .map(|w| w.content().as_str())
            .collect()
    }

    /// Unmount every wrapper, releasing any watch still pending.
    pub fn unmount_all(self) -> Rc<SimulatedViewport> {
        for wrapper in self.wrappers {
            wrapper.unmount();
        }
        self.viewport
    }
}

/// Scroll settings for [`reveal_timeline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPlan {
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Pixels scrolled per evaluation pass.
    pub step: f64,
    /// Clock advance per evaluation pass.
    pub ms_per_step: u64,
}

impl Default for ScrollPlan {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 800.0,
            step: 100.0,
            ms_per_step: 100,
        }
    }
}

/// Result of a full scroll.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    /// Reveals in the order they happened.
    pub events: Vec<RevealEvent>,
    /// Labels of blocks still hidden at the bottom of the page.
    pub never_revealed: Vec<String>,
}

/// Scroll from the top to the bottom of the document, one evaluation pass
/// per step, then unmount everything.
pub fn reveal_timeline(
    blocks: &[BlockLayout],
    plan: &ScrollPlan,
    style: &RevealStyle,
) -> Timeline {
    let viewport = Rc::new(SimulatedViewport::new(plan.viewport_width, plan.viewport_height));
    let mut sim = ScrollSimulation::mount(viewport, blocks, style);

    let doc_bottom = blocks.iter().map(|b| b.rect.bottom()).fold(0.0, f64::max);
    let max_scroll = (doc_bottom - plan.viewport_height).max(0.0);
    // A degenerate viewport never scrolls; the initial pass still runs.
    let max_scroll = if max_scroll.is_finite() && plan.viewport_height > 0.0 {
        max_scroll
    } else {
        0.0
    };
    let step = if plan.step.is_finite() && plan.step > 0.0 {
        plan.step
    } else {
        plan.viewport_height.max(1.0)
    };

    let mut events = sim.advance_to(0.0, Millis(0));
    let mut scroll = 0.0;
    let mut now = Millis(0);
    while scroll < max_scroll {
        scroll = (scroll + step).min(max_scroll);
        now = now.plus(plan.ms_per_step);
        events.extend(sim.advance_to(scroll, now));
    }
    let never_revealed = sim.still_hidden().into_iter().map(str::to_string).collect();
    sim.unmount_all();
    Timeline {
        events,
        never_revealed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(label: &str, y: f64, height: f64, delay_ms: u64) -> BlockLayout {
        BlockLayout {
            label: label.to_string(),
            rect: Rect::new(0.0, y, 400.0, height),
            delay_ms,
        }
    }

    #[test]
    fn block_visible_at_mount_reveals_without_scrolling() {
        let viewport = Rc::new(SimulatedViewport::new(1280.0, 800.0));
        let mut sim =
            ScrollSimulation::mount(viewport, &[block("hero", 0.0, 400.0, 0)], &RevealStyle::default());

        let events = sim.advance_to(0.0, Millis(0));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].label, "hero");
        assert_eq!(sim.wrappers()[0].state(), RevealState::Revealed);
    }

    #[test]
    fn block_visible_at_mount_still_honours_delay() {
        let viewport = Rc::new(SimulatedViewport::new(1280.0, 800.0));
        let mut sim = ScrollSimulation::mount(
            viewport,
            &[block("cta", 0.0, 100.0, 400)],
            &RevealStyle::default(),
        );
        let events = sim.advance_to(0.0, Millis(0));
        assert_eq!(events[0].window.start, Millis(400));
    }

    #[test]
    fn offscreen_block_waits_for_scroll() {
        let viewport = Rc::new(SimulatedViewport::new(1280.0, 800.0));
        let mut sim = ScrollSimulation::mount(
            viewport,
            &[block("services", 1200.0, 400.0, 0)],
            &RevealStyle::default(),
        );
        assert!(sim.advance_to(0.0, Millis(0)).is_empty());
        // 40 of 400 px visible = 10%.
        assert!(sim.advance_to(440.0, Millis(100)).is_empty());
        // 80 of 400 px visible = 20%.
        let events = sim.advance_to(480.0, Millis(200));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].entered_at, Millis(200));
    }

    #[test]
    fn scrolling_back_does_not_hide_or_retrigger() {
        let viewport = Rc::new(SimulatedViewport::new(1280.0, 800.0));
        let mut sim = ScrollSimulation::mount(
            viewport,
            &[block("gallery", 1000.0, 400.0, 0)],
            &RevealStyle::default(),
        );
        sim.advance_to(0.0, Millis(0));
        assert_eq!(sim.advance_to(600.0, Millis(100)).len(), 1);
        assert!(sim.advance_to(0.0, Millis(200)).is_empty());
        assert!(sim.advance_to(600.0, Millis(300)).is_empty());

        let wrapper = &sim.wrappers()[0];
        assert_eq!(wrapper.state(), RevealState::Revealed);
        assert_eq!(wrapper.transition_count(), 1);
    }

    #[test]
    fn unmount_releases_every_pending_watch() {
        let viewport = Rc::new(SimulatedViewport::new(1280.0, 800.0));
        let sim = ScrollSimulation::mount(
            viewport,
            &[block("a", 0.0, 100.0, 0), block("b", 5000.0, 100.0, 0)],
            &RevealStyle::default(),
        );
        assert_eq!(sim.still_hidden(), vec!["a", "b"]);
        let viewport = sim.unmount_all();
        assert_eq!(viewport.active_watches(), 0);
        assert!(viewport.evaluate().is_empty());
    }

    #[test]
    fn staggered_items_entering_together_are_spaced_by_delay() {
        let blocks: Vec<_> = (0..5)
            .map(|i| block(&format!("image {i}"), 1000.0, 300.0, i * 100))
            .collect();
        let viewport = Rc::new(SimulatedViewport::new(1280.0, 800.0));
        let mut sim = ScrollSimulation::mount(viewport, &blocks, &RevealStyle::default());
        sim.advance_to(0.0, Millis(0));

        let events = sim.advance_to(600.0, Millis(1000));
        assert_eq!(events.len(), 5);
        let starts: Vec<u64> = events.iter().map(|e| e.window.start.0).collect();
        assert_eq!(starts, vec![1000, 1100, 1200, 1300, 1400]);
    }

    #[test]
    fn degenerate_plan_terminates_after_initial_pass() {
        let blocks = vec![block("top", 0.0, 200.0, 0), block("far", 5000.0, 200.0, 0)];
        for (height, step) in [(0.0, 0.0), (-800.0, 0.0), (f64::NAN, f64::NAN), (800.0, -50.0)] {
            let plan = ScrollPlan {
                viewport_height: height,
                step,
                ..ScrollPlan::default()
            };
            let timeline = reveal_timeline(&blocks, &plan, &RevealStyle::default());
            assert_eq!(
                timeline.events.len() + timeline.never_revealed.len(),
                2,
                "height={height} step={step}"
            );
        }
    }

    #[test]
    fn resize_that_uncovers_a_block_reveals_it_once() {
        let viewport = Rc::new(SimulatedViewport::new(1280.0, 800.0));
        let mut sim = ScrollSimulation::mount(
            viewport.clone(),
            &[block("services", 900.0, 400.0, 0)],
            &RevealStyle::default(),
        );
        assert!(sim.advance_to(0.0, Millis(0)).is_empty());

        // 100 of 400 px visible = 25%.
        viewport.resize(1280.0, 1000.0);
        let events = sim.advance_to(0.0, Millis(100));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].entered_at, Millis(100));

        viewport.resize(1280.0, 1400.0);
        assert!(sim.advance_to(0.0, Millis(200)).is_empty());
        assert_eq!(sim.wrappers()[0].transition_count(), 1);
    }

    #[test]
    fn detached_block_stays_hidden_and_unmounts_cleanly() {
        let viewport = Rc::new(SimulatedViewport::new(1280.0, 800.0));
        let mut sim = ScrollSimulation::mount(
            viewport.clone(),
            &[block("gallery", 1000.0, 400.0, 0)],
            &RevealStyle::default(),
        );
        let node = sim.wrappers()[0].node().unwrap();
        viewport.detach(node);

        for (i, y) in [0.0, 600.0, 1000.0].into_iter().enumerate() {
            assert!(sim.advance_to(y, Millis(i as u64 * 100)).is_empty());
        }
        assert_eq!(sim.wrappers()[0].state(), RevealState::Hidden);
        assert_eq!(sim.still_hidden(), vec!["gallery"]);

        let viewport = sim.unmount_all();
        assert_eq!(viewport.active_watches(), 0);
    }

    #[test]
    fn timeline_reaches_bottom_of_document() {
        let blocks = vec![
            block("top", 0.0, 200.0, 0),
            block("middle", 1500.0, 200.0, 0),
            block("bottom", 3000.0, 200.0, 150),
        ];
        let timeline = reveal_timeline(&blocks, &ScrollPlan::default(), &RevealStyle::default());
        assert!(timeline.never_revealed.is_empty());
        let events = timeline.events;
        let labels: Vec<&str> = events.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["top", "middle", "bottom"]);
        assert!(events.windows(2).all(|w| w[0].entered_at <= w[1].entered_at));
        let last = events.last().unwrap();
        assert_eq!(last.window.start, last.entered_at.plus(150));
    }
}
