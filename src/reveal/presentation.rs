//! Pure mapping from reveal state to a presentation descriptor.
//!
//! The rendering layer never looks at [`RevealState`] directly. It asks for a
//! [`Presentation`] and turns that into whatever its styling mechanism needs:
//! inline CSS for the generated page, numbers for the simulation.

use serde::{Deserialize, Serialize};

/// The two states of a reveal. `Revealed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// Styling shared by every reveal on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealStyle {
    /// Fixed animation duration in milliseconds.
    pub duration_ms: u64,
    /// Vertical offset of the hidden state (CSS length).
    pub offset: String,
    /// CSS timing function.
    pub easing: String,
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self {
            duration_ms: 700,
            offset: "2rem".to_string(),
            easing: "ease-out".to_string(),
        }
    }
}

/// What a block should look like, independent of any styling mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub opacity: f32,
    /// CSS length the block is shifted down by; `"0"` once revealed.
    pub offset: String,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub easing: String,
}

impl Presentation {
    pub fn for_state(state: RevealState, delay_ms: u64, style: &RevealStyle) -> Self {
        let (opacity, offset) = match state {
            RevealState::Hidden => (0.0, style.offset.clone()),
            RevealState::Revealed => (1.0, "0".to_string()),
        };
        Self {
            opacity,
            offset,
            delay_ms,
            duration_ms: style.duration_ms,
            easing: style.easing.clone(),
        }
    }

    /// Opacity and position only.
    pub fn visual_style(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({});",
            self.opacity, self.offset
        )
    }

    /// Full CSS declarations: visual state plus transition timing.
    pub fn to_style(&self) -> String {
        format!(
            "{} transition: opacity {dur}ms {ease}, transform {dur}ms {ease}; transition-delay: {}ms;",
            self.visual_style(),
            self.delay_ms,
            dur = self.duration_ms,
            ease = self.easing,
        )
    }
}

/// Interval over which the visual transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionWindow {
    pub start: super::Millis,
    pub end: super::Millis,
}

impl TransitionWindow {
    /// Window for a signal received at `entered_at`: starts after `delay_ms`
    /// and lasts `duration_ms`.
    pub fn scheduled(entered_at: super::Millis, delay_ms: u64, duration_ms: u64) -> Self {
        let start = entered_at.plus(delay_ms);
        Self {
            start,
            end: start.plus(duration_ms),
        }
    }

    /// Animation progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: super::Millis) -> f64 {
        if now <= self.start {
            return 0.0;
        }
        if now >= self.end {
            return 1.0;
        }
        (now.0 - self.start.0) as f64 / (self.end.0 - self.start.0) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::Millis;

    #[test]
    fn hidden_is_transparent_and_offset() {
        let p = Presentation::for_state(RevealState::Hidden, 0, &RevealStyle::default());
        assert_eq!(p.opacity, 0.0);
        assert_eq!(p.offset, "2rem");
        assert_eq!(p.duration_ms, 700);
    }

    #[test]
    fn revealed_is_opaque_and_in_place() {
        let p = Presentation::for_state(RevealState::Revealed, 300, &RevealStyle::default());
        assert_eq!(p.opacity, 1.0);
        assert_eq!(p.offset, "0");
        assert_eq!(p.delay_ms, 300);
    }

    #[test]
    fn style_carries_delay_and_timing() {
        let style = RevealStyle {
            duration_ms: 500,
            offset: "1rem".into(),
            easing: "linear".into(),
        };
        let css = Presentation::for_state(RevealState::Hidden, 150, &style).to_style();
        assert!(css.contains("opacity: 0;"));
        assert!(css.contains("translateY(1rem)"));
        assert!(css.contains("opacity 500ms linear"));
        assert!(css.contains("transition-delay: 150ms;"));
    }

    #[test]
    fn window_starts_after_delay_and_ends_after_duration() {
        let w = TransitionWindow::scheduled(Millis(1000), 400, 700);
        assert_eq!(w.start, Millis(1400));
        assert_eq!(w.end, Millis(2100));
    }

    #[test]
    fn progress_is_clamped() {
        let w = TransitionWindow::scheduled(Millis(0), 100, 200);
        assert_eq!(w.progress(Millis(50)), 0.0);
        assert_eq!(w.progress(Millis(100)), 0.0);
        assert_eq!(w.progress(Millis(200)), 0.5);
        assert_eq!(w.progress(Millis(900)), 1.0);
    }

    #[test]
    fn zero_duration_window_is_instant() {
        let w = TransitionWindow::scheduled(Millis(10), 0, 0);
        assert_eq!(w.progress(Millis(9)), 0.0);
        assert_eq!(w.progress(Millis(10)), 0.0);
        assert_eq!(w.progress(Millis(11)), 1.0);
    }
}
