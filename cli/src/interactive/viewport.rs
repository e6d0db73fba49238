//! Scrollable terminal viewport with eased smooth scrolling

use std::time::{Duration, Instant};
use tracing::trace;
use vedanco_core::config::{Easing, UiConfig};
use vedanco_core::site::{SectionSpan, Viewport};

#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: u32,
    to: u32,
    start: Instant,
}

/// The visible window onto the current document
///
/// A new scroll request while an animation is running retargets it from
/// the current position; nothing waits for an animation to finish.
#[derive(Debug, Clone)]
pub struct TerminalViewport {
    offset: u32,
    height: u32,
    content_height: u32,
    anchors: Vec<(&'static str, SectionSpan)>,
    animation: Option<ScrollAnimation>,
    easing: Easing,
    duration: Duration,
}

impl TerminalViewport {
    pub fn new(ui: &UiConfig, height: u32) -> Self {
        Self {
            offset: 0,
            height,
            content_height: 0,
            anchors: Vec::new(),
            animation: None,
            easing: ui.easing,
            duration: Duration::from_millis(ui.scroll_duration_ms),
        }
    }

    /// Replace the document layout, keeping the offset in range
    pub fn set_layout(&mut self, anchors: &[(&'static str, SectionSpan)], content_height: u32) {
        self.anchors = anchors.to_vec();
        self.content_height = content_height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn resize(&mut self, height: u32) {
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Back to the top at once; a freshly mounted page starts there
    pub fn reset(&mut self) {
        self.offset = 0;
        self.animation = None;
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn max_offset(&self) -> u32 {
        self.content_height.saturating_sub(self.height)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Scroll by whole rows immediately
    pub fn scroll_by(&mut self, delta: i64) {
        self.animation = None;
        let next = (self.offset as i64 + delta).clamp(0, self.max_offset() as i64);
        self.offset = next as u32;
    }

    /// Start (or retarget) a smooth scroll towards `target`
    pub fn animate_to(&mut self, target: u32, now: Instant) {
        let to = target.min(self.max_offset());
        trace!("Smooth scroll {} -> {}", self.offset, to);
        if self.duration.is_zero() || to == self.offset {
            self.offset = to;
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to,
            start: now,
        });
    }

    /// Advance the running animation. Returns whether the offset moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };

        let elapsed = now.saturating_duration_since(animation.start);
        let before = self.offset;
        if elapsed >= self.duration {
            self.offset = animation.to;
            self.animation = None;
        } else {
            let progress = self
                .easing
                .apply(elapsed.as_secs_f64() / self.duration.as_secs_f64());
            let from = animation.from as f64;
            let to = animation.to as f64;
            self.offset = (from + (to - from) * progress).round() as u32;
        }
        self.offset != before
    }
}

impl Viewport for TerminalViewport {
    fn scroll_to_anchor(&mut self, anchor: &str) -> bool {
        match self.anchors.iter().find(|(id, _)| *id == anchor) {
            Some((_, span)) => {
                let top = span.top;
                self.animate_to(top, Instant::now());
                true
            }
            None => false,
        }
    }

    fn scroll_to_top(&mut self) {
        self.animate_to(0, Instant::now());
    }
}
