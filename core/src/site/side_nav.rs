//! Home page side navigation
//!
//! A column of dots, one per home section, highlighting the section that
//! currently spans the upper third of the viewport.

/// A side navigation entry: anchor id and short label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideNavEntry {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SIDE_NAV_ENTRIES: &[SideNavEntry] = &[
    SideNavEntry { id: "hero", label: "Start" },
    SideNavEntry { id: "about", label: "About" },
    SideNavEntry { id: "businesses", label: "Ecosystem" },
    SideNavEntry { id: "solutions", label: "Why Us" },
    SideNavEntry { id: "trust", label: "Partners" },
    SideNavEntry { id: "contact", label: "Contact" },
];

/// Vertical extent of a rendered section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub top: u32,
    pub height: u32,
}

impl SectionSpan {
    fn contains(&self, position: u32) -> bool {
        position >= self.top && position < self.top.saturating_add(self.height)
    }
}

/// Tracks the active side navigation entry as the page scrolls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideNavTracker {
    active: &'static str,
}

impl Default for SideNavTracker {
    fn default() -> Self {
        Self { active: "hero" }
    }
}

impl SideNavTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from the scroll offset. `span_of` looks up a rendered section;
    /// sections that are not rendered are skipped. If no section contains the
    /// reading line the previous entry stays active.
    pub fn on_scroll(
        &mut self,
        scroll_y: u32,
        viewport_height: u32,
        span_of: impl Fn(&str) -> Option<SectionSpan>,
    ) -> &'static str {
        let reading_line = scroll_y.saturating_add(viewport_height / 3);
        if let Some(entry) = SIDE_NAV_ENTRIES
            .iter()
            .find(|entry| span_of(entry.id).is_some_and(|span| span.contains(reading_line)))
        {
            self.active = entry.id;
        }
        self.active
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(id: &str) -> Option<SectionSpan> {
        let (top, height) = match id {
            "hero" => (0, 30),
            "about" => (30, 20),
            "businesses" => (50, 40),
            "solutions" => (90, 20),
            "trust" => (110, 10),
            _ => return None,
        };
        Some(SectionSpan { top, height })
    }

    #[test]
    fn test_starts_on_hero() {
        assert_eq!(SideNavTracker::new().active(), "hero");
    }

    #[test]
    fn test_reading_line_uses_upper_third() {
        let mut tracker = SideNavTracker::new();
        // reading line = 20 + 30 / 3 = 30 -> first row of "about"
        assert_eq!(tracker.on_scroll(20, 30, layout), "about");
        assert_eq!(tracker.on_scroll(60, 30, layout), "businesses");
        assert!(tracker.is_active("businesses"));
    }

    #[test]
    fn test_unrendered_section_keeps_previous() {
        let mut tracker = SideNavTracker::new();
        tracker.on_scroll(100, 30, layout);
        assert_eq!(tracker.active(), "trust");
        // past the last rendered section: "contact" has no span
        assert_eq!(tracker.on_scroll(500, 30, layout), "trust");
    }
}
