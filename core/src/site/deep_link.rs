//! Deep-link consumption on the destination page
//!
//! When a view mounts with a section, or its section changes while mounted,
//! the page reacts: Business expands and scrolls to the vertical, Solutions
//! and About scroll after their layout settles, Legal selects a tab.
//! Scrolls are deferred by a settle delay and fulfilled either when the
//! deadline passes or when the page reports its layout ready.

use super::pages::{page_for, SectionKind, LEGAL};
use super::router::Viewport;
use super::view::{NavigationTarget, View};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Settle delay before the Business page scrolls to a vertical
pub const BUSINESS_SETTLE: Duration = Duration::from_millis(100);
/// Settle delay before the Solutions and About pages scroll
pub const LAYOUT_SETTLE: Duration = Duration::from_millis(300);

/// Tab shown when the Legal page mounts without a matching section
pub const DEFAULT_LEGAL_TAB: &str = "terms";

/// A scroll waiting for the destination layout to settle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingScroll {
    pub anchor: String,
    pub settle: Duration,
}

/// What the page does in response to a new target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLinkAction {
    Scroll {
        pending: PendingScroll,
        /// Section index auto-expanded on Business
        expand: Option<usize>,
        /// Card highlighted on Solutions
        highlight: bool,
    },
    SelectTab(&'static str),
}

#[derive(Debug, Clone)]
struct Scheduled {
    scroll: PendingScroll,
    due: Instant,
}

/// Per-page focus state driven by the router's current target
#[derive(Debug, Clone)]
pub struct PageFocus {
    view: Option<View>,
    section: Option<String>,
    expanded: Option<usize>,
    highlighted: Option<String>,
    legal_tab: &'static str,
    scheduled: Option<Scheduled>,
}

impl Default for PageFocus {
    fn default() -> Self {
        Self {
            view: None,
            section: None,
            expanded: None,
            highlighted: None,
            legal_tab: DEFAULT_LEGAL_TAB,
            scheduled: None,
        }
    }
}

impl PageFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to the router's current target.
    ///
    /// A view change remounts the page and drops any local state, including
    /// a scroll that had not fired yet. Seeing the same section again while
    /// mounted does nothing.
    pub fn observe(&mut self, target: &NavigationTarget, now: Instant) -> Option<DeepLinkAction> {
        let remount = self.view != Some(target.view);
        if remount {
            trace!("Mounting {}", target.view);
            *self = Self {
                view: Some(target.view),
                ..Self::default()
            };
        } else if self.section == target.section {
            return None;
        }
        self.section = target.section.clone();
        // The newest target wins: an older scroll still waiting is dropped,
        // and the Solutions highlight follows the current section.
        self.scheduled = None;
        if target.view == View::Solutions {
            self.highlighted = target.section_id().map(str::to_string);
        }

        let section = target.section_id()?;
        let action = match target.view {
            View::Business => {
                let expand = page_for(View::Business)
                    .section_index(section)
                    .filter(|&index| {
                        page_for(View::Business).sections[index].kind == SectionKind::Expandable
                    });
                if expand.is_some() {
                    self.expanded = expand;
                }
                DeepLinkAction::Scroll {
                    pending: PendingScroll {
                        anchor: section.to_string(),
                        settle: BUSINESS_SETTLE,
                    },
                    expand,
                    highlight: false,
                }
            }
            View::Solutions => DeepLinkAction::Scroll {
                pending: PendingScroll {
                    anchor: section.to_string(),
                    settle: LAYOUT_SETTLE,
                },
                expand: None,
                highlight: true,
            },
            View::About => DeepLinkAction::Scroll {
                pending: PendingScroll {
                    anchor: section.to_string(),
                    settle: LAYOUT_SETTLE,
                },
                expand: None,
                highlight: false,
            },
            View::Legal => {
                let tab = LEGAL
                    .anchors()
                    .find(|id| *id == section || section.contains(id))?;
                self.legal_tab = tab;
                DeepLinkAction::SelectTab(tab)
            }
            View::Home | View::Portfolio | View::Careers | View::Contact => return None,
        };

        if let DeepLinkAction::Scroll { pending, .. } = &action {
            debug!("Deferring scroll to '{}' by {:?}", pending.anchor, pending.settle);
            self.scheduled = Some(Scheduled {
                scroll: pending.clone(),
                due: now + pending.settle,
            });
        }
        Some(action)
    }

    /// Take the pending scroll if its settle deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<PendingScroll> {
        if self.scheduled.as_ref().is_some_and(|s| now >= s.due) {
            return self.scheduled.take().map(|s| s.scroll);
        }
        None
    }

    /// The page finished laying out: the pending scroll fires now
    pub fn layout_ready(&mut self) -> Option<PendingScroll> {
        self.scheduled.take().map(|s| s.scroll)
    }

    /// Fire the pending scroll on `viewport` if it is due
    pub fn fulfil(&mut self, viewport: &mut dyn Viewport, now: Instant) -> bool {
        match self.take_due(now) {
            Some(scroll) => viewport.scroll_to_anchor(&scroll.anchor),
            None => false,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.scheduled.is_some()
    }

    /// Manually toggle an expandable section. Toggling the open one
    /// collapses it; toggling another switches to it.
    pub fn toggle_expanded(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn select_tab(&mut self, tab: &'static str) {
        self.legal_tab = tab;
    }

    pub fn view(&self) -> Option<View> {
        self.view
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn legal_tab(&self) -> &'static str {
        self.legal_tab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Viewport for Recorder {
        fn scroll_to_anchor(&mut self, anchor: &str) -> bool {
            self.0.push(anchor.to_string());
            true
        }

        fn scroll_to_top(&mut self) {}
    }

    #[test]
    fn test_business_expands_and_waits_for_settle() {
        let mut focus = PageFocus::new();
        let start = Instant::now();
        let action = focus
            .observe(&NavigationTarget::section(View::Business, "vedanco-air"), start)
            .unwrap();

        let index = page_for(View::Business).section_index("vedanco-air");
        assert_eq!(
            action,
            DeepLinkAction::Scroll {
                pending: PendingScroll {
                    anchor: "vedanco-air".to_string(),
                    settle: BUSINESS_SETTLE,
                },
                expand: index,
                highlight: false,
            }
        );
        assert_eq!(focus.expanded(), index);

        let mut viewport = Recorder::default();
        assert!(!focus.fulfil(&mut viewport, start + Duration::from_millis(50)));
        assert!(focus.fulfil(&mut viewport, start + BUSINESS_SETTLE));
        assert_eq!(viewport.0, vec!["vedanco-air"]);
        assert!(!focus.has_pending());
    }

    #[test]
    fn test_layout_ready_fires_early() {
        let mut focus = PageFocus::new();
        let now = Instant::now();
        focus.observe(&NavigationTarget::section(View::About, "leadership"), now);
        assert_eq!(
            focus.layout_ready().map(|s| s.anchor),
            Some("leadership".to_string())
        );
        assert_eq!(focus.take_due(now + LAYOUT_SETTLE), None);
    }

    #[test]
    fn test_solutions_highlights_card() {
        let mut focus = PageFocus::new();
        let action = focus.observe(
            &NavigationTarget::section(View::Solutions, "startup-incubation"),
            Instant::now(),
        );
        assert!(matches!(
            action,
            Some(DeepLinkAction::Scroll { highlight: true, .. })
        ));
        assert_eq!(focus.highlighted(), Some("startup-incubation"));
    }

    #[test]
    fn test_legal_tab_selection() {
        let mut focus = PageFocus::new();
        let now = Instant::now();
        assert_eq!(focus.observe(&NavigationTarget::top(View::Legal), now), None);
        assert_eq!(focus.legal_tab(), "terms");

        assert_eq!(
            focus.observe(&NavigationTarget::section(View::Legal, "cookies"), now),
            Some(DeepLinkAction::SelectTab("cookies"))
        );
        // containment also matches
        assert_eq!(
            focus.observe(&NavigationTarget::section(View::Legal, "privacy-policy"), now),
            Some(DeepLinkAction::SelectTab("privacy"))
        );
        assert!(!focus.has_pending());
    }

    #[test]
    fn test_same_section_is_consumed_once() {
        let mut focus = PageFocus::new();
        let now = Instant::now();
        let target = NavigationTarget::section(View::Business, "vedanco-logistics");
        assert!(focus.observe(&target, now).is_some());
        assert_eq!(focus.observe(&target, now), None);
    }

    #[test]
    fn test_clearing_section_cancels_pending_scroll() {
        let mut focus = PageFocus::new();
        let now = Instant::now();
        focus.observe(&NavigationTarget::top(View::Business), now);
        focus.observe(&NavigationTarget::section(View::Business, "vedanco-air"), now);
        assert!(focus.has_pending());

        assert_eq!(focus.observe(&NavigationTarget::top(View::Business), now), None);
        assert!(!focus.has_pending());
        assert_eq!(focus.take_due(now + BUSINESS_SETTLE), None);
        assert_eq!(focus.layout_ready(), None);
    }

    #[test]
    fn test_newer_section_replaces_pending_scroll() {
        let mut focus = PageFocus::new();
        let now = Instant::now();
        focus.observe(&NavigationTarget::section(View::About, "leadership"), now);
        focus.observe(&NavigationTarget::section(View::About, "global-presence"), now);

        assert_eq!(
            focus.take_due(now + LAYOUT_SETTLE).map(|s| s.anchor),
            Some("global-presence".to_string())
        );
        assert!(!focus.has_pending());
    }

    #[test]
    fn test_solutions_highlight_follows_section() {
        let mut focus = PageFocus::new();
        let now = Instant::now();
        focus.observe(
            &NavigationTarget::section(View::Solutions, "startup-incubation"),
            now,
        );
        assert_eq!(focus.highlighted(), Some("startup-incubation"));

        focus.observe(&NavigationTarget::top(View::Solutions), now);
        assert_eq!(focus.highlighted(), None);
        assert!(!focus.has_pending());
    }

    #[test]
    fn test_remount_drops_pending_and_expansion() {
        let mut focus = PageFocus::new();
        let now = Instant::now();
        focus.observe(&NavigationTarget::section(View::Business, "vedanco-air"), now);
        assert!(focus.has_pending());

        assert_eq!(focus.observe(&NavigationTarget::top(View::Home), now), None);
        assert!(!focus.has_pending());
        assert_eq!(focus.expanded(), None);
        assert_eq!(focus.view(), Some(View::Home));
    }

    #[test]
    fn test_pages_without_deep_links_ignore_sections() {
        let mut focus = PageFocus::new();
        let now = Instant::now();
        assert_eq!(
            focus.observe(&NavigationTarget::section(View::Home, "trust"), now),
            None
        );
        assert_eq!(
            focus.observe(&NavigationTarget::section(View::Portfolio, "featured"), now),
            None
        );
    }

    #[test]
    fn test_toggle_expanded() {
        let mut focus = PageFocus::new();
        focus.toggle_expanded(2);
        assert_eq!(focus.expanded(), Some(2));
        focus.toggle_expanded(4);
        assert_eq!(focus.expanded(), Some(4));
        focus.toggle_expanded(4);
        assert_eq!(focus.expanded(), None);
    }
}
