//! View router for managing navigation state
//!
//! This module owns the single source of truth for which page is displayed
//! and which section inside it should be scrolled into view. Navbar items,
//! mega-menu entries, footer links and page CTAs all funnel through
//! [`ViewRouter::navigate`] or [`ViewRouter::navigate_to`].

use super::chrome::ChromeState;
use super::taxonomy::{CONTACT_LABEL, HOME_LABEL, RESOLUTION_ORDER};
use super::view::{NavigationTarget, View};
use tracing::{debug, trace};

/// Scroll surface the router acts on when staying on the current view
pub trait Viewport {
    /// Smoothly scroll the element with `anchor` as identifier to the top of
    /// the viewport. Returns `false` when no such element is rendered.
    fn scroll_to_anchor(&mut self, anchor: &str) -> bool;

    /// Smoothly scroll to the top of the document
    fn scroll_to_top(&mut self);
}

/// A viewport that never scrolls; useful where nothing is rendered
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedViewport;

impl Viewport for DetachedViewport {
    fn scroll_to_anchor(&mut self, _anchor: &str) -> bool {
        false
    }

    fn scroll_to_top(&mut self) {}
}

/// What a navigation call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The view did not change; the viewport was scrolled in place
    ScrolledInPlace {
        target: NavigationTarget,
        /// Whether the section anchor was found (always true for page top)
        anchor_found: bool,
    },
    /// The view changed; the new page consumes the section on mount
    Mounted {
        from: View,
        target: NavigationTarget,
    },
    /// A direct target on the current view; the page reacts to the new section
    Retargeted { target: NavigationTarget },
}

impl NavigationOutcome {
    pub fn target(&self) -> &NavigationTarget {
        match self {
            NavigationOutcome::ScrolledInPlace { target, .. }
            | NavigationOutcome::Mounted { target, .. }
            | NavigationOutcome::Retargeted { target } => target,
        }
    }

    /// Whether the destination page was (re)mounted
    pub fn remounted(&self) -> bool {
        matches!(self, NavigationOutcome::Mounted { .. })
    }
}

/// Resolve a destination label to a navigation target
///
/// Never fails: labels that are neither reserved nor in the menu taxonomy
/// land on the home page.
pub fn resolve(label: &str) -> NavigationTarget {
    if label == HOME_LABEL {
        return NavigationTarget::top(View::Home);
    }

    for category in RESOLUTION_ORDER {
        if label == category.label {
            return NavigationTarget::top(category.view);
        }
        if category.contains(label) {
            return NavigationTarget {
                view: category.view,
                section: category.leaf_section(label),
            };
        }
    }

    if label == CONTACT_LABEL {
        return NavigationTarget::top(View::Contact);
    }

    debug!("Unrecognized destination '{}', falling back to home", label);
    NavigationTarget::top(View::Home)
}

/// Router state: the current target plus the chrome overlays it closes
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    current: NavigationTarget,
    chrome: ChromeState,
}

impl ViewRouter {
    /// Create a router on the home page top
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router starting at a given target
    pub fn starting_at(target: NavigationTarget) -> Self {
        Self {
            current: target,
            chrome: ChromeState::default(),
        }
    }

    /// Navigate to a human-readable destination label
    pub fn navigate(&mut self, label: &str, viewport: &mut dyn Viewport) -> NavigationOutcome {
        self.chrome.close_overlays();

        let target = resolve(label);
        debug!("Navigate '{}' -> {}", label, target);

        if target.view == self.current.view {
            let anchor_found = match target.section_id() {
                Some(anchor) => {
                    let found = viewport.scroll_to_anchor(anchor);
                    if !found {
                        trace!("Anchor '{}' not rendered, scroll skipped", anchor);
                    }
                    found
                }
                None => {
                    viewport.scroll_to_top();
                    true
                }
            };
            // Re-assign even though the view is unchanged to keep the stored
            // section in sync with what was scrolled to.
            self.current = target.clone();
            NavigationOutcome::ScrolledInPlace {
                target,
                anchor_found,
            }
        } else {
            let from = self.current.view;
            self.current = target.clone();
            NavigationOutcome::Mounted { from, target }
        }
    }

    /// Navigate to an explicit target, bypassing label resolution
    pub fn navigate_to(&mut self, target: NavigationTarget) -> NavigationOutcome {
        self.chrome.close_overlays();
        debug!("Navigate to {}", target);

        let from = self.current.view;
        self.current = target.clone();
        if from == target.view {
            NavigationOutcome::Retargeted { target }
        } else {
            NavigationOutcome::Mounted { from, target }
        }
    }

    /// The current navigation target
    pub fn current(&self) -> &NavigationTarget {
        &self.current
    }

    /// The current view
    pub fn view(&self) -> View {
        self.current.view
    }

    pub fn chrome(&self) -> &ChromeState {
        &self.chrome
    }

    pub fn chrome_mut(&mut self) -> &mut ChromeState {
        &mut self.chrome
    }

    /// Whether the navbar renders on a solid background
    pub fn solid_mode(&self) -> bool {
        self.chrome.solid_mode(self.current.view)
    }
}
