//! Navbar chrome state
//!
//! Dropdowns, the mobile menu and its accordion are pure UI state. They never
//! feed back into the navigation target; the router only closes them.

use super::taxonomy::MenuKey;
use super::view::View;
use crate::config::SCROLL_THRESHOLD;

/// Overlay and scroll state of the navigation chrome
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromeState {
    active_dropdown: Option<MenuKey>,
    mobile_menu_open: bool,
    mobile_expanded: Option<MenuKey>,
    scrolled: bool,
}

impl ChromeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a dropdown; any other open dropdown closes
    pub fn open_dropdown(&mut self, key: MenuKey) {
        self.active_dropdown = Some(key);
    }

    /// Close the open dropdown, if any
    pub fn close_dropdown(&mut self) {
        self.active_dropdown = None;
    }

    /// A pointer press landed outside the navigation chrome
    pub fn pointer_down_outside(&mut self) {
        self.close_dropdown();
    }

    /// The pointer left the dropdown panel
    pub fn pointer_left_dropdown(&mut self) {
        self.close_dropdown();
    }

    /// Toggle the full-screen mobile menu
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Expand a mobile accordion section, or collapse it if already expanded
    pub fn toggle_mobile_section(&mut self, key: MenuKey) {
        self.mobile_expanded = if self.mobile_expanded == Some(key) {
            None
        } else {
            Some(key)
        };
    }

    /// Close every overlay. Called on each navigation.
    pub fn close_overlays(&mut self) {
        self.active_dropdown = None;
        self.mobile_menu_open = false;
    }

    /// Record the document scroll offset
    pub fn on_scroll(&mut self, offset: u32) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    pub fn active_dropdown(&self) -> Option<MenuKey> {
        self.active_dropdown
    }

    pub fn is_dropdown_open(&self, key: MenuKey) -> bool {
        self.active_dropdown == Some(key)
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn mobile_expanded(&self) -> Option<MenuKey> {
        self.mobile_expanded
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Whether the chrome renders on a solid background
    pub fn solid_mode(&self, view: View) -> bool {
        self.scrolled || self.mobile_menu_open || self.active_dropdown.is_some() || view != View::Home
    }
}
