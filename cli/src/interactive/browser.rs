//! Browser state machine
//!
//! Everything the terminal browser does, independent of how it is drawn:
//! keyboard handling for the navbar, dropdowns, mobile menu, page and
//! footer, plus the per-frame work (intro timeout, smooth scrolling,
//! deferred deep-link scrolls, side navigation tracking).

use super::document::Document;
use super::viewport::TerminalViewport;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tracing::debug;
use vedanco_core::config::UiConfig;
use vedanco_core::site::pages::LEGAL;
use vedanco_core::site::taxonomy::{CONTACT_LABEL, HOME_LABEL};
use vedanco_core::site::{
    page_for, ChromeState, IntroGate, MenuKey, NavigationTarget, PageFocus, RouterHandle,
    SectionKind, SideNavTracker, View, Viewport, FOOTER_LINKS, SIDE_NAV_ENTRIES,
};

/// Terminals narrower than this get the mobile menu
pub const COMPACT_WIDTH: u16 = 72;

/// Columns reserved for the home side navigation
pub const SIDE_NAV_WIDTH: u16 = 20;

/// Rows taken by the navbar and the footer bar
const NAVBAR_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 2;

/// Key input after mapping from terminal events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKey {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Esc,
    Tab,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    Top,
    Toggle,
    Back,
    Quit,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserCommand {
    Continue,
    Quit,
}

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Navbar,
    Page,
    Footer,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Navbar => Focus::Page,
            Focus::Page => Focus::Footer,
            Focus::Footer => Focus::Navbar,
        }
    }
}

/// Top-level navbar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Menu(MenuKey),
    Contact,
}

impl NavItem {
    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Home => HOME_LABEL,
            NavItem::Menu(key) => key.category().label,
            NavItem::Contact => CONTACT_LABEL,
        }
    }
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem::Home,
    NavItem::Menu(MenuKey::About),
    NavItem::Menu(MenuKey::Businesses),
    NavItem::Menu(MenuKey::Solutions),
    NavItem::Menu(MenuKey::Portfolio),
    NavItem::Contact,
];

/// A row of the mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileRow {
    Category(MenuKey),
    Entry(&'static str),
    Contact,
}

/// Labels a dropdown offers: the category itself, then its leaves
pub fn dropdown_entries(key: MenuKey) -> Vec<&'static str> {
    let category = key.category();
    let mut entries = vec![category.label];
    entries.extend(category.leaves());
    entries
}

pub struct BrowserState {
    handle: RouterHandle,
    targets: watch::Receiver<NavigationTarget>,
    intro: IntroGate,
    intro_until: Instant,
    focus: Focus,
    nav_index: usize,
    dropdown_index: usize,
    mobile_index: usize,
    footer_index: usize,
    cta_index: usize,
    page_focus: PageFocus,
    viewport: TerminalViewport,
    side_nav: SideNavTracker,
    document: Document,
    width: u16,
    rows: u16,
    awaiting_layout: bool,
}

impl BrowserState {
    pub fn new(ui: &UiConfig, (width, rows): (u16, u16), now: Instant) -> Self {
        let handle = RouterHandle::default();
        let targets = handle.subscribe();
        let mut state = Self {
            handle,
            targets,
            intro: IntroGate::new(),
            intro_until: now + Duration::from_millis(ui.intro_ms),
            focus: Focus::Navbar,
            nav_index: 0,
            dropdown_index: 0,
            mobile_index: 0,
            footer_index: 0,
            cta_index: 0,
            page_focus: PageFocus::new(),
            viewport: TerminalViewport::new(ui, 0),
            side_nav: SideNavTracker::new(),
            document: Document::default(),
            width,
            rows,
            awaiting_layout: false,
        };
        let initial = state.handle.current();
        state.page_focus.observe(&initial, now);
        state.relayout();
        state
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: BrowserKey, now: Instant) -> BrowserCommand {
        if !self.intro.is_finished() {
            // Any key skips the intro
            self.finish_intro();
            return BrowserCommand::Continue;
        }

        match key {
            BrowserKey::Quit => return BrowserCommand::Quit,
            BrowserKey::Tab => {
                self.handle.update_chrome(ChromeState::pointer_down_outside);
                self.focus = self.focus.next();
                self.relayout();
            }
            BrowserKey::Back => {
                self.handle.navigate_to(NavigationTarget::top(View::Home));
            }
            BrowserKey::ScrollDown => self.viewport.scroll_by(1),
            BrowserKey::ScrollUp => self.viewport.scroll_by(-1),
            BrowserKey::PageDown => self.viewport.scroll_by(self.page_rows() as i64),
            BrowserKey::PageUp => self.viewport.scroll_by(-(self.page_rows() as i64)),
            BrowserKey::Top => self.viewport.animate_to(0, now),
            _ => match self.focus {
                Focus::Navbar if self.is_compact() => self.mobile_key(key),
                Focus::Navbar => self.navbar_key(key),
                Focus::Page => self.page_key(key, now),
                Focus::Footer => self.footer_key(key),
            },
        }

        self.sync(now);
        self.viewport.resize(self.page_rows() as u32);
        self.track_scroll();
        BrowserCommand::Continue
    }

    fn navbar_key(&mut self, key: BrowserKey) {
        let item = NAV_ITEMS[self.nav_index];
        let open = self.handle.chrome().active_dropdown();

        match key {
            BrowserKey::Left | BrowserKey::Right => {
                // Moving across the navbar leaves the open panel
                self.handle.update_chrome(ChromeState::pointer_left_dropdown);
                self.nav_index = if key == BrowserKey::Left {
                    (self.nav_index + NAV_ITEMS.len() - 1) % NAV_ITEMS.len()
                } else {
                    (self.nav_index + 1) % NAV_ITEMS.len()
                };
            }
            BrowserKey::Down => match (item, open) {
                (NavItem::Menu(key), Some(open)) if key == open => {
                    let last = dropdown_entries(key).len() - 1;
                    self.dropdown_index = (self.dropdown_index + 1).min(last);
                }
                (NavItem::Menu(key), _) => self.open_dropdown(key),
                _ => {}
            },
            BrowserKey::Up => {
                if open.is_some() {
                    if self.dropdown_index == 0 {
                        self.handle.update_chrome(ChromeState::close_dropdown);
                    } else {
                        self.dropdown_index -= 1;
                    }
                }
            }
            BrowserKey::Enter => match (item, open) {
                (NavItem::Menu(key), Some(open)) if key == open => {
                    let entries = dropdown_entries(key);
                    if let Some(label) = entries.get(self.dropdown_index).copied() {
                        self.navigate(label);
                    }
                }
                (NavItem::Menu(key), _) => self.open_dropdown(key),
                (item, _) => self.navigate(item.label()),
            },
            BrowserKey::Esc => self.handle.update_chrome(ChromeState::pointer_down_outside),
            _ => {}
        }
    }

    fn open_dropdown(&mut self, key: MenuKey) {
        self.handle.update_chrome(|chrome| chrome.open_dropdown(key));
        self.dropdown_index = 0;
    }

    /// Rows of the mobile menu as currently expanded
    pub fn mobile_rows(&self) -> Vec<MobileRow> {
        let expanded = self.handle.chrome().mobile_expanded();
        let mut rows = Vec::new();
        for key in MenuKey::MOBILE_ORDER {
            rows.push(MobileRow::Category(key));
            if expanded == Some(key) {
                rows.extend(dropdown_entries(key).into_iter().map(MobileRow::Entry));
            }
        }
        rows.push(MobileRow::Contact);
        rows
    }

    fn mobile_key(&mut self, key: BrowserKey) {
        let chrome = self.handle.chrome();
        if !chrome.mobile_menu_open() {
            if key == BrowserKey::Enter {
                self.handle.update_chrome(ChromeState::toggle_mobile_menu);
                self.mobile_index = 0;
            }
            return;
        }

        let rows = self.mobile_rows();
        match key {
            BrowserKey::Up => self.mobile_index = self.mobile_index.saturating_sub(1),
            BrowserKey::Down => self.mobile_index = (self.mobile_index + 1).min(rows.len() - 1),
            BrowserKey::Enter => match rows.get(self.mobile_index).copied() {
                Some(MobileRow::Category(key)) => {
                    self.handle.update_chrome(|chrome| chrome.toggle_mobile_section(key));
                    let rows = self.mobile_rows();
                    self.mobile_index = rows
                        .iter()
                        .position(|row| *row == MobileRow::Category(key))
                        .unwrap_or(0);
                }
                Some(MobileRow::Entry(label)) => self.navigate(label),
                Some(MobileRow::Contact) => self.navigate(CONTACT_LABEL),
                None => {}
            },
            BrowserKey::Esc => self.handle.update_chrome(ChromeState::toggle_mobile_menu),
            _ => {}
        }
    }

    fn page_key(&mut self, key: BrowserKey, now: Instant) {
        let page = page_for(self.handle.view());
        match key {
            BrowserKey::Left | BrowserKey::Right if page.view == View::Legal => {
                let tabs: Vec<_> = LEGAL.anchors().collect();
                let current = tabs
                    .iter()
                    .position(|tab| *tab == self.page_focus.legal_tab())
                    .unwrap_or(0);
                let next = if key == BrowserKey::Left {
                    (current + tabs.len() - 1) % tabs.len()
                } else {
                    (current + 1) % tabs.len()
                };
                self.page_focus.select_tab(tabs[next]);
                self.relayout();
                self.viewport.animate_to(0, now);
            }
            BrowserKey::Left if !page.ctas.is_empty() => {
                self.cta_index = (self.cta_index + page.ctas.len() - 1) % page.ctas.len();
                self.relayout();
            }
            BrowserKey::Right if !page.ctas.is_empty() => {
                self.cta_index = (self.cta_index + 1) % page.ctas.len();
                self.relayout();
            }
            BrowserKey::Up | BrowserKey::Down if self.shows_side_nav() => {
                self.step_side_nav(key == BrowserKey::Down);
            }
            BrowserKey::Up => self.viewport.scroll_by(-1),
            BrowserKey::Down => self.viewport.scroll_by(1),
            BrowserKey::Toggle => {
                let reading_line = self.viewport.offset() + self.viewport.height() / 3;
                if let Some(index) = self.document.section_at(reading_line) {
                    if page.sections[index].kind == SectionKind::Expandable {
                        self.page_focus.toggle_expanded(index);
                        self.relayout();
                    }
                }
            }
            BrowserKey::Enter => {
                if let Some(cta) = page.ctas.get(self.cta_index) {
                    debug!("CTA '{}' -> {}", cta.label, cta.target());
                    let target = cta.target();
                    let anchored = target.section.is_some();
                    self.handle.navigate_to(target);
                    if !anchored {
                        Viewport::scroll_to_top(&mut self.viewport);
                    }
                }
            }
            _ => {}
        }
    }

    /// Jump to the previous or next home section, as clicking its dot does
    fn step_side_nav(&mut self, forward: bool) {
        let current = SIDE_NAV_ENTRIES
            .iter()
            .position(|entry| self.side_nav.is_active(entry.id))
            .unwrap_or(0);
        let next = if forward {
            (current + 1).min(SIDE_NAV_ENTRIES.len() - 1)
        } else {
            current.saturating_sub(1)
        };
        Viewport::scroll_to_anchor(&mut self.viewport, SIDE_NAV_ENTRIES[next].id);
    }

    fn footer_key(&mut self, key: BrowserKey) {
        match key {
            BrowserKey::Left | BrowserKey::Up => {
                self.footer_index = (self.footer_index + FOOTER_LINKS.len() - 1) % FOOTER_LINKS.len();
            }
            BrowserKey::Right | BrowserKey::Down => {
                self.footer_index = (self.footer_index + 1) % FOOTER_LINKS.len();
            }
            BrowserKey::Enter => {
                FOOTER_LINKS[self.footer_index].follow(&self.handle, &mut self.viewport);
            }
            _ => {}
        }
    }

    fn navigate(&mut self, label: &str) {
        let outcome = self.handle.navigate(label, &mut self.viewport);
        debug!("'{}' -> {:?}", label, outcome);
    }

    /// Consume navigation target changes published by the router
    fn sync(&mut self, now: Instant) {
        if !self.targets.has_changed().unwrap_or(false) {
            return;
        }
        let target = self.targets.borrow_and_update().clone();

        if self.page_focus.view() != Some(target.view) {
            self.viewport.reset();
            self.cta_index = 0;
        }
        if let Some(action) = self.page_focus.observe(&target, now) {
            debug!("Deep link {:?}", action);
        }
        self.relayout();
        self.awaiting_layout = self.page_focus.has_pending();
    }

    fn relayout(&mut self) {
        let page = page_for(self.handle.view());
        self.document = Document::build(
            page,
            &self.page_focus,
            self.page_width() as usize,
            Some(self.cta_index).filter(|_| self.focus == Focus::Page),
        );
        self.viewport.resize(self.page_rows() as u32);
        self.viewport
            .set_layout(self.document.anchors(), self.document.height());
    }

    fn track_scroll(&mut self) {
        let offset = self.viewport.offset();
        self.handle.update_chrome(|chrome| chrome.on_scroll(offset));
        if self.handle.view() == View::Home {
            let document = &self.document;
            self.side_nav
                .on_scroll(offset, self.viewport.height(), |id| document.anchor_span(id));
        }
    }

    fn finish_intro(&mut self) {
        if self.intro.complete() {
            debug!("Intro finished");
            self.relayout();
        }
    }

    /// Whether [`BrowserState::tick`] has work to do
    pub fn needs_tick(&self, now: Instant) -> bool {
        (!self.intro.is_finished() && now >= self.intro_until)
            || self.viewport.is_animating()
            || self.page_focus.has_pending()
            || self.awaiting_layout
    }

    /// Per-frame work: intro timeout, deferred scrolls, smooth scrolling
    pub fn tick(&mut self, now: Instant) {
        if !self.intro.is_finished() && now >= self.intro_until {
            self.finish_intro();
        }

        // The new document has been drawn once: its layout is ready.
        if self.awaiting_layout {
            self.awaiting_layout = false;
            if let Some(scroll) = self.page_focus.layout_ready() {
                Viewport::scroll_to_anchor(&mut self.viewport, &scroll.anchor);
            }
        } else {
            self.page_focus.fulfil(&mut self.viewport, now);
        }

        self.viewport.tick(now);
        self.track_scroll();
    }

    pub fn resize(&mut self, width: u16, rows: u16) {
        self.width = width;
        self.rows = rows;
        self.relayout();
    }

    /// Rows available to the page between navbar and footer
    pub fn page_rows(&self) -> u16 {
        let chrome = self.handle.chrome();
        let overlay = if self.is_compact() {
            if chrome.mobile_menu_open() {
                self.mobile_rows().len() as u16
            } else {
                0
            }
        } else {
            chrome
                .active_dropdown()
                .map(|key| dropdown_entries(key).len() as u16 + 1)
                .unwrap_or(0)
        };
        self.rows
            .saturating_sub(NAVBAR_ROWS + FOOTER_ROWS + overlay)
            .max(1)
    }

    /// Columns available to the page, beside the side navigation if shown
    pub fn page_width(&self) -> u16 {
        if self.shows_side_nav() {
            self.width.saturating_sub(SIDE_NAV_WIDTH)
        } else {
            self.width
        }
    }

    pub fn shows_side_nav(&self) -> bool {
        !self.is_compact() && self.intro.shows_side_nav(self.handle.view())
    }

    pub fn is_compact(&self) -> bool {
        self.width < COMPACT_WIDTH
    }

    pub fn handle(&self) -> &RouterHandle {
        &self.handle
    }

    pub fn intro(&self) -> &IntroGate {
        &self.intro
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn nav_index(&self) -> usize {
        self.nav_index
    }

    pub fn dropdown_index(&self) -> usize {
        self.dropdown_index
    }

    pub fn mobile_index(&self) -> usize {
        self.mobile_index
    }

    pub fn footer_index(&self) -> usize {
        self.footer_index
    }

    pub fn page_focus(&self) -> &PageFocus {
        &self.page_focus
    }

    pub fn viewport(&self) -> &TerminalViewport {
        &self.viewport
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn side_nav(&self) -> &SideNavTracker {
        &self.side_nav
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browser() -> (BrowserState, Instant) {
        let now = Instant::now();
        let mut state = BrowserState::new(&UiConfig::default(), (100, 30), now);
        state.handle_key(BrowserKey::Other, now);
        assert!(state.intro().is_finished());
        (state, now)
    }

    fn press(state: &mut BrowserState, keys: &[BrowserKey], now: Instant) {
        for key in keys {
            state.handle_key(*key, now);
        }
    }

    #[test]
    fn test_intro_blocks_until_key_or_timeout() {
        let now = Instant::now();
        let mut state = BrowserState::new(&UiConfig::default(), (100, 30), now);
        assert!(!state.intro().shows_chrome());
        assert!(!state.needs_tick(now));

        assert!(state.needs_tick(now + Duration::from_millis(1500)));
        state.tick(now + Duration::from_millis(1500));
        assert!(state.intro().shows_chrome());
    }

    #[test]
    fn test_dropdown_navigation_deep_links() {
        let (mut state, now) = browser();
        // Home -> About -> Businesses, open, skip the category entry
        press(
            &mut state,
            &[BrowserKey::Right, BrowserKey::Right, BrowserKey::Down],
            now,
        );
        assert_eq!(
            state.handle().chrome().active_dropdown(),
            Some(MenuKey::Businesses)
        );
        press(&mut state, &[BrowserKey::Down, BrowserKey::Enter], now);

        assert_eq!(
            state.handle().current(),
            NavigationTarget::section(View::Business, "vedanco-it-solutions")
        );
        assert_eq!(state.handle().chrome().active_dropdown(), None);
        assert!(state.page_focus().expanded().is_some());

        // The first frame after the new page is drawn fires the scroll
        state.tick(now);
        assert!(!state.page_focus().has_pending());
        state.tick(now + Duration::from_secs(5));
        let span = state.document().anchor_span("vedanco-it-solutions").unwrap();
        assert_eq!(
            state.viewport().offset(),
            span.top.min(state.viewport().max_offset())
        );
    }

    #[test]
    fn test_switching_menus_keeps_one_open() {
        let (mut state, now) = browser();
        press(&mut state, &[BrowserKey::Right, BrowserKey::Down], now);
        assert_eq!(state.handle().chrome().active_dropdown(), Some(MenuKey::About));

        press(&mut state, &[BrowserKey::Right, BrowserKey::Enter], now);
        assert_eq!(
            state.handle().chrome().active_dropdown(),
            Some(MenuKey::Businesses)
        );

        press(&mut state, &[BrowserKey::Esc], now);
        assert_eq!(state.handle().chrome().active_dropdown(), None);
    }

    #[test]
    fn test_footer_link_to_legal_tab() {
        let (mut state, now) = browser();
        press(&mut state, &[BrowserKey::Tab, BrowserKey::Tab], now);
        assert_eq!(state.focus(), Focus::Footer);

        let cookies = FOOTER_LINKS
            .iter()
            .position(|link| link.label == "Cookies Settings")
            .unwrap();
        for _ in 0..cookies {
            state.handle_key(BrowserKey::Right, now);
        }
        state.handle_key(BrowserKey::Enter, now);

        assert_eq!(state.handle().view(), View::Legal);
        assert_eq!(state.page_focus().legal_tab(), "cookies");
        assert!(state.document().anchor_span("cookies").is_some());
    }

    #[test]
    fn test_back_goes_home() {
        let (mut state, now) = browser();
        state
            .handle()
            .navigate_to(NavigationTarget::top(View::Careers));
        state.handle_key(BrowserKey::Back, now);
        assert_eq!(state.handle().current(), NavigationTarget::top(View::Home));
    }

    #[test]
    fn test_cta_enter_navigates() {
        let (mut state, now) = browser();
        press(&mut state, &[BrowserKey::Tab, BrowserKey::Enter], now);
        // first home CTA is "Explore Businesses"
        assert_eq!(state.handle().current(), NavigationTarget::top(View::Business));
    }

    #[test]
    fn test_compact_width_uses_mobile_menu() {
        let now = Instant::now();
        let mut state = BrowserState::new(&UiConfig::default(), (60, 30), now);
        state.handle_key(BrowserKey::Other, now);
        assert!(state.is_compact());

        state.handle_key(BrowserKey::Enter, now);
        assert!(state.handle().chrome().mobile_menu_open());

        // first mobile row is Businesses; expand it and pick its first leaf
        press(
            &mut state,
            &[BrowserKey::Enter, BrowserKey::Down, BrowserKey::Down, BrowserKey::Enter],
            now,
        );
        assert_eq!(
            state.handle().current(),
            NavigationTarget::section(View::Business, "vedanco-it-solutions")
        );
        assert!(!state.handle().chrome().mobile_menu_open());
    }

    #[test]
    fn test_toggle_expands_section_at_reading_line() {
        let (mut state, now) = browser();
        state
            .handle()
            .navigate_to(NavigationTarget::top(View::Business));
        press(&mut state, &[BrowserKey::Tab], now);
        assert_eq!(state.page_focus().expanded(), None);

        let span = state.document().anchor_span("vedanco-interiors").unwrap();
        let reading_line = state.viewport().height() / 3;
        state
            .viewport
            .scroll_by(span.top as i64 - reading_line as i64);
        state.handle_key(BrowserKey::Toggle, now);

        assert_eq!(
            state.page_focus().expanded(),
            page_for(View::Business).section_index("vedanco-interiors")
        );
    }

    #[test]
    fn test_latest_navigation_wins_before_frame() {
        let (mut state, now) = browser();
        state
            .handle()
            .navigate_to(NavigationTarget::top(View::Business));
        press(&mut state, &[BrowserKey::Other], now);

        // Two menu picks land before the next frame is drawn
        state.navigate("Vedanco Air");
        state.sync(now);
        assert!(state.page_focus().has_pending());
        state.navigate("Businesses");
        state.sync(now);
        assert!(!state.page_focus().has_pending());

        state.tick(now);
        state.tick(now + Duration::from_secs(5));
        assert!(!state.viewport().is_animating());
        assert_eq!(state.viewport().offset(), 0);
        assert!(!state.needs_tick(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_arrows_step_home_sections() {
        let (mut state, now) = browser();
        assert!(state.shows_side_nav());
        let active = SIDE_NAV_ENTRIES
            .iter()
            .position(|entry| state.side_nav().is_active(entry.id))
            .unwrap();
        press(&mut state, &[BrowserKey::Tab, BrowserKey::Down], now);
        assert!(state.viewport().is_animating());

        state.tick(now + Duration::from_secs(5));
        let next = SIDE_NAV_ENTRIES[active + 1].id;
        let span = state.document().anchor_span(next).unwrap();
        assert_eq!(
            state.viewport().offset(),
            span.top.min(state.viewport().max_offset())
        );
    }
}
