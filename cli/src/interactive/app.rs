//! Terminal site browser
//!
//! An iocraft front end over [`BrowserState`]: terminal events become
//! browser keys, a frame loop drives smooth scrolling and deferred deep
//! links, and every render draws the current snapshot.

use super::browser::{
    dropdown_entries, BrowserCommand, BrowserKey, BrowserState, Focus, MobileRow, NavItem,
    NAV_ITEMS, SIDE_NAV_WIDTH,
};
use super::components::menu_panel::MobileMenuRow;
use super::components::navbar::NavbarItem;
use super::components::side_nav::SideNavDot;
use super::components::{Dropdown, Footer, MobileMenu, Navbar, PageView, SideNav, VedancoLogo};
use super::document::DocLine;
use super::text_utils::{terminal_size, truncate_to_width};
use anyhow::Result;
use iocraft::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;
use vedanco_core::config::UiConfig;
use vedanco_core::site::taxonomy::CONTACT_LABEL;
use vedanco_core::site::{FooterGroup, FOOTER_LINKS, SIDE_NAV_ENTRIES};
use vedanco_core::SiteConfig;

/// Run the browser fullscreen until the user quits
pub async fn run_browser(config: SiteConfig) -> Result<()> {
    info!("Starting site browser");
    let ui = config.ui;

    tokio::task::spawn_blocking(move || {
        smol::block_on(async move { element!(SiteBrowser(ui: ui)).fullscreen().await })
    })
    .await??;

    Ok(())
}

/// Map a terminal key to a browser key
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> BrowserKey {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return BrowserKey::Quit;
    }
    match code {
        KeyCode::Left => BrowserKey::Left,
        KeyCode::Right => BrowserKey::Right,
        KeyCode::Up => BrowserKey::Up,
        KeyCode::Down => BrowserKey::Down,
        KeyCode::Enter => BrowserKey::Enter,
        KeyCode::Esc => BrowserKey::Esc,
        KeyCode::Tab => BrowserKey::Tab,
        KeyCode::PageDown => BrowserKey::PageDown,
        KeyCode::PageUp => BrowserKey::PageUp,
        KeyCode::Home | KeyCode::Char('g') => BrowserKey::Top,
        KeyCode::Backspace | KeyCode::Char('b') => BrowserKey::Back,
        KeyCode::Char('j') => BrowserKey::ScrollDown,
        KeyCode::Char('k') => BrowserKey::ScrollUp,
        KeyCode::Char(' ') => BrowserKey::Toggle,
        KeyCode::Char('q') => BrowserKey::Quit,
        _ => BrowserKey::Other,
    }
}

#[derive(Default, Props)]
pub struct SiteBrowserProps {
    pub ui: UiConfig,
}

#[component]
fn SiteBrowser(mut hooks: Hooks, props: &SiteBrowserProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let ui = props.ui.clone();
    let browser = hooks.use_state(move || BrowserState::new(&ui, terminal_size(), Instant::now()));
    let should_exit = hooks.use_state(|| false);

    hooks.use_terminal_events({
        let mut browser = browser;
        let mut should_exit = should_exit;
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) if kind != KeyEventKind::Release => {
                let key = map_key(code, modifiers);
                if browser.write().handle_key(key, Instant::now()) == BrowserCommand::Quit {
                    should_exit.set(true);
                }
            }
            TerminalEvent::Resize(width, height) => browser.write().resize(width, height),
            _ => {}
        }
    });

    // Frame loop; state is only written when there is work to do
    let frame = Duration::from_millis(props.ui.frame_interval_ms.max(1));
    let mut browser_tick = browser;
    hooks.use_future(async move {
        loop {
            smol::Timer::after(frame).await;
            let now = Instant::now();
            if browser_tick.read().needs_tick(now) {
                browser_tick.write().tick(now);
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let state = browser.read();
    let width = state.width();

    if !state.intro().shows_chrome() {
        return element! {
            View(
                width: 100pct,
                height: 100pct,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                VedancoLogo(width: width)
                View(height: 1)
                Text(content: "Building tomorrow's enterprises", color: Color::Grey)
                Text(content: "press any key", color: Color::DarkGrey)
            }
        };
    }

    let chrome = state.handle().chrome();
    let compact = state.is_compact();

    let items: Vec<NavbarItem> = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| NavbarItem {
            label: item.label().to_string(),
            menu: matches!(item, NavItem::Menu(_)),
            selected: i == state.nav_index(),
            open: matches!(item, NavItem::Menu(key) if chrome.is_dropdown_open(*key)),
        })
        .collect();

    let dropdown = chrome.active_dropdown().filter(|_| !compact).map(|key| {
        let entries: Vec<String> = dropdown_entries(key)
            .into_iter()
            .map(str::to_string)
            .collect();
        element! {
            Dropdown(title: key.category().label, entries: entries, selected: state.dropdown_index())
        }
    });

    let mobile = (compact && chrome.mobile_menu_open()).then(|| {
        let rows = mobile_menu_rows(&state);
        element! { MobileMenu(rows: rows) }
    });

    let page_width = state.page_width().saturating_sub(2) as usize;
    let viewport = state.viewport();
    let lines: Vec<DocLine> = state
        .document()
        .window(viewport.offset(), viewport.height())
        .iter()
        .map(|line| DocLine {
            text: truncate_to_width(&line.text, page_width),
            style: line.style,
        })
        .collect();

    let side_nav = state.shows_side_nav().then(|| {
        let dots: Vec<SideNavDot> = SIDE_NAV_ENTRIES
            .iter()
            .map(|entry| SideNavDot {
                label: entry.label.to_string(),
                active: state.side_nav().is_active(entry.id),
            })
            .collect();
        element! { SideNav(dots: dots, width: SIDE_NAV_WIDTH) }
    });

    let footer = FooterSnapshot::of(&state);

    element! {
        View(width: 100pct, height: 100pct, flex_direction: FlexDirection::Column) {
            Navbar(
                items: items,
                solid: state.handle().solid_mode(),
                compact: compact,
                menu_open: chrome.mobile_menu_open(),
                focused: state.focus() == Focus::Navbar,
                width: width,
            )
            #(dropdown)
            #(mobile)
            View(flex_direction: FlexDirection::Row, flex_grow: 1.0) {
                PageView(lines: lines, entered: state.intro().plays_entrance())
                #(side_nav)
            }
            Footer(
                groups: footer.groups,
                active_group: footer.active_group,
                links: footer.links,
                selected: footer.selected,
            )
        }
    }
}

fn mobile_menu_rows(state: &BrowserState) -> Vec<MobileMenuRow> {
    let expanded = state.handle().chrome().mobile_expanded();
    state
        .mobile_rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let selected = i == state.mobile_index();
            match row {
                MobileRow::Category(key) => {
                    let marker = if expanded == Some(key) { "−" } else { "+" };
                    MobileMenuRow {
                        text: format!("{} {}", marker, key.category().label),
                        header: true,
                        selected,
                    }
                }
                MobileRow::Entry(label) => MobileMenuRow {
                    text: label.to_string(),
                    header: false,
                    selected,
                },
                MobileRow::Contact => MobileMenuRow {
                    text: format!("  {}", CONTACT_LABEL),
                    header: true,
                    selected,
                },
            }
        })
        .collect()
}

/// Footer content for the group holding the selected link
#[derive(Debug, Default, PartialEq, Eq)]
struct FooterSnapshot {
    groups: Vec<String>,
    active_group: usize,
    links: Vec<String>,
    selected: Option<usize>,
}

impl FooterSnapshot {
    fn of(state: &BrowserState) -> Self {
        let mut groups: Vec<FooterGroup> = Vec::new();
        for link in FOOTER_LINKS {
            if !groups.contains(&link.group) {
                groups.push(link.group);
            }
        }

        let current = &FOOTER_LINKS[state.footer_index()];
        let members: Vec<_> = FOOTER_LINKS
            .iter()
            .filter(|link| link.group == current.group)
            .collect();

        Self {
            groups: groups.iter().map(|group| group.title().to_string()).collect(),
            active_group: groups
                .iter()
                .position(|group| *group == current.group)
                .unwrap_or(0),
            links: members.iter().map(|link| link.label.to_string()).collect(),
            selected: members
                .iter()
                .position(|link| link.label == current.label)
                .filter(|_| state.focus() == Focus::Footer),
        }
    }
}
