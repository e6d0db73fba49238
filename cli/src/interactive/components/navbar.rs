//! Top navigation bar

use super::logo::GOLD;
use iocraft::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NavbarItem {
    pub label: String,
    /// Has a dropdown behind it
    pub menu: bool,
    pub selected: bool,
    pub open: bool,
}

#[derive(Default, Props)]
pub struct NavbarProps {
    pub items: Vec<NavbarItem>,
    /// Scrolled, off the home page, or with a panel open
    pub solid: bool,
    pub compact: bool,
    pub menu_open: bool,
    pub focused: bool,
    pub width: u16,
}

#[component]
pub fn Navbar(props: &NavbarProps) -> impl Into<AnyElement<'static>> {
    let rule = if props.solid { "━" } else { "─" };
    let rule_color = if props.solid { GOLD } else { Color::DarkGrey };

    let entries = if props.compact {
        let marker = if props.menu_open { "✕ Close" } else { "☰ Menu" };
        vec![element! {
            Text(
                key: "mobile-toggle",
                content: marker,
                color: if props.focused { GOLD } else { Color::White },
                weight: Weight::Bold,
            )
        }]
    } else {
        props
            .items
            .iter()
            .map(|item| {
                let arrow = match (item.menu, item.open) {
                    (true, true) => " ▴",
                    (true, false) => " ▾",
                    _ => "",
                };
                let highlighted = props.focused && item.selected;
                element! {
                    Text(
                        key: item.label.clone(),
                        content: format!(" {}{} ", item.label, arrow),
                        color: if highlighted { GOLD } else { Color::White },
                        weight: if highlighted || item.open { Weight::Bold } else { Weight::Normal },
                    )
                }
            })
            .collect::<Vec<_>>()
    };

    element! {
        View(key: "navbar", flex_direction: FlexDirection::Column, width: 100pct) {
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                Text(content: "VEDANCO", color: GOLD, weight: Weight::Bold)
                View(flex_direction: FlexDirection::Row) {
                    #(entries)
                }
            }
            Text(content: rule.repeat(props.width as usize), color: rule_color)
        }
    }
}
