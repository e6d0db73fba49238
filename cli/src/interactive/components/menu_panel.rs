//! Dropdown panel and mobile menu
//!
//! Both render in flow below the navbar, pushing the page down.

use super::logo::GOLD;
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct DropdownProps {
    pub title: String,
    pub entries: Vec<String>,
    pub selected: usize,
}

#[component]
pub fn Dropdown(props: &DropdownProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(key: "dropdown", flex_direction: FlexDirection::Column, padding_left: 2) {
            Text(content: props.title.to_uppercase(), color: Color::Grey, weight: Weight::Bold)
            #(props.entries.iter().enumerate().map(|(i, entry)| {
                let selected = i == props.selected;
                // The first entry is the category page itself
                let prefix = match (selected, i) {
                    (true, _) => "► ",
                    (false, 0) => "  ",
                    _ => "  · ",
                };
                element! {
                    Text(
                        key: format!("dropdown-{}", i),
                        content: format!("{}{}", prefix, entry),
                        color: if selected { GOLD } else { Color::White },
                        weight: if selected { Weight::Bold } else { Weight::Normal },
                    )
                }
            }).collect::<Vec<_>>())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MobileMenuRow {
    pub text: String,
    /// Category header or top-level link rather than a leaf
    pub header: bool,
    pub selected: bool,
}

#[derive(Default, Props)]
pub struct MobileMenuProps {
    pub rows: Vec<MobileMenuRow>,
}

#[component]
pub fn MobileMenu(props: &MobileMenuProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(key: "mobile-menu", flex_direction: FlexDirection::Column, padding_left: 1) {
            #(props.rows.iter().enumerate().map(|(i, row)| {
                let indent = if row.header { "" } else { "    " };
                element! {
                    Text(
                        key: format!("mobile-{}", i),
                        content: format!("{}{}", indent, row.text),
                        color: if row.selected { GOLD } else { Color::White },
                        weight: if row.header { Weight::Bold } else { Weight::Normal },
                    )
                }
            }).collect::<Vec<_>>())
        }
    }
}
