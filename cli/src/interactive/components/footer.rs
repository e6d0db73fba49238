//! Footer bar
//!
//! One row of group titles and one row with the links of the group that
//! holds the selected link.

use super::logo::GOLD;
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct FooterProps {
    pub groups: Vec<String>,
    pub active_group: usize,
    pub links: Vec<String>,
    pub selected: Option<usize>,
}

#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(key: "footer", flex_direction: FlexDirection::Column, width: 100pct) {
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(content: "© Vedanco Group", color: Color::DarkGrey)
                #(props.groups.iter().enumerate().map(|(i, group)| {
                    let active = i == props.active_group;
                    element! {
                        Text(
                            key: group.clone(),
                            content: group.clone(),
                            color: if active { Color::White } else { Color::DarkGrey },
                            weight: if active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }).collect::<Vec<_>>())
            }
            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(props.links.iter().enumerate().map(|(i, link)| {
                    let selected = props.selected == Some(i);
                    element! {
                        Text(
                            key: format!("footer-{}", i),
                            content: if selected { format!("[{}]", link) } else { link.clone() },
                            color: if selected { GOLD } else { Color::Grey },
                        )
                    }
                }).collect::<Vec<_>>())
            }
        }
    }
}
