//! Home page section dots

use super::logo::GOLD;
use iocraft::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct SideNavDot {
    pub label: String,
    pub active: bool,
}

#[derive(Default, Props)]
pub struct SideNavProps {
    pub dots: Vec<SideNavDot>,
    pub width: u16,
}

#[component]
pub fn SideNav(props: &SideNavProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            key: "side-nav",
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            width: props.width as u32,
        ) {
            #(props.dots.iter().map(|dot| {
                // Only the active section shows its label
                let content = if dot.active {
                    format!("● {}", dot.label)
                } else {
                    "○".to_string()
                };
                element! {
                    Text(
                        key: dot.label.clone(),
                        content: content,
                        color: if dot.active { GOLD } else { Color::DarkGrey },
                    )
                }
            }).collect::<Vec<_>>())
        }
    }
}
