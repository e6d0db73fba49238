//! Visible window of the current page

use super::logo::GOLD;
use crate::interactive::document::{DocLine, LineStyle};
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct PageViewProps {
    pub lines: Vec<DocLine>,
    /// Entrance animation finished; until then text renders dimmed
    pub entered: bool,
}

fn style_of(style: LineStyle) -> (Color, Weight) {
    match style {
        LineStyle::Title => (GOLD, Weight::Bold),
        LineStyle::Lead => (Color::White, Weight::Normal),
        LineStyle::Heading => (Color::White, Weight::Bold),
        LineStyle::Highlighted => (GOLD, Weight::Bold),
        LineStyle::Body => (Color::Grey, Weight::Normal),
        LineStyle::Detail => (Color::DarkGrey, Weight::Normal),
        LineStyle::Tab { active: true } => (GOLD, Weight::Bold),
        LineStyle::Tab { active: false } => (Color::Grey, Weight::Normal),
        LineStyle::Cta { selected: true } => (GOLD, Weight::Bold),
        LineStyle::Cta { selected: false } => (Color::Cyan, Weight::Normal),
        LineStyle::Blank => (Color::Reset, Weight::Normal),
    }
}

#[component]
pub fn PageView(props: &PageViewProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(key: "page", flex_direction: FlexDirection::Column, flex_grow: 1.0, padding_left: 2) {
            #(props.lines.iter().enumerate().map(|(i, line)| {
                let (color, weight) = if props.entered {
                    style_of(line.style)
                } else {
                    (Color::DarkGrey, Weight::Normal)
                };
                element! {
                    Text(key: format!("line-{}", i), content: line.text.clone(), color: color, weight: weight)
                }
            }).collect::<Vec<_>>())
        }
    }
}
