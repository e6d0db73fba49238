//! Vedanco splash logo
//!
//! Shown while the intro plays, with a gold gradient from top to bottom.

use iocraft::prelude::*;

pub const VEDANCO_LOGO_LINES: &[&str] = &[
    "██╗   ██╗███████╗██████╗  █████╗ ███╗   ██╗ ██████╗ ██████╗ ",
    "██║   ██║██╔════╝██╔══██╗██╔══██╗████╗  ██║██╔════╝██╔═══██╗",
    "██║   ██║█████╗  ██║  ██║███████║██╔██╗ ██║██║     ██║   ██║",
    "╚██╗ ██╔╝██╔══╝  ██║  ██║██╔══██║██║╚██╗██║██║     ██║   ██║",
    " ╚████╔╝ ███████╗██████╔╝██║  ██║██║ ╚████║╚██████╗╚██████╔╝",
    "  ╚═══╝  ╚══════╝╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═══╝ ╚═════╝ ╚═════╝ ",
];

/// Narrow terminals get the wordmark only
pub const VEDANCO_WORDMARK: &str = "V E D A N C O";

// Bright gold fading to bronze
pub const LOGO_COLORS: &[(u8, u8, u8)] = &[
    (255, 215, 0),
    (242, 200, 20),
    (229, 185, 40),
    (216, 170, 55),
    (203, 155, 70),
    (190, 140, 80),
];

pub const GOLD: Color = Color::Rgb {
    r: 212,
    g: 175,
    b: 55,
};

#[derive(Default, Props)]
pub struct VedancoLogoProps {
    /// Terminal width, to pick the large or the compact rendition
    pub width: u16,
}

#[component]
pub fn VedancoLogo(props: &VedancoLogoProps) -> impl Into<AnyElement<'static>> {
    let fits = props.width as usize > VEDANCO_LOGO_LINES[0].chars().count();

    element! {
        View(key: "logo-content", flex_direction: FlexDirection::Column, align_items: AlignItems::Center) {
            #(if fits {
                VEDANCO_LOGO_LINES.iter().enumerate().map(|(i, line)| {
                    let color = LOGO_COLORS.get(i).unwrap_or(&(190, 140, 80));
                    element! {
                        Text(
                            content: *line,
                            color: Color::Rgb { r: color.0, g: color.1, b: color.2 },
                            weight: Weight::Bold,
                        )
                    }
                }).collect::<Vec<_>>()
            } else {
                vec![element! {
                    Text(content: VEDANCO_WORDMARK, color: GOLD, weight: Weight::Bold)
                }]
            })
            Text(content: "GROUP", color: Color::Grey)
        }
    }
}
