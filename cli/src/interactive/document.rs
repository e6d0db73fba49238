//! A page laid out as terminal rows
//!
//! The browser scrolls through a [`Document`]: the page's sections wrapped
//! to the terminal width, with the row span of every rendered anchor.

use super::text_utils::wrap_text;
use vedanco_core::site::deep_link::PageFocus;
use vedanco_core::site::{Page, SectionKind, SectionSpan, View};

/// How a row is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Lead,
    Heading,
    /// Heading of the deep-linked card
    Highlighted,
    Body,
    Detail,
    Tab { active: bool },
    Cta { selected: bool },
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    pub text: String,
    pub style: LineStyle,
}

impl DocLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", LineStyle::Blank)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<DocLine>,
    anchors: Vec<(&'static str, SectionSpan)>,
    sections: Vec<(usize, SectionSpan)>,
}

impl Document {
    /// Lay out `page` for `width` columns in the state described by `focus`
    pub fn build(page: &Page, focus: &PageFocus, width: usize, selected_cta: Option<usize>) -> Self {
        let mut doc = Document::default();
        let body_width = width.saturating_sub(4).max(20);

        doc.push_wrapped(page.title, LineStyle::Title, 0, body_width);
        doc.push_wrapped(page.lead, LineStyle::Lead, 0, body_width);
        doc.lines.push(DocLine::blank());

        let tabbed = page.view == View::Legal;
        if tabbed {
            let tabs: Vec<_> = page
                .sections
                .iter()
                .filter(|section| section.kind == SectionKind::Tab)
                .map(|section| {
                    let active = section.anchor == Some(focus.legal_tab());
                    let marker = if active { "●" } else { "○" };
                    DocLine::new(format!("{} {}", marker, section.heading), LineStyle::Tab { active })
                })
                .collect();
            doc.lines.extend(tabs);
            doc.lines.push(DocLine::blank());
        }

        for (index, section) in page.sections.iter().enumerate() {
            if tabbed && section.kind == SectionKind::Tab && section.anchor != Some(focus.legal_tab()) {
                continue;
            }

            let top = doc.row();
            let expanded = section.kind == SectionKind::Expandable && focus.expanded() == Some(index);
            let (heading, style) = match section.kind {
                SectionKind::Expandable => (
                    format!("{} {}", if expanded { "▾" } else { "▸" }, section.heading),
                    LineStyle::Heading,
                ),
                SectionKind::Card if section.anchor.is_some() && section.anchor == focus.highlighted() => {
                    (format!("★ {}", section.heading), LineStyle::Highlighted)
                }
                _ => (section.heading.to_string(), LineStyle::Heading),
            };
            doc.push_wrapped(&heading, style, 0, body_width);

            for line in section.body {
                doc.push_wrapped(line, LineStyle::Body, 2, body_width);
            }
            if expanded {
                for line in section.detail {
                    doc.push_wrapped(line, LineStyle::Detail, 4, body_width);
                }
            }
            doc.lines.push(DocLine::blank());

            let span = SectionSpan {
                top,
                height: doc.row() - top,
            };
            if let Some(anchor) = section.anchor {
                doc.anchors.push((anchor, span));
            }
            doc.sections.push((index, span));
        }

        for (index, cta) in page.ctas.iter().enumerate() {
            let selected = selected_cta == Some(index);
            let marker = if selected { "▶" } else { "→" };
            doc.lines.push(DocLine::new(
                format!("{} {}", marker, cta.label),
                LineStyle::Cta { selected },
            ));
        }

        doc
    }

    fn row(&self) -> u32 {
        self.lines.len() as u32
    }

    fn push_wrapped(&mut self, text: &str, style: LineStyle, indent: usize, width: usize) {
        let pad = " ".repeat(indent);
        for line in wrap_text(text, width.saturating_sub(indent)) {
            self.lines.push(DocLine::new(format!("{}{}", pad, line), style));
        }
    }

    pub fn lines(&self) -> &[DocLine] {
        &self.lines
    }

    /// Rows visible from `offset` in a window of `height` rows
    pub fn window(&self, offset: u32, height: u32) -> &[DocLine] {
        let start = (offset as usize).min(self.lines.len());
        let end = start.saturating_add(height as usize).min(self.lines.len());
        &self.lines[start..end]
    }

    pub fn height(&self) -> u32 {
        self.row()
    }

    pub fn anchors(&self) -> &[(&'static str, SectionSpan)] {
        &self.anchors
    }

    pub fn anchor_span(&self, anchor: &str) -> Option<SectionSpan> {
        self.anchors
            .iter()
            .find(|(id, _)| *id == anchor)
            .map(|(_, span)| *span)
    }

    /// Index of the page section covering `row`
    pub fn section_at(&self, row: u32) -> Option<usize> {
        self.sections
            .iter()
            .find(|(_, span)| row >= span.top && row < span.top + span.height)
            .map(|(index, _)| *index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use vedanco_core::site::pages::{BUSINESS, HOME, LEGAL, PORTFOLIO};
    use vedanco_core::site::NavigationTarget;

    #[test]
    fn test_every_anchor_is_laid_out() {
        let doc = Document::build(&HOME, &PageFocus::new(), 80, None);
        let ids: Vec<_> = doc.anchors().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, HOME.anchors().collect::<Vec<_>>());

        let hero = doc.anchor_span("hero").unwrap();
        let about = doc.anchor_span("about").unwrap();
        assert!(hero.top + hero.height <= about.top);
    }

    #[test]
    fn test_expanded_section_shows_detail() {
        let mut focus = PageFocus::new();
        let collapsed = Document::build(&BUSINESS, &focus, 80, None);

        focus.observe(
            &NavigationTarget::section(View::Business, "vedanco-air"),
            Instant::now(),
        );
        let expanded = Document::build(&BUSINESS, &focus, 80, None);

        assert!(expanded.height() > collapsed.height());
        assert!(expanded
            .lines()
            .iter()
            .any(|line| line.text.contains("▾ Vedanco Air")));
    }

    #[test]
    fn test_legal_renders_only_selected_tab() {
        let mut focus = PageFocus::new();
        focus.observe(
            &NavigationTarget::section(View::Legal, "cookies"),
            Instant::now(),
        );
        let doc = Document::build(&LEGAL, &focus, 80, None);

        assert!(doc.anchor_span("cookies").is_some());
        assert!(doc.anchor_span("terms").is_none());
        assert!(doc
            .lines()
            .iter()
            .any(|line| line.style == LineStyle::Tab { active: true } && line.text.contains("Cookies")));
    }

    #[test]
    fn test_section_at_and_window() {
        let doc = Document::build(&PORTFOLIO, &PageFocus::new(), 80, Some(0));
        let studies = doc.anchor_span("studies").unwrap();
        let index = PORTFOLIO.section_index("studies");
        assert_eq!(doc.section_at(studies.top), index);
        assert_eq!(doc.section_at(0), None);

        assert_eq!(doc.window(0, 2).len(), 2);
        assert!(doc.window(doc.height() + 5, 10).is_empty());
        assert!(doc
            .lines()
            .iter()
            .any(|line| line.style == LineStyle::Cta { selected: true }));
    }
}
