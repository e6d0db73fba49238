//! Footer links
//!
//! Footer entries carry fixed targets instead of labels, so they can deep
//! link to anchors outside the menu taxonomy such as the legal documents.

use super::handle::RouterHandle;
use super::router::{NavigationOutcome, ViewRouter, Viewport};
use super::view::{NavigationTarget, View};

/// Column a footer link is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterGroup {
    Company,
    Verticals,
    Contact,
    Legal,
}

impl FooterGroup {
    pub fn title(&self) -> &'static str {
        match self {
            FooterGroup::Company => "Company",
            FooterGroup::Verticals => "Verticals",
            FooterGroup::Contact => "Get in touch",
            FooterGroup::Legal => "Legal",
        }
    }
}

/// A footer link with its fixed destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub group: FooterGroup,
    pub view: View,
    pub section: Option<&'static str>,
}

impl FooterLink {
    const fn new(
        label: &'static str,
        group: FooterGroup,
        view: View,
        section: Option<&'static str>,
    ) -> Self {
        Self {
            label,
            group,
            view,
            section,
        }
    }

    pub fn target(&self) -> NavigationTarget {
        NavigationTarget {
            view: self.view,
            section: self.section.map(str::to_string),
        }
    }

    /// Follow the link: set the target directly, then scroll to the top.
    /// The destination page scrolls on to its section once it settles.
    pub fn activate(&self, router: &mut ViewRouter, viewport: &mut dyn Viewport) -> NavigationOutcome {
        let outcome = router.navigate_to(self.target());
        viewport.scroll_to_top();
        outcome
    }

    /// Same as [`FooterLink::activate`], through a shared handle
    pub fn follow(&self, handle: &RouterHandle, viewport: &mut dyn Viewport) -> NavigationOutcome {
        let outcome = handle.navigate_to(self.target());
        viewport.scroll_to_top();
        outcome
    }
}

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink::new("About Us", FooterGroup::Company, View::About, None),
    FooterLink::new("Careers", FooterGroup::Company, View::Careers, None),
    FooterLink::new("Portfolio", FooterGroup::Company, View::Portfolio, None),
    FooterLink::new(
        "IT Solutions",
        FooterGroup::Verticals,
        View::Business,
        Some("vedanco-it-solutions"),
    ),
    FooterLink::new(
        "AI & Automation",
        FooterGroup::Verticals,
        View::Business,
        Some("vedanco-ai-automation"),
    ),
    FooterLink::new("Aviation", FooterGroup::Verticals, View::Business, Some("vedanco-air")),
    FooterLink::new(
        "Consulting",
        FooterGroup::Verticals,
        View::Business,
        Some("vedanco-consulting"),
    ),
    FooterLink::new("View All Verticals", FooterGroup::Verticals, View::Business, None),
    FooterLink::new("Start a Conversation", FooterGroup::Contact, View::Contact, None),
    FooterLink::new("Privacy Policy", FooterGroup::Legal, View::Legal, Some("privacy")),
    FooterLink::new("Terms of Service", FooterGroup::Legal, View::Legal, Some("terms")),
    FooterLink::new("Cookies Settings", FooterGroup::Legal, View::Legal, Some("cookies")),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::taxonomy::MenuKey;

    #[derive(Default)]
    struct TopCounter(usize);

    impl Viewport for TopCounter {
        fn scroll_to_anchor(&mut self, _anchor: &str) -> bool {
            panic!("footer links never scroll to anchors directly");
        }

        fn scroll_to_top(&mut self) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_legal_links_deep_link() {
        let legal: Vec<_> = FOOTER_LINKS
            .iter()
            .filter(|link| link.group == FooterGroup::Legal)
            .map(|link| link.target())
            .collect();
        assert_eq!(
            legal,
            vec![
                NavigationTarget::section(View::Legal, "privacy"),
                NavigationTarget::section(View::Legal, "terms"),
                NavigationTarget::section(View::Legal, "cookies"),
            ]
        );
    }

    #[test]
    fn test_activate_sets_target_and_scrolls_top() {
        let mut router = ViewRouter::new();
        router.chrome_mut().open_dropdown(MenuKey::About);
        let mut viewport = TopCounter::default();

        let link = FOOTER_LINKS
            .iter()
            .find(|link| link.label == "Aviation")
            .unwrap();
        let outcome = link.activate(&mut router, &mut viewport);

        assert!(outcome.remounted());
        assert_eq!(
            router.current(),
            &NavigationTarget::section(View::Business, "vedanco-air")
        );
        assert_eq!(viewport.0, 1);
        assert_eq!(router.chrome().active_dropdown(), None);
    }
}
