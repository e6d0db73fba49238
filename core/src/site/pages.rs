//! Page content and anchors
//!
//! Condensed authored content for every view. What matters to the router is
//! the anchor set: each page exposes an anchor for every section slug the
//! router or the footer can target at it.

use super::view::{NavigationTarget, View};

/// How a section behaves when it is the deep-link target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// A regular block of the page
    Plain,
    /// Collapsed summary with a detail panel that expands
    Expandable,
    /// A card in a grid; highlighted when targeted
    Card,
    /// One tab of a tabbed document; only the selected tab renders
    Tab,
}

/// A section of a page
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub anchor: Option<&'static str>,
    pub heading: &'static str,
    pub body: &'static [&'static str],
    /// Extra lines shown only when an expandable section is open
    pub detail: &'static [&'static str],
    pub kind: SectionKind,
}

impl Section {
    const fn plain(anchor: &'static str, heading: &'static str, body: &'static [&'static str]) -> Self {
        Self {
            anchor: Some(anchor),
            heading,
            body,
            detail: &[],
            kind: SectionKind::Plain,
        }
    }

    const fn unanchored(heading: &'static str, body: &'static [&'static str]) -> Self {
        Self {
            anchor: None,
            heading,
            body,
            detail: &[],
            kind: SectionKind::Plain,
        }
    }

    const fn expandable(
        anchor: &'static str,
        heading: &'static str,
        body: &'static [&'static str],
        detail: &'static [&'static str],
    ) -> Self {
        Self {
            anchor: Some(anchor),
            heading,
            body,
            detail,
            kind: SectionKind::Expandable,
        }
    }

    const fn card(anchor: &'static str, heading: &'static str, body: &'static [&'static str]) -> Self {
        Self {
            anchor: Some(anchor),
            heading,
            body,
            detail: &[],
            kind: SectionKind::Card,
        }
    }

    const fn tab(anchor: &'static str, heading: &'static str, body: &'static [&'static str]) -> Self {
        Self {
            anchor: Some(anchor),
            heading,
            body,
            detail: &[],
            kind: SectionKind::Tab,
        }
    }
}

/// A call-to-action button with a fixed destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cta {
    pub label: &'static str,
    pub view: View,
    pub section: Option<&'static str>,
}

impl Cta {
    const fn new(label: &'static str, view: View, section: Option<&'static str>) -> Self {
        Self {
            label,
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
}

/// The back button every inner page carries
pub const BACK_HOME: Cta = Cta::new("Back to Home", View::Home, None);

/// A page of the site
#[derive(Debug)]
pub struct Page {
    pub view: View,
    pub title: &'static str,
    pub lead: &'static str,
    pub sections: &'static [Section],
    pub ctas: &'static [Cta],
}

impl Page {
    /// Anchor identifiers in render order
    pub fn anchors(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().filter_map(|section| section.anchor)
    }

    pub fn has_anchor(&self, anchor: &str) -> bool {
        self.anchors().any(|candidate| candidate == anchor)
    }

    /// Index of the section with the given anchor
    pub fn section_index(&self, anchor: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.anchor == Some(anchor))
    }
}

/// The page that renders a view
pub fn page_for(view: View) -> &'static Page {
    match view {
        View::Home => &HOME,
        View::Business => &BUSINESS,
        View::Portfolio => &PORTFOLIO,
        View::Solutions => &SOLUTIONS,
        View::About => &ABOUT,
        View::Careers => &CAREERS,
        View::Contact => &CONTACT,
        View::Legal => &LEGAL,
    }
}

pub static HOME: Page = Page {
    view: View::Home,
    title: "Vedanco Group",
    lead: "One group. Eleven businesses. A single standard of excellence.",
    sections: &[
        Section::plain(
            "hero",
            "Building the Future, Across Industries",
            &["A multi-industry holding company spanning technology, growth, assets and mobility."],
        ),
        Section::plain(
            "about",
            "Who We Are",
            &[
                "11+ Businesses - operating under one unified brand identity.",
                "Global Reach - serving clients across India, UAE, USA, and Europe.",
                "AI-Powered - embedding automation in every solution we deliver.",
                "End-to-End - from concept to execution, we handle it all.",
            ],
        ),
        Section::plain(
            "businesses",
            "Our Ecosystem",
            &[
                "Vedanco IT Solutions - Software, Apps & Enterprise Systems",
                "Vedanco AI & Automation - Machine Learning & Workflow Intelligence",
                "Vedanco Consulting - Strategy, Growth & Startup Incubation",
                "Vedanco Interiors - Premium Residential & Commercial Spaces",
                "Vedanco Marketing - Branding, Digital & Performance Marketing",
                "Vedanco Air - Private Aviation & Charter Services",
            ],
        ),
        Section::plain(
            "solutions",
            "Why Vedanco",
            &[
                "Integrated Ecosystem - IT, AI, Automation, and Operations under one roof.",
                "Global Quality, Local Cost - world-class solutions at a fraction of the global cost.",
                "Single Accountability - one partner, one vision.",
            ],
        ),
        Section::plain(
            "trust",
            "Trusted Partners",
            &["Enterprises, founders and institutions across four continents."],
        ),
        Section::plain(
            "contact",
            "Let's Build Together",
            &["Tell us where you want to go. We will assemble the team to get you there."],
        ),
    ],
    ctas: &[
        Cta::new("Explore Businesses", View::Business, None),
        Cta::new("Get Consultation", View::Contact, None),
        Cta::new("Explore IT Solutions", View::Business, Some("vedanco-it-solutions")),
        Cta::new("Explore AI & Automation", View::Business, Some("vedanco-ai-automation")),
        Cta::new("Explore Consulting", View::Business, Some("vedanco-consulting")),
        Cta::new("Explore Interiors", View::Business, Some("vedanco-interiors")),
        Cta::new("Explore Marketing", View::Business, Some("vedanco-marketing")),
        Cta::new("Explore Air", View::Business, Some("vedanco-air")),
        Cta::new("View All Businesses", View::Business, None),
        Cta::new("Start a Conversation", View::Contact, None),
    ],
};

pub static BUSINESS: Page = Page {
    view: View::Business,
    title: "Our Businesses",
    lead: "Eleven specialised verticals, one integrated ecosystem.",
    sections: &[
        Section::plain(
            "domain-start",
            "The Vedanco Ecosystem",
            &["Select a vertical to explore what it delivers."],
        ),
        Section::expandable(
            "vedanco-it-solutions",
            "Vedanco IT Solutions",
            &["Building the digital backbone of modern enterprises."],
            &["Custom software, mobile apps, cloud platforms and enterprise systems."],
        ),
        Section::expandable(
            "vedanco-ai-automation",
            "Vedanco AI & Automation",
            &["Intelligence that never sleeps, automating your growth."],
            &["Machine learning, workflow automation and conversational agents."],
        ),
        Section::expandable(
            "vedanco-consulting",
            "Vedanco Consulting",
            &["Strategic clarity in a complex global market."],
            &["Market entry, restructuring and operational efficiency programmes."],
        ),
        Section::expandable(
            "vedanco-interiors",
            "Vedanco Interior Solutions",
            &["Spaces that inspire productivity and define luxury."],
            &["Residential and commercial design-and-build, turnkey fit-outs."],
        ),
        Section::expandable(
            "vedanco-marketing",
            "Vedanco Marketing & Branding",
            &["Amplifying narratives that create market leaders."],
            &["Brand strategy, digital campaigns and performance marketing."],
        ),
        Section::expandable(
            "vedanco-recruitment",
            "Vedanco Recruitment Solutions",
            &["Connecting world-class talent with global visionaries."],
            &["Executive search, offshore team setup and staffing."],
        ),
        Section::expandable(
            "vedanco-venture-studio",
            "Vedanco Venture Studio",
            &["Incubating the next generation of unicorns."],
            &["MVP development, go-to-market and fundraising support."],
        ),
        Section::expandable(
            "vedanco-real-estate",
            "Vedanco Real Estate",
            &["Premium assets for the discerning investor."],
            &["Acquisition advisory, development and asset management."],
        ),
        Section::expandable(
            "vedanco-tours-travels",
            "Vedanco Tours & Travels",
            &["Curating journeys that transcend boundaries."],
            &["Corporate travel, bespoke itineraries and group tours."],
        ),
        Section::expandable(
            "vedanco-air",
            "Vedanco Air",
            &["Time is the ultimate luxury. We help you master it."],
            &["Private jet charters and aviation logistics."],
        ),
        Section::expandable(
            "vedanco-logistics",
            "Vedanco Logistics",
            &["The unseen engine of global commerce."],
            &["Freight, warehousing and last-mile distribution."],
        ),
        Section::unanchored(
            "The Synergy Advantage",
            &[
                "Shared Intelligence - AI frameworks from our tech division optimise logistics and aviation routes.",
                "Unified Standards - one premium service ethos across every vertical.",
                "Global Reach - our logistics network backs trade and interior execution.",
            ],
        ),
    ],
    ctas: &[Cta::new("Partner With Us", View::Contact, None)],
};

// No per-item anchors: menu entries under Portfolio land on the page top.
pub static PORTFOLIO: Page = Page {
    view: View::Portfolio,
    title: "Portfolio",
    lead: "Selected work across our verticals.",
    sections: &[
        Section::plain(
            "featured",
            "Featured Projects",
            &[
                "Global FinTech Corp - Modernizing Legacy Banking Infrastructure",
                "EuroLogistics Group - AI-Driven Supply Chain Optimization",
                "Vertex Healthcare - Digital Transformation & Patient Experience",
            ],
        ),
        Section::plain(
            "studies",
            "Case Studies",
            &[
                "Venture Studio - Scaling a SaaS Unicorn",
                "Marketing & Branding - Luxury Brand Re-launch",
                "Interior Solutions - Corporate HQ Interior Fit-out",
            ],
        ),
    ],
    ctas: &[BACK_HOME, Cta::new("Start a Project", View::Contact, None)],
};

pub static SOLUTIONS: Page = Page {
    view: View::Solutions,
    title: "Solutions",
    lead: "Cross-vertical capabilities for enterprises and founders.",
    sections: &[
        Section::plain(
            "services-grid",
            "What We Deliver",
            &["Six practices, each drawing on the whole group."],
        ),
        Section::card(
            "digital-transformation",
            "Digital Transformation",
            &["Reimagining business processes for the digital age."],
        ),
        Section::card(
            "ai-automation-solutions",
            "AI & Automation Solutions",
            &["Embedding intelligence into the core of your operations."],
        ),
        Section::card(
            "business-consulting",
            "Business Consulting",
            &["Data-driven strategies to navigate market complexity."],
        ),
        Section::card(
            "startup-incubation",
            "Startup Incubation",
            &["From napkin sketch to Series A funding."],
        ),
        Section::card(
            "enterprise-solutions",
            "Enterprise Solutions",
            &["Robust infrastructure for large-scale organizations."],
        ),
        Section::card(
            "international-expansion",
            "International Expansion",
            &["Bridging borders for global commerce."],
        ),
    ],
    ctas: &[BACK_HOME, Cta::new("Discuss Your Challenge", View::Contact, None)],
};

pub static ABOUT: Page = Page {
    view: View::About,
    title: "About Vedanco",
    lead: "From humble beginnings to global impact.",
    sections: &[
        Section::plain(
            "about-vedanco-group",
            "About Vedanco Group",
            &["A conglomerate built on the belief that integrated expertise compounds."],
        ),
        Section::plain(
            "vision-mission",
            "Vision & Mission",
            &[
                "Integrity First - radical transparency in every transaction.",
                "Relentless Innovation - we do not just adopt technology; we forge it.",
                "Global Citizenry - we build sustainably and invest in local communities.",
            ],
        ),
        Section::plain(
            "leadership",
            "Leadership",
            &["A leadership team drawn from technology, consulting, design and operations."],
        ),
        Section::plain(
            "global-presence",
            "Global Presence",
            &["Headquartered in Gandhinagar, India, expanding to Dubai, London and New York."],
        ),
    ],
    ctas: &[BACK_HOME],
};

pub static CAREERS: Page = Page {
    view: View::Careers,
    title: "Careers",
    lead: "Build the next decade with us.",
    sections: &[
        Section::unanchored(
            "Open Disciplines",
            &[
                "Technology & AI - engineers, data scientists and architects.",
                "Strategic Consulting - MBAs and industry veterans.",
                "Brand & Design - creative directors and designers.",
                "Global Operations - logistics experts and project managers.",
            ],
        ),
        Section::unanchored(
            "Why Vedanco",
            &[
                "Innovation - work with cutting-edge AI and tech.",
                "Growth - uncapped potential for career advancement.",
                "Impact - projects that touch millions of lives globally.",
            ],
        ),
    ],
    ctas: &[BACK_HOME, Cta::new("Send Your Profile", View::Contact, None)],
};

pub static CONTACT: Page = Page {
    view: View::Contact,
    title: "Global Reach, Local Touch.",
    lead: "We are ready to partner with you.",
    sections: &[
        Section::unanchored(
            "Offices",
            &[
                "Gandhinagar, India - InfoCity, Super Mall 1, Office No. 421M, Gandhinagar, Gujarat",
                "  +91 6353 097 642 - vedanco.official@gmail.com",
                "Dubai, UAE - coming soon",
                "London, UK - coming soon",
                "New York, USA - coming soon",
            ],
        ),
        Section::unanchored(
            "Send a Message",
            &["Fields marked with * are required."],
        ),
    ],
    ctas: &[BACK_HOME],
};

pub static LEGAL: Page = Page {
    view: View::Legal,
    title: "Legal",
    lead: "The terms that govern our services and this website.",
    sections: &[
        Section::tab(
            "terms",
            "Terms & Conditions",
            &[
                "By accessing our website or engaging our services across any vertical you agree to these terms.",
                "Scope of work, deliverables and engagement models vary by vertical.",
            ],
        ),
        Section::tab(
            "privacy",
            "Privacy Policy",
            &["We collect only what we need to respond to you and deliver our services."],
        ),
        Section::tab(
            "refund",
            "Refund & Cancellation Policy",
            &["Refunds and cancellations follow the terms of each engagement agreement."],
        ),
        Section::tab(
            "disclaimer",
            "Service Disclaimer",
            &["Information on this website is provided for general purposes only."],
        ),
        Section::tab(
            "cookies",
            "Cookies Policy",
            &["We use essential cookies to operate this website and optional cookies to improve it."],
        ),
    ],
    ctas: &[BACK_HOME],
};
