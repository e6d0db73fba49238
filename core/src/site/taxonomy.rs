//! Static menu taxonomy
//!
//! The navbar's mega-menu and list menus. Authored content, read-only at
//! runtime. Every leaf label maps to a navigation target through
//! [`crate::site::resolve`].

use super::slug::slugify;
use super::view::View;
use std::fmt;

/// Key of a top-level menu category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKey {
    About,
    Businesses,
    Solutions,
    Portfolio,
}

impl MenuKey {
    /// Desktop navbar order
    pub const DESKTOP_ORDER: [MenuKey; 4] = [
        MenuKey::About,
        MenuKey::Businesses,
        MenuKey::Solutions,
        MenuKey::Portfolio,
    ];

    /// Mobile menu order
    pub const MOBILE_ORDER: [MenuKey; 4] = [
        MenuKey::Businesses,
        MenuKey::Solutions,
        MenuKey::About,
        MenuKey::Portfolio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuKey::About => "about",
            MenuKey::Businesses => "businesses",
            MenuKey::Solutions => "solutions",
            MenuKey::Portfolio => "portfolio",
        }
    }

    /// The category this key opens
    pub fn category(&self) -> &'static MenuCategory {
        match self {
            MenuKey::About => &ABOUT,
            MenuKey::Businesses => &BUSINESSES,
            MenuKey::Solutions => &SOLUTIONS,
            MenuKey::Portfolio => &PORTFOLIO,
        }
    }
}

impl fmt::Display for MenuKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled column of a mega menu
#[derive(Debug)]
pub struct MenuColumn {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// Layout of a category's items
#[derive(Debug)]
pub enum MenuItems {
    /// Grouped columns (the Businesses mega menu)
    Mega(&'static [MenuColumn]),
    /// A flat list
    List(&'static [&'static str]),
}

/// A top-level menu category
#[derive(Debug)]
pub struct MenuCategory {
    pub key: MenuKey,
    /// Label shown in the navbar; also a reserved navigation label
    pub label: &'static str,
    /// View the category and its leaves navigate to
    pub view: View,
    /// Whether leaves deep-link to a section of the view
    pub deep_links: bool,
    pub items: MenuItems,
}

impl MenuCategory {
    /// All leaf labels in display order
    pub fn leaves(&self) -> Vec<&'static str> {
        match &self.items {
            MenuItems::Mega(columns) => columns
                .iter()
                .flat_map(|column| column.items.iter().copied())
                .collect(),
            MenuItems::List(items) => items.to_vec(),
        }
    }

    /// Whether `label` is one of this category's leaves
    pub fn contains(&self, label: &str) -> bool {
        match &self.items {
            MenuItems::Mega(columns) => columns
                .iter()
                .any(|column| column.items.contains(&label)),
            MenuItems::List(items) => items.contains(&label),
        }
    }

    /// Section slug a leaf navigates to, if this category deep-links
    pub fn leaf_section(&self, label: &str) -> Option<String> {
        self.deep_links.then(|| slugify(label))
    }
}

pub static BUSINESSES: MenuCategory = MenuCategory {
    key: MenuKey::Businesses,
    label: "Businesses",
    view: View::Business,
    deep_links: true,
    items: MenuItems::Mega(&[
        MenuColumn {
            title: "Technology & Consulting",
            items: &[
                "Vedanco IT Solutions",
                "Vedanco AI & Automation",
                "Vedanco Consulting",
            ],
        },
        MenuColumn {
            title: "Growth & People",
            items: &[
                "Vedanco Marketing",
                "Vedanco Recruitment",
                "Vedanco Venture Studio",
            ],
        },
        MenuColumn {
            title: "Assets & Infrastructure",
            items: &[
                "Vedanco Interiors",
                "Vedanco Real Estate",
                "Vedanco Logistics",
            ],
        },
        MenuColumn {
            title: "Mobility & Travel",
            items: &["Vedanco Tours & Travels", "Vedanco Air"],
        },
    ]),
};

pub static SOLUTIONS: MenuCategory = MenuCategory {
    key: MenuKey::Solutions,
    label: "Solutions",
    view: View::Solutions,
    deep_links: true,
    items: MenuItems::List(&[
        "Digital Transformation",
        "AI & Automation Solutions",
        "Business Consulting",
        "Startup Incubation",
        "Enterprise Solutions",
        "International Expansion",
    ]),
};

// Portfolio leaves land on the page top: the page has no per-item anchors.
pub static PORTFOLIO: MenuCategory = MenuCategory {
    key: MenuKey::Portfolio,
    label: "Portfolio",
    view: View::Portfolio,
    deep_links: false,
    items: MenuItems::List(&[
        "Featured Projects",
        "Case Studies",
        "Client Testimonials",
        "Industries Served",
    ]),
};

pub static ABOUT: MenuCategory = MenuCategory {
    key: MenuKey::About,
    label: "About",
    view: View::About,
    deep_links: true,
    items: MenuItems::List(&[
        "About Vedanco Group",
        "Vision & Mission",
        "Leadership",
        "Global Presence",
    ]),
};

/// Categories in resolution order
pub static RESOLUTION_ORDER: [&MenuCategory; 4] = [&BUSINESSES, &PORTFOLIO, &SOLUTIONS, &ABOUT];

/// Reserved top-level label for the home page
pub const HOME_LABEL: &str = "Home";

/// Reserved top-level label for the contact page
pub const CONTACT_LABEL: &str = "Contact";

/// Every leaf label of every category, paired with its category
pub fn all_leaves() -> impl Iterator<Item = (&'static MenuCategory, &'static str)> {
    RESOLUTION_ORDER
        .iter()
        .flat_map(|category| category.leaves().into_iter().map(move |leaf| (*category, leaf)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_leaf_counts() {
        assert_eq!(BUSINESSES.leaves().len(), 11);
        assert_eq!(SOLUTIONS.leaves().len(), 6);
        assert_eq!(PORTFOLIO.leaves().len(), 4);
        assert_eq!(ABOUT.leaves().len(), 4);
        assert_eq!(all_leaves().count(), 25);
    }

    #[test]
    fn test_leaf_labels_are_unique() {
        let mut seen = HashSet::new();
        for (_, leaf) in all_leaves() {
            assert!(seen.insert(leaf), "duplicate leaf {}", leaf);
        }
    }

    #[test]
    fn test_leaves_do_not_shadow_reserved_labels() {
        let reserved = [HOME_LABEL, CONTACT_LABEL, "Businesses", "Solutions", "Portfolio", "About"];
        for (_, leaf) in all_leaves() {
            assert!(!reserved.contains(&leaf));
        }
    }

    #[test]
    fn test_mega_menu_lookup() {
        assert!(BUSINESSES.contains("Vedanco Air"));
        assert!(!BUSINESSES.contains("Technology & Consulting"));
        assert_eq!(
            BUSINESSES.leaf_section("Vedanco Air").as_deref(),
            Some("vedanco-air")
        );
        assert_eq!(PORTFOLIO.leaf_section("Case Studies"), None);
    }

    #[test]
    fn test_key_round_trip() {
        for key in MenuKey::DESKTOP_ORDER {
            assert_eq!(key.category().key, key);
        }
    }
}
