//! Views and navigation targets
//!
//! A [`View`] is the top-level page currently displayed. A
//! [`NavigationTarget`] pairs a view with an optional sub-section slug that
//! the destination page scrolls into view once it has mounted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    #[default]
    Home,
    Business,
    Portfolio,
    Solutions,
    About,
    Careers,
    Contact,
    Legal,
}

impl View {
    /// All views in display order
    pub const ALL: [View; 8] = [
        View::Home,
        View::Business,
        View::Portfolio,
        View::Solutions,
        View::About,
        View::Careers,
        View::Contact,
        View::Legal,
    ];

    /// Stable identifier of the view
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "HOME",
            View::Business => "BUSINESS",
            View::Portfolio => "PORTFOLIO",
            View::Solutions => "SOLUTIONS",
            View::About => "ABOUT",
            View::Careers => "CAREERS",
            View::Contact => "CONTACT",
            View::Legal => "LEGAL",
        }
    }

    /// Human-readable page title
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Business => "Businesses",
            View::Portfolio => "Portfolio",
            View::Solutions => "Solutions",
            View::About => "About",
            View::Careers => "Careers",
            View::Contact => "Contact",
            View::Legal => "Legal",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(s) || view.title() == s)
            .ok_or_else(|| format!("Unknown view '{}'", s))
    }
}

/// Where a navigation lands: a view and, optionally, an anchor inside it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct NavigationTarget {
    pub view: View,
    pub section: Option<String>,
}

impl NavigationTarget {
    /// Target the top of a view
    pub fn top(view: View) -> Self {
        Self {
            view,
            section: None,
        }
    }

    /// Target a named section inside a view
    pub fn section(view: View, section: impl Into<String>) -> Self {
        Self {
            view,
            section: Some(section.into()),
        }
    }

    /// The section identifier, if any
    pub fn section_id(&self) -> Option<&str> {
        self.section.as_deref()
    }
}

impl From<View> for NavigationTarget {
    fn from(view: View) -> Self {
        Self::top(view)
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.section {
            Some(section) => write!(f, "{}#{}", self.view, section),
            None => write!(f, "{}", self.view),
        }
    }
}
