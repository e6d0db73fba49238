//! Site navigation model
//!
//! Views, the menu taxonomy, the view router and everything that reacts to
//! it: navigation chrome, page anchors, deep-link consumption, the home side
//! navigation and the intro gate.

pub mod chrome;
pub mod deep_link;
pub mod footer;
pub mod handle;
pub mod intro;
pub mod pages;
pub mod router;
pub mod side_nav;
pub mod slug;
pub mod taxonomy;
pub mod view;

pub use chrome::ChromeState;
pub use deep_link::{DeepLinkAction, PageFocus, PendingScroll};
pub use footer::{FooterGroup, FooterLink, FOOTER_LINKS};
pub use handle::RouterHandle;
pub use intro::IntroGate;
pub use pages::{page_for, Cta, Page, Section, SectionKind};
pub use router::{resolve, DetachedViewport, NavigationOutcome, ViewRouter, Viewport};
pub use side_nav::{SectionSpan, SideNavEntry, SideNavTracker, SIDE_NAV_ENTRIES};
pub use slug::slugify;
pub use taxonomy::{MenuCategory, MenuItems, MenuKey};
pub use view::{NavigationTarget, View};
