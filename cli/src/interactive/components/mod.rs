//! UI components of the site browser

pub mod footer;
pub mod logo;
pub mod menu_panel;
pub mod navbar;
pub mod page_view;
pub mod side_nav;

pub use footer::Footer;
pub use logo::VedancoLogo;
pub use menu_panel::{Dropdown, MobileMenu};
pub use navbar::Navbar;
pub use page_view::PageView;
pub use side_nav::SideNav;
