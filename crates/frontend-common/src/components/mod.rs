mod app_layout;
mod brand;
mod header;
mod icon;
mod logout_button;
mod mobile_menu;
mod nav_links;
mod sidebar;

pub use app_layout::{AppLayout, AppLayoutProps};
pub use brand::Brand;
pub use header::Header;
pub use icon::{Icon, SvgIcon};
pub use logout_button::LogoutButton;
pub use mobile_menu::MobileMenu;
pub use nav_links::NavLinks;
pub use sidebar::Sidebar;
