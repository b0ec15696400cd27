pub mod chip;
pub mod copyright;
pub mod drawer;
pub mod footer;
pub mod simple;

pub use chip::Chip;
pub use copyright::{copyright_year_suffix, current_year, Copyright, HOMEPAGE_URL};
pub use drawer::Drawer;
pub use footer::{shows_copyright, Footer, ABOUT_PATH};
pub use simple::{IconButton, MenuIcon};
