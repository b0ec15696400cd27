mod icon_button;
mod menu_icon;

pub use icon_button::IconButton;
pub use menu_icon::MenuIcon;
