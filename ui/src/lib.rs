//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

mod header;
pub use header::{chip_label, toggle_drawer, Header, MENU_BUTTON_LABEL};

mod layout;
pub use layout::Layout;

mod auth;
pub use auth::*;

mod location;
pub use location::*;

mod components;
pub use components::*;

/// Static stylesheet for the shell chrome.
pub const STYLESHEET: Asset = asset!("/assets/anubis.css");
