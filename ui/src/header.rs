use crate::components::{Chip, IconButton, MenuIcon};
use dioxus::prelude::*;
use shared::user::User;

/// Accessible name of the drawer toggle.
pub const MENU_BUTTON_LABEL: &str = "open drawer";

/// Text shown in the identity chip.
pub fn chip_label(user: Option<&User>) -> &str {
    user.map(User::display_netid).unwrap_or_default()
}

/// Forward one activation of the menu button. Without a handler this is a no-op.
pub fn toggle_drawer(handler: Option<EventHandler>) {
    if let Some(handler) = handler {
        handler.call(());
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    #[props(default)]
    pub user: Option<User>,
    /// Called once per activation of the menu button.
    #[props(default)]
    pub on_drawer_toggle: Option<EventHandler>,
}

#[component]
pub fn Header(props: Props) -> Element {
    let label = chip_label(props.user.as_ref()).to_string();
    let on_drawer_toggle = props.on_drawer_toggle;

    rsx! {
        header { class: "app-bar", role: "banner",
            div { class: "toolbar",
                // Hidden from the small breakpoint up
                div { class: "menu-slot",
                    IconButton {
                        label: MENU_BUTTON_LABEL,
                        class: "menu-button",
                        onclick: move |_| toggle_drawer(on_drawer_toggle),
                        MenuIcon {}
                    }
                }

                div { class: "toolbar-spacer" }

                div { class: "avatar",
                    Chip { label, clickable: true }
                }
            }
        }
    }
}
