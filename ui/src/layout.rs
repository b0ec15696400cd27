use crate::auth::use_auth;
use crate::components::{Drawer, Footer};
use crate::header::Header;
use dioxus::prelude::*;

#[component]
pub fn Layout(navigation: Element, children: Element) -> Element {
    let auth = use_auth();
    let mut drawer_open = use_signal(|| false);

    rsx! {
      div { class: "app-root",
        Drawer {
          open: drawer_open(),
          on_close: move |_| drawer_open.set(false),
          {navigation}
        }

        div { class: "app-content",
          Header {
            user: auth.user(),
            on_drawer_toggle: Some(EventHandler::new(move |_| drawer_open.set(!drawer_open()))),
          }
          main { class: "app-main", {children} }
          Footer {}
        }
      }
    }
}
