use auth::AuthProvider;
use dioxus::prelude::*;

use ui::Layout;
use views::{About, Dashboard, NotFound};

mod auth;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},
        #[route("/about")]
        About {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn main() {
    #[cfg(feature = "server")]
    {
        use tower_cookies::CookieManagerLayer;

        dioxus::serve(|| async move {
            Ok(dioxus::server::router(App).layer(CookieManagerLayer::new()))
        });
    }

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::STYLESHEET }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Anubis" }

        AuthProvider { Router::<Route> {} }
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        Layout {
            navigation: rsx! {
                Link {
                    class: "drawer-link",
                    active_class: "active",
                    to: Route::Dashboard {},
                    "Dashboard"
                }
                Link {
                    class: "drawer-link",
                    active_class: "active",
                    to: Route::About {},
                    "About"
                }
            },
            Outlet::<Route> {}
        }
    }
}
