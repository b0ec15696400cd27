use dioxus::prelude::*;
use ui::use_auth;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();

    rsx! {
        section { class: "page",
            h2 { "Dashboard" }
            if let Some(netid) = auth.netid() {
                p { "Signed in as {netid}." }
            } else {
                p { "You are not signed in." }
            }
        }
    }
}
