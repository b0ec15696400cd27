use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::user::User;
use ui::Auth;

#[component]
pub fn AuthProvider(children: Element) -> Element {
    let identity = use_resource(move || async move {
        match api::whoami().await {
            Ok(user) => user,
            Err(e) => {
                warn!("Could not resolve the current user: {e}");
                None
            }
        }
    });

    let user = use_signal(|| None::<User>);
    let mut auth = use_context_provider(|| Auth::new(user));
    let mut initialized = use_signal(|| false);

    use_effect(move || {
        if let Some(resolved) = identity.read().clone() {
            match &resolved {
                Some(u) => info!("Signed in as {}", u.display_netid()),
                None => info!("No active session"),
            }
            auth.set_user(resolved);
            initialized.set(true);
        }
    });

    if !*initialized.read() {
        return rsx! {
            div { class: "splash",
                h1 { "Anubis" }
            }
        };
    }

    rsx! {
        {children}
    }
}
