use dioxus::prelude::*;
use dioxus::router::RouterContext;

/// Path portion of a route string, without query or fragment.
pub fn path_only(route: &str) -> &str {
    route.split(['?', '#']).next().unwrap_or_default()
}

/// Current router path, or `None` when rendered outside a router.
pub fn use_current_path() -> Option<String> {
    let router = try_use_context::<RouterContext>();
    router.map(|router| path_only(&router.full_route_string()).to_string())
}
