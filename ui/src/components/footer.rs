use crate::components::Copyright;
use crate::location::use_current_path;
use dioxus::prelude::*;

/// The only location where the copyright notice is left out.
pub const ABOUT_PATH: &str = "/about";

/// Whether the footer carries the copyright notice for `path`.
///
/// Matching is exact: `/about/team` still shows the notice, and so does an
/// unknown location.
pub fn shows_copyright(path: Option<&str>) -> bool {
    path != Some(ABOUT_PATH)
}

/// Fixed bottom bar. `path` overrides the router location when given.
#[component]
pub fn Footer(
    path: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let current = use_current_path();
    let path = path.or(current);

    rsx! {
      footer { class: "app-footer", role: "contentinfo", ..attributes,
        if shows_copyright(path.as_deref()) {
          Copyright {}
        }
      }
    }
}
