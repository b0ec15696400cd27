use chrono::Datelike;
use dioxus::prelude::*;

pub const HOMEPAGE_URL: &str = "https://anubis.osiris.services/";

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Text following the project link, e.g. `" 2026."`.
pub fn copyright_year_suffix(year: i32) -> String {
    format!(" {year}.")
}

#[component]
pub fn Copyright(#[props(default = current_year())] year: i32) -> Element {
    let suffix = copyright_year_suffix(year);

    rsx! {
      p { class: "copyright",
        "Copyright © "
        a { href: HOMEPAGE_URL, target: "_blank", "Anubis" }
        "{suffix}"
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_ends_with_period() {
        assert_eq!(copyright_year_suffix(2021), " 2021.");
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
