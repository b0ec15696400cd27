use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    #[props(into)]
    label: String,
    /// Renders the chip as an interactive affordance. No handler is attached.
    #[props(optional, default)]
    clickable: bool,
}

#[component]
pub fn Chip(props: Props) -> Element {
    rsx! {
      div {
        class: "chip",
        class: if props.clickable { "chip-clickable" },
        role: if props.clickable { "button" },
        tabindex: if props.clickable { "0" },
        span { class: "chip-label", "{props.label}" }
      }
    }
}
