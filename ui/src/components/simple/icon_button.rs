use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    children: Element,
    /// Accessible name, the button has no visible text
    #[props(into)]
    label: String,
    #[props(into)]
    onclick: EventHandler<MouseEvent>,
    #[props(optional, into)]
    class: String,
}

#[component]
pub fn IconButton(props: Props) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "{props.class}",
            aria_label: "{props.label}",
            onclick: move |evt| props.onclick.call(evt),
            {props.children}
        }
    }
}
