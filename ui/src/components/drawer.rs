use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    /// Visibility below the small breakpoint. Wider screens always show the drawer.
    pub open: bool,
    pub on_close: EventHandler,
    /// Navigation links
    pub children: Element,
}

#[component]
pub fn Drawer(props: Props) -> Element {
    rsx! {
      if props.open {
        div {
          class: "drawer-backdrop",
          onclick: move |_| props.on_close.call(()),
        }
      }

      nav {
        class: "drawer",
        class: if props.open { "drawer-open" },
        div { class: "drawer-title", "Anubis" }
        // Following a link closes the temporary drawer
        div {
          class: "drawer-links",
          onclick: move |_| props.on_close.call(()),
          {props.children}
        }
      }
    }
}
