use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page",
            h2 { "About" }
            p {
                "Anubis is an autograding and cloud IDE platform for programming courses. "
                "Students push to their assignment repositories and receive test results as soon as the pipeline finishes."
            }
        }
    }
}
