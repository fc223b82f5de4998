use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn Intro() -> Element {
    let nav = use_navigator();

    rsx! {
        main { class: "intro",
            div { class: "intro-card",
                h1 { class: "intro-title", "HR Desk" }
                p { class: "intro-text",
                    "People operations for the whole company: employees, time off, payroll and performance in one place."
                }
                button {
                    class: "intro-button",
                    onclick: move |_| { nav.push("/login"); },
                    "Sign in"
                }
            }
        }
    }
}
