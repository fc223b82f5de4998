use crate::frontend::services::auth::AuthState;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let username = auth.username();

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Welcome back, {username}" }
            p { class: "page-subtitle", "Here is what needs your attention today." }
            div { class: "card-grid",
                div { class: "card",
                    h2 { "3 pending time-off requests" }
                    button {
                        class: "card-link",
                        onclick: move |_| { nav.push("/timeoff"); },
                        "Review requests"
                    }
                }
                div { class: "card",
                    h2 { "Payroll closes Friday" }
                    button {
                        class: "card-link",
                        onclick: move |_| { nav.push("/payroll"); },
                        "Open payroll"
                    }
                }
                div { class: "card",
                    h2 { "Q3 reviews in progress" }
                    button {
                        class: "card-link",
                        onclick: move |_| { nav.push("/performance"); },
                        "See review cycle"
                    }
                }
            }
        }
    }
}
