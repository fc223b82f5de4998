use dioxus::prelude::*;

const CYCLES: [(&str, &str); 3] = [
    ("Q3 2026 reviews", "Self-reviews due Sep 15"),
    ("Q2 2026 reviews", "Closed"),
    ("Q1 2026 reviews", "Closed"),
];

#[component]
pub fn Performance() -> Element {
    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Performance" }
            div { class: "card-grid",
                for (cycle, status) in CYCLES {
                    div { class: "card",
                        h2 { "{cycle}" }
                        p { "{status}" }
                    }
                }
            }
        }
    }
}
