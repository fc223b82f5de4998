use dioxus::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("Headcount", "128"),
    ("Open roles", "6"),
    ("On leave today", "4"),
    ("Avg. tenure", "3.2 yrs"),
];

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Dashboard" }
            div { class: "card-grid",
                for (label, value) in STATS {
                    div { class: "card stat-card",
                        span { class: "stat-value", "{value}" }
                        span { class: "stat-label", "{label}" }
                    }
                }
            }
        }
    }
}
