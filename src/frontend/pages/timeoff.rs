use dioxus::prelude::*;

const REQUESTS: [(&str, &str, &str); 3] = [
    ("Amara Okafor", "Sep 1 - Sep 5", "Pending"),
    ("Hana Sato", "Sep 8 - Sep 12", "Pending"),
    ("Mateo Silva", "Aug 28", "Approved"),
];

#[component]
pub fn TimeOff() -> Element {
    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Time Off" }
            div { class: "card",
                h2 { "Your balance" }
                p { "18 vacation days, 5 sick days remaining this year." }
            }
            h2 { class: "section-title", "Recent requests" }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Employee" }
                        th { "Dates" }
                        th { "Status" }
                    }
                }
                tbody {
                    for (name, dates, status) in REQUESTS {
                        tr {
                            td { "{name}" }
                            td { "{dates}" }
                            td { "{status}" }
                        }
                    }
                }
            }
        }
    }
}
