use dioxus::prelude::*;

const RUNS: [(&str, &str, &str); 3] = [
    ("August 2026", "128 employees", "In review"),
    ("July 2026", "126 employees", "Paid"),
    ("June 2026", "124 employees", "Paid"),
];

#[component]
pub fn Payroll() -> Element {
    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Payroll" }
            div { class: "card",
                h2 { "Current period" }
                p { "August run closes Friday. 2 contracts still need sign-off." }
            }
            h2 { class: "section-title", "Recent runs" }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Period" }
                        th { "Scope" }
                        th { "Status" }
                    }
                }
                tbody {
                    for (period, scope, status) in RUNS {
                        tr {
                            td { "{period}" }
                            td { "{scope}" }
                            td { "{status}" }
                        }
                    }
                }
            }
        }
    }
}
