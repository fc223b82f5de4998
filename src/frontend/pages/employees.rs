use dioxus::prelude::*;

const ROSTER: [(&str, &str, &str); 5] = [
    ("Amara Okafor", "Engineering", "Berlin"),
    ("Jonas Lindqvist", "Finance", "Stockholm"),
    ("Priya Raman", "People Ops", "Remote"),
    ("Mateo Silva", "Engineering", "Lisbon"),
    ("Hana Sato", "Design", "Tokyo"),
];

#[component]
pub fn Employees() -> Element {
    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Employees" }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Team" }
                        th { "Location" }
                    }
                }
                tbody {
                    for (name, team, location) in ROSTER {
                        tr {
                            td { "{name}" }
                            td { "{team}" }
                            td { "{location}" }
                        }
                    }
                }
            }
        }
    }
}
