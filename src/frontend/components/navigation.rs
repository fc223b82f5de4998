use crate::frontend::route::Route;
use crate::frontend::services::auth::AuthState;
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

const NAV_ITEMS: [(&str, &str); 6] = [
    ("Home", "/home"),
    ("Dashboard", "/dashboard"),
    ("Employees", "/employees"),
    ("Time Off", "/timeoff"),
    ("Payroll", "/payroll"),
    ("Performance", "/performance"),
];

#[component]
pub fn Navigation() -> Element {
    let nav = navigator();
    let route = use_route::<Route>();
    let mut auth = use_context::<AuthState>();

    let active_path = match route {
        Route::Home {} => "/home",
        Route::Dashboard {} => "/dashboard",
        Route::Employees {} => "/employees",
        Route::TimeOff {} => "/timeoff",
        Route::Payroll {} => "/payroll",
        Route::Performance {} => "/performance",
        _ => "",
    };

    let username = auth.username();

    rsx! {
        nav { class: "navigation",
            div { class: "nav-brand", "HR Desk" }
            ul { class: "nav-items",
                for (label, path) in NAV_ITEMS {
                    li {
                        class: if active_path == path { "nav-item active" } else { "nav-item" },
                        onclick: move |_| { nav.push(path); },
                        span { class: "nav-text", "{label}" }
                    }
                }
            }
            div { class: "nav-footer",
                span { class: "nav-user", "{username}" }
                button {
                    class: "logout-button",
                    onclick: move |_| {
                        auth.logout();
                        nav.push("/login");
                    },
                    "Log out"
                }
            }
        }
    }
}
