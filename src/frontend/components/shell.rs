//! Workspace layout: sidebar navigation around the routed page.

use crate::frontend::components::navigation::Navigation;
use crate::frontend::route::Route;
use dioxus::prelude::*;
use dioxus_router::components::Outlet;

#[component]
pub fn Shell() -> Element {
    rsx! {
        div { class: "shell",
            Navigation {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
