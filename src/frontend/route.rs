//! Application routing system.

use crate::backend::routing::{NavigationGuard, Resolution};
use crate::frontend::components::shell::Shell;
use crate::frontend::pages::{
    Dashboard, Employees, Home, Intro, Login, Payroll, Performance, TimeOff,
};
use dioxus::prelude::*;
use dioxus_router::{Routable, components::Outlet, navigator, use_route};

/// Main routing enum for the application. Paths mirror the guard's route
/// table; every route renders through the [`Guard`] layout, and the
/// workspace pages additionally sit inside the [`Shell`] layout.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    #[layout(Guard)]
    /// Landing page (or a redirect to login, depending on configuration).
    #[route("/")]
    Intro {},
    /// Login page route.
    #[route("/login")]
    Login {},
    #[layout(Shell)]
    /// Home page after signing in.
    #[route("/home")]
    Home {},
    /// Company dashboard.
    #[route("/dashboard")]
    Dashboard {},
    /// Employee roster.
    #[route("/employees")]
    Employees {},
    /// Time-off balances and requests.
    #[route("/timeoff")]
    TimeOff {},
    /// Payroll overview.
    #[route("/payroll")]
    Payroll {},
    /// Performance review cycle.
    #[route("/performance")]
    Performance {},
}

/// Pre-navigation gate. The router renders every target through this layout,
/// so each navigation attempt is checked before its page mounts; redirects
/// replace the target and re-enter the gate.
#[component]
pub fn Guard() -> Element {
    let route = use_route::<Route>();
    let nav = navigator();
    let guard = use_context::<NavigationGuard>();

    let path = route.to_string();

    match guard.evaluate_path(&path) {
        Resolution::Allow => rsx! { Outlet::<Route> {} },
        resolution => {
            // redirect_path is always Some for non-Allow resolutions
            if let Some(target) = resolution.redirect_path() {
                log::debug!("navigation to {path} redirected to {target}");
                nav.replace(target);
            }
            rsx! {}
        }
    }
}
