//! Application root: wires configuration, session and routing together.

use crate::backend::config::AppConfig;
use crate::backend::routing::{NavigationGuard, RouteTable};
use crate::backend::session::{SessionStore, SharedSession};
use crate::frontend::route::Route;
use crate::frontend::services::auth::AuthState;
use dioxus::prelude::*;
use dioxus_router::Router;
use std::sync::Arc;

const STYLESHEET: &str = include_str!("../../assets/styles/main.css");

#[component]
pub fn App() -> Element {
    let store = use_hook(SessionStore::open_default);

    // One guard per app instance, built from the configured table and the
    // session store as its status capability.
    let guard = use_hook(|| {
        let config = AppConfig::load_or_default();
        let table = RouteTable::standard(config.routing.root_page.behavior());
        let session: SharedSession = Arc::new(store.clone());
        NavigationGuard::new(table, session)
    });
    provide_context(guard);

    let current_user = use_signal(|| None::<String>);
    let auth = AuthState {
        store,
        current_user,
    };
    provide_context(auth.clone());

    // Pick up a session left over from a previous run.
    let mut auth_restore = auth;
    use_effect(move || {
        auth_restore.restore();
    });

    rsx! {
        style { dangerous_inner_html: STYLESHEET }
        Router::<Route> {}
    }
}
