//! Routing rules: the static route table and the navigation guard.
//!
//! This module is UI-framework free. The frontend's router enum binds the
//! same paths to page components; everything decision-shaped lives here so
//! it can be tested without a window.

pub mod guard;
pub mod table;

pub use guard::{NavigationGuard, Resolution};
pub use table::{HOME_PATH, LOGIN_PATH, ROOT_PATH, RootBehavior, RouteEntry, RouteTable};
