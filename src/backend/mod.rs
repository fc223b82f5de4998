//! Backend of the application: routing rules, session state and configuration.

pub mod config;
pub mod paths;
pub mod routing;
pub mod session;
