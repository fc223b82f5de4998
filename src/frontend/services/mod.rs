//! Frontend services shared through context.

pub mod auth;
