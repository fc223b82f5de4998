//! Frontend module for the HR Desk application.

pub mod app;
pub mod components;
pub mod pages;
pub mod route;
pub mod services;
