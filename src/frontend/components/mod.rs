//! UI components and layouts.

pub mod navigation;
pub mod shell;
