//! Reusable view components

pub mod modal;
pub mod scene;
pub mod statusbar;
