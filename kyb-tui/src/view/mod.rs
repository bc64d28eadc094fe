//! View layer: rendering
//!
//! Reads the model and draws it; never mutates state.

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
