//! Event layer: turns terminal input into messages
//!
//! `poll_event` waits for input (bounded by the main loop's tick) and
//! `handle_event` maps it to an [`AppMessage`](crate::message::AppMessage):
//!
//! - an open modal takes every key first
//! - then global keys (quit, help)
//! - then the keys of the current page

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
