//! Model layer: application state
//!
//! Plain data only. Every change goes through the update layer; the view
//! reads it.
//!
//! The results page owns its [`SceneGraph`](kyb_core::SceneGraph) together
//! with the [`ResultBrowser`](kyb_core::services::ResultBrowser) that drives
//! it, so navigation never needs a lock.

mod app;
mod modal;
mod page;
mod results;

pub use app::App;
pub use modal::{Modal, ModalState};
pub use page::Page;
pub use results::ResultsState;
