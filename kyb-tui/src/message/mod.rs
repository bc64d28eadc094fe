//! Message layer: everything that can change the model
//!
//! ```text
//!   Event ──translate──▶ Message ──consume──▶ Update ──mutate──▶ Model
//!                           ▲                                       │
//!                 BackendEvent (session task)            View reads ┘
//! ```
//!
//! Key events become messages in `event/handler.rs`; session events are
//! wrapped in [`AppMessage::Backend`] by the main loop. `update` is the only
//! place that acts on them.

mod app;
mod browser;
mod modal;

pub use app::AppMessage;
pub use browser::BrowserMessage;
pub use modal::ModalMessage;
