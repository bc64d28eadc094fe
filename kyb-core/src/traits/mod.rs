//! Collaborator abstractions
//!
//! The core never talks to a terminal, a window or the network directly;
//! frontends and the provider crate implement these traits.

mod prompt_channel;
mod scene_surface;

pub use kyb_provider::RecordRegistry;
pub use prompt_channel::PromptChannel;
pub use scene_surface::SceneSurface;
