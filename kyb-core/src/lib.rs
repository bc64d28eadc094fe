//! KYB Explorer Core Library
//!
//! Platform-independent logic of a KYB ("know your business") session:
//! - Dialog flow controller (company, RFC and brand prompts)
//! - Parallel, failure-tolerant retrieval from the company and brand registries
//! - Record screens and a hierarchical navigator with drill-down sub-lists
//!
//! Frontends plug in through the [`PromptChannel`] and [`SceneSurface`] traits;
//! [`SceneGraph`] is an in-memory surface they can draw from.

pub mod config;
pub mod error;
pub mod scene;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::SessionConfig;
pub use error::{CoreError, CoreResult};
pub use scene::{SceneGraph, SceneNode};
pub use services::ServiceContext;
pub use traits::{PromptChannel, RecordRegistry, SceneSurface};
