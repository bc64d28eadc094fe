//! # kyb-provider
//!
//! Lookup clients for the registries consulted by the KYB explorer.
//!
//! ## Supported Registries
//!
//! | Registry | Query | Body |
//! |----------|-------|------|
//! | Company registry | legal name + RFC | `{"name": "...", "id": "..."}` |
//! | Brand / trademark registry | brand name | `{"name": "..."}` |
//!
//! Both answer with `{"status": <u16>, "message"?: "...", "data"?: [...]}`.
//! `status` is an application code (`200` data present, `204` no match) and is
//! carried verbatim in [`LookupPayload`]; it is never turned into an error here.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kyb_provider::{create_registry, RegistryConfig, RegistryKind, RegistryQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = create_registry(
//!         RegistryKind::Company,
//!         RegistryConfig::new("https://registry.example.com/company"),
//!     )?;
//!
//!     let query = RegistryQuery::by_name_and_id("Acme", Some("ACM010101ABC".into()));
//!     let payload = registry.search(&query).await?;
//!     for record in &payload.records {
//!         for (key, value) in record.fields() {
//!             println!("{key}: {value:?}");
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Calls are
//! attempted once; there is no retry.

mod error;
mod factory;
mod http_client;
mod normalize;
mod registries;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use factory::create_registry;

pub use traits::RecordRegistry;

pub use normalize::{normalize_record, normalize_value};

pub use registries::{BrandRegistry, CompanyRegistry};

pub use types::{
    LookupPayload, Record, RecordValue, RegistryConfig, RegistryKind, RegistryQuery,
    STATUS_NO_MATCH, STATUS_OK,
};

pub use utils::log_sanitizer;
