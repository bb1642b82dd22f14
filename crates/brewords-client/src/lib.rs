//! brewords-client: backend and offline data sources for brewords.
//!
//! Implements the `DataSource` trait for the REST backend and for TOML
//! content packs, and handles sign-in, token storage and configuration.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod mock;
pub mod pack_source;
pub mod token;

pub use api::ApiClient;
pub use config::{create_client, create_source, load_config, BrewordsConfig};
pub use error::ClientError;
pub use pack_source::PackSource;
pub use token::FileTokenStore;
