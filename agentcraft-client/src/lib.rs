//! # agentcraft-client
//!
//! Typed REST clients for the AgentCraft backend collections.
//!
//! ## Collections
//!
//! | Record | Collection path | Draft |
//! |--------|-----------------|-------|
//! | [`Model`] (LLM proxy) | `model` | [`ModelDraft`] |
//! | [`KnowledgeBase`] | `knowledgeBase` | [`KnowledgeBaseDraft`] |
//!
//! `agent` is known as a [`ResourceKind`] so the proxy can route it, but no
//! typed record exists for it.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agentcraft_client::{create_resource_client, ClientConfig, Model, ModelDraft};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let models = create_resource_client::<Model>(&ClientConfig::default())?;
//!
//!     let created = models
//!         .create(&ModelDraft {
//!             name: "gpt4proxy".to_string(),
//!             name_alias: "gpt4".to_string(),
//!             url: "https://api.example.com/v1".to_string(),
//!             ..ModelDraft::default()
//!         })
//!         .await?;
//!
//!     for model in models.list().await? {
//!         println!("{} {}", model.id, model.name);
//!     }
//!
//!     models.delete(created.id).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ClientError>`](ClientError). Backend
//! responses may be bare JSON or wrapped as `{ "code": .., "data": .. }`;
//! both decode to the same value. Nothing is retried.

mod client;
mod error;
mod factory;
mod http_client;
mod memory;
mod traits;
mod types;
mod utils;

pub use error::{ClientError, Result};

pub use factory::{ClientConfig, DEFAULT_BASE_URL, create_http_client, create_resource_client};

pub use traits::{Resource, ResourceApi};

pub use types::{
    DEFAULT_MODEL_REQUEST_TIMEOUT, KnowledgeBase, KnowledgeBaseDraft, Model, ModelDraft,
    ResourceKind,
};

pub use client::HttpResourceClient;
pub use memory::InMemoryResourceApi;

pub use utils::datetime;
pub use utils::log_sanitizer::{mask_secret, truncate_for_log};
