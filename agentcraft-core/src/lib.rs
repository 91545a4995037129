//! AgentCraft Console Core Library
//!
//! Provides the CRUD workflow shared by every resource page:
//! - Form Controller: typed field schema, generic binder and validation
//! - Resource Store: explicit state container mutated through named actions
//! - CRUD Service: async create/update/delete followed by a refresh
//!
//! This library is UI-independent; the record transport is injected as an
//! `Arc<dyn ResourceApi<R>>` from `agentcraft-client`.

pub mod error;
pub mod form;
pub mod services;
pub mod store;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use form::{Draft, FieldBinding, FieldErrors, FieldKind, FieldSpec, FormController, Rule};
pub use services::{CrudService, EditMode};
pub use store::ResourceStore;
