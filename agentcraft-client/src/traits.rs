use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::types::ResourceKind;

/// A record type managed through one backend collection.
///
/// The identifier is assigned by the backend and never changes afterwards;
/// `created`/`modified` are server-authoritative and are not part of the draft.
pub trait Resource: Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Writable fields of the record (everything except identity and timestamps).
    type Draft: Clone + Debug + Default + PartialEq + Send + Sync + Serialize + 'static;

    /// Backend collection of this record type.
    const KIND: ResourceKind;

    /// Server-assigned identifier.
    fn id(&self) -> i64;

    /// Display name (shown in tables and confirmation prompts).
    fn name(&self) -> &str;

    /// Copy the writable fields out of the record.
    fn to_draft(&self) -> Self::Draft;

    /// Materialize a record from a draft (used by in-process backends).
    fn from_draft(id: i64, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Overwrite the writable fields and bump the modification time.
    fn apply_draft(&mut self, draft: Self::Draft, now: DateTime<Utc>);
}

/// Resource client trait
///
/// Every method performs exactly one remote call; failures are returned to
/// the caller untouched.
#[async_trait]
pub trait ResourceApi<R: Resource>: Send + Sync {
    /// Backend collection served by this client.
    fn kind(&self) -> ResourceKind {
        R::KIND
    }

    /// Fetch every record of the collection.
    async fn list(&self) -> Result<Vec<R>>;

    /// Create a record; the backend assigns id and timestamps.
    async fn create(&self, draft: &R::Draft) -> Result<R>;

    /// Overwrite the writable fields of record `id`.
    async fn update(&self, id: i64, draft: &R::Draft) -> Result<R>;

    /// Delete record `id`.
    async fn delete(&self, id: i64) -> Result<()>;
}
