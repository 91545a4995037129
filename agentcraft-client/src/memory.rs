//! 进程内资源后端（演示模式与测试使用）

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{ClientError, Result};
use crate::traits::{Resource, ResourceApi};

/// In-memory collection with server-like semantics.
///
/// Ids are assigned monotonically, timestamps are set on create and
/// `modified` is bumped on update. Unknown ids yield [`ClientError::NotFound`].
pub struct InMemoryResourceApi<R> {
    records: RwLock<Vec<R>>,
    next_id: AtomicI64,
}

impl<R: Resource> InMemoryResourceApi<R> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// 使用已有记录初始化，后续 id 从最大 id + 1 开始
    pub fn with_records(records: Vec<R>) -> Self {
        let next_id = records.iter().map(Resource::id).max().unwrap_or(0) + 1;
        Self {
            records: RwLock::new(records),
            next_id: AtomicI64::new(next_id),
        }
    }

    fn not_found(id: i64) -> ClientError {
        ClientError::NotFound {
            resource: R::KIND.collection().to_string(),
            id: id.to_string(),
            raw_message: None,
        }
    }
}

impl<R: Resource> Default for InMemoryResourceApi<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> ResourceApi<R> for InMemoryResourceApi<R> {
    async fn list(&self) -> Result<Vec<R>> {
        Ok(self.records.read().await.clone())
    }

    async fn create(&self, draft: &R::Draft) -> Result<R> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = R::from_draft(id, draft.clone(), Utc::now());
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, draft: &R::Draft) -> Result<R> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        record.apply_draft(draft.clone(), Utc::now());
        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{KnowledgeBase, KnowledgeBaseDraft, Model, ModelDraft};

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let api = InMemoryResourceApi::<KnowledgeBase>::new();
        let a = api.create(&KnowledgeBaseDraft::default()).await.unwrap();
        let b = api.create(&KnowledgeBaseDraft::default()).await.unwrap();
        assert!(b.id > a.id);
        assert_eq!(api.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_created() {
        let api = InMemoryResourceApi::<Model>::new();
        let created = api.create(&ModelDraft::default()).await.unwrap();

        let draft = ModelDraft {
            name: "gpt4proxy".into(),
            ..ModelDraft::default()
        };
        let updated = api.update(created.id, &draft).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "gpt4proxy");
        assert_eq!(updated.created, created.created);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let api = InMemoryResourceApi::<Model>::new();
        assert!(matches!(
            api.delete(99).await,
            Err(ClientError::NotFound { .. })
        ));
        assert!(matches!(
            api.update(99, &ModelDraft::default()).await,
            Err(ClientError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn seeded_ids_continue_after_max() {
        let seed = KnowledgeBase::from_draft(41, KnowledgeBaseDraft::default(), Utc::now());
        let api = InMemoryResourceApi::with_records(vec![seed]);
        let next = api.create(&KnowledgeBaseDraft::default()).await.unwrap();
        assert_eq!(next.id, 42);
    }
}
