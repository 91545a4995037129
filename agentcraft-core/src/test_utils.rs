//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::Arc;

use agentcraft_client::{ClientError, ModelDraft, Resource, ResourceApi, Result};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::services::CrudService;

// ===== MockResourceApi =====

pub struct MockResourceApi<R: Resource> {
    records: RwLock<Vec<R>>,
    next_id: RwLock<i64>,
    /// 如果 Some，下一次调用返回此错误（用于测试失败路径）
    fail_next: RwLock<Option<ClientError>>,
    calls: RwLock<usize>,
    last_update: RwLock<Option<(i64, R::Draft)>>,
}

impl<R: Resource> MockResourceApi<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: RwLock::new(1),
            fail_next: RwLock::new(None),
            calls: RwLock::new(0),
            last_update: RwLock::new(None),
        }
    }

    pub async fn seed(&self, records: Vec<R>) {
        let max = records.iter().map(Resource::id).max().unwrap_or(0);
        *self.next_id.write().await = max + 1;
        *self.records.write().await = records;
    }

    pub async fn fail_next(&self, err: ClientError) {
        *self.fail_next.write().await = Some(err);
    }

    pub async fn call_count(&self) -> usize {
        *self.calls.read().await
    }

    pub async fn last_update(&self) -> Option<(i64, R::Draft)> {
        self.last_update.read().await.clone()
    }

    async fn enter(&self) -> Result<()> {
        *self.calls.write().await += 1;
        match self.fail_next.write().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
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

#[async_trait]
impl<R: Resource> ResourceApi<R> for MockResourceApi<R> {
    async fn list(&self) -> Result<Vec<R>> {
        self.enter().await?;
        Ok(self.records.read().await.clone())
    }

    async fn create(&self, draft: &R::Draft) -> Result<R> {
        self.enter().await?;
        let mut next_id = self.next_id.write().await;
        let record = R::from_draft(*next_id, draft.clone(), Utc::now());
        *next_id += 1;
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, draft: &R::Draft) -> Result<R> {
        self.enter().await?;
        *self.last_update.write().await = Some((id, draft.clone()));
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        record.apply_draft(draft.clone(), Utc::now());
        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.enter().await?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建使用 mock 后端的服务
pub fn service_with_mock<R: Resource>() -> (CrudService<R>, Arc<MockResourceApi<R>>) {
    let api = Arc::new(MockResourceApi::<R>::new());
    let svc = CrudService::new(api.clone());
    (svc, api)
}

/// 文档中的示例草稿
pub fn gpt4_draft() -> ModelDraft {
    ModelDraft {
        name: "gpt4proxy".to_string(),
        name_alias: "gpt4".to_string(),
        url: "https://api.example.com/v1".to_string(),
        token: "secret".to_string(),
        timeout: 30,
        description: "prod".to_string(),
    }
}
