//! 资源 CRUD 服务

use std::sync::Arc;

use agentcraft_client::{Resource, ResourceApi};

use crate::error::{CoreError, CoreResult};
use crate::form::{Draft, FormController};
use crate::services::{EditMode, workflow};
use crate::store::ResourceStore;

/// CRUD workflows for one resource kind
///
/// Mutations are followed by a refresh so the caller always gets the
/// server's view of the collection back.
pub struct CrudService<R: Resource> {
    api: Arc<dyn ResourceApi<R>>,
}

impl<R: Resource> Clone for CrudService<R> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<R: Resource> CrudService<R> {
    /// 创建 CRUD 服务实例
    #[must_use]
    pub fn new(api: Arc<dyn ResourceApi<R>>) -> Self {
        Self { api }
    }

    /// 拉取完整列表
    pub async fn refresh(&self) -> CoreResult<Vec<R>> {
        self.api
            .list()
            .await
            .map_err(|e| log_failure("refresh", CoreError::Client(e)))
    }

    /// 新建或更新记录，然后刷新列表
    pub async fn save(&self, mode: EditMode, draft: &R::Draft) -> CoreResult<Vec<R>> {
        let saved = match mode {
            EditMode::Create => self.api.create(draft).await,
            EditMode::Edit(id) => self.api.update(id, draft).await,
        };
        match saved {
            Ok(record) => {
                log::info!(
                    "[{}] Saved '{}' (id {}, {})",
                    R::KIND,
                    record.name(),
                    record.id(),
                    if mode.is_edit() { "update" } else { "create" }
                );
            }
            Err(e) => return Err(log_failure("save", CoreError::Client(e))),
        }
        self.refresh().await
    }

    /// 删除记录，然后刷新列表
    pub async fn delete(&self, id: i64) -> CoreResult<Vec<R>> {
        if let Err(e) = self.api.delete(id).await {
            return Err(log_failure("delete", CoreError::Client(e)));
        }
        log::info!("[{}] Deleted record {id}", R::KIND);
        self.refresh().await
    }
}

impl<R: Resource> CrudService<R>
where
    R::Draft: Draft,
{
    /// Full list-view load: guard, fetch, replace, clear loading.
    pub async fn reload(&self, store: &mut ResourceStore<R>) -> CoreResult<()> {
        workflow::begin_refresh(store)?;
        let result = self.refresh().await;
        workflow::finish_refresh(store, result)
    }

    /// Full modal submit: validate, guard, save, refresh, close and reset.
    pub async fn submit(
        &self,
        store: &mut ResourceStore<R>,
        form: &mut FormController<R::Draft>,
        mode: EditMode,
    ) -> CoreResult<()> {
        let draft = workflow::begin_submit(store, form)?;
        let result = self.save(mode, &draft).await;
        workflow::finish_submit(store, form, result)
    }

    /// Confirmed delete: guard, delete, refresh, clear loading.
    pub async fn remove(&self, store: &mut ResourceStore<R>, id: i64) -> CoreResult<()> {
        workflow::begin_delete(store)?;
        let result = self.delete(id).await;
        workflow::finish_delete(store, result)
    }
}

fn log_failure(action: &str, err: CoreError) -> CoreError {
    if err.is_expected() {
        log::warn!("{action} failed: {err}");
    } else {
        log::error!("{action} failed: {err}");
    }
    err
}
