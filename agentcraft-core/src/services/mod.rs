//! 业务逻辑服务层

mod crud_service;
mod workflow;

pub use crud_service::CrudService;
pub use workflow::{
    begin_delete, begin_refresh, begin_submit, finish_delete, finish_refresh, finish_submit,
};

use agentcraft_client::Resource;

use crate::error::{CoreError, CoreResult};
use crate::store::ResourceStore;

/// Whether the modal creates a new record or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(i64),
}

impl EditMode {
    /// 根据打开弹窗时 store 的编辑标记确定模式
    pub fn from_store<R: Resource>(store: &ResourceStore<R>) -> CoreResult<Self> {
        if !store.is_edit() {
            return Ok(Self::Create);
        }
        store
            .current()
            .map(|record| Self::Edit(record.id()))
            .ok_or(CoreError::NoCurrentRecord)
    }

    pub fn is_edit(self) -> bool {
        matches!(self, Self::Edit(_))
    }
}
