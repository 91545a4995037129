//! 后台命令
//!
//! `update::update` 返回的副作用描述，由 [`Executor`](super::Executor) 执行。

use agentcraft_client::{KnowledgeBaseDraft, ModelDraft, ResourceKind};
use agentcraft_core::EditMode;

use super::ConsoleConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 重新拉取列表
    Refresh(ResourceKind),
    /// 新建或更新 LLM 代理，完成后刷新
    SaveModel { mode: EditMode, draft: ModelDraft },
    /// 新建或更新知识库，完成后刷新
    SaveKnowledgeBase {
        mode: EditMode,
        draft: KnowledgeBaseDraft,
    },
    /// 删除记录，完成后刷新
    Delete { kind: ResourceKind, id: i64 },
    /// 持久化配置
    SaveConfig(ConsoleConfig),
}
