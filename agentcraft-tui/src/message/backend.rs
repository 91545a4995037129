//! 后台任务结果消息
//!
//! Produced on the tokio runtime by the executor and applied on the UI
//! thread by `update::backend`.

use agentcraft_client::{KnowledgeBase, Model};
use agentcraft_core::{CoreResult, EditMode};

/// 已完成的操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Refresh,
    Save(EditMode),
    Delete(i64),
}

/// 一次远程操作的结果：成功时携带刷新后的完整列表
#[derive(Debug)]
pub struct Completion<R> {
    pub operation: Operation,
    pub result: CoreResult<Vec<R>>,
}

/// 后台消息
#[derive(Debug)]
pub enum BackendMessage {
    Models(Completion<Model>),
    KnowledgeBases(Completion<KnowledgeBase>),
    /// 配置保存结果
    ConfigSaved(Result<(), String>),
}
