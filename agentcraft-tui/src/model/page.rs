//! 页面状态定义

use agentcraft_client::ResourceKind;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// LLM 代理列表
    #[default]
    Models,
    /// 知识库列表
    KnowledgeBases,
    /// 设置
    Settings,
}

impl Page {
    /// 页面展示的资源类型，非资源页面返回 `None`
    pub fn resource_kind(self) -> Option<ResourceKind> {
        match self {
            Page::Models => Some(ResourceKind::Model),
            Page::KnowledgeBases => Some(ResourceKind::KnowledgeBase),
            Page::Settings => None,
        }
    }
}
