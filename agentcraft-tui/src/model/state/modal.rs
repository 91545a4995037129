//! 弹窗/对话框状态

use agentcraft_client::ResourceKind;
use agentcraft_core::EditMode;

/// 确认删除弹窗的焦点：取消
pub const FOCUS_CANCEL: usize = 0;
/// 确认删除弹窗的焦点：确认
pub const FOCUS_CONFIRM: usize = 1;

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 新建/编辑记录（模式在打开时确定，弹窗存续期间不变）
    EditRecord { kind: ResourceKind, mode: EditMode },
    /// 确认删除
    ConfirmDelete {
        kind: ResourceKind,
        /// 记录 ID
        id: i64,
        /// 记录名称（高亮显示）
        name: String,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 帮助信息
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 是否正在编辑 `kind` 类型的记录
    pub fn is_editing(&self, kind: ResourceKind) -> bool {
        matches!(self.active, Some(Modal::EditRecord { kind: k, .. }) if k == kind)
    }

    /// 显示新建/编辑弹窗
    pub fn show_edit_record(&mut self, kind: ResourceKind, mode: EditMode) {
        self.active = Some(Modal::EditRecord { kind, mode });
    }

    /// 显示确认删除弹窗（默认焦点在取消）
    pub fn show_confirm_delete(&mut self, kind: ResourceKind, id: i64, name: &str) {
        self.active = Some(Modal::ConfirmDelete {
            kind,
            id,
            name: name.to_string(),
            focus: FOCUS_CANCEL,
        });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
