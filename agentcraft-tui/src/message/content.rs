//! 内容面板消息
//!
//! 处理内容面板中的操作，如列表选择、增删改查等

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（资源页面上等同于编辑当前行）
    Confirm,

    // ========== CRUD 操作 ==========
    /// 添加新项目
    Add,
    /// 编辑当前选中项
    Edit,
    /// 删除当前选中项
    Delete,

    // ========== 设置页面专用 ==========
    /// 切换当前设置项的值
    Toggle,
}
