//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 确认/提交
    Confirm,

    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,

    /// 输入字符
    Input(char),

    /// 换行（仅多行字段）
    Newline,

    /// 删除字符（Backspace）
    Backspace,

    /// 切换密码可见性
    ToggleSecrets,
}
