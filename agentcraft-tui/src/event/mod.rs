//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键，就地处理；
//!                 - 焦点位于导航面板，调用 handle_navigation_keys 处理
//!                 - 焦点位于内容面板，调用 handle_content_keys 处理
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     新建/编辑弹窗：
//!             Esc         → ModalMessage::Close
//!             Tab / ↓     → ModalMessage::NextField
//!             Shift+Tab/↑ → ModalMessage::PrevField
//!             Enter       → ModalMessage::Confirm
//!             Alt+Enter   → ModalMessage::Newline      （仅多行字段）
//!             Alt+s       → ModalMessage::ToggleSecrets
//!             字符输入     → ModalMessage::Input(c)
//!             Backspace   → ModalMessage::Backspace
//!
//!     确认删除弹窗：
//!             Tab / ← →   → ModalMessage::ToggleDeleteFocus
//!             Enter       → ModalMessage::Confirm
//!             Esc         → ModalMessage::Close        （等同于取消）
//!
//!     handle_event 只负责"创建"消息，不修改任何状态；
//!     消息在 src/app.rs 中交给 update::update 消费。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
