//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 所有的用户操作和状态变更都通过 Message 来表达：
//!
//!     app.rs          AppMessage，主消息
//!     navigation.rs   导航面板中的子消息
//!     content.rs      内容面板中的子消息
//!     modal.rs        弹窗中的子消息
//!     backend.rs      后台任务完成后回传的结果
//!
//! Event 层把按键翻译成 AppMessage；执行器把网络请求的结果包装成
//! `AppMessage::Backend`。两者都交给 `update::update` 处理。

mod app;
mod backend;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::{BackendMessage, Completion, Operation};
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
