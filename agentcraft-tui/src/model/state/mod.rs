//! 页面状态模块
//!
//! 定义各个页面与弹窗的状态数据结构

mod modal;
mod resources;
mod settings;

pub use modal::{FOCUS_CANCEL, FOCUS_CONFIRM, Modal, ModalState};
pub use resources::{ConsoleResource, Resources};
pub use settings::{SettingItem, SettingsState, Theme};
