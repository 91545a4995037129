//! View 层：界面渲染
//!
//! 只读取 Model，从不修改状态。
//!
//!     layout.rs       主布局：标题栏 + 导航/内容分栏 + 状态栏 + 弹窗
//!     theme.rs        颜色方案与常用样式
//!     components/     导航面板、状态栏、弹窗
//!     pages/          资源列表页、设置页

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
