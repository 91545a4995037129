//! Model 层：应用状态定义
//!
//! Model 层只保存数据，不做任何 IO：
//!
//!     App                         应用主状态（model/app.rs）
//!       ├── focus                 焦点在导航面板还是内容面板
//!       ├── navigation            左侧导航（LLM代理 / 知识库 / 设置）
//!       ├── current_page          右侧显示哪个页面
//!       ├── resources             每种资源一个 ResourceState
//!       │     ├── store           ResourceStore：列表、loading、弹窗、编辑标记、当前记录
//!       │     └── form            FormController：字段绑定与校验
//!       ├── settings              设置页面状态
//!       └── modal                 当前弹窗
//!
//! 只有 Update 层可以修改 Model；View 层只读取 Model。
//! 网络请求的结果以 `AppMessage::Backend` 的形式回到 Update 层，
//! 因此所有状态修改都发生在 UI 线程上。

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
pub use state::{ConsoleResource, ModalState, Resources, SettingsState};
