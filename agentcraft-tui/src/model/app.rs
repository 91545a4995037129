//! 应用主状态结构

use super::{FocusPanel, ModalState, NavigationState, Page, Resources, SettingsState};
use crate::backend::ConsoleConfig;
use crate::i18n::Language;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 资源页面状态（LLM 代理、知识库）
    pub resources: Resources,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前生效的配置（设置页修改后整体保存）
    pub config: ConsoleConfig,

    /// 是否使用内存后端
    pub demo: bool,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: ConsoleConfig, demo: bool) -> Self {
        let language = Language::from_code(&config.language).unwrap_or_default();
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::default(),
            status_message: None,
            resources: Resources::default(),
            settings: SettingsState::new(config.theme, language),
            modal: ModalState::new(),
            config,
            demo,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ConsoleConfig::default(), false)
    }
}
