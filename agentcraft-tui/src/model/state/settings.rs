//! 设置页面状态

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 获取下一个主题（只有两个选项，上一个与下一个相同）
    #[must_use]
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Language,
}

impl SettingItem {
    /// 获取所有设置项
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::Language]
    }
}

/// 设置页面状态
#[derive(Debug, Default)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    pub theme: Theme,
    pub language: Language,
}

impl SettingsState {
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            selected_index: 0,
            theme,
            language,
        }
    }

    /// 选择上一个设置项
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = SettingItem::all().len() - 1;
        }
    }

    /// 选择下一个设置项
    pub fn select_next(&mut self) {
        if self.selected_index < SettingItem::all().len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// 获取当前选中的设置项
    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::all().get(self.selected_index).copied()
    }

    /// 切换当前设置项的值（两个选项，左右方向结果相同）
    pub fn toggle(&mut self) -> Option<SettingItem> {
        let item = self.current_item()?;
        match item {
            SettingItem::Theme => self.theme = self.theme.next(),
            SettingItem::Language => self.language = self.language.next(),
        }
        Some(item)
    }
}
