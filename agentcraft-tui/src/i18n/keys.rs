//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **资源页面**：`models.*` / `knowledge_bases.*` 共用 [`ResourcePageTexts`]
//! 4. **表单字段按字段 id 归 `fields.*`**，表格列归 `columns.*`
//! 5. **校验消息归 `rules.*`**，通过 [`Texts::validation`] 从 schema 中的英文消息映射

use agentcraft_core::form::{ALIAS_REQUIRED, NAME_REQUIRED, URL_INVALID};

/// 所有翻译文本的根结构
pub struct Texts {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub nav: NavTexts,
    /// LLM 代理页面
    pub models: ResourcePageTexts,
    /// 知识库页面
    pub knowledge_bases: ResourcePageTexts,
    pub columns: ColumnTexts,
    pub fields: FieldTexts,
    pub modal: ModalTexts,
    pub settings: SettingsTexts,
    pub status: StatusTexts,
    pub rules: RuleTexts,
    pub help: HelpTexts,
}

impl Texts {
    /// 把 schema 中的校验消息映射为当前语言，未知消息原样返回
    pub fn validation(&self, message: &'static str) -> &'static str {
        match message {
            NAME_REQUIRED => self.rules.name_required,
            ALIAS_REQUIRED => self.rules.alias_required,
            URL_INVALID => self.rules.url_invalid,
            other => other,
        }
    }

    /// 表单字段标签（按字段 id），未知字段使用 schema 中的默认标签
    pub fn field_label(&self, id: &str, fallback: &'static str) -> &'static str {
        match id {
            "name" => self.fields.name,
            "name_alias" => self.fields.name_alias,
            "url" => self.fields.url,
            "token" => self.fields.token,
            "timeout" => self.fields.timeout,
            "description" => self.fields.description,
            _ => fallback,
        }
    }
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub demo_badge: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 状态栏快捷键说明
pub struct HintTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub open: &'static str,
    pub select: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub switch_option: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

pub struct NavTexts {
    pub menu: &'static str,
    pub models: &'static str,
    pub knowledge_bases: &'static str,
    pub settings: &'static str,
}

// ============================================================================
// 资源页面
// ============================================================================

pub struct ResourcePageTexts {
    /// 面包屑，如 "AgentCraft / LLM Proxies"
    pub breadcrumb: &'static str,
    /// 功能说明
    pub description: &'static str,
    pub empty: &'static str,
    pub create_action: &'static str,
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub delete_title: &'static str,
}

pub struct ColumnTexts {
    pub id: &'static str,
    pub name: &'static str,
    pub alias: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub token: &'static str,
    pub created: &'static str,
    pub modified: &'static str,
}

pub struct FieldTexts {
    pub name: &'static str,
    pub name_alias: &'static str,
    pub url: &'static str,
    pub token: &'static str,
    pub timeout: &'static str,
    pub description: &'static str,
    pub description_placeholder: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    /// 删除确认，后接记录名称和问号
    pub confirm_delete_prompt: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
    pub saving: &'static str,
    pub hint_next_field: &'static str,
    pub hint_submit: &'static str,
    pub hint_cancel: &'static str,
    pub hint_toggle_secret: &'static str,
    pub hint_newline: &'static str,
    pub hint_close: &'static str,
}

// ============================================================================
// 设置页面
// ============================================================================

pub struct SettingsTexts {
    pub theme: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
    pub language: &'static str,
    pub backend: &'static str,
    pub demo_backend: &'static str,
}

// ============================================================================
// 状态栏消息
// ============================================================================

pub struct StatusTexts {
    pub refreshing: &'static str,
    /// 后接记录数量
    pub loaded: &'static str,
    pub saving: &'static str,
    pub saved: &'static str,
    pub deleting: &'static str,
    pub deleted: &'static str,
    pub busy: &'static str,
    pub no_selection: &'static str,
    pub fix_fields: &'static str,
    pub refresh_failed: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
    pub settings_saved: &'static str,
    pub settings_save_failed: &'static str,
    pub not_supported: &'static str,
}

// ============================================================================
// 校验消息
// ============================================================================

pub struct RuleTexts {
    pub name_required: &'static str,
    pub alias_required: &'static str,
    pub url_invalid: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    /// (按键, 说明)
    pub entries: &'static [(&'static str, &'static str)],
}
