//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TEXTS: Texts = Texts {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "AgentCraft 控制台",
        loading: "加载中...",
        error: "错误",
        demo_badge: "[演示]",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        switch_panel: "切换面板",
        navigate: "导航",
        open: "进入",
        select: "选择",
        add: "新建",
        edit: "修改",
        delete: "删除",
        refresh: "刷新",
        help: "帮助",
        quit: "退出",
        switch_option: "切换选项",
    },

    nav: NavTexts {
        menu: "菜单",
        models: "LLM代理",
        knowledge_bases: "知识库",
        settings: "设置",
    },

    // ========================================================================
    // 资源页面
    // ========================================================================
    models: ResourcePageTexts {
        breadcrumb: "AgentCraft / LLM代理",
        description: "AgentCraft的LLM代理是基于基础大语言模型服务比如通义千问等构建出的一个代理层服务，\
            主要是为了抹平不同模型服务之间的接口数据差异，方便在业务中快速切换更加适合的模型服务",
        empty: "暂无LLM代理",
        create_action: "新建LLM代理",
        create_title: "创建LLM代理",
        edit_title: "修改LLM代理",
        delete_title: "删除LLM代理",
    },

    knowledge_bases: ResourcePageTexts {
        breadcrumb: "AgentCraft / 知识库",
        description: "知识库用于组织智能体回答问题时检索的数据集",
        empty: "暂无知识库",
        create_action: "新建知识库",
        create_title: "创建知识库",
        edit_title: "修改知识库",
        delete_title: "删除知识库",
    },

    columns: ColumnTexts {
        id: "编号",
        name: "名称",
        alias: "别名",
        description: "描述",
        url: "LLM服务访问地址",
        token: "访问token",
        created: "创建时间",
        modified: "修改时间",
    },

    fields: FieldTexts {
        name: "名称",
        name_alias: "别名",
        url: "LLM服务访问地址",
        token: "LLM服务访问token",
        timeout: "访问超时时间(s)",
        description: "描述",
        description_placeholder: "输入数据集描述",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        confirm_delete_prompt: "确定删除",
        confirm: "确定",
        cancel: "取消",
        saving: "保存中...",
        hint_next_field: "下一项",
        hint_submit: "提交",
        hint_cancel: "取消",
        hint_toggle_secret: "显示/隐藏",
        hint_newline: "换行",
        hint_close: "关闭",
    },

    settings: SettingsTexts {
        theme: "主题",
        dark: "深色",
        light: "浅色",
        language: "语言",
        backend: "后端地址",
        demo_backend: "内存（演示）",
    },

    status: StatusTexts {
        refreshing: "刷新中...",
        loaded: "已加载记录:",
        saving: "保存中...",
        saved: "保存成功",
        deleting: "删除中...",
        deleted: "删除成功",
        busy: "正在处理其他操作",
        no_selection: "未选中任何记录",
        fix_fields: "请修正标红的字段",
        refresh_failed: "加载失败",
        save_failed: "保存失败:",
        delete_failed: "删除失败:",
        settings_saved: "设置已保存",
        settings_save_failed: "设置保存失败:",
        not_supported: "当前页面不支持该操作",
    },

    rules: RuleTexts {
        name_required: "名称必填",
        alias_required: "模型别名必填",
        url_invalid: "请输入合法的访问地址",
    },

    help: HelpTexts {
        title: "快捷键",
        entries: &[
            ("Tab / ←→", "切换面板"),
            ("↑↓ / j k", "移动选中项"),
            ("Home / End", "第一行 / 最后一行"),
            ("Enter", "进入页面 / 修改当前行"),
            ("Alt+a", "新建记录"),
            ("Alt+e", "修改选中记录"),
            ("Alt+d", "删除选中记录"),
            ("Alt+r", "刷新列表"),
            ("Alt+s", "显示/隐藏密钥（表单）"),
            ("Alt+Enter", "换行（描述）"),
            ("Esc", "关闭弹窗 / 返回"),
            ("Alt+h / ?", "显示帮助"),
            ("q / Ctrl+c", "退出"),
        ],
    },
};
