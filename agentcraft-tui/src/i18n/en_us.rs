//! English translations (en-US)

use super::keys::*;

pub const TEXTS: Texts = Texts {
    common: CommonTexts {
        app_name: "AgentCraft Console",
        loading: "Loading...",
        error: "Error",
        demo_badge: "[demo]",
    },

    hints: HintTexts {
        switch_panel: "Switch Panels",
        navigate: "Navigate",
        open: "Open",
        select: "Select",
        add: "Add",
        edit: "Edit",
        delete: "Delete",
        refresh: "Refresh",
        help: "Help",
        quit: "Quit",
        switch_option: "Switch Option",
    },

    nav: NavTexts {
        menu: "Menu",
        models: "LLM Proxies",
        knowledge_bases: "Knowledge Bases",
        settings: "Settings",
    },

    models: ResourcePageTexts {
        breadcrumb: "AgentCraft / LLM Proxies",
        description: "An LLM proxy sits in front of a base model service and hides the \
            differences between provider APIs, so applications can switch to a better-suited \
            model quickly.",
        empty: "No LLM proxies yet.",
        create_action: "New LLM Proxy",
        create_title: "Create LLM Proxy",
        edit_title: "Edit LLM Proxy",
        delete_title: "Delete LLM Proxy",
    },

    knowledge_bases: ResourcePageTexts {
        breadcrumb: "AgentCraft / Knowledge Bases",
        description: "A knowledge base groups the datasets an agent retrieves from when \
            answering questions.",
        empty: "No knowledge bases yet.",
        create_action: "New Knowledge Base",
        create_title: "Create Knowledge Base",
        edit_title: "Edit Knowledge Base",
        delete_title: "Delete Knowledge Base",
    },

    columns: ColumnTexts {
        id: "ID",
        name: "Name",
        alias: "Alias",
        description: "Description",
        url: "Access URL",
        token: "Token",
        created: "Created",
        modified: "Modified",
    },

    fields: FieldTexts {
        name: "Name",
        name_alias: "Alias",
        url: "LLM service URL",
        token: "LLM service token",
        timeout: "Request timeout (s)",
        description: "Description",
        description_placeholder: "Describe this record",
    },

    modal: ModalTexts {
        confirm_delete_prompt: "Delete",
        confirm: "Confirm",
        cancel: "Cancel",
        saving: "Saving...",
        hint_next_field: "Next",
        hint_submit: "Submit",
        hint_cancel: "Cancel",
        hint_toggle_secret: "Show/Hide",
        hint_newline: "New line",
        hint_close: "Close",
    },

    settings: SettingsTexts {
        theme: "Theme",
        dark: "Dark",
        light: "Light",
        language: "Language",
        backend: "Backend",
        demo_backend: "in-memory (demo)",
    },

    status: StatusTexts {
        refreshing: "Refreshing...",
        loaded: "Records loaded:",
        saving: "Saving...",
        saved: "Saved",
        deleting: "Deleting...",
        deleted: "Deleted",
        busy: "Another operation is in progress",
        no_selection: "Nothing selected",
        fix_fields: "Please fix the highlighted fields",
        refresh_failed: "Failed to load records",
        save_failed: "Save failed:",
        delete_failed: "Delete failed:",
        settings_saved: "Settings saved",
        settings_save_failed: "Failed to save settings:",
        not_supported: "Not available on this page",
    },

    rules: RuleTexts {
        name_required: "Name is required",
        alias_required: "Alias is required",
        url_invalid: "Please enter a valid access URL",
    },

    help: HelpTexts {
        title: "Keyboard Shortcuts",
        entries: &[
            ("Tab / ←→", "Switch panels"),
            ("↑↓ / j k", "Move selection"),
            ("Home / End", "First / last row"),
            ("Enter", "Open page / edit row"),
            ("Alt+a", "Create record"),
            ("Alt+e", "Edit selected record"),
            ("Alt+d", "Delete selected record"),
            ("Alt+r", "Refresh list"),
            ("Alt+s", "Show/hide secret (form)"),
            ("Alt+Enter", "New line (description)"),
            ("Esc", "Close dialog / back"),
            ("Alt+h / ?", "This help"),
            ("q / Ctrl+c", "Quit"),
        ],
    },
};
