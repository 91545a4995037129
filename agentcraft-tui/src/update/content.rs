//! 内容面板更新逻辑
//!
//! 资源页面：列表选择与增删改入口；设置页面：切换选项。

use crate::backend::Command;
use crate::i18n::{self, t};
use crate::message::ContentMessage;
use crate::model::state::SettingItem;
use crate::model::{App, ConsoleResource, Page};
use crate::view::theme;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    if app.current_page == Page::Settings {
        return update_settings(app, msg);
    }
    let kind = app.current_page.resource_kind()?;
    with_kind!(kind, update_resource, app, msg)
}

fn update_resource<R: ConsoleResource>(app: &mut App, msg: ContentMessage) -> Option<Command> {
    let state = R::state_mut(&mut app.resources);
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => state.store.select_previous(),
        ContentMessage::SelectNext => state.store.select_next(),
        ContentMessage::SelectFirst => state.store.select_first(),
        ContentMessage::SelectLast => state.store.select_last(),

        // ========== CRUD 操作 ==========
        // 请求在途时不允许打开表单或删除确认
        ContentMessage::Add | ContentMessage::Edit | ContentMessage::Confirm | ContentMessage::Delete
            if state.store.is_loading() =>
        {
            app.set_status(t().status.busy);
        }
        ContentMessage::Add => {
            let mode = state.prepare_create();
            app.modal.show_edit_record(R::KIND, mode);
            app.clear_status();
        }
        ContentMessage::Edit | ContentMessage::Confirm => match state.prepare_edit() {
            Some(mode) => {
                app.modal.show_edit_record(R::KIND, mode);
                app.clear_status();
            }
            None => app.set_status(t().status.no_selection),
        },
        ContentMessage::Delete => match state.store.selected() {
            Some(record) => {
                let (id, name) = (record.id(), record.name().to_string());
                app.modal.show_confirm_delete(R::KIND, id, &name);
            }
            None => app.set_status(t().status.no_selection),
        },

        ContentMessage::Toggle => {}
    }
    None
}

fn update_settings(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        ContentMessage::SelectPrevious => app.settings.select_previous(),
        ContentMessage::SelectNext => app.settings.select_next(),
        ContentMessage::Toggle | ContentMessage::Confirm => {
            match app.settings.toggle()? {
                SettingItem::Theme => {
                    theme::set_theme(app.settings.theme);
                    app.config.theme = app.settings.theme;
                }
                SettingItem::Language => {
                    i18n::set_language(app.settings.language);
                    app.config.language = app.settings.language.code().to_string();
                }
            }
            return Some(Command::SaveConfig(app.config.clone()));
        }
        _ => {}
    }
    None
}
