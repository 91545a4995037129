//! 弹窗更新逻辑

use agentcraft_client::ResourceKind;
use agentcraft_core::services::{begin_delete, begin_submit};
use agentcraft_core::{CoreError, EditMode};

use crate::backend::Command;
use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::App;
use crate::model::ConsoleResource;
use crate::model::state::{FOCUS_CANCEL, FOCUS_CONFIRM, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    let modal = app.modal.active.clone()?;
    match modal {
        Modal::EditRecord { kind, mode } => with_kind!(kind, update_edit_record, app, msg, mode),
        Modal::ConfirmDelete { kind, id, focus, .. } => {
            update_confirm_delete(app, msg, kind, id, focus)
        }
        Modal::Help | Modal::Error { .. } => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
            None
        }
    }
}

/// 关闭当前弹窗；编辑弹窗同时丢弃未提交的输入
pub fn close(app: &mut App) {
    if let Some(Modal::EditRecord { kind, .. }) = app.modal.active {
        match kind {
            ResourceKind::Model => app.resources.models.close_form(),
            ResourceKind::KnowledgeBase => app.resources.knowledge_bases.close_form(),
            ResourceKind::Agent => {}
        }
    }
    app.modal.close();
}

fn update_edit_record<R: ConsoleResource>(
    app: &mut App,
    msg: ModalMessage,
    mode: EditMode,
) -> Option<Command> {
    let state = R::state_mut(&mut app.resources);
    match msg {
        ModalMessage::Close => close(app),
        ModalMessage::NextField => state.next_field(),
        ModalMessage::PrevField => state.prev_field(),
        ModalMessage::Input(c) => {
            if let Some(spec) = state.focused_field() {
                state.form.push_char(spec.id, c);
            }
        }
        // 单行字段会拒绝换行符
        ModalMessage::Newline => {
            if let Some(spec) = state.focused_field() {
                state.form.push_char(spec.id, '\n');
            }
        }
        ModalMessage::Backspace => {
            if let Some(spec) = state.focused_field() {
                state.form.pop_char(spec.id);
            }
        }
        ModalMessage::ToggleSecrets => state.show_secrets = !state.show_secrets,
        ModalMessage::Confirm => return submit::<R>(app, mode),
        ModalMessage::ToggleDeleteFocus => {}
    }
    None
}

/// 校验并提交表单。校验失败时不发请求，焦点跳到第一个出错的字段
fn submit<R: ConsoleResource>(app: &mut App, mode: EditMode) -> Option<Command> {
    let state = R::state_mut(&mut app.resources);
    match begin_submit(&mut state.store, &mut state.form) {
        Ok(draft) => {
            state.store.clear_error();
            app.set_status(t().status.saving);
            Some(R::save_command(mode, draft))
        }
        Err(CoreError::Validation(errors)) => {
            log::debug!("{} form rejected: {errors}", R::KIND);
            state.focus_first_error();
            app.set_status(t().status.fix_fields);
            None
        }
        Err(e) => {
            log::debug!("{} submit refused: {e}", R::KIND);
            app.set_status(t().status.busy);
            None
        }
    }
}

fn update_confirm_delete(
    app: &mut App,
    msg: ModalMessage,
    kind: ResourceKind,
    id: i64,
    focus: usize,
) -> Option<Command> {
    match msg {
        ModalMessage::ToggleDeleteFocus => {
            if let Some(Modal::ConfirmDelete { focus, .. }) = &mut app.modal.active {
                *focus = if *focus == FOCUS_CONFIRM {
                    FOCUS_CANCEL
                } else {
                    FOCUS_CONFIRM
                };
            }
            None
        }
        ModalMessage::Confirm if focus == FOCUS_CONFIRM => {
            app.modal.close();
            with_kind!(kind, delete, app, id)
        }
        // 取消：不产生任何副作用
        ModalMessage::Confirm | ModalMessage::Close => {
            app.modal.close();
            None
        }
        _ => None,
    }
}

fn delete<R: ConsoleResource>(app: &mut App, id: i64) -> Option<Command> {
    let store = &mut R::state_mut(&mut app.resources).store;
    match begin_delete(store) {
        Ok(()) => {
            app.set_status(t().status.deleting);
            Some(Command::Delete { kind: R::KIND, id })
        }
        Err(_) => {
            app.set_status(t().status.busy);
            None
        }
    }
}
