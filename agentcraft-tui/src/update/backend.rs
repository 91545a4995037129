//! 后台结果处理
//!
//! 把执行器回传的结果应用到对应资源的 store 上。每条路径都会清除
//! loading，失败时错误信息会展示给用户。

use agentcraft_core::services::{finish_delete, finish_refresh, finish_submit};

use super::report_error;
use crate::i18n::t;
use crate::message::{BackendMessage, Completion, Operation};
use crate::model::{App, ConsoleResource};

/// 处理后台消息
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::Models(completion) => apply(app, completion),
        BackendMessage::KnowledgeBases(completion) => apply(app, completion),
        BackendMessage::ConfigSaved(Ok(())) => app.set_status(t().status.settings_saved),
        BackendMessage::ConfigSaved(Err(e)) => {
            app.set_status(format!("{} {e}", t().status.settings_save_failed));
        }
    }
}

fn apply<R: ConsoleResource>(app: &mut App, completion: Completion<R>) {
    let Completion { operation, result } = completion;
    let state = R::state_mut(&mut app.resources);

    match operation {
        Operation::Refresh => match finish_refresh(&mut state.store, result) {
            Ok(()) => {
                let count = state.store.list().len();
                log::info!("Loaded {count} {} records", R::KIND);
                app.set_status(format!("{} {count}", t().status.loaded));
            }
            Err(e) => {
                log::error!("Failed to load {} records: {e}", R::KIND);
                report_error(app, t().status.refresh_failed, e.to_string());
            }
        },

        Operation::Save(mode) => match finish_submit(&mut state.store, &mut state.form, result) {
            Ok(()) => {
                log::info!("Saved {} ({mode:?})", R::KIND);
                state.focus_field = 0;
                if app.modal.is_editing(R::KIND) {
                    app.modal.close();
                }
                app.set_status(t().status.saved);
            }
            // 弹窗与表单保持打开，错误同时显示在表单内（store.last_error）
            Err(e) => {
                log::error!("Failed to save {}: {e}", R::KIND);
                app.set_status(format!("{} {e}", t().status.save_failed));
            }
        },

        Operation::Delete(id) => match finish_delete(&mut state.store, result) {
            Ok(()) => {
                log::info!("Deleted {} {id}", R::KIND);
                app.set_status(t().status.deleted);
            }
            Err(e) => {
                log::error!("Failed to delete {} {id}: {e}", R::KIND);
                report_error(app, t().status.delete_failed, e.to_string());
            }
        },
    }
}
