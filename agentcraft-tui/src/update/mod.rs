//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod backend;            // 后台结果处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command>
//!
//!     update 不执行任何 IO。需要访问网络或磁盘时，它先在 store 上置好
//!     loading 标志，然后返回一个 Command 交给执行器；执行结果稍后以
//!     AppMessage::Backend 的形式回到这里，由 backend.rs 应用到 store。
//!
//!         按键 ──▶ update ──▶ Command ──▶ Executor ──▶ BackendMessage ──▶ update
//!
//!     同一时刻每种资源最多只有一个请求在途：begin_* 拿不到 loading
//!     时直接提示 busy，不会产生 Command。

/// Dispatch a generic handler on the record type behind `kind`.
///
/// Agents have no page in the console, so they fall through to `None`.
macro_rules! with_kind {
    ($kind:expr, $handler:ident, $app:expr $(, $arg:expr)*) => {
        match $kind {
            agentcraft_client::ResourceKind::Model => {
                $handler::<agentcraft_client::Model>($app $(, $arg)*)
            }
            agentcraft_client::ResourceKind::KnowledgeBase => {
                $handler::<agentcraft_client::KnowledgeBase>($app $(, $arg)*)
            }
            agentcraft_client::ResourceKind::Agent => {
                log::warn!("No console page for {}", $kind);
                None
            }
        }
    };
}

mod backend;
mod content;
mod modal;
mod navigation;

use agentcraft_core::services::begin_refresh;

use crate::backend::Command;
use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, ConsoleResource};

/// 处理应用消息，更新状态；需要后台执行时返回命令
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
            None
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),
        AppMessage::Content(content_msg) => content::update(app, content_msg),
        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend_msg);
            None
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                modal::close(app);
            } else {
                app.focus = crate::model::FocusPanel::Navigation;
            }
            app.clear_status();
            None
        }

        AppMessage::Refresh => match app.current_page.resource_kind() {
            Some(kind) => with_kind!(kind, refresh, app),
            None => {
                app.set_status(t().status.not_supported);
                None
            }
        },

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::Noop => None,
    }
}

/// 进入当前页面：资源页面首次进入时加载列表
pub fn enter_page(app: &mut App) -> Option<Command> {
    let kind = app.current_page.resource_kind()?;
    with_kind!(kind, load_once, app)
}

fn load_once<R: ConsoleResource>(app: &mut App) -> Option<Command> {
    let store = &R::state(&app.resources).store;
    if store.has_loaded() || store.is_loading() {
        return None;
    }
    refresh::<R>(app)
}

fn refresh<R: ConsoleResource>(app: &mut App) -> Option<Command> {
    let store = &mut R::state_mut(&mut app.resources).store;
    match begin_refresh(store) {
        Ok(()) => {
            app.set_status(t().status.refreshing);
            Some(Command::Refresh(R::KIND))
        }
        Err(_) => {
            app.set_status(t().status.busy);
            None
        }
    }
}

/// 错误提示：没有其他弹窗时弹出错误框，否则写入状态栏
fn report_error(app: &mut App, title: &str, message: String) {
    if app.modal.is_open() {
        app.set_status(format!("{title} {message}"));
    } else {
        app.set_status(title.to_string());
        app.modal.show_error(title, &message);
    }
}

#[cfg(test)]
mod tests {
    use agentcraft_client::{ClientError, Model, ResourceKind};
    use agentcraft_core::{CoreError, EditMode};

    use super::*;
    use crate::message::{
        BackendMessage, Completion, ContentMessage, ModalMessage, NavigationMessage, Operation,
    };
    use crate::model::state::Modal;
    use crate::model::{FocusPanel, Page};

    fn gpt4(id: i64) -> Model {
        Model {
            id,
            name: "gpt4proxy".into(),
            name_alias: "gpt4".into(),
            description: String::new(),
            url: "https://api.example.com/v1".into(),
            token: "secret".into(),
            timeout: 600,
            created: None,
            modified: None,
        }
    }

    fn models_page() -> App {
        let mut app = App::default();
        app.current_page = Page::Models;
        app.focus = FocusPanel::Content;
        app.resources.models.store.replace_list(vec![gpt4(1), gpt4(2)]);
        app
    }

    fn content(app: &mut App, msg: ContentMessage) -> Option<Command> {
        update(app, AppMessage::Content(msg))
    }

    fn modal(app: &mut App, msg: ModalMessage) -> Option<Command> {
        update(app, AppMessage::Modal(msg))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            modal(app, ModalMessage::Input(c));
        }
    }

    fn network_error() -> CoreError {
        CoreError::Client(ClientError::NetworkError {
            resource: "model".into(),
            detail: "connection refused".into(),
        })
    }

    #[test]
    fn first_visit_loads_once() {
        let mut app = App::default();
        assert_eq!(enter_page(&mut app), Some(Command::Refresh(ResourceKind::Model)));
        assert!(app.resources.models.store.is_loading());
        assert_eq!(enter_page(&mut app), None);
    }

    #[test]
    fn navigating_to_knowledge_bases_loads_them() {
        let mut app = App::default();
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        let command = update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(app.current_page, Page::KnowledgeBases);
        assert_eq!(command, Some(Command::Refresh(ResourceKind::KnowledgeBase)));
    }

    #[test]
    fn refresh_while_loading_is_refused() {
        let mut app = models_page();
        assert!(update(&mut app, AppMessage::Refresh).is_some());
        assert_eq!(update(&mut app, AppMessage::Refresh), None);
    }

    #[test]
    fn refresh_on_settings_does_nothing() {
        let mut app = App::default();
        app.current_page = Page::Settings;
        assert_eq!(update(&mut app, AppMessage::Refresh), None);
    }

    #[test]
    fn add_opens_empty_create_form() {
        let mut app = models_page();
        assert_eq!(content(&mut app, ContentMessage::Add), None);

        assert!(app.modal.is_editing(ResourceKind::Model));
        let store = &app.resources.models.store;
        assert!(store.is_open());
        assert!(!store.is_edit());
        assert_eq!(app.resources.models.form.values().name, "");
    }

    #[test]
    fn invalid_form_is_not_submitted() {
        let mut app = models_page();
        content(&mut app, ContentMessage::Add);
        modal(&mut app, ModalMessage::NextField);
        modal(&mut app, ModalMessage::NextField);
        type_text(&mut app, "not a url");

        assert_eq!(modal(&mut app, ModalMessage::Confirm), None);

        let state = &app.resources.models;
        assert!(!state.store.is_loading());
        assert!(state.form.errors().get("name").is_some());
        assert!(state.form.errors().get("url").is_some());
        // 焦点跳回第一个出错的字段
        assert_eq!(state.focus_field, 0);
        assert!(app.modal.is_open());
    }

    #[test]
    fn valid_create_emits_save_and_closes_on_success() {
        let mut app = models_page();
        content(&mut app, ContentMessage::Add);
        type_text(&mut app, "qwen");
        modal(&mut app, ModalMessage::NextField);
        type_text(&mut app, "qwen-turbo");
        modal(&mut app, ModalMessage::NextField);
        type_text(&mut app, "https://dashscope.example.com/v1");

        let command = modal(&mut app, ModalMessage::Confirm);
        let Some(Command::SaveModel { mode, draft }) = command else {
            panic!("expected a save command");
        };
        assert_eq!(mode, EditMode::Create);
        assert_eq!(draft.name, "qwen");
        assert_eq!(draft.timeout, 600);
        assert!(app.resources.models.store.is_loading());

        // 第二次提交被 loading 挡住
        assert_eq!(modal(&mut app, ModalMessage::Confirm), None);

        update(
            &mut app,
            AppMessage::Backend(BackendMessage::Models(Completion {
                operation: Operation::Save(mode),
                result: Ok(vec![gpt4(1), gpt4(2), gpt4(3)]),
            })),
        );
        let store = &app.resources.models.store;
        assert!(!store.is_loading());
        assert!(!store.is_open());
        assert_eq!(store.list().len(), 3);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn failed_save_keeps_form_open() {
        let mut app = models_page();
        content(&mut app, ContentMessage::Edit);
        type_text(&mut app, "-v2");
        let Some(Command::SaveModel { mode, .. }) = modal(&mut app, ModalMessage::Confirm) else {
            panic!("expected a save command");
        };
        assert_eq!(mode, EditMode::Edit(1));

        update(
            &mut app,
            AppMessage::Backend(BackendMessage::Models(Completion {
                operation: Operation::Save(mode),
                result: Err(network_error()),
            })),
        );
        let state = &app.resources.models;
        assert!(!state.store.is_loading());
        assert!(state.store.is_open());
        assert!(state.store.last_error().is_some());
        assert_eq!(state.form.values().name, "gpt4proxy-v2");
        assert!(app.modal.is_editing(ResourceKind::Model));
    }

    #[test]
    fn actions_are_refused_while_loading() {
        let mut app = models_page();
        update(&mut app, AppMessage::Refresh);
        content(&mut app, ContentMessage::Edit);
        content(&mut app, ContentMessage::Delete);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn cancelled_delete_has_no_effect() {
        let mut app = models_page();
        content(&mut app, ContentMessage::SelectNext);
        content(&mut app, ContentMessage::Delete);
        assert!(matches!(
            app.modal.active,
            Some(Modal::ConfirmDelete { id: 2, .. })
        ));

        assert_eq!(modal(&mut app, ModalMessage::Confirm), None);
        assert!(!app.modal.is_open());
        assert!(!app.resources.models.store.is_loading());
    }

    #[test]
    fn confirmed_delete_emits_command() {
        let mut app = models_page();
        content(&mut app, ContentMessage::Delete);
        modal(&mut app, ModalMessage::ToggleDeleteFocus);

        assert_eq!(
            modal(&mut app, ModalMessage::Confirm),
            Some(Command::Delete {
                kind: ResourceKind::Model,
                id: 1
            })
        );
        assert!(app.resources.models.store.is_loading());

        update(
            &mut app,
            AppMessage::Backend(BackendMessage::Models(Completion {
                operation: Operation::Delete(1),
                result: Ok(vec![gpt4(2)]),
            })),
        );
        assert!(!app.resources.models.store.is_loading());
        assert_eq!(app.resources.models.store.list().len(), 1);
    }

    #[test]
    fn failed_refresh_shows_error() {
        let mut app = models_page();
        update(&mut app, AppMessage::Refresh);
        update(
            &mut app,
            AppMessage::Backend(BackendMessage::Models(Completion {
                operation: Operation::Refresh,
                result: Err(network_error()),
            })),
        );
        assert!(!app.resources.models.store.is_loading());
        assert!(matches!(app.modal.active, Some(Modal::Error { .. })));
        // 旧列表保留
        assert_eq!(app.resources.models.store.list().len(), 2);
    }

    #[test]
    fn go_back_discards_form_input() {
        let mut app = models_page();
        content(&mut app, ContentMessage::Add);
        type_text(&mut app, "draft");
        update(&mut app, AppMessage::GoBack);

        assert!(!app.modal.is_open());
        assert!(!app.resources.models.store.is_open());
        assert_eq!(app.resources.models.form.values().name, "");

        update(&mut app, AppMessage::GoBack);
        assert!(app.focus.is_navigation());
    }
}
