//! 导航更新逻辑

use super::enter_page;
use crate::backend::Command;
use crate::message::NavigationMessage;
use crate::model::App;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Option<Command> {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),
        NavigationMessage::Confirm => {
            let id = app.navigation.current_id()?;
            app.current_page = id.page();
            app.clear_status(); // 切换页面时清除状态消息
            return enter_page(app);
        }
    }
    None
}
