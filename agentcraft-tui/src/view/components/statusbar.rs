//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::state::Modal;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let hints = &texts.hints;

    // 弹窗打开时只提示弹窗内的按键
    if let Some(modal) = &app.modal.active {
        let m = &texts.modal;
        return match modal {
            Modal::EditRecord { .. } => vec![
                ("Tab", m.hint_next_field),
                ("Enter", m.hint_submit),
                ("Alt+Enter", m.hint_newline),
                ("Alt+s", m.hint_toggle_secret),
                ("Esc", m.hint_cancel),
            ],
            Modal::ConfirmDelete { .. } => vec![
                ("←→", hints.switch_option),
                ("Enter", m.confirm),
                ("Esc", m.hint_cancel),
            ],
            Modal::Help | Modal::Error { .. } => vec![("Esc", m.hint_close)],
        };
    }

    let mut result = vec![("Tab", hints.switch_panel)];

    match app.focus {
        FocusPanel::Navigation => {
            result.push(("↑↓", hints.navigate));
            result.push(("Enter", hints.open));
        }
        FocusPanel::Content => match app.current_page {
            Page::Models | Page::KnowledgeBases => {
                result.push(("↑↓", hints.select));
                result.push(("Alt+a", hints.add));
                result.push(("Alt+e", hints.edit));
                result.push(("Alt+d", hints.delete));
                result.push(("Alt+r", hints.refresh));
            }
            Page::Settings => {
                result.push(("↑↓", hints.select));
                result.push(("←→", hints.switch_option));
            }
        },
    }

    result.push(("?", hints.help));
    result.push(("Alt+q", hints.quit));
    result
}
