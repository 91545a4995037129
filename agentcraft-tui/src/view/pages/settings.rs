//! 设置页面视图

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::model::state::{SettingItem, Theme};
use crate::view::theme::colors;

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 20;
/// 值区域的宽度（包含 ◀ ▶ 符号）
const VALUE_WIDTH: usize = 20;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let settings = &app.settings;

    let mut lines = vec![Line::from("")];

    for (index, item) in SettingItem::all().iter().enumerate() {
        let (label, value) = match item {
            SettingItem::Theme => (
                texts.settings.theme,
                match settings.theme {
                    Theme::Dark => texts.settings.dark,
                    Theme::Light => texts.settings.light,
                },
            ),
            SettingItem::Language => (texts.settings.language, settings.language.display_name()),
        };
        lines.push(render_setting_row(
            label,
            value,
            settings.selected_index == index,
        ));
    }

    // 后端地址只读展示，可通过配置文件或 --api 修改
    let backend = if app.demo {
        texts.settings.demo_backend.to_string()
    } else {
        app.config.api_base_url.clone()
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("    {:width$}", texts.settings.backend, width = LABEL_WIDTH),
            Style::default().fg(c.muted),
        ),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(backend, Style::default().fg(c.fg)),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染单行设置项
fn render_setting_row<'a>(label: &'a str, value: &'a str, is_selected: bool) -> Line<'a> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if is_selected {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    // 使用 unicode-width 计算显示宽度，中文标签同样对齐
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());
    let available_space = VALUE_WIDTH.saturating_sub(4);
    let left_padding = available_space.saturating_sub(value.width()) / 2;
    let right_padding = available_space
        .saturating_sub(value.width())
        .saturating_sub(left_padding);

    let (open, close) = if is_selected {
        ("◀ ", " ▶")
    } else {
        ("  ", "  ")
    };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("  {label}"), label_style),
        Span::raw(" ".repeat(label_padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(open, Style::default().fg(Color::Yellow)),
        Span::raw(" ".repeat(left_padding)),
        Span::styled(value, value_style),
        Span::raw(" ".repeat(right_padding)),
        Span::styled(close, Style::default().fg(Color::Yellow)),
    ])
}
