//! 弹窗组件

use agentcraft_client::{KnowledgeBase, Model, ResourceKind};
use agentcraft_core::{EditMode, FieldKind};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::model::state::{FOCUS_CANCEL, FOCUS_CONFIRM, Modal};
use crate::model::{App, ConsoleResource};
use crate::view::theme::colors;

/// 弹窗宽度
const MODAL_WIDTH: u16 = 64;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = &app.modal.active else {
        return;
    };

    match modal {
        Modal::EditRecord { kind, mode } => match kind {
            ResourceKind::Model => render_edit_record::<Model>(app, frame, *mode),
            ResourceKind::KnowledgeBase => render_edit_record::<KnowledgeBase>(app, frame, *mode),
            ResourceKind::Agent => {}
        },
        Modal::ConfirmDelete {
            kind, name, focus, ..
        } => render_confirm_delete(frame, *kind, name, *focus),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 绘制弹窗外框，返回内容区域
fn frame_modal(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 渲染新建/编辑表单
///
/// 每个字段：标签（必填字段带 `*`）、当前值、校验错误。
fn render_edit_record<R: ConsoleResource>(app: &App, frame: &mut Frame, mode: EditMode) {
    let texts = t();
    let c = colors();
    let state = R::state(&app.resources);
    let page = R::page_texts(texts);

    let label_style = Style::default().fg(c.muted);
    let error_style = Style::default().fg(c.error);

    let mut lines = Vec::new();
    for (index, spec) in state.schema().iter().enumerate() {
        let Some(binding) = state.form.binding(spec.id) else {
            continue;
        };
        let focused = index == state.focus_field;

        let mut label = vec![Span::styled(
            texts.field_label(spec.id, binding.label),
            label_style,
        )];
        if binding.required {
            label.push(Span::styled(" *", error_style));
        }
        lines.push(Line::from(label));

        let value_style = if focused {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };
        let shown = match binding.kind {
            FieldKind::Secret if !state.show_secrets => "•".repeat(binding.value.chars().count()),
            _ => binding.value.to_string(),
        };

        if shown.is_empty() && !focused && binding.kind == FieldKind::Multiline {
            lines.push(Line::styled(
                format!("  {}", texts.fields.description_placeholder),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            let mut rows: Vec<&str> = shown.split('\n').collect();
            let last = rows.len() - 1;
            if focused {
                // 光标跟在最后一行
                let cursor = format!("{}▎", rows[last]);
                for row in &rows[..last] {
                    lines.push(Line::styled(format!("  {row}"), value_style));
                }
                lines.push(Line::styled(format!("  {cursor}"), value_style));
            } else {
                rows.truncate(4);
                for row in rows {
                    lines.push(Line::styled(format!("  {row}"), value_style));
                }
            }
        }

        if let Some(message) = binding.error {
            lines.push(Line::styled(
                format!("  ⚠ {}", texts.validation(message)),
                error_style,
            ));
        }
        lines.push(Line::from(""));
    }

    // 提交失败的错误显示在表单内，修改后可直接重试
    if let Some(err) = state.store.last_error() {
        lines.push(Line::styled(format!("✗ {err}"), error_style));
        lines.push(Line::from(""));
    }

    let m = &texts.modal;
    if state.store.is_loading() {
        lines.push(Line::styled(m.saving, Style::default().fg(c.warning)));
    } else {
        lines.push(Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::styled(format!(" {} | ", m.hint_next_field), label_style),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled(format!(" {} | ", m.hint_submit), label_style),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(format!(" {}", m.hint_cancel), label_style),
        ]));
    }

    let title = match mode {
        EditMode::Create => page.create_title,
        EditMode::Edit(_) => page.edit_title,
    };
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(MODAL_WIDTH, height, frame.area());
    let inner = frame_modal(frame, area, title, c.border_focused);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, kind: ResourceKind, name: &str, focus: usize) {
    let texts = t();
    let c = colors();
    let m = &texts.modal;

    let title = match kind {
        ResourceKind::Model => texts.models.delete_title,
        ResourceKind::KnowledgeBase => texts.knowledge_bases.delete_title,
        ResourceKind::Agent => texts.common.error,
    };

    let area = centered_rect(48, 8, frame.area());
    let inner = frame_modal(frame, area, title, c.error);

    let cancel_style = if focus == FOCUS_CANCEL {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(c.fg)
    };
    let confirm_style = if focus == FOCUS_CONFIRM {
        Style::default().fg(Color::Black).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", m.confirm_delete_prompt), Style::default().fg(c.fg)),
            Span::styled(
                name,
                Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ?", Style::default().fg(c.fg)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", m.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", m.confirm), confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(56, 9, frame.area());
    let inner = frame_modal(frame, area, title, c.error);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(
            format!("Esc / Enter: {}", t().modal.hint_close),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let c = colors();
    let help = &texts.help;

    let height = u16::try_from(help.entries.len()).unwrap_or(u16::MAX).saturating_add(4);
    let area = centered_rect(56, height, frame.area());
    let inner = frame_modal(frame, area, help.title, c.border_focused);

    let mut lines = vec![Line::from("")];
    lines.extend(help.entries.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Yellow)),
            Span::styled(*desc, Style::default().fg(c.fg)),
        ])
    }));

    frame.render_widget(Paragraph::new(lines), inner);
}
