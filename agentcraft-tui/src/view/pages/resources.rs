//! 资源列表页面视图
//!
//! 面包屑 + 功能说明 + 表格。加载中时表格标题显示 loading，
//! 列表为空时显示空状态和新建提示。

use agentcraft_client::datetime::format_datetime;
use agentcraft_client::{KnowledgeBase, Model, mask_secret};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

use crate::i18n::{Texts, t};
use crate::model::{App, ConsoleResource};
use crate::view::theme::{Styles, colors};

/// 表格列定义
pub trait ResourceTable: ConsoleResource {
    fn header(texts: &'static Texts) -> Vec<&'static str>;
    fn widths() -> Vec<Constraint>;
    fn cells(&self) -> Vec<String>;
}

impl ResourceTable for Model {
    fn header(texts: &'static Texts) -> Vec<&'static str> {
        let col = &texts.columns;
        vec![
            col.id,
            col.name,
            col.alias,
            col.description,
            col.url,
            col.token,
            col.created,
            col.modified,
        ]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Length(5),
            Constraint::Percentage(14),
            Constraint::Percentage(12),
            Constraint::Percentage(18),
            Constraint::Percentage(20),
            Constraint::Length(10),
            Constraint::Length(19),
            Constraint::Length(19),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.name_alias.clone(),
            first_line(&self.description),
            self.url.clone(),
            mask_secret(&self.token),
            format_datetime(self.created.as_ref()),
            format_datetime(self.modified.as_ref()),
        ]
    }
}

impl ResourceTable for KnowledgeBase {
    fn header(texts: &'static Texts) -> Vec<&'static str> {
        let col = &texts.columns;
        vec![col.id, col.name, col.description, col.created, col.modified]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Length(5),
            Constraint::Percentage(25),
            Constraint::Min(20),
            Constraint::Length(19),
            Constraint::Length(19),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            first_line(&self.description),
            format_datetime(self.created.as_ref()),
            format_datetime(self.modified.as_ref()),
        ]
    }
}

/// 多行描述在表格里只显示第一行
fn first_line(text: &str) -> String {
    match text.split_once('\n') {
        Some((first, _)) => format!("{first}…"),
        None => text.to_string(),
    }
}

/// 渲染资源页面
pub fn render<R: ResourceTable>(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let page = R::page_texts(texts);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 面包屑
            Constraint::Length(3), // 功能说明
            Constraint::Min(3),    // 表格
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            format!(" {}", page.breadcrumb),
            Style::default().fg(c.muted),
        )),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(page.description, Style::default().fg(c.fg)),
        ]))
        .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let store = &R::state(&app.resources).store;
    if store.list().is_empty() && !store.is_loading() {
        render_empty::<R>(app, frame, chunks[2]);
    } else {
        render_table::<R>(app, frame, chunks[2]);
    }
}

/// 渲染空状态
fn render_empty<R: ResourceTable>(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let page = R::page_texts(texts);
    let store = &R::state(&app.resources).store;

    let mut content = vec![
        Line::from(""),
        Line::styled(format!("  {}", page.empty), Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled(
            format!("  Alt+a: {}", page.create_action),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if let Some(err) = store.last_error() {
        content.push(Line::from(""));
        content.push(Line::styled(
            format!("  ✗ {err}"),
            Style::default().fg(colors().error),
        ));
    }

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染资源表格
fn render_table<R: ResourceTable>(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let store = &R::state(&app.resources).store;

    let header = Row::new(
        R::header(texts)
            .into_iter()
            .map(|title| Cell::from(title).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(c.highlight))
    .bottom_margin(0);

    let rows: Vec<Row> = store
        .list()
        .iter()
        .map(|record| Row::new(record.cells()).style(Style::default().fg(c.fg)))
        .collect();

    let title = if store.is_loading() {
        format!(" {} ", texts.common.loading)
    } else {
        format!(" {} ", store.list().len())
    };

    let table = Table::new(rows, R::widths())
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::TOP)
                .border_style(Styles::border(false)),
        )
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if !store.list().is_empty() {
        state.select(Some(store.selected_index()));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
