//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let base = Style::default().bg(c.highlight).fg(c.selected_fg);

    let mut spans = vec![Span::styled(
        format!(" {} v{}", texts.common.app_name, env!("CARGO_PKG_VERSION")),
        base.add_modifier(Modifier::BOLD),
    )];
    if app.demo {
        spans.push(Span::styled(
            format!("  {}", texts.common.demo_badge),
            base.fg(c.warning),
        ));
    } else {
        spans.push(Span::styled(format!("  {}", app.config.api_base_url), base));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    let page_title = match app.current_page {
        Page::Models => texts.nav.models,
        Page::KnowledgeBases => texts.nav.knowledge_bases,
        Page::Settings => texts.nav.settings,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Models => pages::resources::render::<agentcraft_client::Model>(app, frame, inner_area),
        Page::KnowledgeBases => {
            pages::resources::render::<agentcraft_client::KnowledgeBase>(app, frame, inner_area)
        }
        Page::Settings => pages::settings::render(app, frame, inner_area),
    }
}
