//! 员工列表页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::i18n::{fill, t};
use crate::model::App;
use crate::view::theme::{colors, Styles};

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 24;
const AGE_WIDTH: usize = 5;

/// 渲染员工列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 搜索框
            Constraint::Length(1), // 加载 / 错误
            Constraint::Min(1),    // 列表
            Constraint::Length(1), // 已选数量
        ])
        .split(area);

    render_search(app, frame, chunks[0]);
    render_message(app, frame, chunks[1]);
    if app.employees.records().is_empty() {
        render_empty(frame, chunks[2]);
    } else {
        render_list(app, frame, chunks[2]);
    }
    render_footer(app, frame, chunks[3]);
}

/// 渲染搜索框
fn render_search(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = app.focus.is_search();
    let query = app.employees.query();

    let content = if query.is_empty() && !focused {
        Line::styled(texts.employees.search_placeholder, Style::default().fg(c.muted))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::styled(query.to_string(), Style::default().fg(c.fg)),
            Span::styled(cursor, Style::default().fg(c.highlight)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", texts.employees.search_title))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// 渲染加载状态或错误
fn render_message(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let line = if app.employees.is_loading() {
        Line::styled(format!("  {}", texts.common.loading), Style::default().fg(c.warning))
    } else if let Some(error) = app.employees.error() {
        Line::styled(
            format!("  {}: {error}", texts.common.error),
            Style::default().fg(c.error),
        )
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", t().employees.no_employees),
            Style::default().fg(colors().muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染员工列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let cursor = app.employees.state().selected_index;

    let header = ListItem::new(Line::styled(
        format!(
            "      {}{}{}{}",
            pad(texts.employees.col_id, ID_WIDTH),
            pad(texts.employees.col_name, NAME_WIDTH),
            pad(texts.employees.col_age, AGE_WIDTH),
            texts.employees.col_salary
        ),
        Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
    ));

    let rows = app.employees.records().iter().enumerate().map(|(i, employee)| {
        let is_cursor = i == cursor;
        let checked = app.employees.is_selected(&employee.id);

        let base = if is_cursor {
            Styles::selected()
        } else {
            Style::default().fg(c.fg)
        };
        let checkbox_style = if checked {
            base.fg(c.success)
        } else {
            base
        };

        ListItem::new(Line::from(vec![
            Span::styled("  ", base),
            Span::styled(if checked { "[x] " } else { "[ ] " }, checkbox_style),
            Span::styled(pad(employee.id.as_str(), ID_WIDTH), base),
            Span::styled(pad(&employee.name, NAME_WIDTH), base),
            Span::styled(pad(&employee.age.to_string(), AGE_WIDTH), base),
            Span::styled(employee.display_salary(), base),
        ]))
    });

    let items: Vec<ListItem> = std::iter::once(header).chain(rows).collect();
    let list = List::new(items).highlight_style(Style::default());

    // 表头占第 0 行
    let mut state = ListState::default();
    state.select(Some(cursor + 1));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 渲染已选数量
fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let count = app.employees.selected_count();
    let style = if count > 0 {
        Style::default().fg(colors().success)
    } else {
        Style::default().fg(colors().muted)
    };
    let line = Line::styled(format!("  {}", fill(t().employees.selected_count, count)), style);
    frame.render_widget(Paragraph::new(line), area);
}

/// 按显示宽度补齐到 `width` 列（CJK 字符占两列），超长时截断
fn pad(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w >= width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}
