//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn section(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

fn entry(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let area = centered_rect(60, 26, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let lines = vec![
        section(texts.help.list_section),
        entry("↑↓/jk", actions.move_up_down),
        entry(keys.space, actions.toggle_select),
        entry(keys.enter, actions.open_detail),
        entry(keys.delete, actions.delete),
        entry("D/Alt+d", actions.delete_selected),
        entry("/ Tab", actions.search),
        entry(keys.reload, actions.reload),
        entry(keys.quit, actions.quit),
        Line::from(""),
        section(texts.help.search_section),
        entry(keys.enter, actions.submit),
        entry("Ctrl+u", actions.clear),
        entry(keys.esc, actions.back),
        Line::from(""),
        section(texts.help.detail_section),
        entry("Esc/⌫", actions.back),
        entry(keys.reload, actions.reload),
        Line::from(""),
        Line::styled(texts.help.local_delete_note, Style::default().fg(Color::Gray)),
        Line::styled(texts.help.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
