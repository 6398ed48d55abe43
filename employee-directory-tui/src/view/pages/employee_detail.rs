//! 员工详情页面视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染员工详情页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let Some(detail) = app.detail.as_ref() else {
        return;
    };

    let mut lines = vec![Line::from("")];

    if detail.is_loading() {
        lines.push(Line::styled(
            format!("  {}", texts.common.loading),
            Style::default().fg(c.warning),
        ));
    } else if let Some(error) = detail.error() {
        lines.push(Line::styled(
            format!("  {}: {error}", texts.common.error),
            Style::default().fg(c.error),
        ));
    }

    if let Some(employee) = detail.record() {
        let age = employee.age.to_string();
        let salary = employee.display_salary();
        let image = employee.profile_image.as_deref().unwrap_or(texts.common.none);
        let fields = [
            (texts.detail.id, employee.id.as_str()),
            (texts.detail.name, employee.name.as_str()),
            (texts.detail.age, age.as_str()),
            (texts.detail.salary, salary.as_str()),
            (texts.detail.profile_image, image),
        ];

        for (label, value) in fields {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {label:<14}"),
                    Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
                ),
                Span::styled(value.to_string(), Style::default().fg(c.fg)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}
