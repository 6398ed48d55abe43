//! 状态栏组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::separator()));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Styles::separator()));
        spans.push(Span::styled(msg.clone(), Styles::status_message()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;

    match &app.page {
        Page::EmployeeList if app.focus.is_search() => vec![
            (keys.enter, actions.submit),
            (keys.esc, actions.back),
        ],
        Page::EmployeeList => vec![
            (keys.arrows_ud, actions.move_up_down),
            (keys.space, actions.toggle_select),
            (keys.enter, actions.open_detail),
            (keys.delete, actions.delete),
            (keys.delete_selected, actions.delete_selected),
            (keys.search, actions.search),
            (keys.reload, actions.reload),
            (keys.help, actions.help),
            (keys.quit, actions.quit),
        ],
        Page::EmployeeDetail { .. } => vec![
            (keys.esc, actions.back),
            (keys.reload, actions.reload),
            (keys.help, actions.help),
            (keys.quit, actions.quit),
        ],
    }
}
