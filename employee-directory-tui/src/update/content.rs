//! 内容面板更新逻辑
//!
//! 列表页的光标、勾选与本地删除

use crate::i18n::{fill, t};
use crate::message::ContentMessage;
use crate::model::App;

use super::navigate;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    if app.page.is_detail_page() {
        return;
    }

    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => app.employees.select_previous(),
        ContentMessage::SelectNext => app.employees.select_next(),
        ContentMessage::SelectFirst => app.employees.select_first(),
        ContentMessage::SelectLast => app.employees.select_last(),
        ContentMessage::Confirm => handle_confirm(app),

        // ========== 选择与删除 ==========
        ContentMessage::ToggleSelect => handle_toggle_select(app),
        ContentMessage::Delete => handle_delete(app),
        ContentMessage::DeleteSelected => handle_delete_selected(app),
    }
}

fn handle_confirm(app: &mut App) {
    let Some(id) = app.employees.highlighted().map(|r| r.id.clone()) else {
        return;
    };
    let intent = app.employees.open_detail(&id);
    navigate(app, intent);
}

fn handle_toggle_select(app: &mut App) {
    if let Some(id) = app.employees.highlighted().map(|r| r.id.clone()) {
        app.employees.toggle_select(&id);
    }
}

fn handle_delete(app: &mut App) {
    let Some(id) = app.employees.highlighted().map(|r| r.id.clone()) else {
        return;
    };
    app.employees.delete_one(&id);
    app.set_status(fill(t().status.deleted_one, &id));
}

fn handle_delete_selected(app: &mut App) {
    if app.employees.selected_count() == 0 {
        app.set_status(t().status.nothing_selected);
        return;
    }

    let before = app.employees.records().len();
    app.employees.delete_selected();
    let removed = before - app.employees.records().len();
    app.set_status(fill(t().status.deleted_selected, removed));
}
