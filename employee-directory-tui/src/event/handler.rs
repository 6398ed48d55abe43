//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, SearchMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变时自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 弹窗打开时只接受关闭
    if app.modal.is_open() {
        return if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
            AppMessage::GoBack
        } else {
            AppMessage::Noop
        };
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    match &app.page {
        Page::EmployeeList if app.focus.is_search() => handle_search_keys(key),
        Page::EmployeeList => handle_list_keys(key),
        Page::EmployeeDetail { .. } => handle_detail_keys(key),
    }
}

/// 列表页和详情页共有的按键
fn handle_common_keys(key: &KeyEvent) -> Option<AppMessage> {
    if DefaultKeymap::QUIT.matches(key) {
        return Some(AppMessage::Quit);
    }
    if DefaultKeymap::HELP.matches(key) || DefaultKeymap::HELP_ALT.matches(key) {
        return Some(AppMessage::ShowHelp);
    }
    if DefaultKeymap::BACK.matches(key) {
        return Some(AppMessage::GoBack);
    }
    None
}

/// 处理员工列表的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if let Some(msg) = handle_common_keys(&key) {
        return msg;
    }

    if DefaultKeymap::FOCUS_SEARCH.matches(&key) || DefaultKeymap::FOCUS_TOGGLE.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::TOGGLE_SELECT.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleSelect);
    }
    if DefaultKeymap::DELETE_SELECTED.matches(&key)
        || DefaultKeymap::DELETE_SELECTED_ALT.matches(&key)
    {
        return AppMessage::Content(ContentMessage::DeleteSelected);
    }
    if DefaultKeymap::DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Content(ContentMessage::Confirm);
    }

    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }
    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Home / g: 跳到第一项
        KeyCode::Home | KeyCode::Char('g') => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理搜索框的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FOCUS_TOGGLE.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Search(SearchMessage::Submit);
    }
    if DefaultKeymap::SEARCH_CLEAR.matches(&key) {
        return AppMessage::Search(SearchMessage::Clear);
    }

    match (key.modifiers.difference(KeyModifiers::SHIFT), key.code) {
        (KeyModifiers::NONE, KeyCode::Backspace) => AppMessage::Search(SearchMessage::Backspace),
        (KeyModifiers::NONE, KeyCode::Char(c)) => AppMessage::Search(SearchMessage::Input(c)),
        _ => AppMessage::Noop,
    }
}

/// 处理员工详情页的按键
fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    if let Some(msg) = handle_common_keys(&key) {
        return msg;
    }
    if key.modifiers.is_empty() && key.code == KeyCode::Backspace {
        return AppMessage::GoBack;
    }
    AppMessage::Noop
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::DirectoryBackend;
    use crate::model::FocusPanel;
    use employee_directory_core::test_utils::mock_api;

    fn app() -> App {
        let (backend, _rx) = DirectoryBackend::new(mock_api());
        App::new(backend)
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn plain(c: char) -> Event {
        press(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn list_keys() {
        let app = app();
        assert!(matches!(
            handle_event(plain('j'), &app),
            AppMessage::Content(ContentMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Up, KeyModifiers::NONE), &app),
            AppMessage::Content(ContentMessage::SelectPrevious)
        ));
        assert!(matches!(
            handle_event(plain(' '), &app),
            AppMessage::Content(ContentMessage::ToggleSelect)
        ));
        assert!(matches!(
            handle_event(plain('d'), &app),
            AppMessage::Content(ContentMessage::Delete)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('D'), KeyModifiers::SHIFT), &app),
            AppMessage::Content(ContentMessage::DeleteSelected)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('d'), KeyModifiers::ALT), &app),
            AppMessage::Content(ContentMessage::DeleteSelected)
        ));
        assert!(matches!(handle_event(plain('/'), &app), AppMessage::ToggleFocus));
        assert!(matches!(handle_event(plain('q'), &app), AppMessage::Quit));
        assert!(matches!(
            handle_event(press(KeyCode::Char('r'), KeyModifiers::ALT), &app),
            AppMessage::Refresh
        ));
    }

    #[test]
    fn search_box_captures_characters() {
        let mut app = app();
        app.focus = FocusPanel::Search;

        assert!(matches!(
            handle_event(plain('q'), &app),
            AppMessage::Search(SearchMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &app),
            AppMessage::Search(SearchMessage::Input('A'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Search(SearchMessage::Submit)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::ToggleFocus
        ));
    }

    #[test]
    fn detail_keys() {
        let mut app = app();
        app.page = Page::EmployeeDetail {
            employee_id: "1".into(),
        };

        assert!(matches!(
            handle_event(press(KeyCode::Backspace, KeyModifiers::NONE), &app),
            AppMessage::GoBack
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::GoBack
        ));
        assert!(matches!(handle_event(plain('d'), &app), AppMessage::Noop));
    }

    #[test]
    fn modal_swallows_keys() {
        let mut app = app();
        app.modal.show_help();

        assert!(matches!(handle_event(plain('d'), &app), AppMessage::Noop));
        assert!(matches!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::GoBack
        ));
    }

    #[test]
    fn release_events_ignored() {
        let app = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
