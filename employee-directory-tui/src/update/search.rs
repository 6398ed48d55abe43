//! 搜索框更新逻辑

use crate::message::SearchMessage;
use crate::model::{App, FocusPanel};

/// 处理搜索框消息
pub fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Input(c) => {
            let mut query = app.employees.query().to_string();
            query.push(c);
            app.employees.set_query(query);
        }
        SearchMessage::Backspace => {
            let mut query = app.employees.query().to_string();
            query.pop();
            app.employees.set_query(query);
        }
        SearchMessage::Clear => {
            app.employees.set_query(String::new());
        }
        SearchMessage::Submit => {
            let query = app.employees.query().to_string();
            let pending = app.employees.begin_search(&query);
            app.backend.spawn_list(pending);
            app.focus = FocusPanel::List;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app_with, pump};
    use super::*;
    use employee_directory_core::test_utils::{mock_api, record, three_records};

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, SearchMessage::Input(c));
        }
    }

    #[tokio::test]
    async fn submit_searches_by_id() {
        let api = mock_api();
        api.push_get(Ok(record("7", "Herrod Chandler", 59, 137_500.0)))
            .await;
        let (mut app, mut rx) = app_with(api.clone());
        app.focus = FocusPanel::Search;

        type_text(&mut app, "78");
        update(&mut app, SearchMessage::Backspace);
        update(&mut app, SearchMessage::Submit);
        assert_eq!(app.focus, FocusPanel::List);

        pump(&mut app, &mut rx).await;
        assert_eq!(api.calls().await, ["7"]);
        assert_eq!(app.employees.records().len(), 1);
    }

    #[tokio::test]
    async fn blank_submit_loads_everyone() {
        let api = mock_api();
        api.push_list(Ok(three_records())).await;
        let (mut app, mut rx) = app_with(api.clone());

        type_text(&mut app, "  ");
        update(&mut app, SearchMessage::Submit);
        pump(&mut app, &mut rx).await;

        assert_eq!(api.calls().await, ["list"]);
        assert_eq!(app.employees.records().len(), 3);
    }

    #[tokio::test]
    async fn not_found_shows_message() {
        let api = mock_api();
        let (mut app, mut rx) = app_with(api.clone());

        type_text(&mut app, "999");
        update(&mut app, SearchMessage::Submit);
        pump(&mut app, &mut rx).await;

        assert_eq!(app.employees.error(), Some("Employee with ID 999 not found."));
    }

    #[test]
    fn clear_empties_query() {
        let (mut app, _rx) = app_with(mock_api());
        type_text(&mut app, "12");
        update(&mut app, SearchMessage::Clear);
        assert_eq!(app.employees.query(), "");
    }
}
