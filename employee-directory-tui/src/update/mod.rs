//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 列表操作
//!         mod search;             // 搜索框输入
//!         mod backend;            // 后台请求完成
//!
//!     请求不在这里等待：控制器的 begin_* 返回 Pending*Fetch，
//!     交给 app.backend 在 tokio 上执行，结果以 AppMessage::Backend 回到这里。
//!
//!     页面切换统一走 navigate()：离开的页面的控制器被 teardown（取消未完成请求），
//!     进入的页面创建新的控制器并发起加载。
//!

mod backend;
mod content;
mod search;

use employee_directory_core::{
    EmployeeDetailController, EmployeeListController, NavigationIntent, Route,
};

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.employees.teardown();
            if let Some(detail) = app.detail.as_mut() {
                detail.teardown();
            }
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.modal.is_open() && !app.page.is_detail_page() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
        }

        AppMessage::Backend(event) => {
            backend::update(app, event);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                // 如果有弹窗打开，先关闭弹窗
                app.modal.close();
            } else if let Some(detail) = app.detail.as_ref() {
                // 如果在详情页，返回列表页
                let intent = detail.go_back();
                navigate(app, intent);
            } else if app.focus.is_search() {
                app.focus = FocusPanel::List;
            } else {
                app.clear_status();
            }
        }

        AppMessage::Refresh => {
            refresh(app);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 重新加载当前页面
fn refresh(app: &mut App) {
    app.set_status(t().status.refreshing);
    match &app.page {
        Page::EmployeeList => {
            let pending = app.employees.begin_load_all();
            app.backend.spawn_list(pending);
        }
        Page::EmployeeDetail { employee_id } => {
            let id = employee_id.clone();
            if let Some(detail) = app.detail.as_mut() {
                let pending = detail.begin_load_one(&id);
                app.backend.spawn_detail(pending);
            }
        }
    }
}

/// 执行控制器给出的导航意图
pub fn navigate(app: &mut App, intent: NavigationIntent) {
    let route = Route::from(intent);
    log::info!("navigate to {}", route.path());

    match &route {
        Route::EmployeeDetail { id } => {
            app.employees.teardown();

            let mut detail = EmployeeDetailController::new(app.backend.api());
            if let Some(pending) = detail.route_changed(id) {
                app.backend.spawn_detail(pending);
            }
            app.detail = Some(detail);
        }
        Route::EmployeeList => {
            if let Some(mut detail) = app.detail.take() {
                detail.teardown();
            }

            app.employees = EmployeeListController::new(app.backend.api());
            start(app);
            app.focus = FocusPanel::List;
        }
    }
    app.page = Page::from(route);
    app.clear_status();
}

/// 列表页挂载：加载全部员工
pub fn start(app: &mut App) {
    let pending = app.employees.begin_load_all();
    app.backend.spawn_list(pending);
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use employee_directory_core::test_utils::MockEmployeeApi;
    use tokio::sync::mpsc::UnboundedReceiver;

    use crate::backend::{BackendEvent, DirectoryBackend};
    use crate::model::App;

    use super::update;
    use crate::message::AppMessage;

    pub fn app_with(api: Arc<MockEmployeeApi>) -> (App, UnboundedReceiver<BackendEvent>) {
        let (backend, rx) = DirectoryBackend::new(api);
        (App::new(backend), rx)
    }

    /// Wait for the next backend completion and feed it through `update`.
    pub async fn pump(app: &mut App, rx: &mut UnboundedReceiver<BackendEvent>) {
        let Some(event) = rx.recv().await else {
            panic!("backend channel closed");
        };
        update(app, AppMessage::Backend(event));
    }
}
