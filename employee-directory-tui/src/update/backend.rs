//! 后台请求完成后的状态更新

use crate::backend::BackendEvent;
use crate::i18n::{fill, t};
use crate::model::App;

/// 将后台完成事件交给对应的控制器
pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::ListLoaded(completion) => {
            if app.employees.apply(completion) {
                match app.employees.error() {
                    None => {
                        let count = app.employees.records().len();
                        app.set_status(fill(t().status.loaded, count));
                    }
                    Some(_) => app.clear_status(),
                }
            }
        }
        BackendEvent::DetailLoaded(completion) => {
            let Some(detail) = app.detail.as_mut() else {
                log::debug!("detail completion for {} arrived after leaving the page", completion.id);
                return;
            };
            if detail.apply(completion) {
                app.clear_status();
            }
        }
    }
}
