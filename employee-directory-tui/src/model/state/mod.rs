//! 页面数据状态
//!
//! 列表与详情的业务状态由 employee-directory-core 的控制器持有，
//! 这里只保留纯 UI 的状态（弹窗）。

mod modal;

pub use modal::{Modal, ModalState};
