//! 应用主状态结构

use employee_directory_core::{EmployeeDetailController, EmployeeListController};

use super::{FocusPanel, ModalState, Page};
use crate::backend::DirectoryBackend;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前页面
    pub page: Page,

    /// 列表页焦点
    pub focus: FocusPanel,

    /// 员工列表控制器
    pub employees: EmployeeListController,

    /// 员工详情控制器（仅在详情页存在）
    pub detail: Option<EmployeeDetailController>,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 后台任务调度
    pub backend: DirectoryBackend,
}

impl App {
    /// 创建新的应用实例（尚未发起任何请求）
    pub fn new(backend: DirectoryBackend) -> Self {
        Self {
            should_quit: false,
            page: Page::EmployeeList,
            focus: FocusPanel::List,
            employees: EmployeeListController::new(backend.api()),
            detail: None,
            modal: ModalState::new(),
            status_message: None,
            backend,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
