//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦，负责把控制器发起的请求放到 tokio 上执行。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（JSON 文件 + 环境变量）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按 Enter 提交搜索
//!         ↓
//!     Update 层调用 app.employees.begin_search(query) → PendingListFetch
//!         ↓
//!     DirectoryBackend::spawn_list() 在 tokio 上运行 PendingListFetch::run()
//!         ↓
//!     完成后通过 mpsc 通道发送 BackendEvent::ListLoaded
//!         ↓
//!     主循环每一轮 drain 通道，交给 Update 层 apply
//!         ↓
//!     View 层重新渲染
//!
//!     UI 线程从不等待网络；过期的结果由控制器的序号丢弃。
//!

mod config_service;

use std::sync::Arc;

use employee_directory_client::EmployeeApi;
use employee_directory_core::{
    DetailCompletion, ListCompletion, PendingDetailFetch, PendingListFetch,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub use config_service::{ConfigService, FileConfigService};

/// 后台任务完成事件
#[derive(Debug, Clone)]
pub enum BackendEvent {
    ListLoaded(ListCompletion),
    DetailLoaded(DetailCompletion),
}

/// 后台任务调度
pub struct DirectoryBackend {
    api: Arc<dyn EmployeeApi>,
    tx: UnboundedSender<BackendEvent>,
}

impl DirectoryBackend {
    /// 创建后台调度器，返回事件接收端
    pub fn new(api: Arc<dyn EmployeeApi>) -> (Self, UnboundedReceiver<BackendEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { api, tx }, rx)
    }

    pub fn api(&self) -> Arc<dyn EmployeeApi> {
        Arc::clone(&self.api)
    }

    /// 在 tokio 上执行列表请求
    pub fn spawn_list(&self, pending: PendingListFetch) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let completion = pending.run().await;
            if tx.send(BackendEvent::ListLoaded(completion)).is_err() {
                log::debug!("UI gone, dropping list completion");
            }
        });
    }

    /// 在 tokio 上执行详情请求
    pub fn spawn_detail(&self, pending: PendingDetailFetch) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let completion = pending.run().await;
            if tx.send(BackendEvent::DetailLoaded(completion)).is_err() {
                log::debug!("UI gone, dropping detail completion");
            }
        });
    }
}
