//! Employee Directory TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 后台请求与配置 (`backend/`)
//!
//! 列表与详情的业务状态由 `employee-directory-core` 的控制器持有，
//! 网络请求由 `employee-directory-client` 完成（429 自动重试）。
//!
//! main():
//!     init_logging()          // 日志写入文件，不干扰终端
//!     load config             // 配置文件 + 环境变量
//!     create_client()         // 创建 REST 客户端
//!     App::new() + start()    // 创建 APP 实例并加载员工列表
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use employee_directory_client::create_client;

use backend::{ConfigService, DirectoryBackend, FileConfigService};
use util::{init_logging, init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 日志（写入文件）
    let log_path = init_logging()?;

    // 2. 加载配置
    let config_service = FileConfigService::default();
    let config = config_service.load()?;
    let env = |key: &str| std::env::var(key).ok();

    i18n::set_language(config.language(env));
    view::theme::set_theme(config.theme());

    let client_config = config.client_config(env);
    log::info!(
        "Starting employee directory: base_url={}, max_attempts={}, language={}, config={}, log={}",
        client_config.base_url,
        client_config.retry.max_attempts,
        i18n::current_language().code(),
        config_service.path().display(),
        log_path.display()
    );

    // 3. 创建客户端与后台调度
    let api = create_client(client_config).context("failed to create employee client")?;
    let (backend, mut events) = DirectoryBackend::new(api);

    // 4. 创建应用实例并加载员工列表
    let mut app = model::App::new(backend);
    update::start(&mut app);

    // 5. 初始化终端
    let mut terminal = init_terminal()?;

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut events);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Application error: {e:#}");
    }
    log::info!("Employee directory exited");

    result
}
