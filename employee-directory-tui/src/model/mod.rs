//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Search / List）
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 纯 UI 状态（弹窗）
//!
//!     Page 与控制器的区别：
//!         - Page 只标识当前位置（相当于门牌号），与 core 的 Route 一一对应；
//!         - EmployeeListController / EmployeeDetailController 持有页面数据，
//!           离开页面时控制器被 teardown，回来时重新创建。
//!
//!
//!     数据流：
//!         用户在列表按 Enter
//!             ↓
//!         update/content.rs 调用 app.employees.open_detail(id) → NavigationIntent
//!             ↓
//!         update/mod.rs 的 navigate() 切换 app.page 并创建详情控制器
//!             ↓
//!         view/layout.rs 根据 app.page 渲染对应页面
//!

mod app;
mod focus;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use page::Page;
pub use state::{Modal, ModalState};
