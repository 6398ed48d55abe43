//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!     layout.rs               标题栏 + 页面内容 + 状态栏 + 弹窗
//!     pages/employees.rs      员工列表（搜索框、勾选框、表格、已选数量）
//!     pages/employee_detail.rs 员工详情
//!     components/             状态栏、帮助弹窗
//!     theme.rs                颜色与样式
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
