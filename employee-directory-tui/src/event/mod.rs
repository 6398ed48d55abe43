//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!     · poll_event      事件轮询，受 app.rs 调用，最长等待 timeout
//!     · handle_event    事件分发：
//!         - 有弹窗打开时，只接受关闭
//!         - 全局快捷键（Ctrl+C、Alt+r），就地处理
//!         - 列表页：焦点在搜索框时按键作为输入，否则作为列表操作
//!         - 详情页：返回、重新加载
//!
//!     常用键盘映射：
//!         ↑↓ / jk     → ContentMessage::SelectPrevious / SelectNext
//!         Space       → ContentMessage::ToggleSelect
//!         Enter       → ContentMessage::Confirm（列表）/ SearchMessage::Submit（搜索框）
//!         d           → ContentMessage::Delete
//!         D / Alt+d   → ContentMessage::DeleteSelected
//!         / 或 Tab    → AppMessage::ToggleFocus
//!         Esc         → AppMessage::GoBack
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
