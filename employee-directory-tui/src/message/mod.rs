//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage：主消息
//!         mod content;        // ContentMessage：列表操作
//!         mod search;         // SearchMessage：搜索框输入
//!
//!     后台任务的完成结果同样包装为 AppMessage::Backend，
//!     与键盘消息走同一条 update 路径。
//!

mod app;
mod content;
mod search;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use search::SearchMessage;
