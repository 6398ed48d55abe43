//! 应用主消息枚举

use super::{ContentMessage, SearchMessage};
use crate::backend::BackendEvent;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点（搜索框 ↔ 列表）
    ToggleFocus,

    /// 列表/详情内容相关消息
    Content(ContentMessage),

    /// 搜索框相关消息
    Search(SearchMessage),

    /// 后台请求完成
    Backend(BackendEvent),

    /// 返回上一页（或关闭弹窗）
    GoBack,

    /// 重新加载当前页面
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
