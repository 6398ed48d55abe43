//! 内容面板消息
//!
//! 列表页中的光标移动、选择与删除

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 打开当前员工的详情
    Confirm,

    // ========== 选择与删除 ==========
    /// 勾选/取消勾选当前员工
    ToggleSelect,
    /// 删除当前员工（仅本地）
    Delete,
    /// 删除所有已勾选员工（仅本地）
    DeleteSelected,
}
