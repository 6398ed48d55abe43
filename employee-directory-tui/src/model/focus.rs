//! 焦点状态定义

/// 列表页的焦点面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 顶部搜索框
    Search,
    /// 员工列表
    #[default]
    List,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Search => FocusPanel::List,
            FocusPanel::List => FocusPanel::Search,
        }
    }

    /// 是否是搜索框
    pub fn is_search(self) -> bool {
        matches!(self, FocusPanel::Search)
    }
}
