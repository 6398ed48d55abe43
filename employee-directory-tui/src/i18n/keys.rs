//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应页面**：如 `employees.*`, `detail.*`
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 含 `{n}` 的文本是模板，用 [`fill`] 替换。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 员工列表页面文本
    pub employees: EmployeesTexts,
    /// 员工详情页面文本
    pub detail: DetailTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub none: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub space: &'static str,
    pub arrows_ud: &'static str, // "↑↓"
    pub search: &'static str,    // "/"
    pub delete: &'static str,    // "d"
    pub delete_selected: &'static str,
    pub reload: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub move_up_down: &'static str,
    pub toggle_select: &'static str,
    pub open_detail: &'static str,
    pub delete: &'static str,
    pub delete_selected: &'static str,
    pub search: &'static str,
    pub submit: &'static str,
    pub clear: &'static str,
    pub reload: &'static str,
    pub back: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 员工列表页面文本
pub struct EmployeesTexts {
    pub title: &'static str,
    pub search_title: &'static str,
    pub search_placeholder: &'static str,
    pub no_employees: &'static str,
    pub col_id: &'static str,
    pub col_name: &'static str,
    pub col_age: &'static str,
    pub col_salary: &'static str,
    /// 模板：`{n}` = 已选数量
    pub selected_count: &'static str,
}

/// 员工详情页面文本
pub struct DetailTexts {
    pub title: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub age: &'static str,
    pub salary: &'static str,
    pub profile_image: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏消息
pub struct StatusTexts {
    pub refreshing: &'static str,
    /// 模板：`{n}` = 员工数量
    pub loaded: &'static str,
    /// 模板：`{n}` = 员工 ID
    pub deleted_one: &'static str,
    /// 模板：`{n}` = 删除数量
    pub deleted_selected: &'static str,
    pub nothing_selected: &'static str,
}

// ============================================================================
// 帮助弹窗
// ============================================================================

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub list_section: &'static str,
    pub search_section: &'static str,
    pub detail_section: &'static str,
    pub close_hint: &'static str,
    pub local_delete_note: &'static str,
}

/// Replace `{n}` in a template.
pub fn fill(template: &str, value: impl std::fmt::Display) -> String {
    template.replace("{n}", &value.to_string())
}
