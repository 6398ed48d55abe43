//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, DetailTexts, EmployeesTexts, HelpTexts, HintTexts, KeyNames,
    StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Employee Directory",
        loading: "Loading...",
        error: "Error",
        none: "-",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            space: "Space",
            arrows_ud: "↑↓",
            search: "/",
            delete: "d",
            delete_selected: "D",
            reload: "Alt+r",
            help: "?",
            quit: "q",
        },
        actions: ActionTexts {
            move_up_down: "Move",
            toggle_select: "Select",
            open_detail: "Details",
            delete: "Delete",
            delete_selected: "Delete selected",
            search: "Search",
            submit: "Submit",
            clear: "Clear",
            reload: "Reload",
            back: "Back",
            help: "Help",
            quit: "Quit",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    employees: EmployeesTexts {
        title: "Employees",
        search_title: "Search by ID",
        search_placeholder: "Type an employee ID, empty shows everyone",
        no_employees: "No employees",
        col_id: "ID",
        col_name: "Name",
        col_age: "Age",
        col_salary: "Salary",
        selected_count: "{n} selected",
    },

    detail: DetailTexts {
        title: "Employee Details",
        id: "ID",
        name: "Name",
        age: "Age",
        salary: "Salary",
        profile_image: "Profile image",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        refreshing: "Refreshing...",
        loaded: "Loaded {n} employee(s)",
        deleted_one: "Removed employee {n}",
        deleted_selected: "Removed {n} employee(s)",
        nothing_selected: "No employees selected",
    },

    // ========================================================================
    // 帮助弹窗
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        list_section: "Employee list",
        search_section: "Search box",
        detail_section: "Employee details",
        close_hint: "Press Esc to close the help",
        local_delete_note: "Deleting only hides rows locally; reload restores them.",
    },
};
