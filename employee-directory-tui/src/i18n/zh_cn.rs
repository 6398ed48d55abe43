//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "员工目录",
        loading: "加载中...",
        error: "错误",
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
            move_up_down: "移动",
            toggle_select: "选择",
            open_detail: "详情",
            delete: "删除",
            delete_selected: "删除所选",
            search: "搜索",
            submit: "提交",
            clear: "清空",
            reload: "重新加载",
            back: "返回",
            help: "帮助",
            quit: "退出",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    employees: EmployeesTexts {
        title: "员工列表",
        search_title: "按 ID 搜索",
        search_placeholder: "输入员工 ID，留空显示全部",
        no_employees: "暂无员工",
        col_id: "ID",
        col_name: "姓名",
        col_age: "年龄",
        col_salary: "薪资",
        selected_count: "已选 {n} 项",
    },

    detail: DetailTexts {
        title: "员工详情",
        id: "ID",
        name: "姓名",
        age: "年龄",
        salary: "薪资",
        profile_image: "头像",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        refreshing: "正在刷新...",
        loaded: "已加载 {n} 名员工",
        deleted_one: "已移除员工 {n}",
        deleted_selected: "已移除 {n} 名员工",
        nothing_selected: "未选择任何员工",
    },

    // ========================================================================
    // 帮助弹窗
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        list_section: "员工列表",
        search_section: "搜索框",
        detail_section: "员工详情",
        close_hint: "按 Esc 关闭帮助",
        local_delete_note: "删除仅在本地隐藏，重新加载后恢复。",
    },
};
