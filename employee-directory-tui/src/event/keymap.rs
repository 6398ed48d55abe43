//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift（大写字母本身已携带 Shift 信息）。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = if matches!(key.code, KeyCode::Char(_)) {
            key.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            key.modifiers
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const HELP_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 列表
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const TOGGLE_SELECT: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const DELETE: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
    pub const DELETE_SELECTED: KeyBinding = KeyBinding::key(KeyCode::Char('D'));
    pub const DELETE_SELECTED_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const FOCUS_SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const FOCUS_TOGGLE: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 搜索框
    pub const SEARCH_CLEAR: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_ignores_shift() {
        let shifted = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert!(DefaultKeymap::DELETE_SELECTED.matches(&shifted));
        assert!(!DefaultKeymap::DELETE.matches(&shifted));
    }

    #[test]
    fn alt_must_match() {
        let plain = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        let alt = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::ALT);
        assert!(DefaultKeymap::DELETE.matches(&plain));
        assert!(!DefaultKeymap::DELETE.matches(&alt));
        assert!(DefaultKeymap::DELETE_SELECTED_ALT.matches(&alt));
    }
}
