//! 主题和样式定义
//!
//! 颜色方案在启动时由配置选定，之后只读。

use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::style::{Color, Modifier, Style};

static LIGHT_THEME: AtomicBool = AtomicBool::new(false);

/// 主题
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 配置文件中的名称（`dark` / `light`，忽略大小写）；未知名称返回 `None`
    pub fn from_name(name: &str) -> Option<Theme> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// 设置主题
pub fn set_theme(theme: Theme) {
    LIGHT_THEME.store(theme == Theme::Light, Ordering::Relaxed);
}

/// 当前主题的颜色方案
pub fn colors() -> ThemeColors {
    if LIGHT_THEME.load(Ordering::Relaxed) {
        ThemeColors::LIGHT
    } else {
        ThemeColors::DARK
    }
}

/// 颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    /// 标题栏 / 状态栏底色
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    const DARK: Self = Self {
        fg: Color::Rgb(220, 223, 228),
        border: Color::Rgb(72, 78, 90),
        border_focused: Color::Rgb(86, 182, 194),
        highlight: Color::Rgb(40, 110, 122),
        selected_bg: Color::Rgb(44, 62, 80),
        selected_fg: Color::White,
        success: Color::Rgb(152, 195, 121),
        warning: Color::Rgb(229, 192, 123),
        error: Color::Rgb(224, 108, 117),
        muted: Color::Rgb(120, 126, 138),
    };

    const LIGHT: Self = Self {
        fg: Color::Rgb(40, 44, 52),
        border: Color::Rgb(200, 204, 210),
        border_focused: Color::Rgb(1, 132, 188),
        highlight: Color::Rgb(1, 132, 188),
        selected_bg: Color::Rgb(214, 234, 248),
        selected_fg: Color::Black,
        success: Color::Rgb(80, 161, 79),
        warning: Color::Rgb(193, 132, 1),
        error: Color::Rgb(202, 18, 67),
        muted: Color::Rgb(140, 144, 152),
    };
}

/// 常用样式
pub struct Styles;

impl Styles {
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 光标所在行
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(colors().selected_fg)
    }

    /// 状态栏右侧的消息
    pub fn status_message() -> Style {
        Style::default()
            .fg(colors().selected_fg)
            .add_modifier(Modifier::ITALIC)
    }

    /// 状态栏分隔符
    pub fn separator() -> Style {
        Style::default().fg(colors().muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_theme_names() {
        assert_eq!(Theme::from_name("light"), Some(Theme::Light));
        assert_eq!(Theme::from_name(" Dark "), Some(Theme::Dark));
        assert_eq!(Theme::from_name("solarized"), None);
    }
}
