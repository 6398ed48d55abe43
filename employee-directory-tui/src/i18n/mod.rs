//! 国际化（i18n）
//!
//! 每种语言一张静态的 [`Translations`] 表，按字段访问，缺字段即编译错误。
//! 控制器给出的错误文案固定为英文，不经过这里。

use std::sync::atomic::{AtomicU8, Ordering};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// UI 语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Language {
    #[default]
    EnUs = 0,
    ZhCn = 1,
}

impl Language {
    /// BCP 47 代码
    pub fn code(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhCn => "zh-CN",
        }
    }

    /// 解析 `en` / `en-US` / `zh_CN.UTF-8` 这类写法，只看主语言子标签
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::EnUs),
            "zh" => Some(Self::ZhCn),
            _ => None,
        }
    }

    fn translations(self) -> &'static Translations {
        match self {
            Self::EnUs => &en_us::TRANSLATIONS,
            Self::ZhCn => &zh_cn::TRANSLATIONS,
        }
    }

    fn from_index(index: u8) -> Self {
        if index == Self::ZhCn as u8 {
            Self::ZhCn
        } else {
            Self::EnUs
        }
    }
}

static CURRENT_LANGUAGE: AtomicU8 = AtomicU8::new(Language::EnUs as u8);

/// 当前语言的文本表
pub fn t() -> &'static Translations {
    current_language().translations()
}

pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang as u8, Ordering::Relaxed);
}

pub fn current_language() -> Language {
    Language::from_index(CURRENT_LANGUAGE.load(Ordering::Relaxed))
}
