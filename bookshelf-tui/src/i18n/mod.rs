//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 启动时根据配置文件中的 `language` 选择翻译表，默认 en-US。

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// 英语（美国）
    #[default]
    #[serde(rename = "en-US", alias = "en")]
    EnUs,
    /// 简体中文（中国）
    #[serde(rename = "zh-CN", alias = "zh")]
    ZhCn,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &zh_cn::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::ZhCn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip_through_serde() {
        let lang: Language = serde_json::from_str(r#""zh-CN""#).unwrap();
        assert_eq!(lang, Language::ZhCn);
        assert_eq!(serde_json::to_string(&Language::EnUs).unwrap(), r#""en-US""#);
        assert_eq!(Language::ZhCn.code(), "zh-CN");
    }

    #[test]
    fn short_codes_are_accepted() {
        let lang: Language = serde_json::from_str(r#""en""#).unwrap();
        assert_eq!(lang, Language::EnUs);
    }

    #[test]
    fn english_messages_match_catalog_wording() {
        let m = &en_us::TRANSLATIONS.messages;
        assert_eq!(m.fill_all_fields, "Please fill in all fields");
        assert_eq!(m.book_removed, "Book removed from collection");
        assert_eq!(m.load_failed, "Failed to load books. ");
    }
}
