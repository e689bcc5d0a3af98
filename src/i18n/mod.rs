//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Parse a locale tag such as `zh-CN`; unknown tags fall back to English
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }

    /// Tag written to the configuration file
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUS => "en-US",
            Locale::ZhCN => "zh-CN",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Artwork Catalog", "艺术品目录"));

    // Actions
    map.insert("action-refresh", ("Refresh", "刷新"));
    map.insert("action-clear-all", ("Clear all", "全部清除"));
    map.insert("action-remove", ("Remove", "移除"));
    map.insert("action-select", ("Select", "选择"));
    map.insert("action-show-selection", ("Show selection", "显示已选"));
    map.insert("action-hide-selection", ("Hide selection", "隐藏已选"));

    // Table columns
    map.insert("col-title", ("Title", "标题"));
    map.insert("col-place-of-origin", ("Place of Origin", "产地"));
    map.insert("col-artist", ("Artist", "艺术家"));
    map.insert("col-inscriptions", ("Inscriptions", "铭文"));
    map.insert("col-date-start", ("Start Date", "起始年份"));
    map.insert("col-date-end", ("End Date", "结束年份"));

    // Pagination
    map.insert("page-rows-per-page", ("Rows per page", "每页行数"));
    map.insert("page-items", ("artworks", "件作品"));

    // Selection panel
    map.insert("selection-title", ("Selected Artworks", "已选作品"));
    map.insert("selection-empty", ("No artworks selected", "尚未选择作品"));
    map.insert("selection-bulk", ("Select first rows", "选择前若干行"));
    map.insert("selection-bulk-placeholder", ("Number of rows", "行数"));
    map.insert("selection-bulk-loading", ("Selecting...", "选择中..."));

    // Log panel
    map.insert("log-title", ("Logs", "日志"));
    map.insert("log-clear", ("Clear", "清除"));

    // Table
    map.insert("table-no-data", ("No artworks found", "未找到作品"));
    map.insert("table-loading", ("Loading...", "加载中..."));
    map.insert("table-error", ("Failed to load artworks", "加载作品失败"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags() {
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("ZH"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("en-US"), Locale::EnUS);
        assert_eq!(Locale::from_tag("fr"), Locale::EnUS);
        assert_eq!(Locale::from_tag(Locale::ZhCN.tag()), Locale::ZhCN);
        assert_eq!(Locale::from_tag(Locale::EnUS.tag()), Locale::EnUS);
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "col-title").as_ref(), "Title");
        assert_eq!(t(Locale::ZhCN, "col-title").as_ref(), "标题");
        assert_eq!(t(Locale::EnUS, "missing-key").as_ref(), "missing-key");
    }
}
