//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    pub fn all() -> &'static [Locale] {
        &[Locale::EnUS, Locale::ZhCN]
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Material 3 Gallery", "Material 3 组件库"));

    // Categories
    map.insert("cat-actions", ("Actions", "操作"));
    map.insert("cat-communication", ("Communication", "通知"));
    map.insert("cat-containment", ("Containment", "容器"));
    map.insert("cat-navigation", ("Navigation", "导航"));
    map.insert("cat-selection", ("Selection", "选择"));
    map.insert("cat-text-inputs", ("Text inputs", "文本输入"));
    map.insert("cat-data", ("Data display", "数据展示"));

    // Header
    map.insert("header-theme-light", ("Switch to light theme", "切换到亮色主题"));
    map.insert("header-theme-dark", ("Switch to dark theme", "切换到暗色主题"));
    map.insert("header-density", ("Toggle compact density", "切换紧凑密度"));
    map.insert("header-language", ("Language", "语言"));

    // Demo chrome
    map.insert("demo-status-stable", ("Stable", "稳定"));
    map.insert("demo-status-preview", ("Preview", "预览"));
    map.insert("demo-open-dialog", ("Open dialog", "打开对话框"));
    map.insert("demo-show-snackbar", ("Show snackbar", "显示消息条"));
    map.insert("demo-dismiss", ("Dismiss", "关闭"));
    map.insert("demo-confirm", ("Confirm", "确认"));
    map.insert("demo-cancel", ("Cancel", "取消"));

    // Table
    map.insert("table-no-data", ("No data", "无数据"));
    map.insert("table-loading", ("Loading...", "加载中..."));
    map.insert("table-rows", ("rows", "行"));

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
    fn test_known_key_translates() {
        assert_eq!(t(Locale::EnUS, "cat-actions").as_ref(), "Actions");
        assert_eq!(t(Locale::ZhCN, "cat-actions").as_ref(), "操作");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "no-such-key").as_ref(), "no-such-key");
    }
}
