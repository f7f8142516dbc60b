//! Application Configuration
//!
//! Defaults with optional overrides from `data-*` attributes on `<html>`.

use std::str::FromStr;

use log::LevelFilter;

const STORAGE_KEY_ATTR: &str = "data-storage-key";
const LOG_LEVEL_ATTR: &str = "data-log-level";

/// Inline style of the edit surface
#[derive(Debug, Clone, PartialEq)]
pub struct EditorStyle {
    pub font_size_px: u32,
    pub height_px: u32,
    pub padding_px: u32,
}

impl Default for EditorStyle {
    fn default() -> Self {
        Self {
            font_size_px: 16,
            height_px: 100,
            padding_px: 5,
        }
    }
}

impl EditorStyle {
    pub fn inline_style(&self) -> String {
        format!(
            "background-color: white; color: black; border: 1px solid #ccc; padding: {}px; font-size: {}px; width: 100%; height: {}px;",
            self.padding_px, self.font_size_px, self.height_px
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage key holding the item collection
    pub storage_key: String,
    /// Question shown before deleting an item
    pub delete_prompt: String,
    pub log_level: LevelFilter,
    pub editor: EditorStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "todos".to_string(),
            delete_prompt: "Delete this to-do?".to_string(),
            log_level: LevelFilter::Info,
            editor: EditorStyle::default(),
        }
    }
}

impl AppConfig {
    /// Build from an attribute lookup, keeping defaults for absent or invalid values
    pub fn from_attributes(attribute: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(key) = attribute(STORAGE_KEY_ATTR) {
            let key = key.trim();
            if key.is_empty() {
                log::warn!("[CONFIG] Ignoring empty {}", STORAGE_KEY_ATTR);
            } else {
                config.storage_key = key.to_string();
            }
        }

        if let Some(level) = attribute(LOG_LEVEL_ATTR) {
            match LevelFilter::from_str(level.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("[CONFIG] Unknown {} '{}', using {}", LOG_LEVEL_ATTR, level, config.log_level),
            }
        }

        config
    }

    pub fn from_document() -> Self {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        Self::from_attributes(|name| root.as_ref().and_then(|el| el.get_attribute(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_attributes() {
        assert_eq!(AppConfig::from_attributes(lookup(&[])), AppConfig::default());
        assert_eq!(AppConfig::default().storage_key, "todos");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_attributes(lookup(&[
            ("data-storage-key", "work-todos"),
            ("data-log-level", "debug"),
        ]));
        assert_eq!(config.storage_key, "work-todos");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_attributes(lookup(&[
            ("data-storage-key", "  "),
            ("data-log-level", "loud"),
        ]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_editor_inline_style() {
        let style = EditorStyle::default().inline_style();
        assert!(style.contains("font-size: 16px"));
        assert!(style.contains("height: 100px"));
        assert!(style.contains("padding: 5px"));
    }
}
