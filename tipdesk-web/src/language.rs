use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

const LANGUAGE_STORAGE_KEY: &str = "tipdesk.language";
const DEFAULT_LANGUAGE: &str = "en";

/// Information about a supported language
#[derive(PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "fr",
            LanguageInfo {
                code: "fr",
                flag: "🇫🇷",
                translation: include_str!("../translations/fr.json"),
                native_name: "Français",
            },
        ),
    ])
}

/// The language the user last picked, defaulting to English. This is
/// what outgoing API requests carry as `Accept-Language`.
pub fn current_language() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        LocalStorage::get(LANGUAGE_STORAGE_KEY).unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_LANGUAGE.to_string()
    }
}

/// Persist the picked language across reloads.
pub fn remember_language(code: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = LocalStorage::set(LANGUAGE_STORAGE_KEY, code);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = code;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages_cover_default() {
        assert!(get_language_info(DEFAULT_LANGUAGE).is_some());
    }

    #[test]
    fn test_language_info_lookup() {
        let info = get_language_info("fr").unwrap();
        assert_eq!(info.code, "fr");
        assert_eq!(info.native_name, "Français");
    }

    #[test]
    fn test_unknown_language_lookup() {
        assert!(get_language_info("xx").is_none());
    }
}
