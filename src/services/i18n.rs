use std::collections::HashMap;

use serde_json::Value;

/// Locales served by the site. The URL path prefix selects one; anything else
/// falls back to Japanese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Ja,
    Zh,
}

pub const DEFAULT_LOCALE: Locale = Locale::Ja;

impl Locale {
    pub fn all() -> [Locale; 3] {
        [Locale::En, Locale::Ja, Locale::Zh]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
            Locale::Zh => "zh",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Locale> {
        match prefix {
            "en" => Some(Locale::En),
            "ja" => Some(Locale::Ja),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }
}

/// Capability to resolve a dotted key to a localized string. Injected where
/// messages are produced instead of living in a global.
pub trait Translator {
    fn resolve(&self, locale: Locale, key: &str) -> String;
}

/// The three static dictionaries, embedded at build time and loaded once at
/// startup.
#[derive(Debug, Clone)]
pub struct Translations {
    dictionaries: HashMap<Locale, Value>,
}

impl Translations {
    pub fn load() -> Self {
        let mut dictionaries = HashMap::new();
        dictionaries.insert(
            Locale::En,
            serde_json::from_str(include_str!("../../locales/en.json"))
                .expect("en dictionary is valid JSON"),
        );
        dictionaries.insert(
            Locale::Ja,
            serde_json::from_str(include_str!("../../locales/ja.json"))
                .expect("ja dictionary is valid JSON"),
        );
        dictionaries.insert(
            Locale::Zh,
            serde_json::from_str(include_str!("../../locales/zh.json"))
                .expect("zh dictionary is valid JSON"),
        );
        Self { dictionaries }
    }
}

impl Translator for Translations {
    /// Walks the dictionary along the dotted key. An unknown key resolves to
    /// the key itself so a missing translation is visible, never a panic.
    fn resolve(&self, locale: Locale, key: &str) -> String {
        let mut node = match self.dictionaries.get(&locale) {
            Some(dictionary) => dictionary,
            None => return key.to_string(),
        };

        for part in key.split('.') {
            match node.get(part) {
                Some(next) => node = next,
                None => return key.to_string(),
            }
        }

        match node.as_str() {
            Some(text) => text.to_string(),
            None => key.to_string(),
        }
    }
}
