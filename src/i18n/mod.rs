//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups for the
//! screen chrome (title, hint, pill). Language names on the cards come from
//! the catalog and are not translated.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Hindi
    Hi,
    /// Marathi
    Mr,
    /// Gujarati
    Gu,
    /// Bengali
    Bn,
}

impl Locale {
    /// Parse a language code such as `"hi"`, `"hi-IN"` or `"hi_IN"`
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "hi" => Some(Locale::Hi),
            "mr" => Some(Locale::Mr),
            "gu" => Some(Locale::Gu),
            "bn" => Some(Locale::Bn),
            _ => None,
        }
    }

    /// Resolve the chrome locale: explicit override, then system locale, then English
    pub fn resolve(preferred: Option<&str>) -> Self {
        preferred
            .and_then(Self::from_code)
            .or_else(|| Self::from_code(&locale_config::Locale::current().to_string()))
            .unwrap_or_default()
    }

    /// Language code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
            Locale::Mr => "mr",
            Locale::Gu => "gu",
            Locale::Bn => "bn",
        }
    }

    fn column(&self) -> usize {
        match self {
            Locale::En => 0,
            Locale::Hi => 1,
            Locale::Mr => 2,
            Locale::Gu => 3,
            Locale::Bn => 4,
        }
    }
}

/// key -> (en, hi, mr, gu, bn)
type Row = [&'static str; 5];

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, Row>> = OnceLock::new();

fn init_translations() -> HashMap<&'static str, Row> {
    let mut map = HashMap::new();

    map.insert(
        "app-title",
        ["Language", "भाषा", "भाषा", "ભાષા", "ভাষা"],
    );
    map.insert(
        "screen-title",
        [
            "Choose language",
            "भाषा चुनें",
            "भाषा निवडा",
            "ભાષા પસંદ કરો",
            "ভাষা বেছে নিন",
        ],
    );
    map.insert(
        "screen-hint",
        [
            "Tap a language to continue",
            "जारी रखने के लिए एक भाषा पर टैप करें",
            "पुढे जाण्यासाठी भाषेवर टॅप करा",
            "ચાલુ રાખવા માટે ભાષા પર ટેપ કરો",
            "চালিয়ে যেতে একটি ভাষায় ট্যাপ করুন",
        ],
    );
    map.insert(
        "card-select",
        ["Select", "चुनें", "निवडा", "પસંદ કરો", "বেছে নিন"],
    );

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, Row> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    match translations().get(key) {
        Some(row) => SharedString::from(row[locale.column()]),
        // Fallback: return the key itself
        None => SharedString::from(key.to_string()),
    }
}
