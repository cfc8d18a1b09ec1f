//! Localized user-facing messages

mod i18n;
mod i18n_ja;

use serde::{Deserialize, Serialize};

/// Marker returned for keys missing from every catalog
pub const MISSING_LABEL: &str = "!!! MISSING LABEL !!!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// Pick a locale from a POSIX locale string such as `ja_JP.UTF-8`.
    pub fn from_posix(value: &str) -> Self {
        let lang = value
            .split(['_', '.', '-', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "ja" => Locale::Ja,
            _ => Locale::En,
        }
    }

    /// Locale from `LC_ALL` / `LANG`, falling back to English
    pub fn from_env() -> Self {
        std::env::var("LC_ALL")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| std::env::var("LANG").ok())
            .map(|v| Self::from_posix(&v))
            .unwrap_or_default()
    }

    fn catalog(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => i18n::MESSAGES,
            Locale::Ja => i18n_ja::MESSAGES,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Localizer {
    locale: Locale,
}

impl Localizer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up `key` and substitute `{0}`, `{1}`, ... with `args`.
    ///
    /// Keys missing from the active catalog fall back to English.
    pub fn localize(&self, key: &str, args: &[&str]) -> String {
        let template = lookup(self.locale.catalog(), key)
            .or_else(|| lookup(Locale::En.catalog(), key));

        let Some(template) = template else {
            tracing::warn!("Missing message label: {}", key);
            return format!("{MISSING_LABEL} {key}");
        };

        let mut message = template.to_string();
        for (i, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{i}}}"), arg);
        }
        message
    }
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, template)| *template)
}
