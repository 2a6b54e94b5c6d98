//! Translation resolution for control labels and app copy.
//!
//! Catalogs are flat JSON objects mapping an opaque key (for example
//! `"BUTTON$COPY"`) to display text. A [`Bundle`] holds one catalog per
//! [`Locale`] and resolves keys with a locale → English → key fallback, so a
//! missing translation degrades to something readable instead of an empty
//! label. Components read translations through the [`I18n`] context.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::OnceLock;

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Translation keys used by the shared controls.
pub mod keys {
    /// Header title text.
    pub const HOME_HEADER_TITLE: &str = "HOME$HEADER_TITLE";
    /// Accessible name of the loading spinner.
    pub const LOADING_LABEL: &str = "LOADING$LABEL";
    /// Accessible name of the submit button.
    pub const BUTTON_SEND: &str = "BUTTON$SEND";
    /// Accessible name of the copy button in copy mode.
    pub const BUTTON_COPY: &str = "BUTTON$COPY";
    /// Accessible name of the copy button in copied mode.
    pub const BUTTON_COPIED: &str = "BUTTON$COPIED";
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Locales with an embedded catalog.
pub enum Locale {
    /// English. Also the fallback locale.
    #[default]
    En,
    /// German.
    De,
    /// French.
    Fr,
}

impl Locale {
    /// Every supported locale, fallback first.
    pub const ALL: [Locale; 3] = [Self::En, Self::De, Self::Fr];

    /// BCP 47 primary language tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
        }
    }

    /// Name of the locale in its own language.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::De => "Deutsch",
            Self::Fr => "Français",
        }
    }

    fn embedded_source(self) -> &'static str {
        match self {
            Self::En => include_str!("../locales/en.json"),
            Self::De => include_str!("../locales/de.json"),
            Self::Fr => include_str!("../locales/fr.json"),
        }
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    /// Parses a language tag. Region subtags (`de-AT`, `fr_CA`) are ignored.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let primary = raw
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            "fr" => Ok(Self::Fr),
            _ => Err(I18nError::UnknownLocale(raw.to_string())),
        }
    }
}

/// Errors raised while loading translation catalogs.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The language tag does not match a supported locale.
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),
    /// The catalog is not a flat JSON object of strings.
    #[error("failed to parse `{locale}` catalog: {source}")]
    Parse {
        /// Tag of the locale being loaded.
        locale: &'static str,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// A key maps to blank text.
    #[error("`{locale}` catalog has an empty value for `{key}`")]
    EmptyValue {
        /// Tag of the locale being loaded.
        locale: &'static str,
        /// Offending key.
        key: String,
    },
}

/// Key → text table for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    locale: Locale,
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// Parses a flat JSON object into a catalog, rejecting blank values.
    pub fn from_json(locale: Locale, json: &str) -> Result<Self, I18nError> {
        let entries: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|source| I18nError::Parse {
                locale: locale.tag(),
                source,
            })?;

        if let Some((key, _)) = entries.iter().find(|(_, text)| text.trim().is_empty()) {
            return Err(I18nError::EmptyValue {
                locale: locale.tag(),
                key: key.clone(),
            });
        }

        Ok(Self { locale, entries })
    }

    /// Locale this catalog translates into.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Text for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Copies every entry of `other` into `self`; `other` wins on conflicts.
    pub fn extend(&mut self, other: Catalog) {
        self.entries.extend(other.entries);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One catalog per locale.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    catalogs: BTreeMap<Locale, Catalog>,
}

impl Bundle {
    /// Empty bundle. Every lookup falls back to the key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the catalogs compiled into this crate.
    pub fn embedded() -> Result<Self, I18nError> {
        Locale::ALL.into_iter().try_fold(Self::new(), |bundle, locale| {
            Ok(bundle.with_catalog(Catalog::from_json(locale, locale.embedded_source())?))
        })
    }

    /// Adds `catalog`, replacing any catalog for the same locale.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.insert(catalog);
        self
    }

    /// Adds `catalog`, replacing any catalog for the same locale.
    pub fn insert(&mut self, catalog: Catalog) {
        self.catalogs.insert(catalog.locale(), catalog);
    }

    /// Layers `other` over `self`, merging catalogs that share a locale.
    pub fn merge(mut self, other: Bundle) -> Self {
        for (locale, catalog) in other.catalogs {
            match self.catalogs.get_mut(&locale) {
                Some(existing) => existing.extend(catalog),
                None => {
                    self.catalogs.insert(locale, catalog);
                }
            }
        }
        self
    }

    /// Whether `locale` itself translates `key`.
    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.lookup(locale, key).is_some()
    }

    /// Resolves `key` in `locale`, then in English, then returns the key itself.
    pub fn translate<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.lookup(locale, key)
            .or_else(|| self.lookup(Locale::En, key))
            .unwrap_or(key)
    }

    /// English keys that `locale` does not translate.
    pub fn missing_keys(&self, locale: Locale) -> Vec<&str> {
        let Some(reference) = self.catalogs.get(&Locale::En) else {
            return Vec::new();
        };
        reference
            .keys()
            .filter(|key| !self.contains(locale, key))
            .collect()
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.catalogs.get(&locale).and_then(|catalog| catalog.get(key))
    }
}

fn embedded_bundle() -> &'static Bundle {
    static EMBEDDED: OnceLock<Bundle> = OnceLock::new();
    EMBEDDED.get_or_init(|| {
        Bundle::embedded().unwrap_or_else(|err| {
            logging::error!("embedded translations failed to load: {err}");
            Bundle::new()
        })
    })
}

/// Reactive translation context shared through the component tree.
///
/// `Copy`, so views can capture it in as many closures as they need.
#[derive(Clone, Copy)]
pub struct I18n {
    locale: RwSignal<Locale>,
    bundle: Option<StoredValue<Bundle>>,
}

impl I18n {
    /// Context backed by a caller-supplied bundle.
    pub fn new(bundle: Bundle, locale: Locale) -> Self {
        Self {
            locale: create_rw_signal(locale),
            bundle: Some(store_value(bundle)),
        }
    }

    /// Context backed by the catalogs compiled into this crate.
    pub fn embedded(locale: Locale) -> Self {
        Self {
            locale: create_rw_signal(locale),
            bundle: None,
        }
    }

    /// Active locale. Tracks reactively.
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// Active locale, read without subscribing.
    pub fn locale_untracked(&self) -> Locale {
        self.locale.get_untracked()
    }

    /// Switches the active locale; every `tr` read inside a reactive scope re-runs.
    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
    }

    /// Resolves `key` in the active locale. Tracks the locale reactively.
    pub fn tr(&self, key: &str) -> String {
        let locale = self.locale.get();
        match self.bundle {
            Some(bundle) => bundle.with_value(|bundle| resolve(bundle, locale, key)),
            None => resolve(embedded_bundle(), locale, key),
        }
    }
}

fn resolve(bundle: &Bundle, locale: Locale, key: &str) -> String {
    if !bundle.contains(locale, key) {
        logging::debug_warn!("missing `{}` translation for `{key}`", locale.tag());
    }
    bundle.translate(locale, key).to_string()
}

/// Provides an [`I18n`] context backed by `bundle` to descendants.
pub fn provide_i18n(bundle: Bundle, locale: Locale) -> I18n {
    let i18n = I18n::new(bundle, locale);
    provide_context(i18n);
    i18n
}

/// Provides an [`I18n`] context backed by the embedded catalogs.
pub fn provide_embedded_i18n(locale: Locale) -> I18n {
    let i18n = I18n::embedded(locale);
    provide_context(i18n);
    i18n
}

/// Current [`I18n`] context, or the embedded catalogs in English when none was provided.
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_else(|| I18n::embedded(Locale::En))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog(locale: Locale, json: &str) -> Catalog {
        Catalog::from_json(locale, json).expect("valid catalog")
    }

    #[test]
    fn locale_parses_tags_case_insensitively() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("DE".parse::<Locale>().unwrap(), Locale::De);
        assert_eq!(" fr_CA ".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!("de-AT".parse::<Locale>().unwrap(), Locale::De);
    }

    #[test]
    fn locale_rejects_unknown_tags() {
        let err = "pt-BR".parse::<Locale>().unwrap_err();
        assert!(matches!(err, I18nError::UnknownLocale(ref raw) if raw == "pt-BR"));
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn locale_round_trips_through_its_tag() {
        for locale in Locale::ALL {
            assert_eq!(locale.tag().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn catalog_rejects_non_object_json() {
        let err = Catalog::from_json(Locale::En, r#"["BUTTON$COPY"]"#).unwrap_err();
        assert!(matches!(err, I18nError::Parse { locale: "en", .. }));
    }

    #[test]
    fn catalog_rejects_blank_values() {
        let err = Catalog::from_json(Locale::De, r#"{"BUTTON$COPY": "  "}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`de` catalog has an empty value for `BUTTON$COPY`"
        );
    }

    #[test]
    fn translation_falls_back_to_english_then_key() {
        let bundle = Bundle::new()
            .with_catalog(catalog(
                Locale::En,
                r#"{"BUTTON$COPY": "Copy", "BUTTON$SEND": "Send"}"#,
            ))
            .with_catalog(catalog(Locale::De, r#"{"BUTTON$COPY": "Kopieren"}"#));

        assert_eq!(bundle.translate(Locale::De, "BUTTON$COPY"), "Kopieren");
        assert_eq!(bundle.translate(Locale::De, "BUTTON$SEND"), "Send");
        assert_eq!(bundle.translate(Locale::Fr, "BUTTON$COPY"), "Copy");
        assert_eq!(bundle.translate(Locale::De, "NOT$A_KEY"), "NOT$A_KEY");
        assert_eq!(bundle.missing_keys(Locale::De), vec!["BUTTON$SEND"]);
    }

    #[test]
    fn later_catalog_replaces_earlier_one() {
        let bundle = Bundle::new()
            .with_catalog(catalog(Locale::En, r#"{"BUTTON$COPY": "Copy"}"#))
            .with_catalog(catalog(Locale::En, r#"{"BUTTON$COPY": "Duplicate"}"#));
        assert_eq!(bundle.translate(Locale::En, "BUTTON$COPY"), "Duplicate");
    }

    #[test]
    fn merge_layers_catalogs_per_locale() {
        let base = Bundle::new()
            .with_catalog(catalog(Locale::En, r#"{"BUTTON$COPY": "Copy", "BUTTON$SEND": "Send"}"#));
        let app = Bundle::new()
            .with_catalog(catalog(Locale::En, r#"{"BUTTON$SEND": "Submit", "CHAT$EMPTY": "Nothing"}"#))
            .with_catalog(catalog(Locale::De, r#"{"CHAT$EMPTY": "Nichts"}"#));

        let merged = base.merge(app);
        assert_eq!(merged.translate(Locale::En, "BUTTON$COPY"), "Copy");
        assert_eq!(merged.translate(Locale::En, "BUTTON$SEND"), "Submit");
        assert_eq!(merged.translate(Locale::De, "CHAT$EMPTY"), "Nichts");
        assert_eq!(
            merged.missing_keys(Locale::De),
            vec!["BUTTON$COPY", "BUTTON$SEND"]
        );
    }

    #[test]
    fn embedded_catalogs_cover_every_english_key() {
        let bundle = Bundle::embedded().expect("embedded catalogs parse");
        for locale in Locale::ALL {
            assert_eq!(bundle.missing_keys(locale), Vec::<&str>::new(), "{locale:?}");
        }
    }

    #[test]
    fn embedded_catalogs_define_control_keys() {
        let bundle = Bundle::embedded().expect("embedded catalogs parse");
        for key in [
            keys::HOME_HEADER_TITLE,
            keys::LOADING_LABEL,
            keys::BUTTON_SEND,
            keys::BUTTON_COPY,
            keys::BUTTON_COPIED,
        ] {
            assert!(bundle.contains(Locale::En, key), "{key}");
        }
    }

    #[test]
    fn context_follows_locale_changes() {
        let runtime = create_runtime();

        let i18n = I18n::new(
            Bundle::new()
                .with_catalog(catalog(Locale::En, r#"{"BUTTON$COPY": "Copy"}"#))
                .with_catalog(catalog(Locale::Fr, r#"{"BUTTON$COPY": "Copier"}"#)),
            Locale::En,
        );
        assert_eq!(i18n.tr(keys::BUTTON_COPY), "Copy");

        i18n.set_locale(Locale::Fr);
        assert_eq!(i18n.locale(), Locale::Fr);
        assert_eq!(i18n.locale_untracked(), Locale::Fr);
        assert_eq!(i18n.tr(keys::BUTTON_COPY), "Copier");

        runtime.dispose();
    }

    #[test]
    fn use_i18n_defaults_to_embedded_english() {
        let runtime = create_runtime();

        let i18n = use_i18n();
        assert_eq!(i18n.locale(), Locale::En);
        assert_eq!(i18n.tr(keys::BUTTON_SEND), "Send");

        runtime.dispose();
    }
}
