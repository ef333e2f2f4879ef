use std::collections::HashMap;
use std::path::{Path, PathBuf};

use moka::sync::Cache;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::Locale;

const BASE_BUNDLE: &str = "";
const BUNDLE_PREFIX: &str = "messages";
const BUNDLE_EXTENSION: &str = ".properties";
const RESOLVED_CACHE_CAPACITY: u64 = 1_024;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// Bundles compiled into the binary, keyed by locale suffix
const BUILTIN_BUNDLES: &[(&str, &str)] = &[
    (BASE_BUNDLE, include_str!("../../../i18n/messages.properties")),
    ("en", include_str!("../../../i18n/messages_en.properties")),
    ("es_ES", include_str!("../../../i18n/messages_es_ES.properties")),
    ("ca_ES", include_str!("../../../i18n/messages_ca_ES.properties")),
];

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read message bundles from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only message source keyed by message token and locale.
///
/// Lookups walk `lang_COUNTRY`, `lang`, then the default locale and finally
/// the base bundle. A key missing everywhere resolves to the key itself.
pub struct MessageCatalog {
    bundles: HashMap<String, HashMap<String, String>>,
    default_locale: Locale,
    resolved: Cache<(String, Locale), String>,
}

impl MessageCatalog {
    /// Catalog made only of the bundles shipped with the binary
    pub fn builtin(default_locale: Locale) -> Self {
        let bundles = BUILTIN_BUNDLES
            .iter()
            .map(|(suffix, content)| (suffix.to_string(), parse_properties(content)))
            .collect();

        Self::from_bundles(bundles, default_locale)
    }

    /// Built-in bundles overlaid with every `messages*.properties` file in `dir`.
    /// Keys present in a file replace the built-in value for that bundle.
    pub fn with_overrides(dir: &Path, default_locale: Locale) -> Result<Self, CatalogError> {
        let mut catalog = Self::builtin(default_locale);

        let io_error = |source| CatalogError::Io {
            path: dir.to_path_buf(),
            source,
        };

        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            let Some(suffix) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(bundle_suffix)
            else {
                continue;
            };

            let content = std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;

            tracing::info!(bundle = %path.display(), "Loading message bundle override");

            catalog
                .bundles
                .entry(suffix)
                .or_default()
                .extend(parse_properties(&content));
        }

        Ok(catalog)
    }

    pub fn from_bundles(
        bundles: HashMap<String, HashMap<String, String>>,
        default_locale: Locale,
    ) -> Self {
        Self {
            bundles,
            default_locale,
            resolved: Cache::new(RESOLVED_CACHE_CAPACITY),
        }
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Localized message for `key`, or the key itself when no bundle has it
    pub fn message(&self, key: &str, locale: &Locale) -> String {
        self.message_with_args(key, &[], locale)
    }

    /// Localized message with `{0}`, `{1}`... replaced by `args`
    pub fn message_with_args(&self, key: &str, args: &[&str], locale: &Locale) -> String {
        let template = match self.resolve(key, locale) {
            Some(template) => template,
            None => {
                tracing::warn!(key = %key, locale = %locale, "No message found for key");
                return key.to_string();
            }
        };

        if args.is_empty() {
            return template;
        }

        PLACEHOLDER
            .replace_all(&template, |captures: &Captures| {
                captures[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| args.get(index))
                    .map(|arg| arg.to_string())
                    .unwrap_or_else(|| captures[0].to_string())
            })
            .into_owned()
    }

    fn resolve(&self, key: &str, locale: &Locale) -> Option<String> {
        let locale = locale.specific();
        let cache_key = (key.to_string(), locale.clone());

        if let Some(hit) = self.resolved.get(&cache_key) {
            return Some(hit);
        }

        let found = self
            .lookup_chain(&locale)
            .iter()
            .find_map(|suffix| self.bundles.get(suffix).and_then(|bundle| bundle.get(key)))
            .cloned()?;

        self.resolved.insert(cache_key, found.clone());
        Some(found)
    }

    fn lookup_chain(&self, locale: &Locale) -> Vec<String> {
        let mut chain = locale.bundle_candidates();
        for candidate in self.default_locale.specific().bundle_candidates() {
            if !chain.contains(&candidate) {
                chain.push(candidate);
            }
        }
        chain.push(BASE_BUNDLE.to_string());
        chain
    }
}

/// `messages.properties` -> "", `messages_es_ES.properties` -> "es_ES"
fn bundle_suffix(file_name: &str) -> Option<String> {
    let stem = file_name
        .strip_prefix(BUNDLE_PREFIX)?
        .strip_suffix(BUNDLE_EXTENSION)?;

    if stem.is_empty() {
        return Some(BASE_BUNDLE.to_string());
    }

    let locale = Locale::parse(stem.strip_prefix('_')?)?;
    Some(locale.to_string())
}

/// Minimal `.properties` reader: `key=value` or `key: value` per line,
/// `#` and `!` comments, surrounding whitespace trimmed.
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| {
            let split_at = line.find(|c| c == '=' || c == ':')?;
            let (key, value) = line.split_at(split_at);
            Some((key.trim().to_string(), value[1..].trim().to_string()))
        })
        .collect()
}
