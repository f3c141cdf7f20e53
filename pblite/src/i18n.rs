use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};

/// A key to text catalog bound to one locale.
///
/// Catalogs are flat JSON objects stored as `i18n/<locale>.json` under the
/// asset root. An empty translator returns every key unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Option<String>,
    map: HashMap<String, String>,
}

impl Translator {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Locale of the loaded catalog, `None` when untranslated.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.map.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Loads the best catalog in `dir` for `locale`.
    ///
    /// Tries the full `lang_REGION` name first, then the bare language.
    /// Returns `None` when no candidate exists or parses.
    pub fn load(dir: &Path, locale: &str) -> Option<Self> {
        for candidate in locale_candidates(locale) {
            let path = dir.join(format!("{candidate}.json"));
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(_) => {
                    debug!("No translation catalog at {}", path.display());
                    continue;
                }
            };

            match serde_json::from_str::<HashMap<String, String>>(&text) {
                Ok(map) => {
                    return Some(Self {
                        locale: Some(candidate),
                        map,
                    });
                }
                Err(e) => warn!("Failed to parse {}: {e}", path.display()),
            }
        }
        None
    }
}

/// The system locale, `"C"` when it cannot be determined.
pub fn system_locale() -> String {
    sys_locale::get_locale().unwrap_or_else(|| "C".to_string())
}

/// Catalog names to try for a locale string such as `en-US`,
/// `de_DE.UTF-8` or `sr_RS@latin`, most specific first.
pub fn locale_candidates(locale: &str) -> Vec<String> {
    let base = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() || base == "C" || base == "POSIX" {
        return Vec::new();
    }

    let mut parts = base.splitn(2, ['-', '_']);
    let lang = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = parts.next().map(|r| r.to_ascii_uppercase());

    let mut candidates = Vec::with_capacity(2);
    if let Some(region) = region.filter(|r| !r.is_empty()) {
        candidates.push(format!("{lang}_{region}"));
    }
    candidates.push(lang);
    candidates
}
