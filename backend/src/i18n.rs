use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Top-level keys every catalog must carry for the landing page to render.
pub const REQUIRED_SECTIONS: [&str; 7] = [
    "header", "hero", "campaign", "story", "rewards", "faq", "footer",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Vi,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Vi];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "vi" => Some(Locale::Vi),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Catalog for '{0}' is not a JSON object")]
    NotAnObject(&'static str),
    #[error("Catalog for '{locale}' is missing the '{section}' section")]
    MissingSection {
        locale: &'static str,
        section: &'static str,
    },
}

/// Translation catalogs for every supported locale, loaded once at startup.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    en: Value,
    vi: Value,
    default_locale: Locale,
}

impl CatalogStore {
    pub fn load(dir: &Path, default_locale: Locale) -> Result<Self, CatalogError> {
        Ok(Self {
            en: load_catalog(dir, Locale::En)?,
            vi: load_catalog(dir, Locale::Vi)?,
            default_locale,
        })
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Resolves a locale code from the URL, falling back to the default locale for unknown codes.
    pub fn resolve(&self, code: &str) -> (Locale, &Value) {
        let locale = Locale::from_code(code).unwrap_or(self.default_locale);
        (locale, self.get(locale))
    }

    pub fn get(&self, locale: Locale) -> &Value {
        match locale {
            Locale::En => &self.en,
            Locale::Vi => &self.vi,
        }
    }
}

fn load_catalog(dir: &Path, locale: Locale) -> Result<Value, CatalogError> {
    let path = dir.join(format!("{}.json", locale.code()));
    let raw = std::fs::read_to_string(&path).map_err(|source| CatalogError::Read {
        path: path.clone(),
        source,
    })?;
    let catalog: Value = serde_json::from_str(&raw)
        .map_err(|source| CatalogError::Parse { path: path.clone(), source })?;
    validate(locale, &catalog)?;
    tracing::debug!("Loaded {} catalog from {}", locale.code(), path.display());
    Ok(catalog)
}

fn validate(locale: Locale, catalog: &Value) -> Result<(), CatalogError> {
    let object = catalog
        .as_object()
        .ok_or(CatalogError::NotAnObject(locale.code()))?;
    for section in REQUIRED_SECTIONS {
        if !object.contains_key(section) {
            return Err(CatalogError::MissingSection {
                locale: locale.code(),
                section,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_messages_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../messages")
    }

    #[test]
    fn locale_codes_are_case_insensitive() {
        assert_eq!(Locale::from_code("VI"), Some(Locale::Vi));
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("de"), None);
    }

    #[test]
    fn shipped_catalogs_load() {
        let store = CatalogStore::load(&repo_messages_dir(), Locale::En).unwrap();
        let (locale, catalog) = store.resolve("vi");
        assert_eq!(locale, Locale::Vi);
        assert!(catalog["hero"]["title"].is_string());
    }

    #[test]
    fn unknown_code_resolves_to_default() {
        let store = CatalogStore::load(&repo_messages_dir(), Locale::Vi).unwrap();
        let (locale, _) = store.resolve("ja");
        assert_eq!(locale, Locale::Vi);
    }

    #[test]
    fn missing_section_is_reported() {
        let catalog = serde_json::json!({ "header": {}, "hero": {} });
        let err = validate(Locale::En, &catalog).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingSection { section: "campaign", .. }
        ));
    }

    #[test]
    fn non_object_catalog_is_rejected() {
        let err = validate(Locale::Vi, &serde_json::json!(["hero"])).unwrap_err();
        assert!(matches!(err, CatalogError::NotAnObject("vi")));
    }

    #[test]
    fn missing_directory_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogStore::load(dir.path(), Locale::En).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
