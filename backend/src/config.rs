use std::path::PathBuf;

use thiserror::Error;

use crate::i18n::Locale;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("Unsupported DEFAULT_LOCALE: {0}")]
    UnsupportedLocale(String),
}

/// Runtime settings, read from the process environment after `.env` has been loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory holding the compiled frontend bundle (`trunk build` output).
    pub static_dir: PathBuf,
    /// Directory holding `<locale>.json` message catalogs.
    pub messages_dir: PathBuf,
    pub default_locale: Locale,
    pub frontend_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: PathBuf::from("frontend/dist"),
            messages_dir: PathBuf::from("messages"),
            default_locale: Locale::En,
            frontend_url: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        let default_locale = match lookup("DEFAULT_LOCALE") {
            Some(raw) => Locale::from_code(raw.trim())
                .ok_or_else(|| ConfigError::UnsupportedLocale(raw.clone()))?,
            None => defaults.default_locale,
        };

        Ok(Self {
            port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            messages_dir: lookup("MESSAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.messages_dir),
            default_locale,
            frontend_url: lookup("FRONTEND_URL").filter(|url| !url.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.messages_dir, PathBuf::from("messages"));
        assert!(config.frontend_url.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8081"),
            ("DEFAULT_LOCALE", "vi"),
            ("STATIC_DIR", "/srv/umamibox"),
            ("FRONTEND_URL", "http://localhost:8080"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.default_locale, Locale::Vi);
        assert_eq!(config.static_dir, PathBuf::from("/srv/umamibox"));
        assert_eq!(config.frontend_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn unknown_default_locale_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("DEFAULT_LOCALE", "fr")])).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedLocale(_)));
    }

    #[test]
    fn blank_frontend_url_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("FRONTEND_URL", "  ")])).unwrap();
        assert!(config.frontend_url.is_none());
    }
}
