//! Settings read from the environment.

use std::env;

use mufasa_core::language::Language;
use mufasa_sarvam_model::{SarvamConfig, SarvamConfigBuilder};

/// The API key used when `SARVAM_API_KEY` is not set. Requests made with it
/// are expected to fail with `401`.
pub const DEFAULT_API_KEY: &str = "default_api_key";

const API_KEY_VAR: &str = "SARVAM_API_KEY";
const BASE_URL_VAR: &str = "SARVAM_BASE_URL";
const MODEL_VAR: &str = "SARVAM_MODEL";
const LANGUAGE_VAR: &str = "MUFASA_LANGUAGE";
const AUTO_TRANSLATE_VAR: &str = "MUFASA_AUTO_TRANSLATE";

/// Everything the CLI needs to start a session.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    api_key: String,
    base_url: Option<String>,
    model: Option<String>,
    language: Language,
    auto_translate: bool,
}

impl Settings {
    /// Loads `.env` from the working directory if there is one, then reads
    /// the process environment.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!("loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => warn!("failed to load .env: {err}"),
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the settings from an arbitrary variable lookup.
    ///
    /// Malformed values are ignored with a warning, so this never fails.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let api_key =
            get(API_KEY_VAR).unwrap_or_else(|| DEFAULT_API_KEY.to_owned());

        let base_url = get(BASE_URL_VAR).filter(|url| {
            let valid =
                url.starts_with("http://") || url.starts_with("https://");
            if !valid {
                warn!("ignoring {BASE_URL_VAR}, not an http(s) URL: {url}");
            }
            valid
        });

        let language = match get(LANGUAGE_VAR) {
            Some(code) => code.parse().unwrap_or_else(|err| {
                warn!("ignoring {LANGUAGE_VAR}: {err}");
                Language::default()
            }),
            None => Language::default(),
        };

        let auto_translate = get(AUTO_TRANSLATE_VAR)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            api_key,
            base_url,
            model: get(MODEL_VAR),
            language,
            auto_translate,
        }
    }

    /// Returns `false` if the API key is still the placeholder.
    #[inline]
    pub fn is_configured(&self) -> bool {
        self.api_key != DEFAULT_API_KEY
    }

    /// Returns the base URL override, if any.
    #[inline]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Returns the model override, if any.
    #[inline]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Returns the initial language.
    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns whether auto-translation starts enabled.
    #[inline]
    pub fn auto_translate(&self) -> bool {
        self.auto_translate
    }

    /// Builds the provider configuration.
    pub fn sarvam_config(&self) -> SarvamConfig {
        let mut builder = SarvamConfigBuilder::with_api_key(&self.api_key);
        if let Some(base_url) = &self.base_url {
            builder = builder.with_base_url(base_url);
        }
        if let Some(model) = &self.model {
            builder = builder.with_model(model);
        }
        builder.build()
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("configured", &self.is_configured())
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("language", &self.language)
            .field("auto_translate", &self.auto_translate)
            .finish()
    }
}

/// Parses `1`, `true`, `yes` and `on` (any case) as enabled.
pub fn parse_flag(value: &str) -> bool {
    ["1", "true", "yes", "on"]
        .iter()
        .any(|v| value.trim().eq_ignore_ascii_case(v))
}
