use std::fmt::Debug;
use std::time::Duration;

/// Builder for [`SarvamConfig`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SarvamConfigBuilder {
    api_key: String,
    model: Option<String>,
    translation_model: Option<String>,
    base_url: Option<String>,
    completion_timeout: Option<Duration>,
    translation_timeout: Option<Duration>,
    detection_timeout: Option<Duration>,
    wiki_grounding: bool,
}

impl SarvamConfigBuilder {
    /// Creates a builder with the given API subscription key.
    #[inline]
    pub fn with_api_key<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            model: None,
            translation_model: None,
            base_url: None,
            completion_timeout: None,
            translation_timeout: None,
            detection_timeout: None,
            wiki_grounding: false,
        }
    }

    /// Sets the chat model to use.
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the translation model to use.
    #[inline]
    pub fn with_translation_model<S: Into<String>>(mut self, model: S) -> Self {
        self.translation_model = Some(model.into());
        self
    }

    /// Sets a custom base URL.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the upper bound of a chat completion call.
    #[inline]
    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = Some(timeout);
        self
    }

    /// Sets the upper bound of a translation call.
    #[inline]
    pub fn with_translation_timeout(mut self, timeout: Duration) -> Self {
        self.translation_timeout = Some(timeout);
        self
    }

    /// Sets the upper bound of a language detection call.
    #[inline]
    pub fn with_detection_timeout(mut self, timeout: Duration) -> Self {
        self.detection_timeout = Some(timeout);
        self
    }

    /// Enables Wikipedia grounding for chat completions.
    #[inline]
    pub fn with_wiki_grounding(mut self, enabled: bool) -> Self {
        self.wiki_grounding = enabled;
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> SarvamConfig {
        SarvamConfig {
            api_key: self.api_key,
            model: self.model.unwrap_or_else(|| "sarvam-m".to_string()),
            translation_model: self
                .translation_model
                .unwrap_or_else(|| "mayura:v1".to_string()),
            base_url: self
                .base_url
                .unwrap_or_else(|| "https://api.sarvam.ai/v1".to_string()),
            completion_timeout: self
                .completion_timeout
                .unwrap_or(Duration::from_secs(30)),
            translation_timeout: self
                .translation_timeout
                .unwrap_or(Duration::from_secs(15)),
            detection_timeout: self
                .detection_timeout
                .unwrap_or(Duration::from_secs(10)),
            wiki_grounding: self.wiki_grounding,
        }
    }
}

impl Debug for SarvamConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SarvamConfigBuilder")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("translation_model", &self.translation_model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Configuration for the Sarvam AI provider.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SarvamConfig {
    pub(crate) api_key: String,
    pub(crate) model: String,
    pub(crate) translation_model: String,
    pub(crate) base_url: String,
    pub(crate) completion_timeout: Duration,
    pub(crate) translation_timeout: Duration,
    pub(crate) detection_timeout: Duration,
    pub(crate) wiki_grounding: bool,
}

impl SarvamConfig {
    /// Returns the chat model.
    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the base URL.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Debug for SarvamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SarvamConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("translation_model", &self.translation_model)
            .field("base_url", &self.base_url)
            .field("completion_timeout", &self.completion_timeout)
            .field("translation_timeout", &self.translation_timeout)
            .field("detection_timeout", &self.detection_timeout)
            .field("wiki_grounding", &self.wiki_grounding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SarvamConfigBuilder::with_api_key("secret").build();
        assert_eq!(config.model(), "sarvam-m");
        assert_eq!(config.translation_model, "mayura:v1");
        assert_eq!(config.base_url(), "https://api.sarvam.ai/v1");
        assert_eq!(config.completion_timeout, Duration::from_secs(30));
        assert_eq!(config.translation_timeout, Duration::from_secs(15));
        assert!(!config.wiki_grounding);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let builder = SarvamConfigBuilder::with_api_key("secret");
        assert!(!format!("{builder:?}").contains("secret"));
        assert!(!format!("{:?}", builder.build()).contains("secret"));
    }
}
