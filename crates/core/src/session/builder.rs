use mufasa_model::ModelProvider;

use super::Session;
use crate::language::Language;
use crate::model_client::ModelClient;

/// [`Session`] builder.
pub struct SessionBuilder {
    pub(crate) model_client: ModelClient,
    pub(crate) language: Language,
    pub(crate) auto_translate: bool,
}

impl SessionBuilder {
    /// Creates a new builder with the specified model provider.
    #[inline]
    pub fn with_model_provider<P: ModelProvider + 'static>(
        provider: P,
    ) -> Self {
        Self::with_model_client(ModelClient::new(provider))
    }

    /// Creates a new builder sharing an existing model client.
    #[inline]
    pub fn with_model_client(model_client: ModelClient) -> Self {
        Self {
            model_client,
            language: Language::default(),
            auto_translate: false,
        }
    }

    /// Sets the initial language.
    #[inline]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Enables or disables auto-translation.
    #[inline]
    pub fn with_auto_translate(mut self, enabled: bool) -> Self {
        self.auto_translate = enabled;
        self
    }

    /// Builds the session.
    #[inline]
    pub fn build(self) -> Session {
        Session::from_builder(self)
    }
}
