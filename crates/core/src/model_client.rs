use std::pin::Pin;
use std::sync::Arc;

use mufasa_model::{
    CompletionRequest, CompletionResult, DetectionResult, Failure, Message,
    ModelProvider, TranslationRequest, TranslationResult,
};
use tracing::Instrument;

type BoxedFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

trait ProviderObject: Send + Sync + 'static {
    fn complete_chat(
        &self,
        req: CompletionRequest,
    ) -> BoxedFuture<CompletionResult>;

    fn translate(
        &self,
        req: TranslationRequest,
    ) -> BoxedFuture<TranslationResult>;

    fn detect_language(&self, text: String) -> BoxedFuture<DetectionResult>;
}

struct AnyProvider<P: ModelProvider>(P);

impl<P: ModelProvider + 'static> ProviderObject for AnyProvider<P> {
    fn complete_chat(
        &self,
        req: CompletionRequest,
    ) -> BoxedFuture<CompletionResult> {
        let fut = self.0.complete_chat(&req);
        Box::pin(
            async move {
                trace!("got a request: {:?}", req);
                let result = fut.await;
                if let Err(failure) = &result {
                    error!("got an error: {failure:?}");
                }
                result
            }
            .instrument(trace_span!("completion")),
        )
    }

    fn translate(
        &self,
        req: TranslationRequest,
    ) -> BoxedFuture<TranslationResult> {
        let fut = self.0.translate(&req);
        Box::pin(
            async move {
                trace!(
                    "translating {} chars from {} to {}",
                    req.text.chars().count(),
                    req.source_language,
                    req.target_language
                );
                let result = fut.await;
                if let Err(failure) = &result {
                    warn!("translation failed: {failure:?}");
                }
                result
            }
            .instrument(trace_span!("translation")),
        )
    }

    fn detect_language(&self, text: String) -> BoxedFuture<DetectionResult> {
        let fut = self.0.detect_language(&text);
        Box::pin(
            async move {
                let result = fut.await;
                trace!("detection result: {result:?}");
                result
            }
            .instrument(trace_span!("detection")),
        )
    }
}

/// A wrapper around a model provider that provides a type-erased interface
/// for the other modules.
///
/// Cloning is cheap, all clones share the same provider. The provider is
/// never mutated, so clones can serve independent sessions.
#[derive(Clone)]
pub struct ModelClient {
    provider: Arc<dyn ProviderObject>,
}

impl ModelClient {
    /// Wraps a provider.
    #[inline]
    pub fn new<P: ModelProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `ModelClient` doesn't have a
        // generic parameter and we don't want it either.
        Self {
            provider: Arc::new(AnyProvider(provider)),
        }
    }

    /// Sends a chat completion request.
    #[inline]
    pub async fn complete_chat(
        &self,
        req: CompletionRequest,
    ) -> CompletionResult {
        self.provider.complete_chat(req).await
    }

    /// Translates a piece of text.
    #[inline]
    pub async fn translate(
        &self,
        req: TranslationRequest,
    ) -> TranslationResult {
        self.provider.translate(req).await
    }

    /// Detects the language of a piece of text.
    #[inline]
    pub async fn detect_language<S: Into<String>>(
        &self,
        text: S,
    ) -> DetectionResult {
        self.provider.detect_language(text.into()).await
    }

    /// Checks that the provider accepts requests by sending a tiny greeting.
    ///
    /// Returns a status line for the user either way.
    pub async fn check_connection(&self) -> Result<String, Failure> {
        let req = CompletionRequest::new(vec![Message::user("Hello")])
            .with_temperature(0.1);
        match self.complete_chat(req).await {
            Ok(_) => Ok("API connection successful".to_owned()),
            Err(failure) => {
                let reason =
                    format!("API connection failed: {}", failure.reason());
                Err(failure.with_reason(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mufasa_model::FailureKind;
    use mufasa_test_model::{PresetReply, TestModelProvider};

    use super::*;

    #[tokio::test]
    async fn test_complete_chat() {
        let mut provider = TestModelProvider::default();
        provider.add_completion("How are you?");
        let client = ModelClient::new(provider.clone());

        let text = client
            .complete_chat(CompletionRequest::new(vec![Message::user("Hi")]))
            .await
            .unwrap();
        assert_eq!(text, "How are you?");
        assert_eq!(
            provider.completion_requests()[0].messages,
            vec![Message::user("Hi")]
        );
    }

    #[tokio::test]
    async fn test_clones_share_provider() {
        let mut provider = TestModelProvider::default();
        provider.add_translation("one");
        provider.add_translation("two");
        let client = ModelClient::new(provider.clone());
        let other = client.clone();

        let req = TranslationRequest::new("x");
        assert_eq!(client.translate(req.clone()).await.unwrap(), "one");
        assert_eq!(other.translate(req).await.unwrap(), "two");
        assert_eq!(provider.translation_requests().len(), 2);
    }

    #[tokio::test]
    async fn test_check_connection() {
        let mut provider = TestModelProvider::default();
        provider.add_completion("Hello!");
        provider.add_completion(PresetReply::failure(
            FailureKind::Unauthorized,
            "Invalid API key.",
        ));
        let client = ModelClient::new(provider.clone());

        assert_eq!(
            client.check_connection().await.unwrap(),
            "API connection successful"
        );
        let failure = client.check_connection().await.unwrap_err();
        assert_eq!(failure.kind(), FailureKind::Unauthorized);
        assert_eq!(failure.reason(), "API connection failed: Invalid API key.");

        let req = &provider.completion_requests()[0];
        assert_eq!(req.temperature, 0.1);
        assert_eq!(req.messages, vec![Message::user("Hello")]);
    }
}
