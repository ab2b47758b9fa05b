use crate::request::{CompletionRequest, TranslationRequest};
use crate::response::{CompletionResult, DetectionResult, TranslationResult};

/// A type that represents a model provider, which is an entry for chat
/// completion, translation and language detection.
///
/// Once the provider is created, it should behave like a stateless object.
/// It can still have internal state, but callers should not rely on it.
///
/// Every call resolves to a value: transport errors, timeouts and bad
/// statuses are reported as [`Failure`](crate::Failure)s, never panics.
/// Implementations must not retry on their own.
pub trait ModelProvider: Send + Sync {
    /// Sends a chat completion request.
    fn complete_chat(
        &self,
        req: &CompletionRequest,
    ) -> impl Future<Output = CompletionResult> + Send + 'static;

    /// Translates a piece of text.
    fn translate(
        &self,
        req: &TranslationRequest,
    ) -> impl Future<Output = TranslationResult> + Send + 'static;

    /// Detects the language of a piece of text.
    fn detect_language(
        &self,
        text: &str,
    ) -> impl Future<Output = DetectionResult> + Send + 'static;
}
