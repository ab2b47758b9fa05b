//! A local fake model for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use mufasa_model::{
    CompletionRequest, CompletionResult, DetectedLanguage, DetectionResult,
    Failure, FailureKind, ModelProvider, TranslationRequest, TranslationResult,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Default)]
struct Script {
    completions: VecDeque<PresetReply>,
    translations: VecDeque<PresetReply>,
    detections: VecDeque<DetectionResult>,
    completion_requests: Vec<CompletionRequest>,
    translation_requests: Vec<TranslationRequest>,
    detection_requests: Vec<String>,
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to setup the script, which is how the
/// model should respond to each kind of call. Replies are consumed in the
/// order they were added. If there are no replies left for a call, a
/// [`FailureKind::Unexpected`] failure is returned.
///
/// Clones share the same script, so a test can keep one clone to inspect
/// the recorded requests after handing the other to a session.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    script: Arc<Mutex<Script>>,
    delay: Option<Duration>,
}

impl TestModelProvider {
    #[inline]
    pub fn add_completion(&mut self, reply: impl Into<PresetReply>) {
        self.lock().completions.push_back(reply.into());
    }

    #[inline]
    pub fn add_translation(&mut self, reply: impl Into<PresetReply>) {
        self.lock().translations.push_back(reply.into());
    }

    #[inline]
    pub fn add_detection(&mut self, result: DetectionResult) {
        self.lock().detections.push_back(result);
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns every completion request received so far.
    pub fn completion_requests(&self) -> Vec<CompletionRequest> {
        self.lock().completion_requests.clone()
    }

    /// Returns every translation request received so far.
    pub fn translation_requests(&self) -> Vec<TranslationRequest> {
        self.lock().translation_requests.clone()
    }

    /// Returns every text sent for language detection so far.
    pub fn detection_requests(&self) -> Vec<String> {
        self.lock().detection_requests.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn reply<T: Send + 'static>(
    delay: Option<Duration>,
    result: Result<T, Failure>,
) -> impl Future<Output = Result<T, Failure>> + Send + 'static {
    async move {
        if let Some(delay) = delay {
            sleep(delay).await;
        }
        result
    }
}

fn exhausted(call: &str) -> Failure {
    Failure::new(
        FailureKind::Unexpected,
        format!("Unexpected error: no scripted {call} reply left"),
    )
}

impl ModelProvider for TestModelProvider {
    fn complete_chat(
        &self,
        req: &CompletionRequest,
    ) -> impl Future<Output = CompletionResult> + Send + 'static {
        let result = {
            let mut script = self.lock();
            script.completion_requests.push(req.clone());
            script
                .completions
                .pop_front()
                .map(PresetReply::into_result)
                .unwrap_or_else(|| Err(exhausted("completion")))
        };
        reply(self.delay, result)
    }

    fn translate(
        &self,
        req: &TranslationRequest,
    ) -> impl Future<Output = TranslationResult> + Send + 'static {
        let result = {
            let mut script = self.lock();
            script.translation_requests.push(req.clone());
            script
                .translations
                .pop_front()
                .map(PresetReply::into_result)
                .unwrap_or_else(|| Err(exhausted("translation")))
        };
        reply(self.delay, result)
    }

    fn detect_language(
        &self,
        text: &str,
    ) -> impl Future<Output = DetectionResult> + Send + 'static {
        let result = {
            let mut script = self.lock();
            script.detection_requests.push(text.to_owned());
            script.detections.pop_front().unwrap_or_else(|| {
                Ok(DetectedLanguage {
                    language: None,
                    confidence: None,
                })
            })
        };
        reply(self.delay, result)
    }
}

#[cfg(test)]
mod tests {
    use mufasa_model::Message;

    use super::*;

    #[tokio::test]
    async fn test_replies_in_order() {
        let mut provider = TestModelProvider::default();
        provider.add_completion("Hello, world!");
        provider.add_completion(PresetReply::failure(
            FailureKind::RateLimited,
            "Rate limit exceeded. Please try again later.",
        ));

        let req = CompletionRequest::new(vec![Message::user("Hi")]);
        assert_eq!(
            provider.complete_chat(&req).await.unwrap(),
            "Hello, world!"
        );
        let failure = provider.complete_chat(&req).await.unwrap_err();
        assert_eq!(failure.kind(), FailureKind::RateLimited);

        let failure = provider.complete_chat(&req).await.unwrap_err();
        assert_eq!(failure.kind(), FailureKind::Unexpected);
        assert_eq!(provider.completion_requests().len(), 3);
    }

    #[tokio::test]
    async fn test_clones_share_script() {
        let mut provider = TestModelProvider::default();
        let observer = provider.clone();
        provider.add_translation("नमस्ते");

        let req = TranslationRequest::new("Hello");
        assert_eq!(observer.translate(&req).await.unwrap(), "नमस्ते");
        assert_eq!(provider.translation_requests(), vec![req]);
    }

    #[tokio::test]
    async fn test_detection_defaults_to_unknown() {
        let provider = TestModelProvider::default();
        let detected = provider.detect_language("hmm").await.unwrap();
        assert_eq!(detected, DetectedLanguage::default());
        assert_eq!(provider.detection_requests(), vec!["hmm".to_owned()]);
    }
}
