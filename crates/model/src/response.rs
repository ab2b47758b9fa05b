use serde::{Deserialize, Serialize};

use crate::Failure;

/// The outcome of a completion call: the text of the first choice.
pub type CompletionResult = Result<String, Failure>;

/// The outcome of a translation call: the translated text.
pub type TranslationResult = Result<String, Failure>;

/// The outcome of a language detection call.
pub type DetectionResult = Result<DetectedLanguage, Failure>;

/// A language reported by the provider's detection endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    /// BCP-47-like code of the detected language, if any.
    pub language: Option<String>,
    /// Confidence of the detection, if reported.
    pub confidence: Option<f64>,
}
