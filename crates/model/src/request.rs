use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The author of a message.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The system instructions.
    System,
    /// A user input.
    User,
    /// A model response.
    Assistant,
}

impl Role {
    /// Returns the wire name of the role.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete, role-tagged message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// The author of this message.
    pub role: Role,
    /// The text of this message.
    pub content: String,
}

impl Message {
    /// Creates a system message.
    #[inline]
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    #[inline]
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    #[inline]
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A chat completion request.
///
/// The remote model is stateless, so `messages` must always carry the whole
/// history, in conversation order.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    /// The input messages.
    pub messages: Vec<Message>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling parameter.
    pub top_p: f32,
    /// Upper bound of generated tokens, provider default if `None`.
    pub max_tokens: Option<u32>,
    /// Stop sequences, none if `None`.
    pub stop: Option<Vec<String>>,
    /// Penalizes repetition.
    pub frequency_penalty: f32,
    /// Encourages new topics.
    pub presence_penalty: f32,
}

impl CompletionRequest {
    /// Creates a request with default sampling parameters.
    #[inline]
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            temperature: 0.8,
            top_p: 0.9,
            max_tokens: None,
            stop: None,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }

    /// Sets the sampling temperature.
    #[inline]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the nucleus sampling parameter.
    #[inline]
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    /// Sets the maximum number of generated tokens.
    #[inline]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets the stop sequences.
    #[inline]
    pub fn with_stop<I, S>(mut self, stop: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop = Some(stop.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the frequency and presence penalties.
    #[inline]
    pub fn with_penalties(mut self, frequency: f32, presence: f32) -> Self {
        self.frequency_penalty = frequency;
        self.presence_penalty = presence;
        self
    }
}

/// The voice the translation should be phrased for.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum SpeakerGender {
    /// Male speaker.
    #[default]
    Male,
    /// Female speaker.
    Female,
}

/// The register of the translated text.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    /// Formal register.
    #[default]
    Formal,
    /// Informal register.
    Informal,
}

/// A translation request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TranslationRequest {
    /// The text to translate.
    pub text: String,
    /// BCP-47-like code of the source language.
    pub source_language: String,
    /// BCP-47-like code of the target language.
    pub target_language: String,
    /// The speaker gender.
    pub speaker_gender: SpeakerGender,
    /// The register.
    pub mode: TranslationMode,
}

impl TranslationRequest {
    /// Creates a request from `en-IN` to `hi-IN` in the formal register.
    #[inline]
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            source_language: "en-IN".to_owned(),
            target_language: "hi-IN".to_owned(),
            speaker_gender: SpeakerGender::default(),
            mode: TranslationMode::default(),
        }
    }

    /// Sets the source and target languages.
    #[inline]
    pub fn between<S: Into<String>, T: Into<String>>(
        mut self,
        source: S,
        target: T,
    ) -> Self {
        self.source_language = source.into();
        self.target_language = target.into();
        self
    }

    /// Sets the speaker gender.
    #[inline]
    pub fn with_speaker_gender(mut self, gender: SpeakerGender) -> Self {
        self.speaker_gender = gender;
        self
    }

    /// Sets the register.
    #[inline]
    pub fn with_mode(mut self, mode: TranslationMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_message_wire_shape() {
        let msg = Message::assistant("Hello");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({ "role": "assistant", "content": "Hello" })
        );
    }

    #[test]
    fn test_translation_defaults() {
        let req = TranslationRequest::new("Good morning");
        assert_eq!(req.source_language, "en-IN");
        assert_eq!(req.target_language, "hi-IN");
        assert_eq!(
            serde_json::to_value(req.speaker_gender).unwrap(),
            json!("Male")
        );
        assert_eq!(serde_json::to_value(req.mode).unwrap(), json!("formal"));
    }
}
