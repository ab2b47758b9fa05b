use mufasa_model::{
    CompletionRequest, DetectedLanguage, Failure, FailureKind, Message,
    SpeakerGender, TranslationMode, TranslationRequest,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::SarvamConfig;

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatCompletionRequest<'a> {
    messages: &'a [Message],
    model: &'a str,
    temperature: f32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
    wiki_grounding: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<&'a [String]>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TranslateRequest<'a> {
    input: &'a str,
    source_language_code: &'a str,
    target_language_code: &'a str,
    speaker_gender: SpeakerGender,
    mode: TranslationMode,
    model: &'a str,
    enable_preprocessing: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DetectLanguageRequest<'a> {
    input: &'a str,
}

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    translated_text: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct DetectLanguageResponse {
    detected_language: Option<String>,
    confidence: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_completion_request<'a>(
    req: &'a CompletionRequest,
    config: &'a SarvamConfig,
) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        messages: &req.messages,
        model: &config.model,
        temperature: req.temperature,
        top_p: req.top_p,
        frequency_penalty: req.frequency_penalty,
        presence_penalty: req.presence_penalty,
        wiki_grounding: config.wiki_grounding,
        max_tokens: req.max_tokens,
        stop: req.stop.as_deref(),
    }
}

#[inline]
pub fn create_translate_request<'a>(
    req: &'a TranslationRequest,
    config: &'a SarvamConfig,
) -> TranslateRequest<'a> {
    TranslateRequest {
        input: &req.text,
        source_language_code: &req.source_language,
        target_language_code: &req.target_language,
        speaker_gender: req.speaker_gender,
        mode: req.mode,
        model: &config.translation_model,
        enable_preprocessing: true,
    }
}

#[inline]
pub fn create_detect_request(text: &str) -> DetectLanguageRequest<'_> {
    DetectLanguageRequest { input: text }
}

/// Extracts the text of the first choice from a successful response body.
pub fn parse_completion(body: &[u8]) -> Result<String, Failure> {
    let value = serde_json::from_slice::<Value>(body).map_err(|_| {
        Failure::new(
            FailureKind::MalformedResponse,
            "Invalid JSON response from API",
        )
    })?;
    let response = serde_json::from_value::<ChatCompletionResponse>(value)
        .map_err(|err| {
            Failure::new(
                FailureKind::Unexpected,
                format!("Unexpected error: {err}"),
            )
        })?;
    let Some(choice) = response.choices.into_iter().next() else {
        return Err(Failure::new(
            FailureKind::MalformedResponse,
            "No response choices found in API response",
        ));
    };
    choice
        .message
        .and_then(|message| message.content)
        .ok_or_else(|| {
            Failure::new(
                FailureKind::Unexpected,
                "Unexpected error: the first choice carries no message content",
            )
        })
}

pub fn parse_translation(body: &[u8]) -> Result<String, Failure> {
    serde_json::from_slice::<TranslateResponse>(body)
        .map(|resp| resp.translated_text)
        .map_err(|err| {
            Failure::new(
                FailureKind::MalformedResponse,
                format!("Translation error: {err}"),
            )
        })
}

pub fn parse_detection(body: &[u8]) -> Result<DetectedLanguage, Failure> {
    serde_json::from_slice::<DetectLanguageResponse>(body)
        .map(|resp| DetectedLanguage {
            language: resp.detected_language,
            confidence: resp.confidence,
        })
        .map_err(|err| {
            Failure::new(
                FailureKind::MalformedResponse,
                format!("Language detection error: {err}"),
            )
        })
}

/// Returns `error.message` of an error body, if the server sent one.
pub fn parse_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()?
        .error?
        .message
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::SarvamConfigBuilder;

    #[test]
    fn test_create_completion_request() {
        let request = CompletionRequest::new(vec![
            Message::system("You are Mufasa."),
            Message::user("Hello"),
        ]);
        let config = SarvamConfigBuilder::with_api_key("xxx")
            .with_model("custom")
            .build();
        let body =
            serde_json::to_value(create_completion_request(&request, &config))
                .unwrap();
        assert_eq!(
            body,
            json!({
                "messages": [
                    { "role": "system", "content": "You are Mufasa." },
                    { "role": "user", "content": "Hello" }
                ],
                "model": "custom",
                "temperature": 0.8_f32,
                "top_p": 0.9_f32,
                "frequency_penalty": 0.0,
                "presence_penalty": 0.0,
                "wiki_grounding": false
            })
        );
    }

    #[test]
    fn test_optional_fields_are_sent_when_set() {
        let request = CompletionRequest::new(vec![Message::user("Hello")])
            .with_max_tokens(128)
            .with_stop(["END"]);
        let config = SarvamConfigBuilder::with_api_key("xxx").build();
        let body =
            serde_json::to_value(create_completion_request(&request, &config))
                .unwrap();
        assert_eq!(body["max_tokens"], json!(128));
        assert_eq!(body["stop"], json!(["END"]));
        assert_eq!(body["model"], json!("sarvam-m"));
    }

    #[test]
    fn test_create_translate_request() {
        let request =
            TranslationRequest::new("Hello").between("en-IN", "bn-IN");
        let config = SarvamConfigBuilder::with_api_key("xxx").build();
        let body =
            serde_json::to_value(create_translate_request(&request, &config))
                .unwrap();
        assert_eq!(
            body,
            json!({
                "input": "Hello",
                "source_language_code": "en-IN",
                "target_language_code": "bn-IN",
                "speaker_gender": "Male",
                "mode": "formal",
                "model": "mayura:v1",
                "enable_preprocessing": true
            })
        );
    }

    #[test]
    fn test_parse_completion() {
        let body = br#"{"choices":[{"message":{"role":"assistant","content":"Roar!"}},{"message":{"content":"ignored"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "Roar!");
    }

    #[test]
    fn test_parse_completion_without_choices() {
        for body in [&br#"{"choices":[]}"#[..], &br#"{"id":"x"}"#[..]] {
            let failure = parse_completion(body).unwrap_err();
            assert_eq!(failure.kind(), FailureKind::MalformedResponse);
            assert_eq!(
                failure.reason(),
                "No response choices found in API response"
            );
        }
    }

    #[test]
    fn test_parse_completion_invalid_json() {
        let failure = parse_completion(b"<html>").unwrap_err();
        assert_eq!(failure.kind(), FailureKind::MalformedResponse);
        assert_eq!(failure.reason(), "Invalid JSON response from API");
    }

    #[test]
    fn test_parse_completion_missing_content() {
        let failure =
            parse_completion(br#"{"choices":[{"index":0}]}"#).unwrap_err();
        assert_eq!(failure.kind(), FailureKind::Unexpected);
        assert!(failure.reason().starts_with("Unexpected error"));
    }

    #[test]
    fn test_parse_translation_and_detection() {
        assert_eq!(
            parse_translation(r#"{"translated_text":"नमस्ते"}"#.as_bytes())
                .unwrap(),
            "नमस्ते"
        );
        assert_eq!(parse_translation(b"{}").unwrap(), "");

        let detected = parse_detection(
            br#"{"detected_language":"ta-IN","confidence":0.93}"#,
        )
        .unwrap();
        assert_eq!(detected.language.as_deref(), Some("ta-IN"));
        assert_eq!(detected.confidence, Some(0.93));
    }

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            parse_error_message(br#"{"error":{"message":"bad model"}}"#),
            Some("bad model".to_owned())
        );
        assert_eq!(parse_error_message(b"oops"), None);
    }
}
