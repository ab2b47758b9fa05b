use mufasa_model::{CompletionRequest, Failure, FailureKind, TranslationRequest};

use super::{Session, TurnOutcome, TurnStage};
use crate::language::{Language, name_of, prompt_template_for};
use crate::mood::{MascotState, classify};

const COMPLETION_TEMPERATURE: f32 = 0.8;

impl Session {
    /// Runs one turn: sends `prompt` along with the whole history, then
    /// translates the reply if auto-translation applies.
    ///
    /// A failed completion leaves the user message in the transcript but
    /// appends nothing for the assistant.
    pub async fn submit<S: Into<String>>(&mut self, prompt: S) -> TurnOutcome {
        let prompt = prompt.into();
        debug!("submitting a prompt of {} chars", prompt.chars().count());

        self.transcript.push_user(prompt);
        self.stage = TurnStage::AwaitingCompletion;

        let system = prompt_template_for(self.language.code());
        self.transcript.install_system(system.content);

        let request =
            CompletionRequest::new(self.transcript.messages().to_vec())
                .with_temperature(COMPLETION_TEMPERATURE);
        let text = match self.model_client.complete_chat(request).await {
            Ok(text) => text,
            Err(failure) => return self.fail(failure),
        };

        let translate =
            self.auto_translate && self.language != Language::English;
        let rendered = if translate {
            self.stage = TurnStage::AwaitingTranslation;
            self.translate_reply(&text).await
        } else {
            text.clone()
        };

        self.transcript.push_assistant(rendered.clone());
        self.mood = classify(&text, false);
        self.stage = TurnStage::Rendered;

        TurnOutcome::Rendered {
            text: rendered,
            mood: self.mood,
        }
    }

    fn fail(&mut self, failure: Failure) -> TurnOutcome {
        self.mood = match failure.kind() {
            FailureKind::Unexpected => MascotState::Confused,
            _ => classify("", true),
        };
        self.stage = TurnStage::Rendered;
        TurnOutcome::Failed {
            failure,
            mood: self.mood,
        }
    }

    async fn translate_reply(&self, text: &str) -> String {
        let target = self.language.code();
        let request = TranslationRequest::new(text)
            .between(Language::English.code(), target);
        match self.model_client.translate(request).await {
            Ok(translated) => {
                format!("{translated}\n\n---\n*Original (English):* {text}")
            }
            Err(_) => format!(
                "{text}\n\n*Note: Could not translate to {}*",
                name_of(target)
            ),
        }
    }
}
