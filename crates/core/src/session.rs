mod builder;
mod turn;

use mufasa_model::Failure;

use crate::conversation::Transcript;
use crate::language::Language;
use crate::model_client::ModelClient;
use crate::mood::MascotState;
pub use builder::SessionBuilder;

/// Where a session is within a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TurnStage {
    /// No turn has been submitted yet.
    #[default]
    Idle,
    /// Waiting for the completion endpoint.
    AwaitingCompletion,
    /// Waiting for the translation endpoint.
    AwaitingTranslation,
    /// The last turn has finished, successfully or not.
    Rendered,
}

/// What a finished turn produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The assistant replied, `text` has been appended to the transcript.
    Rendered {
        /// The text shown to the user.
        text: String,
        /// The new mascot state.
        mood: MascotState,
    },
    /// The completion failed, nothing was appended for the assistant.
    Failed {
        /// Why the completion failed.
        failure: Failure,
        /// The new mascot state.
        mood: MascotState,
    },
}

impl TurnOutcome {
    /// Returns the mascot state this turn ended in.
    #[inline]
    pub fn mood(&self) -> MascotState {
        match self {
            TurnOutcome::Rendered { mood, .. }
            | TurnOutcome::Failed { mood, .. } => *mood,
        }
    }

    /// Returns `true` if the completion failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, TurnOutcome::Failed { .. })
    }
}

/// A chat session with one user.
///
/// The session owns its transcript and mascot state, and shares the model
/// client with any other session built from the same client. Turns run one
/// at a time: [`Session::submit`] takes `&mut self` and only returns after
/// the completion (and the optional translation) has finished.
pub struct Session {
    model_client: ModelClient,
    transcript: Transcript,
    mood: MascotState,
    language: Language,
    auto_translate: bool,
    stage: TurnStage,
}

impl Session {
    fn from_builder(builder: SessionBuilder) -> Self {
        let SessionBuilder {
            model_client,
            language,
            auto_translate,
        } = builder;

        Self {
            model_client,
            transcript: Transcript::default(),
            mood: MascotState::Idle,
            language,
            auto_translate,
            stage: TurnStage::Idle,
        }
    }

    /// Returns the transcript.
    #[inline]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the current mascot state.
    #[inline]
    pub fn mood(&self) -> MascotState {
        self.mood
    }

    /// Returns the stage of the current or last turn.
    #[inline]
    pub fn stage(&self) -> TurnStage {
        self.stage
    }

    /// Returns the active language.
    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches the active language. It takes effect on the next turn.
    #[inline]
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Returns `true` if responses are translated to the active language.
    #[inline]
    pub fn auto_translate(&self) -> bool {
        self.auto_translate
    }

    /// Enables or disables auto-translation.
    #[inline]
    pub fn set_auto_translate(&mut self, enabled: bool) {
        self.auto_translate = enabled;
    }

    /// Returns the model client this session talks to.
    #[inline]
    pub fn model_client(&self) -> &ModelClient {
        &self.model_client
    }

    /// Returns the greeting of the active language.
    #[inline]
    pub fn greeting(&self) -> &'static str {
        self.language.entry().greeting
    }

    /// Returns the input placeholder of the active language.
    #[inline]
    pub fn placeholder(&self) -> &'static str {
        self.language.entry().placeholder
    }

    /// Returns the thinking message of the active language.
    #[inline]
    pub fn thinking_message(&self) -> &'static str {
        self.language.entry().thinking_message
    }

    /// Forgets the conversation and puts the mascot back to idle.
    pub fn clear(&mut self) {
        debug!("clearing {} messages", self.transcript.len());
        self.transcript.clear();
        self.mood = MascotState::Idle;
        self.stage = TurnStage::Idle;
    }
}
