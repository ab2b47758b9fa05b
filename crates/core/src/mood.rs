//! Mascot mood derived from response text.

use std::fmt::{self, Display, Formatter};

/// The mascot's display state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MascotState {
    /// Waiting for a message.
    #[default]
    Idle,
    /// A request is in flight, or the response raised a question.
    Thinking,
    /// A normal, satisfying response.
    Happy,
    /// A greeting.
    Excited,
    /// The turn failed.
    Sad,
    /// The turn failed in an unexpected way.
    Confused,
    /// The response mentions a success worth celebrating.
    Celebrating,
}

impl MascotState {
    /// All states, in declaration order.
    pub const ALL: [MascotState; 7] = [
        MascotState::Idle,
        MascotState::Thinking,
        MascotState::Happy,
        MascotState::Excited,
        MascotState::Sad,
        MascotState::Confused,
        MascotState::Celebrating,
    ];

    /// Returns the lowercase name of the state.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            MascotState::Idle => "idle",
            MascotState::Thinking => "thinking",
            MascotState::Happy => "happy",
            MascotState::Excited => "excited",
            MascotState::Sad => "sad",
            MascotState::Confused => "confused",
            MascotState::Celebrating => "celebrating",
        }
    }

    /// Returns a sentence describing what the mascot is doing.
    pub fn description(self) -> &'static str {
        match self {
            MascotState::Idle => {
                "Tiger is relaxing and waiting for your message"
            }
            MascotState::Thinking => {
                "Tiger is thinking hard about your question"
            }
            MascotState::Happy => {
                "Tiger is happy and satisfied with the response"
            }
            MascotState::Excited => "Tiger is excited and ready to help",
            MascotState::Sad => "Tiger is sad because something went wrong",
            MascotState::Confused => "Tiger is confused and needs a moment",
            MascotState::Celebrating => {
                "Tiger is celebrating a successful interaction"
            }
        }
    }
}

impl Display for MascotState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const GREETING_WORDS: &[&str] =
    &["hello", "hi", "hey", "greetings", "welcome", "namaste"];

const POSITIVE_WORDS: &[&str] = &[
    "great",
    "excellent",
    "wonderful",
    "amazing",
    "fantastic",
    "good",
    "yes",
    "correct",
];

const QUESTION_INDICATORS: &[&str] =
    &["?", "what", "how", "why", "when", "where", "which"];

const CELEBRATION_WORDS: &[&str] = &[
    "congratulations",
    "success",
    "achievement",
    "won",
    "victory",
    "celebrate",
];

/// Picks the mascot state for a response.
///
/// Rules are checked in order and the first match wins: errors, greetings,
/// positive words, questions, celebrations, then `Happy`. Keywords match as
/// plain substrings of the lowercased text, so "hi" also matches "this".
pub fn classify(response_text: &str, is_error: bool) -> MascotState {
    if is_error {
        return MascotState::Sad;
    }

    let lower = response_text.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if contains_any(GREETING_WORDS) {
        MascotState::Excited
    } else if contains_any(POSITIVE_WORDS) {
        MascotState::Happy
    } else if contains_any(QUESTION_INDICATORS) {
        MascotState::Thinking
    } else if contains_any(CELEBRATION_WORDS) {
        MascotState::Celebrating
    } else {
        MascotState::Happy
    }
}
