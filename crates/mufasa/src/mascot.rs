//! The tiger mascot's emoji, animations and reaction phrases.
//!
//! Every choice here is random. The random source is a parameter, so
//! callers can pass [`rand::thread_rng`] while tests pass a fixed one.

use mufasa_core::mood::MascotState;
use rand::Rng;
use rand::seq::SliceRandom;

/// What the mascot is reacting to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reaction {
    /// A new conversation starts.
    Greeting,
    /// A request is in flight.
    Thinking,
    /// A reply came back.
    Success,
    /// Something went wrong.
    Error,
}

/// The mascot's opening line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Greeting {
    /// Tiger emoji.
    pub emoji: &'static str,
    /// What the tiger says.
    pub message: &'static str,
    /// Always [`MascotState::Excited`].
    pub state: MascotState,
}

const GREETING_MESSAGES: &[&str] = &[
    "Hello! I'm your friendly AI chat tiger! 🐅",
    "Roar! Ready to chat and learn together! 🐯",
    "Greetings! Your tiger companion is here to help! 🦁",
    "*Tiger waves paw* Let's have an amazing conversation! 🐾",
];

/// Returns every emoji the mascot can show in `state`.
pub fn emojis(state: MascotState) -> &'static [&'static str] {
    match state {
        MascotState::Idle => &["🐅", "🐯", "🦁"],
        MascotState::Thinking => &["🐅💭", "🤔🐯", "💭🦁"],
        MascotState::Happy => &["😊🐅", "😄🐯", "🥳🦁", "😸🐅"],
        MascotState::Excited => &["🤩🐅", "⭐🐯", "✨🦁", "🎉🐅"],
        MascotState::Sad => &["😢🐅", "😔🐯", "😿🦁"],
        MascotState::Confused => &["😵🐅", "🤯🐯", "😖🦁", "🙃🐅"],
        MascotState::Celebrating => &["🎉🐅", "🎊🐯", "🏆🦁", "🥳🐅"],
    }
}

/// Returns every animation the mascot can play in `state`.
pub fn animations(state: MascotState) -> &'static [&'static str] {
    match state {
        MascotState::Idle => &["pulse"],
        MascotState::Thinking => &["spin"],
        MascotState::Happy => &["bounce"],
        MascotState::Excited => &["shake", "bounce"],
        MascotState::Sad => &[""],
        MascotState::Confused => &["shake"],
        MascotState::Celebrating => &["bounce", "spin"],
    }
}

/// Returns every phrase the mascot can say for `reaction`.
pub fn phrases(reaction: Reaction) -> &'static [&'static str] {
    match reaction {
        Reaction::Greeting => &[
            "Roar! Hello there! 🐅",
            "Greetings, human friend! 🐯",
            "*Tiger purrs* Welcome! 😸🐅",
        ],
        Reaction::Thinking => &[
            "Let me think about this... 🤔",
            "*Tiger contemplates* Hmm... 💭",
            "Processing your question... ⚡",
        ],
        Reaction::Success => &[
            "Roar! Great response! 🎉",
            "*Happy tiger noises* 😄",
            "Purr-fect answer! 🐾",
        ],
        Reaction::Error => &[
            "*Confused tiger sounds* 😵",
            "Oops! Something went wrong... 😔",
            "*Tiger looks puzzled* 🤔",
        ],
    }
}

#[inline]
fn pick<R: Rng + ?Sized>(items: &[&'static str], rng: &mut R) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Picks an emoji for `state`.
#[inline]
pub fn emoji<R: Rng + ?Sized>(state: MascotState, rng: &mut R) -> &'static str {
    pick(emojis(state), rng)
}

/// Picks an animation for `state`.
#[inline]
pub fn animation<R: Rng + ?Sized>(
    state: MascotState,
    rng: &mut R,
) -> &'static str {
    pick(animations(state), rng)
}

/// Returns spinner frames that play `animation` in a terminal.
pub fn tick_chars(animation: &str) -> &'static str {
    match animation {
        "spin" => "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏",
        "pulse" => "·•●•·",
        "bounce" => "⠁⠂⠄⠂⠁",
        "shake" => "◐◓◑◒◐",
        _ => "🐅🐯",
    }
}

/// Picks a phrase for `reaction`.
#[inline]
pub fn phrase<R: Rng + ?Sized>(
    reaction: Reaction,
    rng: &mut R,
) -> &'static str {
    pick(phrases(reaction), rng)
}

/// Creates the mascot's opening line.
pub fn greeting<R: Rng + ?Sized>(rng: &mut R) -> Greeting {
    let state = MascotState::Excited;
    Greeting {
        emoji: emoji(state, rng),
        message: pick(GREETING_MESSAGES, rng),
        state,
    }
}
