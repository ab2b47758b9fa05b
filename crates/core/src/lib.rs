//! Core logic of the assistant: the conversation loop, moods, language
//! packs and the type-erased model client.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod conversation;
pub mod language;
mod model_client;
pub mod mood;
mod session;

pub use model_client::ModelClient;
pub use session::{Session, SessionBuilder, TurnOutcome, TurnStage};
