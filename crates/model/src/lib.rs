//! The protocol shared by the chat front-end and its model provider.
//!
//! This crate establishes the types the orchestrator uses to talk to the
//! hosted completion and translation service: role-tagged messages,
//! request parameters, and a uniform failure value that every provider
//! call resolves to instead of raising.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to. The production
//! implementor lives in `mufasa-sarvam-model`, and a scripted one for
//! tests lives in `mufasa-test-model`.

#![deny(missing_docs)]

mod error;
mod provider;
mod request;
mod response;

pub use error::*;
pub use provider::*;
pub use request::*;
pub use response::*;
