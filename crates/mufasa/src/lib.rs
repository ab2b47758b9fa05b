//! Mufasa, a multilingual chat assistant with a tiger mascot.
//!
//! The crate includes a CLI tool for chatting in the terminal. The pieces the
//! CLI is made of are exposed here so other front ends can reuse them.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod command;
pub mod config;
pub mod mascot;

/// Re-exports of [`mufasa_core`] crate.
pub mod core {
    pub use mufasa_core::*;
}
