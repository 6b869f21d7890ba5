//! Core domain types for Rotaphrase.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod corpus;
mod unused;

pub use corpus::{Corpus, EmptyCorpusError};
pub use unused::{NoPhrasesAvailableError, UnusedSet};
