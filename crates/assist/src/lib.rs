//! `cotador-assist` — Text-suggestion collaborator.
//!
//! Thin `(text, context) -> text` client over the configured AI provider.
//! The contract is strict: on ANY failure — provider disabled, missing key,
//! network error, bad status, malformed body — the input text comes back
//! unchanged. Quote state is never blocked or corrupted by this service.

pub mod client;
pub mod keys;

pub use client::SuggestionClient;
pub use keys::{get_api_key, KeyLookup, KeySource};
