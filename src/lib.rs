//! Translate UI labels stored in per-locale JSON dictionaries.
//!
//! A label is read from the source locale's document, sent to OpenAI or DeepL
//! depending on the target locale, checked for placeholder parity and written
//! back into each target locale's document.

pub mod audit;
pub mod config;
pub mod deepl;
pub mod error;
pub mod i18n;
pub mod openai;
pub mod orchestrator;
pub mod provider;
pub mod router;
pub mod store;

#[cfg(test)]
mod test_utils;
