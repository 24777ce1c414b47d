//! # Saathi core
//!
//! Everything the conversation engine reads but never mutates: the closed
//! sets of languages, moods and response categories, the multilingual
//! [`TemplateStore`], the keyword classifier and the TOML configuration.

mod builtin;
pub mod category;
pub mod config;
pub mod keywords;
pub mod language;
pub mod mood;
pub mod templates;

pub use category::{CategoryTable, ResponseCategory};
pub use config::SaathiConfig;
pub use language::{Language, ParseLanguageError};
pub use mood::{MoodLabel, MoodTable, ParseMoodError};
pub use templates::{TemplateBundle, TemplateError, TemplateStore, UiKey, UiStrings, DEFAULT_GLYPH};
