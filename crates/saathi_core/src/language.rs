//! Supported locales.
//!
//! Every template, label and UI string is indexed by [`Language`]. The set is
//! closed: adding a variant forces every `match` over it (and therefore every
//! bundle in `builtin.rs`) to be extended before the crate compiles again.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
    French,
}

impl Language {
    /// All languages, in the order bundles are stored in the template store.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Spanish,
        Language::French,
    ];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Spanish => "es",
            Language::French => "fr",
        }
    }

    /// Lowercase English name, the canonical config/CLI spelling.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Spanish => "spanish",
            Language::French => "french",
        }
    }

    /// The language's name written in itself, for selector menus.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Spanish => "Español",
            Language::French => "Français",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language '{0}' (expected one of: english, hindi, spanish, french)")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    /// Accepts the English name, the ISO code or the native name, ignoring case
    /// and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| {
                needle == lang.name()
                    || needle == lang.code()
                    || needle == lang.native_name().to_lowercase()
            })
            .ok_or_else(|| ParseLanguageError(s.to_string()))
    }
}
