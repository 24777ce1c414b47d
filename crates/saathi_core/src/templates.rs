//! Template Store: the immutable, language-indexed bank of everything the
//! bot can say.
//!
//! Built once at startup (see [`TemplateStore::builtin`]) and shared read-only
//! behind an `Arc`. Completeness over the closed sets is enforced twice:
//! the bundle types carry one field per language/mood/category member, and
//! [`TemplateStore::new`] rejects empty pools or blank strings before the
//! store can be used. After construction every lookup is infallible.

use crate::category::{CategoryTable, ResponseCategory};
use crate::language::Language;
use crate::mood::{MoodLabel, MoodTable, ParseMoodError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Glyph used for a mood that has no entry in the glyph map.
pub const DEFAULT_GLYPH: &str = "🙂";

// ============================================================================
// UI strings
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiKey {
    Greeting,
    MoodPrompt,
    InputPlaceholder,
    TipsHeader,
    LanguageChanged,
    Farewell,
}

impl UiKey {
    pub const ALL: [UiKey; 6] = [
        UiKey::Greeting,
        UiKey::MoodPrompt,
        UiKey::InputPlaceholder,
        UiKey::TipsHeader,
        UiKey::LanguageChanged,
        UiKey::Farewell,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiStrings {
    /// First bot turn of every session.
    pub greeting: String,
    pub mood_prompt: String,
    pub input_placeholder: String,
    pub tips_header: String,
    pub language_changed: String,
    pub farewell: String,
}

impl UiStrings {
    pub fn get(&self, key: UiKey) -> &str {
        match key {
            UiKey::Greeting => &self.greeting,
            UiKey::MoodPrompt => &self.mood_prompt,
            UiKey::InputPlaceholder => &self.input_placeholder,
            UiKey::TipsHeader => &self.tips_header,
            UiKey::LanguageChanged => &self.language_changed,
            UiKey::Farewell => &self.farewell,
        }
    }
}

// ============================================================================
// Bundle
// ============================================================================

/// All strings for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateBundle {
    pub ui: UiStrings,
    /// Mood display labels.
    pub moods: MoodTable<String>,
    /// Reply variants per category. Order matters: the first variant is the
    /// deterministic mood check-in reply.
    pub responses: CategoryTable<Vec<String>>,
    /// Coping suggestions shown on request after a reply of that category.
    pub suggestions: CategoryTable<Vec<String>>,
}

impl TemplateBundle {
    fn validate(&self, language: Language) -> Result<(), TemplateError> {
        for key in UiKey::ALL {
            if is_blank(self.ui.get(key)) {
                return Err(TemplateError::BlankUiString { language, key });
            }
        }
        for (mood, label) in self.moods.iter() {
            if is_blank(label) {
                return Err(TemplateError::BlankMoodLabel { language, mood });
            }
        }
        for (category, pool) in self.responses.iter() {
            if pool.is_empty() {
                return Err(TemplateError::EmptyPool { language, category });
            }
            if let Some(index) = pool.iter().position(|t| is_blank(t)) {
                return Err(TemplateError::BlankResponse {
                    language,
                    category,
                    index,
                });
            }
        }
        for (category, tips) in self.suggestions.iter() {
            if let Some(index) = tips.iter().position(|t| is_blank(t)) {
                return Err(TemplateError::BlankSuggestion {
                    language,
                    category,
                    index,
                });
            }
        }
        Ok(())
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("{language}: response pool for '{category}' is empty")]
    EmptyPool {
        language: Language,
        category: ResponseCategory,
    },
    #[error("{language}: response #{index} for '{category}' is blank")]
    BlankResponse {
        language: Language,
        category: ResponseCategory,
        index: usize,
    },
    #[error("{language}: suggestion #{index} for '{category}' is blank")]
    BlankSuggestion {
        language: Language,
        category: ResponseCategory,
        index: usize,
    },
    #[error("{language}: UI string {key:?} is blank")]
    BlankUiString { language: Language, key: UiKey },
    #[error("{language}: label for mood '{mood}' is blank")]
    BlankMoodLabel { language: Language, mood: MoodLabel },
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Clone)]
pub struct TemplateStore {
    /// Indexed by `Language::index`, built in `Language::ALL` order.
    bundles: Vec<TemplateBundle>,
    glyphs: HashMap<MoodLabel, String>,
}

impl TemplateStore {
    /// Build and validate one bundle per language.
    ///
    /// The glyph map starts out as the built-in set; replace it with
    /// [`TemplateStore::with_glyphs`].
    pub fn new(mut build: impl FnMut(Language) -> TemplateBundle) -> Result<Self, TemplateError> {
        let mut bundles = Vec::with_capacity(Language::ALL.len());
        for language in Language::ALL {
            let bundle = build(language);
            bundle.validate(language)?;
            bundles.push(bundle);
        }
        Ok(Self {
            bundles,
            glyphs: crate::builtin::glyphs(),
        })
    }

    /// The shipped four-language template bank.
    pub fn builtin() -> Result<Self, TemplateError> {
        let store = Self::new(crate::builtin::bundle)?;
        tracing::debug!(
            languages = store.bundles.len(),
            "Built-in template store loaded"
        );
        Ok(store)
    }

    pub fn with_glyphs(mut self, glyphs: HashMap<MoodLabel, String>) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn bundle(&self, language: Language) -> &TemplateBundle {
        &self.bundles[language.index()]
    }

    pub fn ui(&self, language: Language, key: UiKey) -> &str {
        self.bundle(language).ui.get(key)
    }

    pub fn mood_label(&self, language: Language, mood: MoodLabel) -> &str {
        self.bundle(language).moods.get(mood)
    }

    /// Non-empty by construction.
    pub fn responses(&self, language: Language, category: ResponseCategory) -> &[String] {
        self.bundle(language).responses.get(category)
    }

    pub fn suggestions(&self, language: Language, category: ResponseCategory) -> &[String] {
        self.bundle(language).suggestions.get(category)
    }

    /// Language-independent mood glyph, falling back to [`DEFAULT_GLYPH`].
    pub fn glyph(&self, mood: MoodLabel) -> &str {
        match self.glyphs.get(&mood) {
            Some(glyph) => glyph.as_str(),
            None => {
                tracing::warn!(%mood, "No glyph registered for mood, using default");
                DEFAULT_GLYPH
            }
        }
    }

    /// Resolve user input to a mood: the English name, or the display label
    /// in any supported language.
    pub fn parse_mood(&self, input: &str) -> Result<MoodLabel, ParseMoodError> {
        if let Ok(mood) = input.parse::<MoodLabel>() {
            return Ok(mood);
        }
        let needle = input.trim().to_lowercase();
        self.bundles
            .iter()
            .flat_map(|bundle| bundle.moods.iter())
            .find(|(_, label)| label.to_lowercase() == needle)
            .map(|(mood, _)| mood)
            .ok_or_else(|| ParseMoodError(input.to_string()))
    }
}
