//! Per-conversation state owned by the engine.
//!
//! A session moves through `Start → GreetingEmitted → AwaitingMood →
//! Freeform`. The first two are transient inside
//! `ConversationEngine::initialize`, so only the last two are observable as
//! a [`Phase`]. `Freeform` is terminal.

use crate::turn::{Sender, Turn};
use saathi_core::{Language, MoodLabel, ResponseCategory};
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Greeting shown, mood check-in not yet answered.
    AwaitingMood,
    Freeform,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    id: Uuid,
    current_language: Language,
    recorded_mood: Option<MoodLabel>,
    mood_prompt_pending: bool,
    transcript: Vec<Turn>,
    /// Category of every bot reply after the greeting, in order.
    #[serde(skip)]
    reply_categories: Vec<ResponseCategory>,
}

impl SessionState {
    pub(crate) fn new(language: Language, greeting: Turn) -> Self {
        Self {
            id: Uuid::new_v4(),
            current_language: language,
            recorded_mood: None,
            mood_prompt_pending: true,
            transcript: vec![greeting],
            reply_categories: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_language(&self) -> Language {
        self.current_language
    }

    pub fn recorded_mood(&self) -> Option<MoodLabel> {
        self.recorded_mood
    }

    /// True from session start until the first mood selection; the
    /// presentation layer shows the mood selector exactly while this holds.
    pub fn mood_prompt_pending(&self) -> bool {
        self.mood_prompt_pending
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn phase(&self) -> Phase {
        if self.mood_prompt_pending {
            Phase::AwaitingMood
        } else {
            Phase::Freeform
        }
    }

    /// Category of the most recent bot reply, `None` while only the
    /// greeting has been sent.
    pub fn last_reply_category(&self) -> Option<ResponseCategory> {
        self.reply_categories.last().copied()
    }

    pub fn summary(&self) -> SessionSummary {
        let mut replies_by_category = BTreeMap::new();
        for category in &self.reply_categories {
            *replies_by_category.entry(*category).or_insert(0) += 1;
        }
        let dominant_category = replies_by_category
            .iter()
            .filter(|(category, _)| **category != ResponseCategory::GenericFallback)
            // ties go to the earlier category in declaration order
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(category, _)| *category);
        let user_turns = self
            .transcript
            .iter()
            .filter(|t| t.sender() == Sender::User)
            .count();

        SessionSummary {
            session_id: self.id,
            language: self.current_language,
            mood: self.recorded_mood,
            user_turns,
            bot_turns: self.transcript.len() - user_turns,
            replies_by_category,
            dominant_category,
        }
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        self.current_language = language;
    }

    pub(crate) fn record_mood(&mut self, mood: MoodLabel) {
        self.recorded_mood = Some(mood);
        self.mood_prompt_pending = false;
    }

    pub(crate) fn push_user(&mut self, turn: Turn) {
        self.transcript.push(turn);
    }

    pub(crate) fn push_reply(&mut self, turn: Turn, category: ResponseCategory) {
        self.transcript.push(turn);
        self.reply_categories.push(category);
    }
}

/// Aggregate view of a session, for an end-of-conversation recap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub language: Language,
    pub mood: Option<MoodLabel>,
    pub user_turns: usize,
    /// Includes the greeting.
    pub bot_turns: usize,
    pub replies_by_category: BTreeMap<ResponseCategory, usize>,
    /// Most frequent reply category other than the generic fallback.
    pub dominant_category: Option<ResponseCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> SessionState {
        SessionState::new(Language::English, Turn::bot("hi", "00:00"))
    }

    #[test]
    fn test_new_session_awaits_mood() {
        let s = fresh();
        assert!(s.mood_prompt_pending());
        assert_eq!(s.phase(), Phase::AwaitingMood);
        assert_eq!(s.transcript().len(), 1);
        assert!(s.recorded_mood().is_none());
        assert!(s.last_reply_category().is_none());
    }

    #[test]
    fn test_record_mood_moves_to_freeform() {
        let mut s = fresh();
        s.record_mood(MoodLabel::Calm);
        assert_eq!(s.phase(), Phase::Freeform);
        assert_eq!(s.recorded_mood(), Some(MoodLabel::Calm));
        s.record_mood(MoodLabel::Sad);
        assert_eq!(s.recorded_mood(), Some(MoodLabel::Sad));
        assert!(!s.mood_prompt_pending());
    }

    #[test]
    fn test_summary_counts_and_dominant() {
        let mut s = fresh();
        s.record_mood(MoodLabel::Anxious);
        for category in [
            ResponseCategory::Anxious,
            ResponseCategory::GenericFallback,
            ResponseCategory::GenericFallback,
            ResponseCategory::GenericFallback,
            ResponseCategory::LowMood,
            ResponseCategory::Anxious,
        ] {
            s.push_user(Turn::user("x", "00:00"));
            s.push_reply(Turn::bot("y", "00:00"), category);
        }
        let summary = s.summary();
        assert_eq!(summary.user_turns, 6);
        assert_eq!(summary.bot_turns, 7);
        assert_eq!(summary.replies_by_category[&ResponseCategory::GenericFallback], 3);
        assert_eq!(summary.dominant_category, Some(ResponseCategory::Anxious));
        assert_eq!(summary.mood, Some(MoodLabel::Anxious));
    }

    #[test]
    fn test_summary_tie_prefers_declaration_order() {
        let mut s = fresh();
        s.push_reply(Turn::bot("a", "00:00"), ResponseCategory::Stressed);
        s.push_reply(Turn::bot("b", "00:00"), ResponseCategory::LowMood);
        assert_eq!(s.summary().dominant_category, Some(ResponseCategory::LowMood));
    }

    #[test]
    fn test_summary_only_fallback_has_no_dominant() {
        let mut s = fresh();
        s.push_reply(Turn::bot("a", "00:00"), ResponseCategory::GenericFallback);
        assert_eq!(s.summary().dominant_category, None);
    }
}
