//! The response-selection engine.
//!
//! Every operation is synchronous and total: it mutates only the session it
//! is handed and returns the turns it appended. The template store is shared
//! read-only, so one store can back any number of engines and sessions.

use crate::clock::{Clock, SystemClock};
use crate::session::SessionState;
use crate::turn::Turn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use saathi_core::keywords;
use saathi_core::{Language, MoodLabel, ResponseCategory, TemplateStore, UiKey};
use std::sync::Arc;
use uuid::Uuid;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Route self-harm phrases to the crisis pool before regular keyword
    /// matching. Off by default.
    pub crisis_escalation: bool,
}

pub struct ConversationEngine<R = StdRng> {
    store: Arc<TemplateStore>,
    rng: R,
    clock: Box<dyn Clock>,
    options: EngineOptions,
}

impl ConversationEngine<StdRng> {
    /// Engine with an entropy-seeded random source.
    pub fn new(store: Arc<TemplateStore>) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Engine whose free-text variant choices are reproducible.
    pub fn with_seed(store: Arc<TemplateStore>, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ConversationEngine<R> {
    pub fn with_rng(store: Arc<TemplateStore>, rng: R) -> Self {
        Self {
            store,
            rng,
            clock: Box::new(SystemClock::default()),
            options: EngineOptions::default(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Start a session: greeting turn in `language`, mood prompt pending.
    pub fn initialize(&self, language: Language) -> SessionState {
        let greeting = self.store.ui(language, UiKey::Greeting);
        let session = SessionState::new(language, Turn::bot(greeting, self.clock.timestamp()));
        info!(session = %session.id(), %language, "Session started");
        session
    }

    /// Record the check-in mood and answer it.
    ///
    /// Appends the user's mood turn ("{label} {glyph}") and the first variant
    /// of the mood's response pool; no randomness on this path. Calling it
    /// again is allowed and simply overwrites the recorded mood.
    pub fn select_mood<'s>(&self, session: &'s mut SessionState, mood: MoodLabel) -> &'s [Turn] {
        let language = session.current_language();
        if !session.mood_prompt_pending() {
            debug!(session = %session.id(), %mood, "Mood selected again after check-in");
        }
        session.record_mood(mood);

        let start = session.transcript().len();
        let label = self.store.mood_label(language, mood);
        let glyph = self.store.glyph(mood);
        session.push_user(Turn::user(format!("{label} {glyph}"), self.clock.timestamp()));

        let category = mood.response_category();
        // pools are non-empty by construction
        let reply = &self.store.responses(language, category)[0];
        session.push_reply(Turn::bot(reply.as_str(), self.clock.timestamp()), category);

        info!(session = %session.id(), %mood, %category, "Mood recorded");
        &session.transcript()[start..]
    }

    /// Answer a free-text message.
    ///
    /// Whitespace-only input is a no-op returning no turns. Otherwise the raw
    /// text is stored verbatim, the trimmed text is classified, and a random
    /// variant of the matched (or generic fallback) pool in the session's
    /// current language is appended.
    pub fn send_message<'s>(
        &mut self,
        session: &'s mut SessionState,
        raw_text: &str,
    ) -> &'s [Turn] {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            debug!(session = %session.id(), "Dropping blank message");
            return &[];
        }

        let start = session.transcript().len();
        session.push_user(Turn::user(raw_text, self.clock.timestamp()));

        let category = self.categorize(session.id(), trimmed);
        let language = session.current_language();
        let pool = self.store.responses(language, category);
        let variant = self.rng.gen_range(0..pool.len());
        debug!(session = %session.id(), %category, variant, "Reply selected");

        let reply = Turn::bot(pool[variant].as_str(), self.clock.timestamp());
        session.push_reply(reply, category);
        &session.transcript()[start..]
    }

    /// Switch the reply language. Existing turns are not retranslated.
    pub fn set_language(&self, session: &mut SessionState, language: Language) {
        let previous = session.current_language();
        session.set_language(language);
        info!(session = %session.id(), from = %previous, to = %language, "Language changed");
    }

    /// Coping suggestions for the latest reply's category, in the session's
    /// current language. Empty before the first reply.
    pub fn suggestions(&self, session: &SessionState) -> &[String] {
        match session.last_reply_category() {
            Some(category) => self.store.suggestions(session.current_language(), category),
            None => &[],
        }
    }

    fn categorize(&self, session: Uuid, text: &str) -> ResponseCategory {
        if self.options.crisis_escalation && keywords::detect_crisis(text) {
            warn!(%session, "Crisis phrase detected, escalating reply");
            return ResponseCategory::Crisis;
        }
        match keywords::classify_with_keyword(text) {
            Some((category, keyword)) => {
                debug!(%session, %category, keyword, "Keyword matched");
                category
            }
            None => ResponseCategory::GenericFallback,
        }
    }
}
