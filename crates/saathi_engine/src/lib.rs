//! # Saathi conversation engine
//!
//! Sequences a session through greeting, mood check-in and open-ended
//! exchange, and picks each reply from the shared [`saathi_core::TemplateStore`].
//!
//! ```text
//! initialize(lang) ──► [bot greeting]                      AwaitingMood
//! select_mood(mood) ─► [user "{label} {glyph}", bot reply]  Freeform
//! send_message(text) ► [user text, bot reply]               (unchanged)
//! set_language(lang) ► no turns                             (unchanged)
//! ```

pub mod clock;
pub mod engine;
pub mod session;
pub mod turn;

pub use clock::{Clock, FixedClock, InvalidTimestampFormat, SystemClock};
pub use engine::{ConversationEngine, EngineOptions};
pub use session::{Phase, SessionState, SessionSummary};
pub use turn::{Sender, Turn};
