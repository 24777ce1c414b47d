//! Interactive terminal loop over a [`ConversationEngine`].

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use saathi_core::{Language, MoodLabel, TemplateStore, UiKey};
use saathi_engine::{ConversationEngine, SessionState, Turn};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Lang(String),
    Mood(String),
    Tips,
    Summary,
    Transcript,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// `None` for anything that is not a slash command.
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        Some(match name {
            "lang" | "language" => Command::Lang(arg.to_string()),
            "mood" => Command::Mood(arg.to_string()),
            "tips" => Command::Tips,
            "summary" => Command::Summary,
            "transcript" => Command::Transcript,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        })
    }
}

/// A menu number (1-based, in `MoodLabel::ALL` order) or a mood name in any
/// supported language.
fn parse_mood_choice(store: &TemplateStore, input: &str) -> Option<MoodLabel> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| MoodLabel::ALL.get(i)).copied();
    }
    store.parse_mood(input).ok()
}

pub struct Repl {
    engine: ConversationEngine,
    show_timestamps: bool,
}

impl Repl {
    pub fn new(engine: ConversationEngine) -> Self {
        Self {
            engine,
            show_timestamps: true,
        }
    }

    pub fn with_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    pub fn run(mut self, language: Language) -> Result<()> {
        let mut rl = DefaultEditor::new().context("Failed to initialise line editor")?;
        let history_path = dirs::data_dir().map(|p| p.join("saathi").join("history.txt"));
        if let Some(ref path) = history_path {
            let _ = rl.load_history(path);
        }

        let mut session = self.engine.initialize(language);
        self.print_turns(session.transcript());
        self.print_placeholder(&session);

        loop {
            if session.mood_prompt_pending() {
                self.print_mood_menu(&session);
            }

            match rl.readline("> ") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.as_str());

                    if let Some(command) = Command::parse(&line) {
                        if !self.handle_command(command, &mut session)? {
                            break;
                        }
                        continue;
                    }

                    if session.mood_prompt_pending() {
                        if let Some(mood) = parse_mood_choice(self.engine.store(), &line) {
                            let turns = self.engine.select_mood(&mut session, mood);
                            print_turns(turns, self.show_timestamps);
                            continue;
                        }
                    }

                    let turns = self.engine.send_message(&mut session, &line);
                    // the user's own line is already on screen
                    print_turns(turns.iter().filter(|t| t.is_bot()), self.show_timestamps);
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err).context("Failed to read input"),
            }
        }

        println!("{}", self.ui(&session, UiKey::Farewell));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.save_history(path);
        }
        debug!(session = %session.id(), turns = session.transcript().len(), "Session ended");
        Ok(())
    }

    /// Returns false when the loop should stop.
    fn handle_command(&mut self, command: Command, session: &mut SessionState) -> Result<bool> {
        match command {
            Command::Lang(arg) if arg.is_empty() => {
                println!("Languages:");
                for language in Language::ALL {
                    println!(
                        "  {} ({}) - {}",
                        language.name(),
                        language.code(),
                        language.native_name()
                    );
                }
            }
            Command::Lang(arg) => match arg.parse::<Language>() {
                Ok(language) => {
                    self.engine.set_language(session, language);
                    println!("{}", self.ui(session, UiKey::LanguageChanged));
                }
                Err(e) => println!("{e}"),
            },
            Command::Mood(_) if !session.mood_prompt_pending() => {
                let mood = session.recorded_mood().map(|m| m.to_string()).unwrap_or_default();
                println!("Mood already recorded for this session ({mood}).");
            }
            Command::Mood(arg) => match parse_mood_choice(self.engine.store(), &arg) {
                Some(mood) => {
                    let turns = self.engine.select_mood(session, mood);
                    print_turns(turns, self.show_timestamps);
                }
                None => println!(
                    "Unknown mood '{arg}'. Try a number from 1 to {}.",
                    MoodLabel::ALL.len()
                ),
            },
            Command::Tips => {
                let tips = self.engine.suggestions(session);
                if tips.is_empty() {
                    println!("Tell me a little about how you're doing first.");
                } else {
                    println!("{}", self.ui(session, UiKey::TipsHeader));
                    for tip in tips {
                        println!("  - {tip}");
                    }
                }
            }
            Command::Summary => {
                let summary = session.summary();
                println!("Session {}", summary.session_id);
                println!("  language: {}", summary.language);
                match summary.mood {
                    Some(mood) => println!("  mood: {mood} {}", self.engine.store().glyph(mood)),
                    None => println!("  mood: (not recorded)"),
                }
                println!(
                    "  messages: {} from you, {} from Saathi",
                    summary.user_turns, summary.bot_turns
                );
                for (category, count) in &summary.replies_by_category {
                    println!("  {category}: {count}");
                }
                if let Some(category) = summary.dominant_category {
                    println!("  mostly: {category}");
                }
            }
            Command::Transcript => {
                let json = serde_json::to_string_pretty(session.transcript())
                    .context("Failed to serialize transcript")?;
                println!("{json}");
            }
            Command::Help => print_help(),
            Command::Quit => return Ok(false),
            Command::Unknown(line) => {
                println!("Unknown command: {line}");
                println!("Type /help for available commands");
            }
        }
        Ok(true)
    }

    fn ui<'a>(&'a self, session: &SessionState, key: UiKey) -> &'a str {
        self.engine.store().ui(session.current_language(), key)
    }

    fn print_turns(&self, turns: &[Turn]) {
        print_turns(turns, self.show_timestamps);
    }

    fn print_placeholder(&self, session: &SessionState) {
        println!("({})  /help for commands", self.ui(session, UiKey::InputPlaceholder));
    }

    fn print_mood_menu(&self, session: &SessionState) {
        let store = self.engine.store();
        let language = session.current_language();
        println!("{}", store.ui(language, UiKey::MoodPrompt));
        for (i, mood) in MoodLabel::ALL.into_iter().enumerate() {
            println!("  {}. {} {}", i + 1, store.mood_label(language, mood), store.glyph(mood));
        }
    }
}

fn print_turns<'a>(turns: impl IntoIterator<Item = &'a Turn>, show_timestamps: bool) {
    for turn in turns {
        let who = if turn.is_bot() { "Saathi" } else { "You" };
        if show_timestamps {
            println!("[{}] {who}: {}", turn.timestamp(), turn.text());
        } else {
            println!("{who}: {}", turn.text());
        }
    }
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  /lang <language>  - Reply in another language (no argument lists them)");
    println!("  /mood <mood>      - Check in with a mood (number or name)");
    println!("  /tips             - Coping ideas for the current conversation");
    println!("  /summary          - Recap of this session");
    println!("  /transcript       - Print the conversation as JSON");
    println!("  /help             - Show this help");
    println!("  /quit             - Exit");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/lang hindi"), Some(Command::Lang("hindi".into())));
        assert_eq!(Command::parse("  /lang   es  "), Some(Command::Lang("es".into())));
        assert_eq!(Command::parse("/lang"), Some(Command::Lang(String::new())));
        assert_eq!(Command::parse("/mood 2"), Some(Command::Mood("2".into())));
        assert_eq!(Command::parse("/tips"), Some(Command::Tips));
        assert_eq!(Command::parse("/q"), Some(Command::Quit));
        assert_eq!(Command::parse("/nope"), Some(Command::Unknown("/nope".into())));
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(Command::parse("I feel sad"), None);
        assert_eq!(Command::parse("and/or"), None);
    }

    #[test]
    fn test_mood_choice_by_number_or_name() {
        let store = TemplateStore::builtin().unwrap();
        assert_eq!(parse_mood_choice(&store, "1"), Some(MoodLabel::Happy));
        assert_eq!(parse_mood_choice(&store, " 2 "), Some(MoodLabel::Sad));
        assert_eq!(parse_mood_choice(&store, "6"), Some(MoodLabel::Confused));
        assert_eq!(parse_mood_choice(&store, "0"), None);
        assert_eq!(parse_mood_choice(&store, "7"), None);
        assert_eq!(parse_mood_choice(&store, "calm"), Some(MoodLabel::Calm));
        assert_eq!(parse_mood_choice(&store, "Triste"), Some(MoodLabel::Sad));
        assert_eq!(parse_mood_choice(&store, "उदास"), Some(MoodLabel::Sad));
        assert_eq!(parse_mood_choice(&store, "I feel weird"), None);
    }
}
