use crate::language::Language;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SaathiConfig {
    pub session: SessionConfig,
    pub safety: SafetyConfig,
    pub display: DisplayConfig,
}

impl SaathiConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: SaathiConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if file doesn't exist, return defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({:#}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// `<config dir>/saathi/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("saathi").join("config.toml"))
    }

    /// Apply environment variable overrides on top of file-based config.
    /// Unparseable values are logged and ignored.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SAATHI_LANGUAGE") {
            match v.parse() {
                Ok(lang) => self.session.language = lang,
                Err(e) => tracing::warn!("Ignoring SAATHI_LANGUAGE: {}", e),
            }
        }
        if let Ok(v) = std::env::var("SAATHI_SEED") {
            match v.parse() {
                Ok(n) => self.session.seed = Some(n),
                Err(e) => tracing::warn!("Ignoring SAATHI_SEED '{}': {}", v, e),
            }
        }
        if let Ok(v) = std::env::var("SAATHI_CRISIS_ESCALATION") {
            match v.parse() {
                Ok(b) => self.safety.crisis_escalation = b,
                Err(e) => tracing::warn!("Ignoring SAATHI_CRISIS_ESCALATION '{}': {}", v, e),
            }
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Language of the greeting and of replies until the user switches.
    pub language: Language,
    /// Fixed seed for reply-variant selection; entropy-seeded when absent.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Check self-harm phrases before the regular keyword groups and answer
    /// with an emergency-services referral.
    pub crisis_escalation: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono format string for turn timestamps.
    pub timestamp_format: String,
    pub show_timestamps: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timestamp_format: "%H:%M".to_string(),
            show_timestamps: true,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_default_config() {
        let cfg = SaathiConfig::default();
        assert_eq!(cfg.session.language, Language::English);
        assert!(cfg.session.seed.is_none());
        assert!(!cfg.safety.crisis_escalation);
        assert_eq!(cfg.display.timestamp_format, "%H:%M");
        assert!(cfg.display.show_timestamps);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = r#"
[session]
language = "hindi"
"#;
        let cfg: SaathiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.session.language, Language::Hindi);
        // Defaults for unspecified fields
        assert!(cfg.session.seed.is_none());
        assert_eq!(cfg.display.timestamp_format, "%H:%M");
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[session]
language = "french"
seed = 42

[safety]
crisis_escalation = true

[display]
timestamp_format = "%Y-%m-%d %H:%M:%S"
show_timestamps = false
"#;
        let cfg: SaathiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.session.language, Language::French);
        assert_eq!(cfg.session.seed, Some(42));
        assert!(cfg.safety.crisis_escalation);
        assert_eq!(cfg.display.timestamp_format, "%Y-%m-%d %H:%M:%S");
        assert!(!cfg.display.show_timestamps);
    }

    #[test]
    fn test_unknown_language_is_a_parse_error() {
        let toml_str = r#"
[session]
language = "klingon"
"#;
        assert!(toml::from_str::<SaathiConfig>(toml_str).is_err());
    }

    #[test]
    fn test_env_overrides_and_defaults() {
        // Part 1: env overrides
        std::env::set_var("SAATHI_LANGUAGE", "es");
        std::env::set_var("SAATHI_SEED", "7");
        std::env::set_var("SAATHI_CRISIS_ESCALATION", "true");

        let mut cfg = SaathiConfig::default();
        cfg.apply_env_overrides();

        assert_eq!(cfg.session.language, Language::Spanish);
        assert_eq!(cfg.session.seed, Some(7));
        assert!(cfg.safety.crisis_escalation);

        // Clean up env vars before testing defaults
        std::env::remove_var("SAATHI_LANGUAGE");
        std::env::remove_var("SAATHI_SEED");
        std::env::remove_var("SAATHI_CRISIS_ESCALATION");

        // Part 2: nonexistent path returns defaults (no env interference)
        let cfg = SaathiConfig::load_or_default("/nonexistent/path.toml");
        assert_eq!(cfg.session.language, Language::English);
        assert!(cfg.session.seed.is_none());

        // Part 3: unparseable values are ignored and each one is warned about
        std::env::set_var("SAATHI_LANGUAGE", "klingon");
        std::env::set_var("SAATHI_SEED", "not-a-number");
        std::env::set_var("SAATHI_CRISIS_ESCALATION", "maybe");

        let logs = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer({
                let logs = logs.clone();
                move || LogBuffer(logs.clone())
            })
            .finish();
        let mut cfg = SaathiConfig::default();
        tracing::subscriber::with_default(subscriber, || cfg.apply_env_overrides());

        std::env::remove_var("SAATHI_LANGUAGE");
        std::env::remove_var("SAATHI_SEED");
        std::env::remove_var("SAATHI_CRISIS_ESCALATION");

        assert_eq!(cfg.session.language, Language::English);
        assert!(cfg.session.seed.is_none());
        assert!(!cfg.safety.crisis_escalation);
        let logs = String::from_utf8(logs.lock().unwrap().clone()).unwrap();
        for var in ["SAATHI_LANGUAGE", "SAATHI_SEED", "SAATHI_CRISIS_ESCALATION"] {
            assert!(logs.contains(&format!("Ignoring {var}")), "no warning for {var}: {logs}");
        }
    }

    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[display]
timestamp_format = "%Y-%m-%d %H:%M"
show_timestamps = false
"#
        )
        .unwrap();

        let cfg = SaathiConfig::load(file.path()).unwrap();
        assert_eq!(cfg.display.timestamp_format, "%Y-%m-%d %H:%M");
        assert!(!cfg.display.show_timestamps);
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[session\nlanguage = ").unwrap();
        let err = SaathiConfig::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse TOML config"));
    }
}
