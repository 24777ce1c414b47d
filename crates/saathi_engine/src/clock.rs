//! Timestamp source for turns.

use chrono::format::{Item, StrftimeItems};
use thiserror::Error;

pub trait Clock: Send + Sync {
    fn timestamp(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp format '{0}'")]
pub struct InvalidTimestampFormat(pub String);

/// Local wall-clock time rendered with a chrono format string.
#[derive(Debug, Clone)]
pub struct SystemClock {
    format: String,
}

impl SystemClock {
    /// Rejects format strings chrono cannot render, which would otherwise
    /// panic on every `to_string()`.
    pub fn new(format: impl Into<String>) -> Result<Self, InvalidTimestampFormat> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(InvalidTimestampFormat(format));
        }
        Ok(Self { format })
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            format: "%H:%M".to_string(),
        }
    }
}

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        chrono::Local::now().format(&self.format).to_string()
    }
}

/// Always returns the same timestamp.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_hour_minute() {
        let ts = SystemClock::default().timestamp();
        assert_eq!(ts.len(), 5);
        assert_eq!(ts.as_bytes()[2], b':');
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(SystemClock::new("%Q").is_err());
        assert!(SystemClock::new("%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock("12:34".into()).timestamp(), "12:34");
    }
}
