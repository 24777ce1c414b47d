//! Recognized moods for the check-in prompt.

use crate::category::ResponseCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodLabel {
    Happy,
    Sad,
    Anxious,
    Angry,
    Calm,
    Confused,
}

impl MoodLabel {
    /// Menu order of the mood selector.
    pub const ALL: [MoodLabel; 6] = [
        MoodLabel::Happy,
        MoodLabel::Sad,
        MoodLabel::Anxious,
        MoodLabel::Angry,
        MoodLabel::Calm,
        MoodLabel::Confused,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MoodLabel::Happy => "happy",
            MoodLabel::Sad => "sad",
            MoodLabel::Anxious => "anxious",
            MoodLabel::Angry => "angry",
            MoodLabel::Calm => "calm",
            MoodLabel::Confused => "confused",
        }
    }

    /// Mood Response Rule: which pool answers a mood check-in.
    pub fn response_category(self) -> ResponseCategory {
        match self {
            MoodLabel::Sad => ResponseCategory::LowMood,
            MoodLabel::Anxious => ResponseCategory::Anxious,
            MoodLabel::Angry => ResponseCategory::Stressed,
            MoodLabel::Happy => ResponseCategory::PositiveAffect,
            MoodLabel::Calm => ResponseCategory::CalmAffect,
            MoodLabel::Confused => ResponseCategory::Acknowledgment,
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood '{0}'")]
pub struct ParseMoodError(pub String);

impl FromStr for MoodLabel {
    type Err = ParseMoodError;

    /// Parses the English mood name. Localized labels are resolved through
    /// `TemplateStore::parse_mood`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        MoodLabel::ALL
            .into_iter()
            .find(|mood| mood.name() == needle)
            .ok_or_else(|| ParseMoodError(s.to_string()))
    }
}

/// One value per [`MoodLabel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTable<T> {
    pub happy: T,
    pub sad: T,
    pub anxious: T,
    pub angry: T,
    pub calm: T,
    pub confused: T,
}

impl<T> MoodTable<T> {
    pub fn from_fn(mut f: impl FnMut(MoodLabel) -> T) -> Self {
        Self {
            happy: f(MoodLabel::Happy),
            sad: f(MoodLabel::Sad),
            anxious: f(MoodLabel::Anxious),
            angry: f(MoodLabel::Angry),
            calm: f(MoodLabel::Calm),
            confused: f(MoodLabel::Confused),
        }
    }

    pub fn get(&self, mood: MoodLabel) -> &T {
        match mood {
            MoodLabel::Happy => &self.happy,
            MoodLabel::Sad => &self.sad,
            MoodLabel::Anxious => &self.anxious,
            MoodLabel::Angry => &self.angry,
            MoodLabel::Calm => &self.calm,
            MoodLabel::Confused => &self.confused,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoodLabel, &T)> {
        MoodLabel::ALL.into_iter().map(move |mood| (mood, self.get(mood)))
    }
}
