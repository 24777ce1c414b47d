//! Emotional response categories and the per-category lookup table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bucket that decides which template pool a reply is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    LowMood,
    Anxious,
    Stressed,
    GenericFallback,
    PositiveAffect,
    CalmAffect,
    /// Fixed supportive acknowledgment for moods without a dedicated pool.
    Acknowledgment,
    /// Emergency-services referral, only reachable with crisis escalation on.
    Crisis,
}

impl ResponseCategory {
    pub const ALL: [ResponseCategory; 8] = [
        ResponseCategory::LowMood,
        ResponseCategory::Anxious,
        ResponseCategory::Stressed,
        ResponseCategory::GenericFallback,
        ResponseCategory::PositiveAffect,
        ResponseCategory::CalmAffect,
        ResponseCategory::Acknowledgment,
        ResponseCategory::Crisis,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResponseCategory::LowMood => "low_mood",
            ResponseCategory::Anxious => "anxious",
            ResponseCategory::Stressed => "stressed",
            ResponseCategory::GenericFallback => "generic_fallback",
            ResponseCategory::PositiveAffect => "positive_affect",
            ResponseCategory::CalmAffect => "calm_affect",
            ResponseCategory::Acknowledgment => "acknowledgment",
            ResponseCategory::Crisis => "crisis",
        }
    }
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per [`ResponseCategory`].
///
/// A struct rather than a map so a missing category is a compile error, not
/// a runtime lookup miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable<T> {
    pub low_mood: T,
    pub anxious: T,
    pub stressed: T,
    pub generic_fallback: T,
    pub positive_affect: T,
    pub calm_affect: T,
    pub acknowledgment: T,
    pub crisis: T,
}

impl<T> CategoryTable<T> {
    /// Build a table by evaluating `f` once per category.
    pub fn from_fn(mut f: impl FnMut(ResponseCategory) -> T) -> Self {
        Self {
            low_mood: f(ResponseCategory::LowMood),
            anxious: f(ResponseCategory::Anxious),
            stressed: f(ResponseCategory::Stressed),
            generic_fallback: f(ResponseCategory::GenericFallback),
            positive_affect: f(ResponseCategory::PositiveAffect),
            calm_affect: f(ResponseCategory::CalmAffect),
            acknowledgment: f(ResponseCategory::Acknowledgment),
            crisis: f(ResponseCategory::Crisis),
        }
    }

    pub fn get(&self, category: ResponseCategory) -> &T {
        match category {
            ResponseCategory::LowMood => &self.low_mood,
            ResponseCategory::Anxious => &self.anxious,
            ResponseCategory::Stressed => &self.stressed,
            ResponseCategory::GenericFallback => &self.generic_fallback,
            ResponseCategory::PositiveAffect => &self.positive_affect,
            ResponseCategory::CalmAffect => &self.calm_affect,
            ResponseCategory::Acknowledgment => &self.acknowledgment,
            ResponseCategory::Crisis => &self.crisis,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResponseCategory, &T)> {
        ResponseCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_and_get_agree() {
        let table = CategoryTable::from_fn(|c| c.name().len());
        for category in ResponseCategory::ALL {
            assert_eq!(*table.get(category), category.name().len());
        }
    }

    #[test]
    fn test_iter_visits_every_category_once() {
        let table = CategoryTable::from_fn(|c| c);
        let visited: Vec<_> = table.iter().map(|(c, v)| (c, *v)).collect();
        assert_eq!(visited.len(), ResponseCategory::ALL.len());
        assert!(visited.iter().all(|(c, v)| c == v));
    }
}
