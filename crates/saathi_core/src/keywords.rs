//! Keyword-based intent detection for free-text messages.
//!
//! Literal, case-insensitive substring matching against one list per
//! category. Each list is the union of every supported language's keywords,
//! so a Hindi message is classified correctly even while the session replies
//! in English. No tokenization or stemming; stems like "frustr" are
//! deliberate and cover several languages at once.

use crate::category::ResponseCategory;

const LOW_MOOD: &[&str] = &[
    // English
    "sad", "depress", "unhappy", "lonely", "hopeless", "heartbroken", "miserable", "crying",
    // Hindi
    "उदास", "दुखी", "अकेला", "अकेली", "निराश", "रोना",
    // Spanish
    "triste", "deprimid", "desanimad",
    // French
    "déprim", "malheureu", "cafard",
];

const ANXIOUS: &[&str] = &[
    // English
    "anxious", "anxiety", "worried", "worry", "nervous", "panic", "scared", "afraid", "fear",
    // Hindi
    "चिंता", "चिंतित", "घबरा", "डर", "बेचैन",
    // Spanish
    "ansiedad", "ansios", "nervios", "preocupad", "miedo", "pánico",
    // French
    "anxieu", "anxiété", "angoiss", "inquiet", "peur", "panique",
];

const STRESSED: &[&str] = &[
    // English
    "stress", "angry", "anger", "frustr", "overwhelm", "furious", "irritat", "pressure", "annoyed",
    // Hindi
    "तनाव", "गुस्सा", "क्रोध", "चिढ़", "झुंझला",
    // Spanish
    "estrés", "enojad", "agobiad", "agobio", "tensión", "furios", "rabia",
    // French
    "colère", "énervé", "débordé",
];

const CRISIS: &[&str] = &[
    // English
    "suicid", "kill myself", "end it all", "want to die", "better off dead", "hurt myself",
    "self harm", "self-harm",
    // Hindi
    "आत्महत्या", "मरना चाहता", "मरना चाहती", "खुद को मार",
    // Spanish
    "quiero morir", "matarme",
    // French
    "me tuer", "envie de mourir", "en finir",
];

/// Categories checked by [`classify`], highest priority first.
pub const PRIORITY: [ResponseCategory; 3] = [
    ResponseCategory::LowMood,
    ResponseCategory::Anxious,
    ResponseCategory::Stressed,
];

fn keywords(category: ResponseCategory) -> &'static [&'static str] {
    match category {
        ResponseCategory::LowMood => LOW_MOOD,
        ResponseCategory::Anxious => ANXIOUS,
        ResponseCategory::Stressed => STRESSED,
        ResponseCategory::Crisis => CRISIS,
        ResponseCategory::GenericFallback
        | ResponseCategory::PositiveAffect
        | ResponseCategory::CalmAffect
        | ResponseCategory::Acknowledgment => &[],
    }
}

fn first_match(haystack: &str, category: ResponseCategory) -> Option<&'static str> {
    keywords(category)
        .iter()
        .copied()
        .find(|kw| haystack.contains(kw))
}

/// Classify a message and report the keyword that decided it.
///
/// Groups are tried in [`PRIORITY`] order and the first group with any hit
/// wins, regardless of how many keywords later groups would match.
pub fn classify_with_keyword(text: &str) -> Option<(ResponseCategory, &'static str)> {
    let lowered = text.to_lowercase();
    PRIORITY
        .into_iter()
        .find_map(|category| first_match(&lowered, category).map(|kw| (category, kw)))
}

/// `None` means no group matched and the caller should use the generic
/// fallback pool.
pub fn classify(text: &str) -> Option<ResponseCategory> {
    classify_with_keyword(text).map(|(category, _)| category)
}

/// Whether the message contains a self-harm phrase.
pub fn detect_crisis(text: &str) -> bool {
    first_match(&text.to_lowercase(), ResponseCategory::Crisis).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_text() {
        assert_eq!(classify("hello"), None);
        assert_eq!(classify("what a nice day"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_each_group() {
        assert_eq!(classify("I feel so sad"), Some(ResponseCategory::LowMood));
        assert_eq!(
            classify("I am feeling very anxious today"),
            Some(ResponseCategory::Anxious)
        );
        assert_eq!(
            classify("work is so stressful"),
            Some(ResponseCategory::Stressed)
        );
    }

    #[test]
    fn test_priority_low_mood_beats_anxious_and_stressed() {
        assert_eq!(
            classify("I feel sad and anxious"),
            Some(ResponseCategory::LowMood)
        );
        assert_eq!(
            classify("angry, worried and lonely"),
            Some(ResponseCategory::LowMood)
        );
        assert_eq!(
            classify("stressed and nervous"),
            Some(ResponseCategory::Anxious)
        );
    }

    #[test]
    fn test_case_insensitive() {
        for text in ["SAD", "Sad", "sad"] {
            assert_eq!(classify(text), Some(ResponseCategory::LowMood));
        }
        assert_eq!(classify("ANXIÉTÉ"), Some(ResponseCategory::Anxious));
    }

    #[test]
    fn test_substring_not_word_match() {
        // "saddle" contains "sad": literal substring semantics
        assert_eq!(classify("my saddle broke"), Some(ResponseCategory::LowMood));
    }

    #[test]
    fn test_keywords_from_every_language() {
        assert_eq!(classify("मैं बहुत उदास हूँ"), Some(ResponseCategory::LowMood));
        assert_eq!(classify("मुझे डर लग रहा है"), Some(ResponseCategory::Anxious));
        assert_eq!(classify("tengo mucho estrés"), Some(ResponseCategory::Stressed));
        assert_eq!(classify("j'ai peur"), Some(ResponseCategory::Anxious));
    }

    #[test]
    fn test_estresado_hits_low_mood_first() {
        // "estresado" contains "sad", and low mood is checked first
        assert_eq!(
            classify_with_keyword("estoy estresado"),
            Some((ResponseCategory::LowMood, "sad"))
        );
    }

    #[test]
    fn test_no_keyword_is_shadowed_by_higher_priority() {
        for (i, category) in PRIORITY.iter().enumerate() {
            for higher in &PRIORITY[..i] {
                for kw in keywords(*category) {
                    let shadow = keywords(*higher).iter().find(|h| kw.contains(*h));
                    assert!(
                        shadow.is_none(),
                        "{category} keyword '{kw}' can never match: contains {higher} keyword '{}'",
                        shadow.copied().unwrap_or_default()
                    );
                }
            }
        }
    }

    #[test]
    fn test_reports_deciding_keyword() {
        assert_eq!(
            classify_with_keyword("so much pressure"),
            Some((ResponseCategory::Stressed, "pressure"))
        );
    }

    #[test]
    fn test_crisis_detection() {
        assert!(detect_crisis("I want to die"));
        assert!(detect_crisis("thinking about SUICIDE"));
        assert!(detect_crisis("मैं आत्महत्या के बारे में सोच रहा हूँ"));
        assert!(!detect_crisis("I feel sad"));
    }
}
