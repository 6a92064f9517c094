//! User-facing strings per language.

use serde::{Deserialize, Serialize};

/// Display language.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Locale {
    /// English.
    #[default]
    #[strum(to_string = "en", serialize = "english")]
    En,
    /// Turkish.
    #[strum(to_string = "tr", serialize = "turkish")]
    Tr,
}

/// Fixed strings shown by the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    /// Window title.
    pub title: &'static str,
    /// Label for a right swipe under direction-style feedback.
    pub true_label: &'static str,
    /// Label for a left swipe under direction-style feedback.
    pub false_label: &'static str,
    /// Label for a correct answer under correctness-style feedback.
    pub correct: &'static str,
    /// Label for a wrong answer under correctness-style feedback.
    pub incorrect: &'static str,
    /// Prefix for hint lines.
    pub hint_prefix: &'static str,
    /// Hint shown when a card carries none.
    pub fallback_hint: &'static str,
    /// Answer badge for a true card, shown once the card is answered.
    pub true_badge: &'static str,
    /// Answer badge for a false card, shown once the card is answered.
    pub false_badge: &'static str,
    /// Rule tag for cards without one.
    pub default_rule: &'static str,
    /// Prefix for worked examples.
    pub example_prefix: &'static str,
    /// Score counter label.
    pub score: &'static str,
    /// Card counter label.
    pub card: &'static str,
    /// Reject button caption.
    pub reject_button: &'static str,
    /// Affirm button caption.
    pub affirm_button: &'static str,
    /// Summary panel title.
    pub summary_title: &'static str,
    /// Final score label.
    pub final_score: &'static str,
    /// Accuracy label.
    pub accuracy: &'static str,
    /// Streak badge label, followed by the best streak.
    pub best_streak: &'static str,
    /// Replay instructions.
    pub replay: &'static str,
    /// Drag instructions.
    pub help: &'static str,
}

const ENGLISH: Strings = Strings {
    title: "Swipe Quiz",
    true_label: "True ✅",
    false_label: "False ❌",
    correct: "Correct ✅",
    incorrect: "Wrong ❌",
    hint_prefix: "Hint:",
    fallback_hint: "Review the rules.",
    true_badge: "TRUE",
    false_badge: "FALSE",
    default_rule: "General",
    example_prefix: "e.g.",
    score: "Score",
    card: "Card",
    reject_button: "◀ False",
    affirm_button: "True ▶",
    summary_title: "Session complete",
    final_score: "Final score",
    accuracy: "Accuracy",
    best_streak: "🔥 Best streak:",
    replay: "r: Play again | q: Quit",
    help: "Drag the card ←/→ or use ←/→ keys | q: Quit",
};

const TURKISH: Strings = Strings {
    title: "Kaydır Testi",
    true_label: "Doğru ✅",
    false_label: "Yanlış ❌",
    correct: "Doğru cevap ✅",
    incorrect: "Yanlış cevap ❌",
    hint_prefix: "İpucu:",
    fallback_hint: "Kuralları tekrar gözden geçir.",
    true_badge: "DOĞRU",
    false_badge: "YANLIŞ",
    default_rule: "Genel",
    example_prefix: "örn.",
    score: "Puan",
    card: "Kart",
    reject_button: "◀ Yanlış",
    affirm_button: "Doğru ▶",
    summary_title: "Oturum bitti",
    final_score: "Son puan",
    accuracy: "Doğruluk",
    best_streak: "🔥 En iyi seri:",
    replay: "r: Tekrar oyna | q: Çık",
    help: "Kartı ←/→ sürükle ya da ←/→ tuşlarını kullan | q: Çık",
};

impl Locale {
    /// Returns the string table for this locale.
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::En => &ENGLISH,
            Self::Tr => &TURKISH,
        }
    }
}
