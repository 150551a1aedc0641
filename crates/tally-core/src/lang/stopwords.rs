//! Ukrainian stop-word list
//!
//! Function words carry no category meaning and are excluded when the
//! vector space is built. They are never removed from normalized text
//! itself — a representative label may still contain them.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Ukrainian function words excluded from TF-IDF vocabulary
pub const UK_STOP_WORDS: &[&str] = &[
    "та", "і", "в", "на", "у", "з", "до", "це", "що", "як", "за", "він", "вона", "вони", "його",
    "її", "їх", "який", "яка", "яке", "які", "для", "чи", "але", "ми", "ви", "так", "бо", "ж",
    "аби", "також", "не", "щоб", "ще", "ти", "нас", "нам", "ним", "ними", "тому", "усі", "усіх",
    "усе", "свої", "свій", "того", "все", "всі", "цей", "ну", "інший", "будь", "може",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| UK_STOP_WORDS.iter().copied().collect());

/// Whether a token is a Ukrainian function word
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORD_SET.contains(token)
}
