//! Word sets consulted by the utterance classifier.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Default words treated as passive acknowledgements.
const DEFAULT_BACKCHANNEL_WORDS: &[&str] = &[
    "yeah",
    "ok",
    "okay",
    "hmm",
    "right",
    "uh-huh",
    "aha",
    "mhm",
    "mhmm",
    "gotcha",
    "understood",
    "yep",
    "yup",
    "sure",
    "alright",
    "uh",
];

/// Default words that force the substantive path regardless of anything else
/// in the utterance.
const DEFAULT_COMMAND_WORDS: &[&str] = &[
    "wait", "stop", "no", "hold", "but", "however", "actually", "listen", "hang",
];

static DEFAULT_BACKCHANNEL_SET: Lazy<HashSet<String>> = Lazy::new(|| {
    DEFAULT_BACKCHANNEL_WORDS
        .iter()
        .map(|word| (*word).to_string())
        .collect()
});

static DEFAULT_COMMAND_SET: Lazy<HashSet<String>> = Lazy::new(|| {
    DEFAULT_COMMAND_WORDS
        .iter()
        .map(|word| (*word).to_string())
        .collect()
});

/// Editable word sets used by [`classify`](super::classify).
///
/// Membership is tested against normalized tokens (lowercased, surrounding
/// punctuation stripped), so entries added here should be lowercase; the
/// editing methods below lowercase their input for you.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Lexicon {
    /// Tokens treated as passive acknowledgements ("yeah", "uh-huh", ...).
    pub backchannel_words: HashSet<String>,
    /// Tokens that demand the agent stop talking even when surrounded by
    /// acknowledgements ("wait", "stop", "but", ...).
    pub command_words: HashSet<String>,
}

impl Lexicon {
    /// Create a lexicon with the default English word sets.
    pub fn new() -> Self {
        Self {
            backchannel_words: DEFAULT_BACKCHANNEL_SET.clone(),
            command_words: DEFAULT_COMMAND_SET.clone(),
        }
    }

    /// Create an empty lexicon. Everything classifies as substantive until
    /// words are added.
    pub fn empty() -> Self {
        Self {
            backchannel_words: HashSet::new(),
            command_words: HashSet::new(),
        }
    }

    /// Replace the backchannel set wholesale.
    pub fn with_backchannel_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.backchannel_words = words.into_iter().map(|w| w.into().to_lowercase()).collect();
        self
    }

    /// Replace the command set wholesale.
    pub fn with_command_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command_words = words.into_iter().map(|w| w.into().to_lowercase()).collect();
        self
    }

    /// Add a single word to the backchannel set.
    pub fn add_backchannel_word(&mut self, word: &str) {
        self.backchannel_words.insert(word.to_lowercase());
    }

    /// Remove a word from the backchannel set. Returns whether it was present.
    pub fn remove_backchannel_word(&mut self, word: &str) -> bool {
        self.backchannel_words.remove(&word.to_lowercase())
    }

    /// Add a single word to the command set.
    pub fn add_command_word(&mut self, word: &str) {
        self.command_words.insert(word.to_lowercase());
    }

    /// Remove a word from the command set. Returns whether it was present.
    pub fn remove_command_word(&mut self, word: &str) -> bool {
        self.command_words.remove(&word.to_lowercase())
    }

    /// Whether a normalized token counts as a passive acknowledgement.
    pub fn is_backchannel_word(&self, token: &str) -> bool {
        self.backchannel_words.contains(token)
    }

    /// Whether a normalized token is a command override.
    pub fn is_command_word(&self, token: &str) -> bool {
        self.command_words.contains(token)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
