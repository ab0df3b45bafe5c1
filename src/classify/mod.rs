//! Lexical utterance classification.
//!
//! Decides whether a piece of user speech is a passive acknowledgement
//! ("yeah", "uh-huh") or something that should take the conversational turn
//! ("wait", "so about that invoice"). This is a deliberately simple word-list
//! membership test; the interesting coordination logic around it lives in
//! [`crate::coordinator`].

mod lexicon;

pub use lexicon::Lexicon;

/// Classification outcome for a user utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtteranceClass {
    /// Every token is a known acknowledgement; the agent may keep talking.
    Backchannel,
    /// Commands, substantive speech, or empty text; the agent must yield.
    CommandOrSubstantive,
}

impl UtteranceClass {
    /// True when the utterance was classified as a passive acknowledgement.
    pub fn is_backchannel(self) -> bool {
        matches!(self, UtteranceClass::Backchannel)
    }
}

/// Classify `text` against the word sets in `lexicon`.
///
/// The text is split on whitespace and each token is lowercased with
/// surrounding punctuation stripped; interior apostrophes and hyphens survive,
/// so "uh-huh" stays one token. Command words are an absolute override: a
/// single command token makes the whole utterance substantive no matter what
/// else appears ("yeah but" interrupts). Only a non-empty token list made up
/// entirely of backchannel words classifies as
/// [`UtteranceClass::Backchannel`].
///
/// Empty and whitespace-only text classify as
/// [`UtteranceClass::CommandOrSubstantive`]: absence of content must never
/// silently suppress an interruption check.
///
/// Pure function; calling it twice with the same input yields the same output.
pub fn classify(text: &str, lexicon: &Lexicon) -> UtteranceClass {
    let mut saw_token = false;
    let mut all_backchannel = true;

    for raw in text.split_whitespace() {
        let token = normalize_token(raw);
        if token.is_empty() {
            continue;
        }
        if lexicon.is_command_word(&token) {
            return UtteranceClass::CommandOrSubstantive;
        }
        saw_token = true;
        if !lexicon.is_backchannel_word(&token) {
            all_backchannel = false;
        }
    }

    if saw_token && all_backchannel {
        UtteranceClass::Backchannel
    } else {
        UtteranceClass::CommandOrSubstantive
    }
}

/// Lowercase a raw token and strip non-alphanumeric characters from both
/// ends. "Yeah," becomes "yeah"; "uh-huh?" becomes "uh-huh"; a token that is
/// all punctuation becomes empty and is dropped by the caller.
fn normalize_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}
