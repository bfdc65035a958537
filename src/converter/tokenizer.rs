// Word splitting shared by the camelCase and dot.case formatters.
// kebab-case works on the raw string instead, see `format::kebab`.

use serde::{Deserialize, Serialize};

/// Where a letter-case change starts a new word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Only between an ASCII lowercase letter and a following uppercase one.
    LowerUpper,
    /// Before every uppercase letter of a fragment that also has lowercase
    /// letters. All-caps fragments are left whole.
    EveryUpper,
}

/// Whether ASCII digits survive word cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitPolicy {
    #[default]
    Strip,
    Keep,
}

pub fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '-' || ch == '_' || ch == '.'
}

/// Split on separator runs and case boundaries. Empty fragments are dropped
/// and the case of each word is preserved.
pub fn split_words(input: &str, boundary: Boundary) -> Vec<&str> {
    let mut words = Vec::new();

    for fragment in input.split(is_separator).filter(|f| !f.is_empty()) {
        split_fragment(fragment, boundary, &mut words);
    }

    words
}

fn split_fragment<'a>(fragment: &'a str, boundary: Boundary, words: &mut Vec<&'a str>) {
    let has_lowercase = fragment.chars().any(|c| c.is_ascii_lowercase());
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (i, ch) in fragment.char_indices() {
        if i > start && ch.is_ascii_uppercase() {
            let breaks = match boundary {
                Boundary::LowerUpper => prev.is_some_and(|p| p.is_ascii_lowercase()),
                Boundary::EveryUpper => has_lowercase,
            };
            if breaks {
                words.push(&fragment[start..i]);
                start = i;
            }
        }
        prev = Some(ch);
    }

    words.push(&fragment[start..]);
}

/// Drop everything except ASCII letters (and digits under `DigitPolicy::Keep`)
pub fn clean_word(word: &str, digits: DigitPolicy) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphabetic() || (digits == DigitPolicy::Keep && c.is_ascii_digit()))
        .collect()
}
