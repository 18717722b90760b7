//! Norwegian (Bokmål) stemmer.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::token_filter::stem::Stemmer;
//! use sarissa_analysis::analysis::token_filter::stem::norwegian::NorwegianStemmer;
//!
//! let stemmer = NorwegianStemmer::new();
//!
//! assert_eq!(stemmer.stem("hjemlet"), "hjeml");
//! ```

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::snowball::{Word, scandinavian_r1};

/// Norwegian stemming algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct NorwegianStemmer;

impl NorwegianStemmer {
    /// Create a new Norwegian stemmer.
    pub fn new() -> Self {
        NorwegianStemmer
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'æ' | 'å' | 'ø')
}

fn is_s_ending(c: char) -> bool {
    matches!(
        c,
        'b' | 'c' | 'd' | 'f' | 'g' | 'h' | 'j' | 'l' | 'm' | 'n' | 'o' | 'p' | 'r' | 't' | 'v'
            | 'y' | 'z'
    )
}

const MAIN_SUFFIXES: &[&str] = &[
    "a", "e", "ede", "ande", "ende", "ane", "ene", "hetene", "en", "heten", "ar", "er", "heter",
    "as", "es", "edes", "endes", "enes", "hetenes", "ens", "hetens", "ers", "ets", "et", "het",
    "ast", "erte", "ert", "s",
];

fn main_suffix(word: &mut Word, p1: usize) {
    let Some(suffix) = word.longest_suffix_within(MAIN_SUFFIXES, p1) else {
        return;
    };
    let start = word.suffix_start(suffix);
    match suffix {
        "erte" | "ert" => word.replace_suffix(suffix, "er"),
        "s" => {
            let before = word.char_before(start);
            let after_k = before == Some('k')
                && start >= 2
                && word.char_at(start - 2).is_some_and(|c| !is_vowel(c));
            if before.is_some_and(is_s_ending) || after_k {
                word.delete_suffix(suffix);
            }
        }
        _ => word.delete_suffix(suffix),
    }
}

fn consonant_pair(word: &mut Word, p1: usize) {
    if word.longest_suffix_within(&["dt", "vt"], p1).is_some() {
        word.pop();
    }
}

fn other_suffix(word: &mut Word, p1: usize) {
    if let Some(suffix) = word.longest_suffix_within(
        &[
            "leg", "eleg", "ig", "eig", "lig", "elig", "els", "lov", "elov", "slov", "hetslov",
        ],
        p1,
    ) {
        word.delete_suffix(suffix);
    }
}

impl Stemmer for NorwegianStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        let p1 = scandinavian_r1(w.chars(), is_vowel);

        main_suffix(&mut w, p1);
        consonant_pair(&mut w, p1);
        other_suffix(&mut w, p1);

        w.to_string()
    }

    fn name(&self) -> &'static str {
        "norwegian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        NorwegianStemmer::new().stem(word)
    }

    #[test]
    fn test_norwegian_stemmer() {
        assert_eq!(stem("hjemlet"), "hjeml");
        assert_eq!(stem("kakene"), "kak");
        assert_eq!(stem("bakte"), "bakt");
        assert_eq!(stem("hjertet"), "hjert");
    }

    #[test]
    fn test_verb_endings() {
        assert_eq!(stem("virkelig"), "virk");
        assert_eq!(stem("kjørte"), "kjørt");
        assert_eq!(stem("opplevert"), "opplever");
    }

    #[test]
    fn test_non_alphabetic_input() {
        assert_eq!(stem("2024"), "2024");
        assert_eq!(stem(""), "");
    }
}
