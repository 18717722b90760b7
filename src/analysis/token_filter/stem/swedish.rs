//! Swedish stemmer.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::token_filter::stem::Stemmer;
//! use sarissa_analysis::analysis::token_filter::stem::swedish::SwedishStemmer;
//!
//! let stemmer = SwedishStemmer::new();
//!
//! assert_eq!(stemmer.stem("jemförelser"), "jemför");
//! ```

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::snowball::{Word, scandinavian_r1};

/// Swedish stemming algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwedishStemmer;

impl SwedishStemmer {
    /// Create a new Swedish stemmer.
    pub fn new() -> Self {
        SwedishStemmer
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'ä' | 'å' | 'ö')
}

fn is_s_ending(c: char) -> bool {
    matches!(
        c,
        'b' | 'c' | 'd' | 'f' | 'g' | 'h' | 'j' | 'k' | 'l' | 'm' | 'n' | 'o' | 'p' | 'r' | 't'
            | 'v' | 'y'
    )
}

const MAIN_SUFFIXES: &[&str] = &[
    "a", "arna", "erna", "heterna", "orna", "ad", "e", "ade", "ande", "arne", "are", "aste", "en",
    "anden", "aren", "heten", "ern", "ar", "er", "heter", "or", "as", "arnas", "ernas", "ornas",
    "es", "ades", "andes", "ens", "arens", "hetens", "erns", "at", "andet", "het", "ast", "s",
];

fn main_suffix(word: &mut Word, p1: usize) {
    let Some(suffix) = word.longest_suffix_within(MAIN_SUFFIXES, p1) else {
        return;
    };
    if suffix == "s" && !word.char_before(word.suffix_start(suffix)).is_some_and(is_s_ending) {
        return;
    }
    word.delete_suffix(suffix);
}

fn consonant_pair(word: &mut Word, p1: usize) {
    if word
        .longest_suffix_within(&["dd", "gd", "nn", "dt", "gt", "kt", "tt"], p1)
        .is_some()
    {
        word.pop();
    }
}

fn other_suffix(word: &mut Word, p1: usize) {
    match word.longest_suffix_within(&["lig", "ig", "els", "löst", "fullt"], p1) {
        Some("löst") | Some("fullt") => word.pop(),
        Some(suffix) => word.delete_suffix(suffix),
        None => {}
    }
}

impl Stemmer for SwedishStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        let p1 = scandinavian_r1(w.chars(), is_vowel);

        main_suffix(&mut w, p1);
        consonant_pair(&mut w, p1);
        other_suffix(&mut w, p1);

        w.to_string()
    }

    fn name(&self) -> &'static str {
        "swedish"
    }
}
