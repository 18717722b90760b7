//! Dutch stemmer.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::token_filter::stem::Stemmer;
//! use sarissa_analysis::analysis::token_filter::stem::dutch::DutchStemmer;
//!
//! let stemmer = DutchStemmer::new();
//!
//! assert_eq!(stemmer.stem("banken"), "bank");
//! assert_eq!(stemmer.stem("koeien"), "koei");
//! ```

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::snowball::{Word, region_start, scandinavian_r1};

/// Dutch stemming algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct DutchStemmer;

impl DutchStemmer {
    /// Create a new Dutch stemmer.
    pub fn new() -> Self {
        DutchStemmer
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'è')
}

struct Regions {
    p1: usize,
    p2: usize,
}

fn prelude(word: &mut Word) {
    word.map_chars(|c| match c {
        'ä' | 'á' => 'a',
        'ë' | 'é' => 'e',
        'ï' | 'í' => 'i',
        'ö' | 'ó' => 'o',
        'ü' | 'ú' => 'u',
        other => other,
    });

    if word.char_at(0) == Some('y') {
        word.set_char(0, 'Y');
    }
    for p in 0..word.len() {
        if !word.char_at(p).is_some_and(is_vowel) {
            continue;
        }
        match word.char_at(p + 1) {
            Some('i') if word.char_at(p + 2).is_some_and(is_vowel) => word.set_char(p + 1, 'I'),
            Some('y') => word.set_char(p + 1, 'Y'),
            _ => {}
        }
    }
}

fn mark_regions(word: &Word) -> Regions {
    let chars = word.chars();
    if chars.len() < 3 {
        return Regions {
            p1: chars.len(),
            p2: chars.len(),
        };
    }
    // R2 is measured from the unadjusted R1.
    let raw_p1 = region_start(chars, 0, is_vowel);
    Regions {
        p1: scandinavian_r1(chars, is_vowel),
        p2: region_start(chars, raw_p1, is_vowel),
    }
}

fn undouble(word: &mut Word) {
    if word.longest_suffix(&["kk", "dd", "tt"]).is_some() {
        word.pop();
    }
}

/// Removes `en` starting at `start` when it follows a consonant other than
/// the ending of `gem`.
fn en_ending(word: &mut Word, start: usize, r: &Regions) {
    let consonant_before = word.char_before(start).is_some_and(|c| !is_vowel(c));
    if start >= r.p1 && consonant_before && !word.ends_with_at(start, "gem") {
        word.truncate(start);
        undouble(word);
    }
}

/// Returns whether a final `e` was removed.
fn e_ending(word: &mut Word, r: &Regions) -> bool {
    let len = word.len();
    let removable = word.last() == Some('e')
        && len - 1 >= r.p1
        && word.char_before(len - 1).is_some_and(|c| !is_vowel(c));
    if removable {
        word.pop();
        undouble(word);
    }
    removable
}

fn standard_suffix(word: &mut Word, r: &Regions) {
    match word.longest_suffix(&["heden", "en", "ene", "s", "se"]) {
        Some("heden") => {
            if word.suffix_start("heden") >= r.p1 {
                word.replace_suffix("heden", "heid");
            }
        }
        Some(suffix @ ("en" | "ene")) => {
            let start = word.suffix_start(suffix);
            en_ending(word, start, r);
        }
        Some(suffix @ ("s" | "se")) => {
            let start = word.suffix_start(suffix);
            let valid = word
                .char_before(start)
                .is_some_and(|c| !is_vowel(c) && c != 'j');
            if start >= r.p1 && valid {
                word.truncate(start);
            }
        }
        _ => {}
    }

    let e_found = e_ending(word, r);

    if word.ends_with("heid") {
        let start = word.suffix_start("heid");
        if start >= r.p2 && word.char_before(start) != Some('c') {
            word.truncate(start);
            if word.ends_with("en") {
                let en_start = word.suffix_start("en");
                en_ending(word, en_start, r);
            }
        }
    }

    match word.longest_suffix(&["end", "ing", "ig", "lijk", "baar", "bar"]) {
        Some(suffix @ ("end" | "ing")) if word.suffix_start(suffix) >= r.p2 => {
            word.delete_suffix(suffix);
            let ig_start = word.suffix_start("ig");
            let strip_ig = word.ends_with("ig")
                && ig_start >= r.p2
                && word.char_before(ig_start) != Some('e');
            if strip_ig {
                word.truncate(ig_start);
            } else {
                undouble(word);
            }
        }
        Some("ig") => {
            let start = word.suffix_start("ig");
            if start >= r.p2 && word.char_before(start) != Some('e') {
                word.truncate(start);
            }
        }
        Some("lijk") => {
            if word.suffix_start("lijk") >= r.p2 {
                word.delete_suffix("lijk");
                e_ending(word, r);
            }
        }
        Some("baar") => {
            if word.suffix_start("baar") >= r.p2 {
                word.delete_suffix("baar");
            }
        }
        Some("bar") => {
            if word.suffix_start("bar") >= r.p2 && e_found {
                word.delete_suffix("bar");
            }
        }
        _ => {}
    }

    undouble_vowel(word);
}

/// `C aa D` style endings lose one of the doubled vowels.
fn undouble_vowel(word: &mut Word) {
    let n = word.len();
    if n < 4 {
        return;
    }
    let chars = word.chars();
    let final_consonant = !is_vowel(chars[n - 1]) && chars[n - 1] != 'I';
    let doubled = chars[n - 3] == chars[n - 2] && matches!(chars[n - 2], 'a' | 'e' | 'o' | 'u');
    if final_consonant && doubled && !is_vowel(chars[n - 4]) {
        word.remove(n - 2);
    }
}

impl Stemmer for DutchStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        prelude(&mut w);
        let regions = mark_regions(&w);

        standard_suffix(&mut w, &regions);

        w.map_chars(|c| match c {
            'I' => 'i',
            'Y' => 'y',
            other => other,
        });
        w.to_string()
    }

    fn name(&self) -> &'static str {
        "dutch"
    }
}
