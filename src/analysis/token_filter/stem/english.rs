//! English stemmer (Porter2).
//!
//! Implements the revised Porter algorithm: the prelude marks consonantal
//! `y` as `Y`, R1 and R2 are computed (with the `gener`, `commun` and `arsen`
//! prefix exceptions), and suffixes are then stripped in steps 1a through 5.
//! A small table of irregular words is answered directly.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::token_filter::stem::Stemmer;
//! use sarissa_analysis::analysis::token_filter::stem::english::EnglishStemmer;
//!
//! let stemmer = EnglishStemmer::new();
//!
//! assert_eq!(stemmer.stem("baked"), "bake");
//! assert_eq!(stemmer.stem("generously"), "generous");
//! assert_eq!(stemmer.stem("skies"), "sky");
//! ```

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::snowball::{Word, region_start};

/// English stemming algorithm (Porter2).
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStemmer;

impl EnglishStemmer {
    /// Create a new English stemmer.
    pub fn new() -> Self {
        EnglishStemmer
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn is_valid_li(c: char) -> bool {
    matches!(c, 'c' | 'd' | 'e' | 'g' | 'h' | 'k' | 'm' | 'n' | 'r' | 't')
}

fn irregular(word: &str) -> Option<&'static str> {
    let stem = match word {
        "skis" => "ski",
        "skies" => "sky",
        "dying" => "die",
        "lying" => "lie",
        "tying" => "tie",
        "idly" => "idl",
        "gently" => "gentl",
        "ugly" => "ugli",
        "early" => "earli",
        "only" => "onli",
        "singly" => "singl",
        "sky" => "sky",
        "news" => "news",
        "howe" => "howe",
        "atlas" => "atlas",
        "cosmos" => "cosmos",
        "bias" => "bias",
        "andes" => "andes",
        _ => return None,
    };
    Some(stem)
}

/// Words left untouched once step 1a has run.
fn is_invariant_after_1a(word: &Word) -> bool {
    const WORDS: [&str; 8] = [
        "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
    ];
    WORDS
        .iter()
        .any(|w| word.len() == w.chars().count() && word.ends_with(w))
}

/// Whether `chars[..end]` ends in a short syllable.
fn ends_in_short_syllable(chars: &[char], end: usize) -> bool {
    if end >= 3 {
        let (a, b, c) = (chars[end - 3], chars[end - 2], chars[end - 1]);
        if !is_vowel(a) && is_vowel(b) && !is_vowel(c) && !matches!(c, 'w' | 'x' | 'Y') {
            return true;
        }
    }
    end == 2 && is_vowel(chars[0]) && !is_vowel(chars[1])
}

struct Regions {
    p1: usize,
    p2: usize,
}

fn mark_regions(word: &Word) -> Regions {
    let chars = word.chars();
    let p1 = ["gener", "commun", "arsen"]
        .iter()
        .find(|prefix| word.starts_with(prefix))
        .map(|prefix| prefix.chars().count())
        .unwrap_or_else(|| region_start(chars, 0, is_vowel));
    let p2 = region_start(chars, p1, is_vowel);
    Regions { p1, p2 }
}

/// Returns whether any `y` was marked as consonantal.
fn prelude(word: &mut Word) -> bool {
    if word.char_at(0) == Some('\'') {
        word.remove(0);
    }

    let mut marked = false;
    if word.char_at(0) == Some('y') {
        word.set_char(0, 'Y');
        marked = true;
    }
    for i in 1..word.len() {
        if word.char_at(i) == Some('y') && word.char_at(i - 1).is_some_and(is_vowel) {
            word.set_char(i, 'Y');
            marked = true;
        }
    }
    marked
}

fn step_1a(word: &mut Word) {
    if let Some(suffix) = word.longest_suffix(&["'", "'s", "'s'"]) {
        word.delete_suffix(suffix);
    }

    let Some(suffix) = word.longest_suffix(&["sses", "ied", "ies", "s", "us", "ss"]) else {
        return;
    };
    let start = word.suffix_start(suffix);
    match suffix {
        "sses" => word.replace_suffix(suffix, "ss"),
        "ied" | "ies" => {
            let replacement = if start > 1 { "i" } else { "ie" };
            word.replace_suffix(suffix, replacement);
        }
        "s" => {
            // The letter right before the s does not count.
            if start >= 1 && word.any_in(0, start - 1, is_vowel) {
                word.delete_suffix(suffix);
            }
        }
        _ => {}
    }
}

fn step_1b(word: &mut Word, r: &Regions) {
    let Some(suffix) = word.longest_suffix(&["eed", "eedly", "ed", "edly", "ing", "ingly"]) else {
        return;
    };
    let start = word.suffix_start(suffix);

    match suffix {
        "eed" | "eedly" => {
            if start >= r.p1 {
                word.replace_suffix(suffix, "ee");
            }
        }
        _ => {
            if !word.any_in(0, start, is_vowel) {
                return;
            }
            word.truncate(start);

            if word.longest_suffix(&["at", "bl", "iz"]).is_some() {
                word.push('e');
            } else if word
                .longest_suffix(&["bb", "dd", "ff", "gg", "mm", "nn", "pp", "rr", "tt"])
                .is_some()
            {
                word.pop();
            } else if word.len() == r.p1 && ends_in_short_syllable(word.chars(), word.len()) {
                word.push('e');
            }
        }
    }
}

fn step_1c(word: &mut Word) {
    let len = word.len();
    if len < 3 || !matches!(word.last(), Some('y' | 'Y')) {
        return;
    }
    if word.char_at(len - 2).is_some_and(|c| !is_vowel(c)) {
        word.set_char(len - 1, 'i');
    }
}

const STEP_2: &[&str] = &[
    "tional", "enci", "anci", "abli", "entli", "izer", "ization", "ational", "ation", "ator",
    "alism", "aliti", "alli", "fulness", "ousli", "ousness", "iveness", "iviti", "biliti", "bli",
    "ogi", "fulli", "lessli", "li",
];

fn step_2(word: &mut Word, r: &Regions) {
    let Some(suffix) = word.longest_suffix(STEP_2) else {
        return;
    };
    let start = word.suffix_start(suffix);
    if start < r.p1 {
        return;
    }

    let replacement = match suffix {
        "tional" => "tion",
        "enci" => "ence",
        "anci" => "ance",
        "abli" => "able",
        "entli" => "ent",
        "izer" | "ization" => "ize",
        "ational" | "ation" | "ator" => "ate",
        "alism" | "aliti" | "alli" => "al",
        "fulness" => "ful",
        "ousli" | "ousness" => "ous",
        "iveness" | "iviti" => "ive",
        "biliti" | "bli" => "ble",
        "ogi" => {
            if word.char_before(start) != Some('l') {
                return;
            }
            "og"
        }
        "fulli" => "ful",
        "lessli" => "less",
        "li" => {
            if !word.char_before(start).is_some_and(is_valid_li) {
                return;
            }
            ""
        }
        _ => return,
    };
    word.replace_suffix(suffix, replacement);
}

fn step_3(word: &mut Word, r: &Regions) {
    let Some(suffix) = word.longest_suffix(&[
        "tional", "ational", "alize", "icate", "iciti", "ical", "ful", "ness", "ative",
    ]) else {
        return;
    };
    let start = word.suffix_start(suffix);
    if start < r.p1 {
        return;
    }

    match suffix {
        "tional" => word.replace_suffix(suffix, "tion"),
        "ational" => word.replace_suffix(suffix, "ate"),
        "alize" => word.replace_suffix(suffix, "al"),
        "icate" | "iciti" | "ical" => word.replace_suffix(suffix, "ic"),
        "ful" | "ness" => word.delete_suffix(suffix),
        "ative" => {
            if start >= r.p2 {
                word.delete_suffix(suffix);
            }
        }
        _ => {}
    }
}

fn step_4(word: &mut Word, r: &Regions) {
    let Some(suffix) = word.longest_suffix(&[
        "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ism",
        "ate", "iti", "ous", "ive", "ize", "ion",
    ]) else {
        return;
    };
    let start = word.suffix_start(suffix);
    if start < r.p2 {
        return;
    }
    if suffix == "ion" && !matches!(word.char_before(start), Some('s' | 't')) {
        return;
    }
    word.delete_suffix(suffix);
}

fn step_5(word: &mut Word, r: &Regions) {
    let len = word.len();
    if len == 0 {
        return;
    }
    let start = len - 1;
    match word.last() {
        Some('e') => {
            if start >= r.p2
                || (start >= r.p1 && !ends_in_short_syllable(word.chars(), start))
            {
                word.pop();
            }
        }
        Some('l') => {
            if start >= r.p2 && word.char_before(start) == Some('l') {
                word.pop();
            }
        }
        _ => {}
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        if let Some(stem) = irregular(word) {
            return stem.to_string();
        }
        if word.chars().count() < 3 {
            return word.to_string();
        }

        let mut w = Word::new(word);
        let marked = prelude(&mut w);
        let regions = mark_regions(&w);

        step_1a(&mut w);
        if !is_invariant_after_1a(&w) {
            step_1b(&mut w, &regions);
            step_1c(&mut w);
            step_2(&mut w, &regions);
            step_3(&mut w, &regions);
            step_4(&mut w, &regions);
            step_5(&mut w, &regions);
        }

        if marked {
            w.map_chars(|c| if c == 'Y' { 'y' } else { c });
        }
        w.to_string()
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        EnglishStemmer::new().stem(word)
    }

    #[test]
    fn test_english_stemmer() {
        assert_eq!(stem("baked"), "bake");
        assert_eq!(stem("cakes"), "cake");
        assert_eq!(stem("jumps"), "jump");
        assert_eq!(stem("lazy"), "lazi");
        assert_eq!(stem("awesome"), "awesom");
        assert_eq!(stem("some"), "some");
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("hopping"), "hop");
        assert_eq!(stem("caresses"), "caress");
        assert_eq!(stem("ponies"), "poni");
        assert_eq!(stem("ties"), "tie");
        assert_eq!(stem("cried"), "cri");
    }

    #[test]
    fn test_derivational_suffixes() {
        assert_eq!(stem("generously"), "generous");
        assert_eq!(stem("communication"), "communic");
        assert_eq!(stem("sensational"), "sensat");
        assert_eq!(stem("hopefulness"), "hope");
        assert_eq!(stem("adjustment"), "adjust");
        assert_eq!(stem("controllable"), "control");
    }

    #[test]
    fn test_irregular_and_invariant_words() {
        assert_eq!(stem("skies"), "sky");
        assert_eq!(stem("dying"), "die");
        assert_eq!(stem("news"), "news");
        assert_eq!(stem("proceed"), "proceed");
        assert_eq!(stem("succeeded"), "succeed");
    }

    #[test]
    fn test_consonantal_y() {
        assert_eq!(stem("sayings"), "say");
        assert_eq!(stem("youth"), "youth");
    }

    #[test]
    fn test_short_and_non_alphabetic_input() {
        assert_eq!(stem("at"), "at");
        assert_eq!(stem(""), "");
        assert_eq!(stem("2024"), "2024");
        assert_eq!(stem("it's"), "it");
    }

    #[test]
    fn test_stemmer_name() {
        assert_eq!(EnglishStemmer::new().name(), "english");
    }
}
