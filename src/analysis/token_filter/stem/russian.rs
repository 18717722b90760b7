//! Russian stemmer.
//!
//! Operates on Cyrillic text. All suffix removal happens inside RV, the
//! region after the first vowel; derivational endings additionally require R2.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::token_filter::stem::Stemmer;
//! use sarissa_analysis::analysis::token_filter::stem::russian::RussianStemmer;
//!
//! let stemmer = RussianStemmer::new();
//!
//! assert_eq!(stemmer.stem("вагоне"), "вагон");
//! assert_eq!(stemmer.stem("пирожные"), "пирожн");
//! ```

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::snowball::{Word, region_start};

/// Russian stemming algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct RussianStemmer;

impl RussianStemmer {
    /// Create a new Russian stemmer.
    pub fn new() -> Self {
        RussianStemmer
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'а' | 'е' | 'и' | 'о' | 'у' | 'ы' | 'э' | 'ю' | 'я')
}

struct Regions {
    rv: usize,
    p2: usize,
}

fn mark_regions(word: &Word) -> Regions {
    let chars = word.chars();
    let len = chars.len();
    let rv = chars
        .iter()
        .position(|&c| is_vowel(c))
        .map_or(len, |i| i + 1);

    // R1 begins after the first consonant inside RV; R2 follows from it.
    let p1 = (rv..len)
        .find(|&i| !is_vowel(chars[i]))
        .map_or(len, |i| i + 1);
    Regions {
        rv,
        p2: region_start(chars, p1, is_vowel),
    }
}

/// Deletes the longest matching entry of `table` inside RV. Entries of
/// `after_a` must additionally follow `а` or `я`, also inside RV.
fn delete_ending(word: &mut Word, r: &Regions, after_a: &[&'static str], plain: &[&'static str]) -> bool {
    let from_a = word.longest_suffix_within(after_a, r.rv);
    let from_plain = word.longest_suffix_within(plain, r.rv);

    let (suffix, needs_a) = match (from_a, from_plain) {
        (Some(a), Some(p)) if a.chars().count() > p.chars().count() => (a, true),
        (_, Some(p)) => (p, false),
        (Some(a), None) => (a, true),
        (None, None) => return false,
    };

    let start = word.suffix_start(suffix);
    if needs_a {
        let preceded = start >= 1
            && start - 1 >= r.rv
            && matches!(word.char_before(start), Some('а' | 'я'));
        if !preceded {
            return false;
        }
    }
    word.delete_suffix(suffix);
    true
}

fn perfective_gerund(word: &mut Word, r: &Regions) -> bool {
    delete_ending(
        word,
        r,
        &["в", "вши", "вшись"],
        &["ив", "ивши", "ившись", "ыв", "ывши", "ывшись"],
    )
}

const ADJECTIVE: &[&str] = &[
    "ее", "ие", "ые", "ое", "ими", "ыми", "ей", "ий", "ый", "ой", "ем", "им", "ым", "ом", "его",
    "ого", "ему", "ому", "их", "ых", "ую", "юю", "ая", "яя", "ою", "ею",
];

fn adjectival(word: &mut Word, r: &Regions) -> bool {
    if !delete_ending(word, r, &[], ADJECTIVE) {
        return false;
    }
    // Optional participle ending.
    delete_ending(word, r, &["ем", "нн", "вш", "ющ", "щ"], &["ивш", "ывш", "ующ"]);
    true
}

fn reflexive(word: &mut Word, r: &Regions) {
    delete_ending(word, r, &[], &["ся", "сь"]);
}

fn verb(word: &mut Word, r: &Regions) -> bool {
    delete_ending(
        word,
        r,
        &[
            "ла", "на", "ете", "йте", "ли", "й", "л", "ем", "н", "ло", "но", "ет", "ют", "ны", "ть",
            "ешь", "нно",
        ],
        &[
            "ила", "ыла", "ена", "ейте", "уйте", "ите", "или", "ыли", "ей", "уй", "ил", "ыл", "им",
            "ым", "ен", "ило", "ыло", "ено", "ят", "ует", "уют", "ит", "ыт", "ены", "ить", "ыть",
            "ишь", "ую", "ю",
        ],
    )
}

const NOUN: &[&str] = &[
    "а", "ев", "ов", "ие", "ье", "е", "иями", "ями", "ами", "еи", "ии", "и", "ией", "ей", "ой",
    "ий", "й", "иям", "ям", "ием", "ем", "ам", "ом", "о", "у", "ах", "иях", "ях", "ы", "ь", "ию",
    "ью", "ю", "ия", "ья", "я",
];

fn noun(word: &mut Word, r: &Regions) -> bool {
    delete_ending(word, r, &[], NOUN)
}

fn derivational(word: &mut Word, r: &Regions) {
    if let Some(suffix) = word.longest_suffix_within(&["ост", "ость"], r.rv) {
        if word.suffix_start(suffix) >= r.p2 {
            word.delete_suffix(suffix);
        }
    }
}

fn undouble_n(word: &mut Word, r: &Regions) {
    if word.ends_with("нн") && word.len() - 2 >= r.rv {
        word.pop();
    }
}

fn tidy_up(word: &mut Word, r: &Regions) {
    match word.longest_suffix_within(&["ейш", "ейше", "н", "ь"], r.rv) {
        Some(suffix @ ("ейш" | "ейше")) => {
            word.delete_suffix(suffix);
            undouble_n(word, r);
        }
        Some("н") => undouble_n(word, r),
        Some("ь") => word.pop(),
        _ => {}
    }
}

impl Stemmer for RussianStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        w.map_chars(|c| if c == 'ё' { 'е' } else { c });
        let regions = mark_regions(&w);

        if !perfective_gerund(&mut w, &regions) {
            reflexive(&mut w, &regions);
            let _ = adjectival(&mut w, &regions)
                || verb(&mut w, &regions)
                || noun(&mut w, &regions);
        }

        if w.ends_with("и") && w.len() - 1 >= regions.rv {
            w.pop();
        }
        derivational(&mut w, &regions);
        tidy_up(&mut w, &regions);

        w.to_string()
    }

    fn name(&self) -> &'static str {
        "russian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        RussianStemmer::new().stem(word)
    }

    #[test]
    fn test_russian_stemmer() {
        assert_eq!(stem("вагоне"), "вагон");
        assert_eq!(stem("пирожные"), "пирожн");
        assert_eq!(stem("приготовила"), "приготов");
        assert_eq!(stem("книги"), "книг");
    }

    #[test]
    fn test_perfective_gerund() {
        assert_eq!(stem("прочитав"), "прочита");
        assert_eq!(stem("сделавшись"), "сдела");
    }

    #[test]
    fn test_yo_is_folded() {
        assert_eq!(stem("ёлка"), stem("елка"));
    }

    #[test]
    fn test_non_cyrillic_input() {
        assert_eq!(stem("2024"), "2024");
        assert_eq!(stem("hello"), "hello");
        assert_eq!(stem(""), "");
    }
}
