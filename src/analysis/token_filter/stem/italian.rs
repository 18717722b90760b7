//! Italian stemmer.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::token_filter::stem::Stemmer;
//! use sarissa_analysis::analysis::token_filter::stem::italian::ItalianStemmer;
//!
//! let stemmer = ItalianStemmer::new();
//!
//! assert_eq!(stemmer.stem("indicatore"), "indic");
//! assert_eq!(stemmer.stem("torte"), "tort");
//! ```

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::snowball::{Word, region_start, romance_rv};

/// Italian stemming algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItalianStemmer;

impl ItalianStemmer {
    /// Create a new Italian stemmer.
    pub fn new() -> Self {
        ItalianStemmer
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'à' | 'è' | 'ì' | 'ò' | 'ù')
}

struct Regions {
    rv: usize,
    p1: usize,
    p2: usize,
}

/// Normalises acute accents to grave, marks `qu`, and marks `u` and `i`
/// between vowels as consonants.
fn prelude(word: &mut Word) {
    word.map_chars(|c| match c {
        'á' => 'à',
        'é' => 'è',
        'í' => 'ì',
        'ó' => 'ò',
        'ú' => 'ù',
        other => other,
    });

    let mut p = 0;
    while p + 1 < word.len() {
        if word.char_at(p) == Some('q') && word.char_at(p + 1) == Some('u') {
            word.set_char(p + 1, 'U');
            p += 2;
        } else {
            p += 1;
        }
    }

    for p in 0..word.len() {
        if !word.char_at(p).is_some_and(is_vowel) || !word.char_at(p + 2).is_some_and(is_vowel) {
            continue;
        }
        match word.char_at(p + 1) {
            Some('u') => word.set_char(p + 1, 'U'),
            Some('i') => word.set_char(p + 1, 'I'),
            _ => {}
        }
    }
}

fn mark_regions(word: &Word) -> Regions {
    let chars = word.chars();
    let p1 = region_start(chars, 0, is_vowel);
    Regions {
        rv: romance_rv(chars, is_vowel),
        p1,
        p2: region_start(chars, p1, is_vowel),
    }
}

fn delete_in_r2(word: &mut Word, suffix: &str, r: &Regions) -> bool {
    if word.ends_with(suffix) && word.suffix_start(suffix) >= r.p2 {
        word.delete_suffix(suffix);
        true
    } else {
        false
    }
}

const PRONOUNS: &[&str] = &[
    "ci", "gli", "la", "le", "li", "lo", "mi", "ne", "si", "ti", "vi", "sene", "gliela",
    "gliele", "glieli", "glielo", "gliene", "mela", "mele", "meli", "melo", "mene", "tela",
    "tele", "teli", "telo", "tene", "cela", "cele", "celi", "celo", "cene", "vela", "vele",
    "veli", "velo", "vene",
];

fn attached_pronoun(word: &mut Word, r: &Regions) {
    let Some(pronoun) = word.longest_suffix(PRONOUNS) else {
        return;
    };
    let pronoun_start = word.suffix_start(pronoun);
    match word.longest_suffix_at(pronoun_start, &["ando", "endo", "ar", "er", "ir"], r.rv) {
        Some("ando" | "endo") => word.truncate(pronoun_start),
        Some(_) => word.replace_from(pronoun_start, "e"),
        None => {}
    }
}

const STANDARD_SUFFIXES: &[&str] = &[
    "anza", "anze", "ico", "ici", "ica", "ice", "iche", "ichi", "ismo", "ismi", "abile",
    "abili", "ibile", "ibili", "ista", "iste", "isti", "istà", "istè", "istì", "oso", "osi",
    "osa", "ose", "mente", "atrice", "atrici", "ante", "anti", "azione", "azioni", "atore",
    "atori", "logia", "logie", "uzione", "uzioni", "usione", "usioni", "enza", "enze", "amento",
    "amenti", "imento", "imenti", "amente", "ità", "ivo", "ivi", "iva", "ive",
];

fn standard_suffix(word: &mut Word, r: &Regions) -> bool {
    let Some(suffix) = word.longest_suffix(STANDARD_SUFFIXES) else {
        return false;
    };
    let start = word.suffix_start(suffix);

    match suffix {
        "amento" | "amenti" | "imento" | "imenti" => {
            if start < r.rv {
                return false;
            }
            word.delete_suffix(suffix);
        }
        "amente" => {
            if start < r.p1 {
                return false;
            }
            word.delete_suffix(suffix);
            if let Some(s) = word.longest_suffix(&["iv", "os", "ic", "abil"]) {
                if delete_in_r2(word, s, r) && s == "iv" {
                    delete_in_r2(word, "at", r);
                }
            }
        }
        _ if start < r.p2 => return false,
        "azione" | "azioni" | "atore" | "atori" => {
            word.delete_suffix(suffix);
            delete_in_r2(word, "ic", r);
        }
        "logia" | "logie" => word.replace_suffix(suffix, "log"),
        "uzione" | "uzioni" | "usione" | "usioni" => word.replace_suffix(suffix, "u"),
        "enza" | "enze" => word.replace_suffix(suffix, "ente"),
        "ità" => {
            word.delete_suffix(suffix);
            if let Some(s) = word.longest_suffix(&["abil", "ic", "iv"]) {
                delete_in_r2(word, s, r);
            }
        }
        "ivo" | "ivi" | "iva" | "ive" => {
            word.delete_suffix(suffix);
            if delete_in_r2(word, "at", r) {
                delete_in_r2(word, "ic", r);
            }
        }
        _ => word.delete_suffix(suffix),
    }
    true
}

const VERB_SUFFIXES: &[&str] = &[
    "ammo", "ando", "ano", "are", "arono", "asse", "assero", "assi", "assimo", "ata", "ate",
    "ati", "ato", "ava", "avamo", "avano", "avate", "avi", "avo", "emmo", "enda", "ende",
    "endi", "endo", "erà", "erai", "eranno", "ere", "erebbe", "erebbero", "erei", "eremmo",
    "eremo", "ereste", "eresti", "erete", "erò", "erono", "essero", "ete", "eva", "evamo",
    "evano", "evate", "evi", "evo", "iamo", "immo", "irà", "irai", "iranno", "ire", "irebbe",
    "irebbero", "irei", "iremmo", "iremo", "ireste", "iresti", "irete", "irò", "irono", "isca",
    "iscano", "isce", "isci", "isco", "iscono", "issero", "ita", "ite", "iti", "ito", "iva",
    "ivamo", "ivano", "ivate", "ivi", "ivo", "ar", "ir", "ono", "uta", "ute", "uti", "uto",
];

fn verb_suffix(word: &mut Word, r: &Regions) {
    if let Some(suffix) = word.longest_suffix_within(VERB_SUFFIXES, r.rv) {
        word.delete_suffix(suffix);
    }
}

fn vowel_suffix(word: &mut Word, r: &Regions) {
    let final_vowel = matches!(
        word.last(),
        Some('a' | 'e' | 'i' | 'o' | 'à' | 'è' | 'ì' | 'ò')
    );
    if final_vowel && word.len() - 1 >= r.rv {
        word.pop();
        if word.last() == Some('i') && word.len() - 1 >= r.rv {
            word.pop();
        }
    }

    let len = word.len();
    if word.last() == Some('h') && len >= 2 && len - 2 >= r.rv {
        if matches!(word.char_at(len - 2), Some('c' | 'g')) {
            word.pop();
        }
    }
}

impl Stemmer for ItalianStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        prelude(&mut w);
        let regions = mark_regions(&w);

        attached_pronoun(&mut w, &regions);
        if !standard_suffix(&mut w, &regions) {
            verb_suffix(&mut w, &regions);
        }
        vowel_suffix(&mut w, &regions);

        w.map_chars(|c| match c {
            'I' => 'i',
            'U' => 'u',
            other => other,
        });
        w.to_string()
    }

    fn name(&self) -> &'static str {
        "italian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        ItalianStemmer::new().stem(word)
    }

    #[test]
    fn test_italian_stemmer() {
        assert_eq!(stem("indicatore"), "indic");
        assert_eq!(stem("torte"), "tort");
        assert_eq!(stem("cucinato"), "cucin");
        assert_eq!(stem("amiche"), "amic");
    }

    #[test]
    fn test_attached_pronouns() {
        assert_eq!(stem("mangiandolo"), "mang");
        assert_eq!(stem("prenderlo"), "prend");
    }

    #[test]
    fn test_verb_suffixes() {
        assert_eq!(stem("abbandono"), "abband");
        assert_eq!(stem("appartengono"), "apparteng");
        assert_eq!(stem("accaduto"), "accad");
        assert_eq!(stem("abbattuta"), "abbatt");
        assert_eq!(stem("salute"), "sal");
        assert_eq!(stem("potuti"), "pot");
    }

    #[test]
    fn test_non_alphabetic_input() {
        assert_eq!(stem("2024"), "2024");
        assert_eq!(stem(""), "");
    }
}
