//! Spanish stemmer.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::token_filter::stem::Stemmer;
//! use sarissa_analysis::analysis::token_filter::stem::spanish::SpanishStemmer;
//!
//! let stemmer = SpanishStemmer::new();
//!
//! assert_eq!(stemmer.stem("avenida"), "aven");
//! assert_eq!(stemmer.stem("pasteles"), "pastel");
//! ```

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::snowball::{Word, region_start, romance_rv};

/// Spanish stemming algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishStemmer;

impl SpanishStemmer {
    /// Create a new Spanish stemmer.
    pub fn new() -> Self {
        SpanishStemmer
    }
}

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü'
    )
}

struct Regions {
    rv: usize,
    p1: usize,
    p2: usize,
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
    "me", "se", "sela", "selo", "selas", "selos", "la", "le", "lo", "las", "les", "los", "nos",
];

const PRONOUN_HOSTS: &[&str] = &[
    "iéndo", "ándo", "ár", "ér", "ír", "ando", "iendo", "ar", "er", "ir", "yendo",
];

/// Removes an enclitic pronoun attached to a gerund or infinitive.
fn attached_pronoun(word: &mut Word, r: &Regions) {
    let Some(pronoun) = word.longest_suffix(PRONOUNS) else {
        return;
    };
    let pronoun_start = word.suffix_start(pronoun);
    let Some(host) = word.longest_suffix_at(pronoun_start, PRONOUN_HOSTS, r.rv) else {
        return;
    };
    let host_start = pronoun_start - host.chars().count();

    match host {
        "iéndo" => word.replace_from(host_start, "iendo"),
        "ándo" => word.replace_from(host_start, "ando"),
        "ár" => word.replace_from(host_start, "ar"),
        "ér" => word.replace_from(host_start, "er"),
        "ír" => word.replace_from(host_start, "ir"),
        "yendo" => {
            if word.char_before(host_start) == Some('u') {
                word.truncate(pronoun_start);
            }
        }
        _ => word.truncate(pronoun_start),
    }
}

const STANDARD_SUFFIXES: &[&str] = &[
    "anza", "anzas", "ico", "ica", "icos", "icas", "ismo", "ismos", "able", "ables", "ible",
    "ibles", "ista", "istas", "oso", "osa", "osos", "osas", "amiento", "amientos", "imiento",
    "imientos", "adora", "ador", "ación", "adoras", "adores", "aciones", "ante", "antes",
    "ancia", "ancias", "logía", "logías", "ución", "uciones", "encia", "encias", "amente",
    "mente", "idad", "idades", "iva", "ivo", "ivas", "ivos",
];

fn standard_suffix(word: &mut Word, r: &Regions) -> bool {
    let Some(suffix) = word.longest_suffix(STANDARD_SUFFIXES) else {
        return false;
    };
    let start = word.suffix_start(suffix);
    let in_r2 = start >= r.p2;

    match suffix {
        "amente" => {
            if start < r.p1 {
                return false;
            }
            word.delete_suffix(suffix);
            if let Some(s) = word.longest_suffix(&["iv", "os", "ic", "ad"]) {
                if delete_in_r2(word, s, r) && s == "iv" {
                    delete_in_r2(word, "at", r);
                }
            }
        }
        _ if !in_r2 => return false,
        "adora" | "ador" | "ación" | "adoras" | "adores" | "aciones" | "ante" | "antes"
        | "ancia" | "ancias" => {
            word.delete_suffix(suffix);
            delete_in_r2(word, "ic", r);
        }
        "logía" | "logías" => word.replace_suffix(suffix, "log"),
        "ución" | "uciones" => word.replace_suffix(suffix, "u"),
        "encia" | "encias" => word.replace_suffix(suffix, "ente"),
        "mente" => {
            word.delete_suffix(suffix);
            if let Some(s) = word.longest_suffix(&["ante", "able", "ible"]) {
                delete_in_r2(word, s, r);
            }
        }
        "idad" | "idades" => {
            word.delete_suffix(suffix);
            if let Some(s) = word.longest_suffix(&["abil", "ic", "iv"]) {
                delete_in_r2(word, s, r);
            }
        }
        "iva" | "ivo" | "ivas" | "ivos" => {
            word.delete_suffix(suffix);
            delete_in_r2(word, "at", r);
        }
        _ => word.delete_suffix(suffix),
    }
    true
}

const Y_VERB_SUFFIXES: &[&str] = &[
    "ya", "ye", "yan", "yen", "yeron", "yendo", "yo", "yó", "yas", "yes", "yais", "yamos",
];

fn y_verb_suffix(word: &mut Word, r: &Regions) -> bool {
    let Some(suffix) = word.longest_suffix_within(Y_VERB_SUFFIXES, r.rv) else {
        return false;
    };
    if word.char_before(word.suffix_start(suffix)) != Some('u') {
        return false;
    }
    word.delete_suffix(suffix);
    true
}

const VERB_SUFFIXES: &[&str] = &[
    "en", "es", "éis", "emos", "arían", "arías", "arán", "arás", "aríais", "aría", "aréis",
    "aríamos", "aremos", "ará", "aré", "erían", "erías", "erán", "erás", "eríais", "ería",
    "eréis", "eríamos", "eremos", "erá", "eré", "irían", "irías", "irán", "irás", "iríais",
    "iría", "iréis", "iríamos", "iremos", "irá", "iré", "aba", "ada", "ida", "ía", "ara", "iera",
    "ad", "ed", "id", "ase", "iese", "aste", "iste", "an", "aban", "ían", "aran", "ieran",
    "asen", "iesen", "aron", "ieron", "ado", "ido", "ando", "iendo", "ió", "ar", "er", "ir",
    "as", "abas", "adas", "idas", "ías", "aras", "ieras", "ases", "ieses", "ís", "áis", "abais",
    "íais", "arais", "ierais", "aseis", "ieseis", "asteis", "isteis", "ados", "idos", "amos",
    "ábamos", "íamos", "imos", "áramos", "iéramos", "iésemos", "ásemos",
];

fn verb_suffix(word: &mut Word, r: &Regions) -> bool {
    let Some(suffix) = word.longest_suffix_within(VERB_SUFFIXES, r.rv) else {
        return false;
    };
    let start = word.suffix_start(suffix);
    match suffix {
        "en" | "es" | "éis" | "emos" => {
            // A "gu" before the ending loses its u.
            if word.char_before(start) == Some('u') && start >= 2 && word.char_at(start - 2) == Some('g') {
                word.truncate(start - 1);
            } else {
                word.truncate(start);
            }
        }
        _ => word.truncate(start),
    }
    true
}

fn residual_suffix(word: &mut Word, r: &Regions) {
    let Some(suffix) = word.longest_suffix(&["os", "a", "o", "á", "í", "ó", "e", "é"]) else {
        return;
    };
    if word.suffix_start(suffix) < r.rv {
        return;
    }
    word.delete_suffix(suffix);

    if matches!(suffix, "e" | "é") && word.ends_with("gu") && word.suffix_start("u") >= r.rv {
        word.pop();
    }
}

fn strip_acute(c: char) -> char {
    match c {
        'á' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' => 'u',
        other => other,
    }
}

impl Stemmer for SpanishStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        let regions = mark_regions(&w);

        attached_pronoun(&mut w, &regions);
        let _ = standard_suffix(&mut w, &regions)
            || y_verb_suffix(&mut w, &regions)
            || verb_suffix(&mut w, &regions);
        residual_suffix(&mut w, &regions);

        w.map_chars(strip_acute);
        w.to_string()
    }

    fn name(&self) -> &'static str {
        "spanish"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        SpanishStemmer::new().stem(word)
    }

    #[test]
    fn test_spanish_stemmer() {
        assert_eq!(stem("avenida"), "aven");
        assert_eq!(stem("pasteles"), "pastel");
        assert_eq!(stem("horneado"), "horn");
        assert_eq!(stem("chicas"), "chic");
        assert_eq!(stem("torta"), "tort");
    }

    #[test]
    fn test_attached_pronouns() {
        assert_eq!(stem("haciéndola"), "hac");
        assert_eq!(stem("comerlo"), "com");
    }

    #[test]
    fn test_adverbs() {
        assert_eq!(stem("rápidamente"), "rapid");
    }

    #[test]
    fn test_non_alphabetic_input() {
        assert_eq!(stem("2024"), "2024");
        assert_eq!(stem(""), "");
    }
}
