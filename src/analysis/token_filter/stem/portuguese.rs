//! Portuguese stemmer.
//!
//! Nasal vowels `ã` and `õ` are rewritten as `a~` and `o~` for the duration
//! of the algorithm so that the tilde behaves as a consonant.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::token_filter::stem::Stemmer;
//! use sarissa_analysis::analysis::token_filter::stem::portuguese::PortugueseStemmer;
//!
//! let stemmer = PortugueseStemmer::new();
//!
//! assert_eq!(stemmer.stem("velhas"), "velh");
//! assert_eq!(stemmer.stem("bolos"), "bol");
//! ```

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::snowball::{Word, region_start, romance_rv};

/// Portuguese stemming algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortugueseStemmer;

impl PortugueseStemmer {
    /// Create a new Portuguese stemmer.
    pub fn new() -> Self {
        PortugueseStemmer
    }
}

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'â' | 'ê' | 'ô'
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

fn split_nasals(word: &str) -> Word {
    let mut expanded = String::with_capacity(word.len() + 2);
    for c in word.chars() {
        match c {
            'ã' => expanded.push_str("a~"),
            'õ' => expanded.push_str("o~"),
            other => expanded.push(other),
        }
    }
    Word::new(&expanded)
}

fn join_nasals(word: &Word) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars().iter().copied().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('a', Some('~')) => {
                chars.next();
                out.push('ã');
            }
            ('o', Some('~')) => {
                chars.next();
                out.push('õ');
            }
            _ => out.push(c),
        }
    }
    out
}

fn delete_in_r2(word: &mut Word, suffix: &str, r: &Regions) -> bool {
    if word.ends_with(suffix) && word.suffix_start(suffix) >= r.p2 {
        word.delete_suffix(suffix);
        true
    } else {
        false
    }
}

const STANDARD_SUFFIXES: &[&str] = &[
    "eza", "ezas", "ico", "ica", "icos", "icas", "ismo", "ismos", "ável", "ível", "ista",
    "istas", "oso", "osa", "osos", "osas", "amento", "amentos", "imento", "imentos", "adora",
    "ador", "aça~o", "adoras", "adores", "aço~es", "ante", "antes", "ância", "logia", "logias",
    "uça~o", "uço~es", "ência", "ências", "amente", "mente", "idade", "idades", "iva", "ivo",
    "ivas", "ivos", "ira", "iras",
];

fn standard_suffix(word: &mut Word, r: &Regions) -> bool {
    let Some(suffix) = word.longest_suffix(STANDARD_SUFFIXES) else {
        return false;
    };
    let start = word.suffix_start(suffix);

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
        "ira" | "iras" => {
            if start < r.rv || word.char_before(start) != Some('e') {
                return false;
            }
            word.replace_suffix(suffix, "ir");
        }
        _ if start < r.p2 => return false,
        "logia" | "logias" => word.replace_suffix(suffix, "log"),
        "uça~o" | "uço~es" => word.replace_suffix(suffix, "u"),
        "ência" | "ências" => word.replace_suffix(suffix, "ente"),
        "mente" => {
            word.delete_suffix(suffix);
            if let Some(s) = word.longest_suffix(&["ante", "avel", "ível"]) {
                delete_in_r2(word, s, r);
            }
        }
        "idade" | "idades" => {
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

const VERB_SUFFIXES: &[&str] = &[
    "ada", "ida", "ia", "aria", "eria", "iria", "ará", "ara", "erá", "era", "irá", "ava", "asse",
    "esse", "isse", "aste", "este", "iste", "ei", "arei", "erei", "irei", "am", "iam", "ariam",
    "eriam", "iriam", "aram", "eram", "iram", "avam", "em", "arem", "erem", "irem", "assem",
    "essem", "issem", "ado", "ido", "ando", "endo", "indo", "ara~o", "era~o", "ira~o", "ar",
    "er", "ir", "as", "adas", "idas", "ias", "arias", "erias", "irias", "arás", "aras", "erás",
    "eras", "irás", "avas", "es", "ardes", "erdes", "irdes", "ares", "eres", "ires", "asses",
    "esses", "isses", "astes", "estes", "istes", "is", "ais", "eis", "íeis", "aríeis", "eríeis",
    "iríeis", "áreis", "areis", "éreis", "ereis", "íreis", "ireis", "ásseis", "ésseis",
    "ísseis", "áveis", "ados", "idos", "ámos", "amos", "íamos", "aríamos", "eríamos", "iríamos",
    "áramos", "éramos", "íramos", "ávamos", "emos", "aremos", "eremos", "iremos", "ássemos",
    "êssemos", "íssemos", "imos", "armos", "ermos", "irmos", "eu", "iu", "ou", "ira", "iras",
];

fn verb_suffix(word: &mut Word, r: &Regions) -> bool {
    match word.longest_suffix_within(VERB_SUFFIXES, r.rv) {
        Some(suffix) => {
            word.delete_suffix(suffix);
            true
        }
        None => false,
    }
}

fn residual_suffix(word: &mut Word, r: &Regions) {
    if let Some(suffix) =
        word.longest_suffix_within(&["os", "a", "i", "o", "á", "í", "ó"], r.rv)
    {
        word.delete_suffix(suffix);
    }
}

fn residual_form(word: &mut Word, r: &Regions) {
    match word.longest_suffix(&["e", "é", "ê", "ç"]) {
        Some("ç") => word.replace_suffix("ç", "c"),
        Some(suffix) => {
            if word.suffix_start(suffix) < r.rv {
                return;
            }
            word.delete_suffix(suffix);
            let softened = (word.ends_with("gu") || word.ends_with("ci"))
                && word.len() - 1 >= r.rv;
            if softened {
                word.pop();
            }
        }
        None => {}
    }
}

impl Stemmer for PortugueseStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = split_nasals(word);
        let regions = mark_regions(&w);

        let changed = standard_suffix(&mut w, &regions) || verb_suffix(&mut w, &regions);
        if changed {
            if w.ends_with("ci") && w.len() - 1 >= regions.rv {
                w.pop();
            }
        } else {
            residual_suffix(&mut w, &regions);
        }
        residual_form(&mut w, &regions);

        join_nasals(&w)
    }

    fn name(&self) -> &'static str {
        "portuguese"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        PortugueseStemmer::new().stem(word)
    }

    #[test]
    fn test_portuguese_stemmer() {
        assert_eq!(stem("velhas"), "velh");
        assert_eq!(stem("bolos"), "bol");
        assert_eq!(stem("cozinhado"), "cozinh");
        assert_eq!(stem("casa"), "cas");
    }

    #[test]
    fn test_nasal_vowels_are_restored() {
        assert_eq!(stem("pão"), "pã");
        assert_eq!(stem("corações"), "coraçõ");
    }

    #[test]
    fn test_derivational_suffixes() {
        assert_eq!(stem("felicidade"), "felic");
        assert_eq!(stem("rapidamente"), "rapid");
    }

    #[test]
    fn test_non_alphabetic_input() {
        assert_eq!(stem("2024"), "2024");
        assert_eq!(stem(""), "");
    }
}
