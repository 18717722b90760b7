//! French stemmer.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::token_filter::stem::Stemmer;
//! use sarissa_analysis::analysis::token_filter::stem::french::FrenchStemmer;
//!
//! let stemmer = FrenchStemmer::new();
//!
//! assert_eq!(stemmer.stem("haussant"), "hauss");
//! assert_eq!(stemmer.stem("gâteaux"), "gâteau");
//! ```

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::snowball::{Word, region_start};

/// French stemming algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchStemmer;

impl FrenchStemmer {
    /// Create a new French stemmer.
    pub fn new() -> Self {
        FrenchStemmer
    }
}

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'â' | 'à' | 'ë' | 'é' | 'ê' | 'è' | 'ï' | 'î' | 'ô'
            | 'û' | 'ù'
    )
}

struct Regions {
    rv: usize,
    p1: usize,
    p2: usize,
}

/// Marks `u`, `i` and `y` that behave as consonants with an uppercase letter.
fn prelude(word: &mut Word) {
    for p in 0..word.len() {
        let here = word.char_at(p);
        let next = word.char_at(p + 1);
        let after = word.char_at(p + 2);

        if here.is_some_and(is_vowel) {
            match next {
                Some('u') if after.is_some_and(is_vowel) => {
                    word.set_char(p + 1, 'U');
                    continue;
                }
                Some('i') if after.is_some_and(is_vowel) => {
                    word.set_char(p + 1, 'I');
                    continue;
                }
                Some('y') => {
                    word.set_char(p + 1, 'Y');
                    continue;
                }
                _ => {}
            }
        }
        if here == Some('y') && next.is_some_and(is_vowel) {
            word.set_char(p, 'Y');
        } else if here == Some('q') && next == Some('u') {
            word.set_char(p + 1, 'U');
        }
    }
}

fn mark_regions(word: &Word) -> Regions {
    let chars = word.chars();
    let len = chars.len();

    let rv = if len >= 3 && is_vowel(chars[0]) && is_vowel(chars[1]) {
        3
    } else if ["par", "col", "tap"].iter().any(|p| word.starts_with(p)) {
        3
    } else {
        (1..len)
            .find(|&i| is_vowel(chars[i]))
            .map_or(len, |i| i + 1)
    };

    let p1 = region_start(chars, 0, is_vowel);
    let p2 = region_start(chars, p1, is_vowel);
    Regions { rv, p1, p2 }
}

const STANDARD_SUFFIXES: &[&str] = &[
    "ance", "iqUe", "isme", "able", "iste", "eux", "ances", "iqUes", "ismes", "ables", "istes",
    "atrice", "ateur", "ation", "atrices", "ateurs", "ations", "logie", "logies", "usion",
    "ution", "usions", "utions", "ence", "ences", "ement", "ements", "ité", "ités", "if", "ive",
    "ifs", "ives", "eaux", "aux", "euse", "euses", "issement", "issements", "amment", "emment",
    "ment", "ments",
];

/// Deletes `suffix` when it ends the word and starts in R2.
fn delete_in_r2(word: &mut Word, suffix: &str, r: &Regions) -> bool {
    if word.ends_with(suffix) && word.suffix_start(suffix) >= r.p2 {
        word.delete_suffix(suffix);
        true
    } else {
        false
    }
}

/// `ic` is deleted in R2, otherwise rewritten as `iqU`.
fn delete_or_mark_ic(word: &mut Word, r: &Regions) {
    if word.ends_with("ic") && !delete_in_r2(word, "ic", r) {
        word.replace_suffix("ic", "iqU");
    }
}

/// Returns whether the step counts as having removed an ending.
fn standard_suffix(word: &mut Word, r: &Regions) -> bool {
    let Some(suffix) = word.longest_suffix(STANDARD_SUFFIXES) else {
        return false;
    };
    let start = word.suffix_start(suffix);
    let in_r1 = start >= r.p1;
    let in_r2 = start >= r.p2;
    let in_rv = start >= r.rv;

    match suffix {
        "ance" | "iqUe" | "isme" | "able" | "iste" | "eux" | "ances" | "iqUes" | "ismes"
        | "ables" | "istes" => {
            if !in_r2 {
                return false;
            }
            word.delete_suffix(suffix);
        }
        "atrice" | "ateur" | "ation" | "atrices" | "ateurs" | "ations" => {
            if !in_r2 {
                return false;
            }
            word.delete_suffix(suffix);
            delete_or_mark_ic(word, r);
        }
        "logie" | "logies" => {
            if !in_r2 {
                return false;
            }
            word.replace_suffix(suffix, "log");
        }
        "usion" | "ution" | "usions" | "utions" => {
            if !in_r2 {
                return false;
            }
            word.replace_suffix(suffix, "u");
        }
        "ence" | "ences" => {
            if !in_r2 {
                return false;
            }
            word.replace_suffix(suffix, "ent");
        }
        "ement" | "ements" => {
            if !in_rv {
                return false;
            }
            word.delete_suffix(suffix);
            match word.longest_suffix(&["iv", "eus", "abl", "iqU", "ièr", "Ièr"]) {
                Some("iv") => {
                    if delete_in_r2(word, "iv", r) {
                        delete_in_r2(word, "at", r);
                    }
                }
                Some("eus") => {
                    if !delete_in_r2(word, "eus", r) && word.suffix_start("eus") >= r.p1 {
                        word.replace_suffix("eus", "eux");
                    }
                }
                Some(s @ ("abl" | "iqU")) => {
                    delete_in_r2(word, s, r);
                }
                Some(s @ ("ièr" | "Ièr")) => {
                    if word.suffix_start(s) >= r.rv {
                        word.replace_suffix(s, "i");
                    }
                }
                _ => {}
            }
        }
        "ité" | "ités" => {
            if !in_r2 {
                return false;
            }
            word.delete_suffix(suffix);
            match word.longest_suffix(&["abil", "ic", "iv"]) {
                Some("abil") => {
                    if !delete_in_r2(word, "abil", r) {
                        word.replace_suffix("abil", "abl");
                    }
                }
                Some("ic") => delete_or_mark_ic(word, r),
                Some("iv") => {
                    delete_in_r2(word, "iv", r);
                }
                _ => {}
            }
        }
        "if" | "ive" | "ifs" | "ives" => {
            if !in_r2 {
                return false;
            }
            word.delete_suffix(suffix);
            if delete_in_r2(word, "at", r) {
                delete_or_mark_ic(word, r);
            }
        }
        "eaux" => word.replace_suffix(suffix, "eau"),
        "aux" => {
            if !in_r1 {
                return false;
            }
            word.replace_suffix(suffix, "al");
        }
        "euse" | "euses" => {
            if in_r2 {
                word.delete_suffix(suffix);
            } else if in_r1 {
                word.replace_suffix(suffix, "eux");
            } else {
                return false;
            }
        }
        "issement" | "issements" => {
            if !in_r1 || word.char_before(start).is_none_or(is_vowel) {
                return false;
            }
            word.delete_suffix(suffix);
        }
        // These rewrite the word but still let the verb steps run.
        "amment" => {
            if in_rv {
                word.replace_suffix(suffix, "ant");
            }
            return false;
        }
        "emment" => {
            if in_rv {
                word.replace_suffix(suffix, "ent");
            }
            return false;
        }
        "ment" | "ments" => {
            let vowel_before = start >= 1
                && start - 1 >= r.rv
                && word.char_before(start).is_some_and(is_vowel);
            if vowel_before {
                word.delete_suffix(suffix);
            }
            return false;
        }
        _ => return false,
    }
    true
}

const I_VERB_SUFFIXES: &[&str] = &[
    "îmes", "ît", "îtes", "i", "ie", "ies", "ir", "ira", "irai", "iraIent", "irais", "irait",
    "iras", "irent", "irez", "iriez", "irions", "irons", "iront", "is", "issaIent", "issais",
    "issait", "issant", "issante", "issantes", "issants", "isse", "issent", "isses", "issez",
    "issiez", "issions", "issons", "it",
];

fn i_verb_suffix(word: &mut Word, r: &Regions) -> bool {
    let Some(suffix) = word.longest_suffix_within(I_VERB_SUFFIXES, r.rv) else {
        return false;
    };
    let start = word.suffix_start(suffix);
    let consonant_before = start >= 1
        && start - 1 >= r.rv
        && word.char_before(start).is_some_and(|c| !is_vowel(c));
    if !consonant_before {
        return false;
    }
    word.delete_suffix(suffix);
    true
}

const VERB_SUFFIXES: &[&str] = &[
    "ions", "é", "ée", "ées", "és", "èrent", "er", "era", "erai", "eraIent", "erais", "erait",
    "eras", "erez", "eriez", "erions", "erons", "eront", "ez", "iez", "âmes", "ât", "âtes", "a",
    "ai", "aIent", "ais", "ait", "ant", "ante", "antes", "ants", "as", "asse", "assent", "asses",
    "assiez", "assions",
];

fn verb_suffix(word: &mut Word, r: &Regions) -> bool {
    let Some(suffix) = word.longest_suffix_within(VERB_SUFFIXES, r.rv) else {
        return false;
    };
    match suffix {
        "ions" => return delete_in_r2(word, suffix, r),
        "âmes" | "ât" | "âtes" | "a" | "ai" | "aIent" | "ais" | "ait" | "ant" | "ante"
        | "antes" | "ants" | "as" | "asse" | "assent" | "asses" | "assiez" | "assions" => {
            word.delete_suffix(suffix);
            if word.ends_with("e") && word.suffix_start("e") >= r.rv {
                word.pop();
            }
        }
        _ => word.delete_suffix(suffix),
    }
    true
}

fn residual_suffix(word: &mut Word, r: &Regions) {
    let len = word.len();
    if word.last() == Some('s')
        && len >= 2
        && !matches!(word.char_at(len - 2), Some('a' | 'i' | 'o' | 'u' | 'è' | 's'))
    {
        word.pop();
    }

    let Some(suffix) =
        word.longest_suffix_within(&["ion", "ier", "ière", "Ier", "Ière", "e", "ë"], r.rv)
    else {
        return;
    };
    let start = word.suffix_start(suffix);
    match suffix {
        "ion" => {
            let s_or_t = start >= 1
                && start - 1 >= r.rv
                && matches!(word.char_before(start), Some('s' | 't'));
            if start >= r.p2 && s_or_t {
                word.delete_suffix(suffix);
            }
        }
        "ier" | "ière" | "Ier" | "Ière" => word.replace_suffix(suffix, "i"),
        "e" => word.delete_suffix(suffix),
        "ë" => {
            if start >= 2 && start - 2 >= r.rv && word.ends_with_at(start, "gu") {
                word.delete_suffix(suffix);
            }
        }
        _ => {}
    }
}

fn un_double(word: &mut Word) {
    if word
        .longest_suffix(&["enn", "onn", "ett", "ell", "eill"])
        .is_some()
    {
        word.pop();
    }
}

/// `é` or `è` followed only by consonants becomes `e`.
fn un_accent(word: &mut Word) {
    let chars = word.chars();
    let mut i = chars.len();
    while i > 0 && !is_vowel(chars[i - 1]) {
        i -= 1;
    }
    if i < chars.len() && i > 0 && matches!(chars[i - 1], 'é' | 'è') {
        word.set_char(i - 1, 'e');
    }
}

impl Stemmer for FrenchStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        prelude(&mut w);
        let regions = mark_regions(&w);

        let removed = standard_suffix(&mut w, &regions)
            || i_verb_suffix(&mut w, &regions)
            || verb_suffix(&mut w, &regions);
        if removed {
            match w.last() {
                Some('Y') => w.replace_suffix("Y", "i"),
                Some('ç') => w.replace_suffix("ç", "c"),
                _ => {}
            }
        } else {
            residual_suffix(&mut w, &regions);
        }

        un_double(&mut w);
        un_accent(&mut w);

        w.map_chars(|c| match c {
            'I' => 'i',
            'U' => 'u',
            'Y' => 'y',
            other => other,
        });
        w.to_string()
    }

    fn name(&self) -> &'static str {
        "french"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        FrenchStemmer::new().stem(word)
    }

    #[test]
    fn test_french_stemmer() {
        assert_eq!(stem("haussant"), "hauss");
        assert_eq!(stem("continuation"), "continu");
        assert_eq!(stem("gâteaux"), "gâteau");
        assert_eq!(stem("fait"), "fait");
        assert_eq!(stem("des"), "de");
    }

    #[test]
    fn test_adverbs_fall_through_to_verb_steps() {
        assert_eq!(stem("rapidement"), "rapid");
        assert_eq!(stem("évidemment"), "évident");
    }

    #[test]
    fn test_undouble_and_unaccent() {
        assert_eq!(stem("chienne"), "chien");
        assert_eq!(stem("complète"), "complet");
    }

    #[test]
    fn test_non_alphabetic_input() {
        assert_eq!(stem("1984"), "1984");
        assert_eq!(stem(""), "");
    }
}
