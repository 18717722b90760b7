//! Shared machinery for the Snowball-family stemmers.
//!
//! Every language engine works on a [`Word`]: the token held as a vector of
//! characters so that suffix arithmetic is done in characters, not bytes.
//! Regions (R1, R2, RV) are plain character indices computed once per call;
//! a suffix "is in" a region when its first character index is at or after
//! the region start.
//!
//! Suffix tables are `&'static [&'static str]`. Lookups always pick the
//! longest matching entry, so the textual order of a table never changes
//! which rule fires.

/// A word being stemmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Word {
    chars: Vec<char>,
}

impl Word {
    pub(crate) fn new(text: &str) -> Self {
        Word {
            chars: text.chars().collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    pub(crate) fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Character immediately before `index`, if any.
    pub(crate) fn char_before(&self, index: usize) -> Option<char> {
        index.checked_sub(1).and_then(|i| self.char_at(i))
    }

    pub(crate) fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    pub(crate) fn set_char(&mut self, index: usize, c: char) {
        if let Some(slot) = self.chars.get_mut(index) {
            *slot = c;
        }
    }

    pub(crate) fn starts_with(&self, prefix: &str) -> bool {
        let mut chars = self.chars.iter();
        prefix.chars().all(|p| chars.next() == Some(&p))
    }

    pub(crate) fn ends_with(&self, suffix: &str) -> bool {
        self.ends_with_at(self.len(), suffix)
    }

    /// Whether `chars[..end]` ends with `suffix`.
    pub(crate) fn ends_with_at(&self, end: usize, suffix: &str) -> bool {
        let n = char_len(suffix);
        if n > end || end > self.len() {
            return false;
        }
        self.chars[end - n..end]
            .iter()
            .copied()
            .eq(suffix.chars())
    }

    /// Index of the first character of `suffix` when it ends the word.
    pub(crate) fn suffix_start(&self, suffix: &str) -> usize {
        self.len().saturating_sub(char_len(suffix))
    }

    /// Longest entry of `table` that ends the word.
    pub(crate) fn longest_suffix(&self, table: &[&'static str]) -> Option<&'static str> {
        self.longest_suffix_at(self.len(), table, 0)
    }

    /// Longest entry of `table` that ends the word and lies entirely at or
    /// after `limit`.
    pub(crate) fn longest_suffix_within(
        &self,
        table: &[&'static str],
        limit: usize,
    ) -> Option<&'static str> {
        self.longest_suffix_at(self.len(), table, limit)
    }

    /// Longest entry of `table` that ends at `end` and starts at or after `limit`.
    pub(crate) fn longest_suffix_at(
        &self,
        end: usize,
        table: &[&'static str],
        limit: usize,
    ) -> Option<&'static str> {
        table
            .iter()
            .copied()
            .filter(|suffix| {
                let n = char_len(suffix);
                n <= end && end - n >= limit && self.ends_with_at(end, suffix)
            })
            .max_by_key(|suffix| char_len(suffix))
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.chars.truncate(len);
    }

    /// Remove the final `suffix`. The caller has checked that it matches.
    pub(crate) fn delete_suffix(&mut self, suffix: &str) {
        let start = self.suffix_start(suffix);
        self.chars.truncate(start);
    }

    /// Replace the final `suffix` with `replacement`.
    pub(crate) fn replace_suffix(&mut self, suffix: &str, replacement: &str) {
        let start = self.suffix_start(suffix);
        self.replace_from(start, replacement);
    }

    /// Replace everything from `start` to the end of the word.
    pub(crate) fn replace_from(&mut self, start: usize, replacement: &str) {
        self.chars.truncate(start);
        self.chars.extend(replacement.chars());
    }

    pub(crate) fn push(&mut self, c: char) {
        self.chars.push(c);
    }

    pub(crate) fn pop(&mut self) {
        self.chars.pop();
    }

    /// Remove the character at `index`.
    pub(crate) fn remove(&mut self, index: usize) {
        if index < self.chars.len() {
            self.chars.remove(index);
        }
    }

    /// Apply `map` to every character.
    pub(crate) fn map_chars(&mut self, map: impl Fn(char) -> char) {
        for c in self.chars.iter_mut() {
            *c = map(*c);
        }
    }

    /// Whether any character in `chars[from..to]` satisfies `pred`.
    pub(crate) fn any_in(&self, from: usize, to: usize, pred: impl Fn(char) -> bool) -> bool {
        let to = to.min(self.len());
        from < to && self.chars[from..to].iter().any(|&c| pred(c))
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Start of the region following the first non-vowel that follows a vowel,
/// scanning from `start`. Returns the word length when no such region exists.
///
/// Called from 0 this yields R1; called from R1 it yields R2.
pub(crate) fn region_start(chars: &[char], start: usize, is_vowel: impl Fn(char) -> bool) -> usize {
    let len = chars.len();
    let mut i = start;

    while i < len && !is_vowel(chars[i]) {
        i += 1;
    }
    while i < len && is_vowel(chars[i]) {
        i += 1;
    }
    if i >= len {
        return len;
    }
    i + 1
}

/// R1 for the Scandinavian languages and Dutch: the standard R1, but never
/// starting before the fourth letter. Words shorter than three letters have
/// an empty R1.
pub(crate) fn scandinavian_r1(chars: &[char], is_vowel: impl Fn(char) -> bool) -> usize {
    if chars.len() < 3 {
        return chars.len();
    }
    region_start(chars, 0, is_vowel).max(3)
}

/// RV as defined for the Romance languages (Spanish, Portuguese, Italian).
///
/// If the second letter is a consonant, RV starts after the next vowel. If the
/// first two letters are vowels, RV starts after the next consonant. Otherwise
/// (consonant then vowel) RV starts after the third letter. RV is the end of
/// the word when none of these positions exist.
pub(crate) fn romance_rv(chars: &[char], is_vowel: impl Fn(char) -> bool) -> usize {
    let len = chars.len();
    if len < 2 {
        return len;
    }

    let after_next = |from: usize, want_vowel: bool| {
        (from..len)
            .find(|&i| is_vowel(chars[i]) == want_vowel)
            .map_or(len, |i| i + 1)
    };

    match (is_vowel(chars[0]), is_vowel(chars[1])) {
        (true, false) => after_next(2, true),
        (true, true) => after_next(2, false),
        (false, false) => after_next(2, true),
        (false, true) => {
            if len >= 3 {
                3
            } else {
                len
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_vowel(c: char) -> bool {
        matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
    }

    #[test]
    fn test_regions() {
        // "beautiful": R1 = "iful", R2 = "ul"
        let chars: Vec<char> = "beautiful".chars().collect();
        let r1 = region_start(&chars, 0, is_vowel);
        let r2 = region_start(&chars, r1, is_vowel);
        assert_eq!(r1, 5);
        assert_eq!(r2, 7);

        // "beauty": R1 = "y", R2 empty
        let chars: Vec<char> = "beauty".chars().collect();
        let r1 = region_start(&chars, 0, is_vowel);
        assert_eq!(r1, 5);
        assert_eq!(region_start(&chars, r1, is_vowel), 6);
    }

    #[test]
    fn test_romance_rv() {
        let rv = |w: &str| romance_rv(&w.chars().collect::<Vec<_>>(), is_vowel);
        assert_eq!(rv("macho"), 3);
        assert_eq!(rv("oliva"), 3);
        assert_eq!(rv("trabajo"), 3);
        assert_eq!(rv("aureo"), 3);
        assert_eq!(rv("a"), 1);
    }

    #[test]
    fn test_longest_suffix() {
        let word = Word::new("nationalization");
        let table = ["ation", "ization", "on", "n"];
        assert_eq!(word.longest_suffix(&table), Some("ization"));
        // "ization" starts at index 8, so a limit of 9 only admits "ation".
        assert_eq!(word.longest_suffix_within(&table, 9), Some("ation"));
        assert_eq!(word.longest_suffix_within(&table, 15), None);
    }

    #[test]
    fn test_multibyte_suffixes() {
        let mut word = Word::new("вагоне");
        assert!(word.ends_with("е"));
        assert_eq!(word.suffix_start("не"), 4);
        word.delete_suffix("е");
        assert_eq!(word.to_string(), "вагон");
    }
}
