use std::cmp::Reverse;
use std::collections::HashSet;

/// Splits a cryptogram into its distinct words of at least `min_word_len`
/// letters, uppercase, longest first. Words of equal length keep the order in
/// which they first appear.
pub fn tokenize(cryptogram: &str, min_word_len: usize) -> Vec<String> {
    let upper = cryptogram.to_uppercase();
    let mut seen = HashSet::new();
    let mut words: Vec<String> = upper
        .split(|c: char| !c.is_ascii_uppercase())
        .filter(|word| word.len() >= min_word_len)
        .filter(|word| seen.insert(*word))
        .map(String::from)
        .collect();
    words.sort_by_key(|word| Reverse(word.len()));
    words
}
