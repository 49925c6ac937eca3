use std::collections::{HashMap, HashSet};

use maplit::{hashmap, hashset};

/// The letter-repetition pattern of a word: each position holds the index of
/// the first distinct letter it repeats. `LETTER` is `[0, 1, 2, 2, 1, 3]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterPattern(Vec<usize>);

impl LetterPattern {
    pub fn of(word: &str) -> LetterPattern {
        let mut classes: HashMap<char, usize> = hashmap! {};
        LetterPattern(word.chars()
            .map(|c| {
                let next = classes.len();
                *classes.entry(c).or_insert(next)
            })
            .collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if some letter occurs more than once.
    pub fn has_repetition(&self) -> bool {
        let distinct = self.0.iter().max().map(|x| x + 1).unwrap_or(0);
        distinct < self.0.len()
    }
}

/// True if `word` maps onto `cipher` position by position through a one-to-one
/// letter correspondence.
pub fn is_compatible(word: &str, cipher: &str) -> bool {
    if word.chars().count() != cipher.chars().count() {
        return false;
    }
    let mut mapping: HashMap<char, char> = hashmap! {};
    let mut targets: HashSet<char> = hashset! {};
    word.chars().zip(cipher.chars()).all(|(w, c)| match mapping.get(&w) {
        Some(&target) => target == c,
        None => {
            mapping.insert(w, c);
            targets.insert(c)
        }
    })
}

/// The first of `candidates` compatible with the cipher word, uppercased.
///
/// Candidates are taken in the order given, so with a trie enumeration the
/// lexicographically smallest compatible word wins. Words holding anything but
/// ASCII letters never match since they cannot be written with a substitution
/// alphabet.
pub fn get_compatible_word<S: AsRef<str>>(cipher: &str, candidates: &[S]) -> Option<String> {
    candidates.iter()
        .map(|x| x.as_ref())
        .find(|word| word.chars().all(|c| c.is_ascii_alphabetic()) && is_compatible(word, cipher))
        .map(|word| word.to_uppercase())
}
