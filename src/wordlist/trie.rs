use std::fmt::{Debug, Formatter};

use crate::wordlist::index::Index;
use crate::wordlist::trienode::TrieNode;

/// A lexicographic tree of words.
#[derive(Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

/// Blank means nothing but characters up to and including `' '`, so `"\0"` is blank too.
fn is_blank(word: &str) -> bool {
    word.trim_matches(|c: char| c <= ' ').is_empty()
}

impl Trie {
    pub fn new() -> Trie {
        Default::default()
    }

    /// Inserts a word if not already present. Blank words are ignored.
    pub fn insert(&mut self, word: &str) {
        if is_blank(word) {
            return;
        }
        if self.root.insert(word) {
            self.len += 1;
        }
    }

    pub fn contains_word(&self, word: &str) -> bool {
        !word.is_empty() && self.root.get_node(word)
            .map(|x| x.is_terminal()).unwrap_or(false)
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.root.get_node(prefix).is_some()
    }

    /// Every word starting with `prefix`, in lexicographic order. A blank
    /// prefix returns the whole dictionary.
    pub fn words(&self, prefix: &str) -> Vec<String> {
        let mut words = vec![];
        if is_blank(prefix) {
            self.root.collect_words(&mut String::new(), &mut words);
        } else if let Some(node) = self.root.get_node(prefix) {
            node.collect_words(&mut prefix.to_string(), &mut words);
        }
        words
    }

    /// Every word of exactly `length` characters, in lexicographic order.
    pub fn words_of_length(&self, length: usize) -> Vec<String> {
        let mut words = vec![];
        if length > 0 {
            self.root.collect_words_of_length(&mut String::with_capacity(length), length, &mut words);
        }
        words
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) {
        self.insert(word);
    }

    fn contains(&self, word: &str) -> bool {
        self.contains_word(word)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        Trie::contains_prefix(self, prefix)
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item=&'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.add_all(iter);
        trie
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        self.root.traverse_prefix(&mut |x| { l.entry(x); });
        l.finish()
    }
}


#[cfg(test)]
mod tests {
    use crate::wordlist::index::Index;
    use crate::wordlist::trie::Trie;

    const WORDS: [&str; 12] = ["a-cote", "aide", "as", "au", "aujourd'hui", "aux",
        "bu", "bus", "but", "cote", "et", "ete"];

    fn dict() -> Trie {
        WORDS.iter().copied().collect()
    }

    #[test]
    fn empty_trie() {
        let trie = Trie::new();
        assert_eq!(trie.len(), 0);
        assert!(trie.is_empty());
        assert!(trie.words("").is_empty());
    }

    #[test]
    fn insert_counts_each_word_once() {
        let mut trie = Trie::new();
        for (i, word) in WORDS.iter().enumerate() {
            trie.insert(word);
            assert_eq!(trie.len(), i + 1, "{} not inserted", word);
            trie.insert(word);
            assert_eq!(trie.len(), i + 1, "{} inserted twice", word);
        }
    }

    #[test]
    fn blank_words_are_ignored() {
        let mut trie = Trie::new();
        trie.insert("a");
        for blank in ["", " ", "  ", "\0", "\t\n"] {
            trie.insert(blank);
            assert_eq!(trie.len(), 1, "{:?} was inserted", blank);
        }
    }

    #[test]
    fn keeps_hyphens_and_apostrophes() {
        let mut trie = Trie::new();
        trie.insert("aujourd'hui");
        trie.insert("tire-bouchon");
        assert!(trie.contains_word("aujourd'hui"));
        assert!(trie.contains_word("tire-bouchon"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn finds_words_in_trie() {
        let trie = dict();
        WORDS.iter().for_each(|word| assert!(trie.contains_word(word), "{} not found", word));
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let trie = dict();
        for word in ["", "aid", "ai", "aides", "mot", "e"] {
            assert!(!trie.contains_word(word), "{} found", word);
        }
    }

    #[test]
    fn prefixes_are_not_words() {
        let trie: Trie = vec!["aux", "aura", "bus", "au", "as", "dure"].into_iter().collect();
        for word in ["aux", "aura", "au", "as", "dure"] {
            assert!(trie.contains_word(word));
        }
        for word in ["auxe", "aurar", "ada", "ase", "dures", "asas", "aur", "dur"] {
            assert!(!trie.contains_word(word), "{} found", word);
        }
    }

    #[test]
    fn contains_prefix() {
        let trie = dict();
        assert!(trie.contains_prefix("a"));
        assert!(trie.contains_prefix("aujou"));
        assert!(trie.contains_prefix("bus"));
        assert!(!trie.contains_prefix(""));
        assert!(!trie.contains_prefix("x"));
        assert!(!trie.contains_prefix("buss"));
        assert!(Index::contains_prefix(&trie, "et"));
    }

    #[test]
    fn words_are_sorted() {
        let trie = dict();
        assert_eq!(trie.words(""), WORDS.to_vec());
        assert!(trie.words("x").is_empty());
        assert_eq!(trie.words("bu"), vec!["bu", "bus", "but"]);
        assert_eq!(trie.words("aux"), vec!["aux"]);
    }

    #[test]
    fn blank_prefix_returns_everything() {
        let trie = dict();
        for prefix in ["", " ", "  "] {
            assert_eq!(trie.words(prefix).len(), WORDS.len());
        }
    }

    #[test]
    fn prefixed_words_are_a_subsequence_of_all_words() {
        let trie = dict();
        let all = trie.words("");
        for prefix in ["a", "au", "b", "bu", "e", "c"] {
            let mut rest = all.iter();
            for word in trie.words(prefix) {
                assert!(word.starts_with(prefix));
                assert!(rest.any(|x| *x == word), "{} out of order", word);
            }
        }
    }

    #[test]
    fn words_of_length() {
        let trie = dict();
        assert_eq!(trie.words_of_length(3), vec!["aux", "bus", "but", "ete"]);
        assert!(trie.words_of_length(0).is_empty());
        assert!(trie.words_of_length(42).is_empty());

        let small: Trie = vec!["bu", "bus", "but"].into_iter().collect();
        assert_eq!(small.words_of_length(3), vec!["bus", "but"]);
    }

    #[test]
    fn lengths_add_up_to_size() {
        let trie = dict();
        let total: usize = (0..=12).map(|n| trie.words_of_length(n).len()).sum();
        assert_eq!(total, trie.len());
    }
}
