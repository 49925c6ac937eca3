use std::fmt::{Debug, Formatter};

/// A trie node. Children are kept sorted by letter so every traversal can stop
/// as soon as it passes the letter it is looking for, and enumerations come out
/// in lexicographic order.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    letter: char,
    is_terminal: bool,
    children: Vec<TrieNode>,
}

impl TrieNode {
    fn new(letter: char) -> TrieNode {
        TrieNode {
            letter,
            is_terminal: false,
            children: Vec::new(),
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn children(&self) -> &[TrieNode] {
        &self.children
    }

    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        for child in &self.children {
            if child.letter == c {
                return Some(child);
            } else if child.letter > c {
                break;
            }
        }
        None
    }

    fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        let idx = match self.children.iter().position(|x| x.letter >= c) {
            Some(idx) if self.children[idx].letter == c => idx,
            Some(idx) => {
                self.children.insert(idx, TrieNode::new(c));
                idx
            }
            None => {
                self.children.push(TrieNode::new(c));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    /// Inserts `word` below this node. Returns false if it was already there.
    pub(crate) fn insert(&mut self, word: &str) -> bool {
        let mut current = self;
        for c in word.chars() {
            current = current.get_or_create_child(c);
        }
        !std::mem::replace(&mut current.is_terminal, true)
    }

    pub(crate) fn get_node(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(self, |node, c| node.get_child(c))
    }

    pub(crate) fn traverse_prefix<F>(&self, f: &mut F)
        where F: FnMut(&TrieNode) {
        f(self);
        self.children.iter().for_each(|child| child.traverse_prefix(f));
    }

    /// Pushes every word below this node onto `words`; `path` spells this node.
    pub(crate) fn collect_words(&self, path: &mut String, words: &mut Vec<String>) {
        if self.is_terminal {
            words.push(path.clone());
        }
        for child in &self.children {
            path.push(child.letter);
            child.collect_words(path, words);
            path.pop();
        }
    }

    pub(crate) fn collect_words_of_length(&self, path: &mut String, remaining: usize,
                                          words: &mut Vec<String>) {
        if remaining == 0 {
            if self.is_terminal {
                words.push(path.clone());
            }
            return;
        }
        for child in &self.children {
            path.push(child.letter);
            child.collect_words_of_length(path, remaining - 1, words);
            path.pop();
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.iter()
                .map(|x| x.letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use crate::wordlist::trienode::TrieNode;

    #[test]
    fn children_stay_sorted() {
        let mut root = TrieNode::default();
        for word in ["zeta", "alpha", "mu", "beta", "al"] {
            root.insert(word);
        }
        let letters: Vec<char> = root.children().iter().map(|x| x.letter()).collect();
        assert_eq!(letters, vec!['a', 'b', 'm', 'z']);
        assert_eq!(root.get_child('a').map(|x| x.children().len()), Some(1));
    }

    #[test]
    fn insert_reports_new_words() {
        let mut root = TrieNode::default();
        assert!(root.insert("bus"));
        assert!(!root.insert("bus"));
        assert!(root.insert("bu"));
        assert!(root.get_node("bu").unwrap().is_terminal());
        assert!(root.get_node("bx").is_none());
    }

    #[test]
    fn traverse_prefix_visits_parents_first() {
        let mut root = TrieNode::default();
        root.insert("ab");
        root.insert("b");
        let mut letters = String::new();
        root.traverse_prefix(&mut |node| letters.push(node.letter()));
        assert_eq!(letters, "\0abb");
    }
}
