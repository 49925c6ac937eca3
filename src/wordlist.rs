pub mod trie;
pub mod index;
pub mod trienode;
pub mod wordlist;
