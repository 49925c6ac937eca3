use rayon::prelude::*;

use crate::alphabet::Alphabet;
use crate::cryptanalysis::config::AnalysisConfig;
use crate::cryptanalysis::tokenizer::tokenize;
use crate::wordlist::trie::Trie;

/// A cryptogram, split into words, checked against a dictionary of lowercase words.
pub struct DictionaryAnalysis<'d> {
    pub(crate) dict: &'d Trie,
    pub(crate) words: Vec<String>,
    pub(crate) config: AnalysisConfig,
}

impl<'d> DictionaryAnalysis<'d> {
    pub fn new(cryptogram: &str, dict: &'d Trie) -> DictionaryAnalysis<'d> {
        Self::with_config(cryptogram, dict, AnalysisConfig::new())
    }

    pub fn with_config(cryptogram: &str, dict: &'d Trie, config: AnalysisConfig) -> DictionaryAnalysis<'d> {
        DictionaryAnalysis {
            dict,
            words: tokenize(cryptogram, config.min_word_len),
            config,
        }
    }

    /// The distinct cipher words, longest first.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn decodes_to_word(&self, cipher: &str, alphabet: &Alphabet) -> bool {
        self.dict.contains_word(&alphabet.apply(cipher).to_lowercase())
    }

    /// Number of cipher words `alphabet` turns into dictionary words.
    pub fn score(&self, alphabet: &Alphabet) -> usize {
        if self.config.parallel_scoring {
            self.words.par_iter().filter(|x| self.decodes_to_word(x, alphabet)).count()
        } else {
            self.words.iter().filter(|x| self.decodes_to_word(x, alphabet)).count()
        }
    }
}
