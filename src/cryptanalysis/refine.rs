use std::collections::HashSet;

use derive_new::new;
use maplit::hashset;
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::alphabet::Alphabet;
use crate::cryptanalysis::analysis::DictionaryAnalysis;
use crate::cryptanalysis::merge::update_alphabet;
use crate::cryptanalysis::pattern::{get_compatible_word, LetterPattern};
use crate::error::Result;

/// An alphabet the refinement adopted, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct RefinementStep {
    pub token: String,
    pub word: String,
    pub alphabet: Alphabet,
    pub score: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Refinement {
    pub initial_alphabet: Alphabet,
    pub initial_score: usize,
    pub alphabet: Alphabet,
    pub score: usize,
    pub words: usize,
    pub steps: Vec<RefinementStep>,
}

impl<'d> DictionaryAnalysis<'d> {
    /// Performs a dictionary-based analysis of the cryptogram, starting from
    /// `alphabet`, and returns the approximated decoding alphabet.
    pub fn guess_approximated_alphabet(&self, alphabet: &str) -> Result<String> {
        let start = Alphabet::parse(alphabet)?;
        Ok(self.refine(&start).alphabet.to_string())
    }

    /// Walks the cipher words holding a repeated letter, longest first. For
    /// each one not yet decoded, the first dictionary word of the same length
    /// and letter pattern is folded into the alphabet, which is kept only if
    /// it decodes strictly more words. A dictionary word is tried once.
    pub fn refine(&self, start: &Alphabet) -> Refinement {
        let initial_score = self.score(start);
        let mut alphabet = *start;
        let mut score = initial_score;
        let mut steps = vec![];
        let mut tried: HashSet<String> = hashset! {};
        let mut current_length = 0;
        let mut candidates: Vec<String> = vec![];

        info!(alphabet = %start, words = self.words.len(), score, "starting dictionary-based analysis");

        for token in self.words.iter().filter(|x| LetterPattern::of(x).has_repetition()) {
            if token.len() != current_length {
                current_length = token.len();
                candidates = self.dict.words_of_length(current_length);
                debug!(length = current_length, candidates = candidates.len(), "current length");
            }
            if self.decodes_to_word(token, &alphabet) {
                continue;
            }
            let word = match get_compatible_word(token, &candidates) {
                Some(word) => word,
                None => continue,
            };
            if !tried.insert(word.clone()) {
                continue;
            }

            let candidate = update_alphabet(&alphabet.apply(token), &word, &alphabet);
            let candidate_score = self.score(&candidate);
            if candidate_score > score {
                alphabet = candidate;
                score = candidate_score;
                info!(%token, %word, alphabet = %alphabet, valid = score,
                      invalid = self.words.len() - score, "new alphabet");
                steps.push(RefinementStep::new(token.clone(), word, alphabet, score));
            } else {
                trace!(%token, %word, score = candidate_score, "rejected");
            }
        }

        Refinement {
            initial_alphabet: *start,
            initial_score,
            alphabet,
            score,
            words: self.words.len(),
            steps,
        }
    }
}
