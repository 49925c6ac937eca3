use crate::alphabet::{get_idx, Alphabet, ALPHABET};

/// A one-to-one correspondence between some letters, built from aligned words.
struct PartialMapping {
    forward: [Option<u8>; ALPHABET.len()],
    backward: [Option<u8>; ALPHABET.len()],
}

impl PartialMapping {
    /// Pairs every letter of `from` with the letter of `to` at its first
    /// occurrence. A pair claiming a letter already taken on either side is
    /// dropped, as is any pair involving a non-letter.
    fn from_words(from: &str, to: &str) -> PartialMapping {
        let mut mapping = PartialMapping {
            forward: [None; ALPHABET.len()],
            backward: [None; ALPHABET.len()],
        };
        for (f, t) in from.chars().zip(to.chars()) {
            if let (Some(f), Some(t)) = (get_idx(f), get_idx(t.to_ascii_uppercase())) {
                if mapping.forward[f].is_none() && mapping.backward[t].is_none() {
                    mapping.forward[f] = Some(t as u8);
                    mapping.backward[t] = Some(f as u8);
                }
            }
        }
        mapping
    }

    /// Walks back from `letter` through the letters mapped onto it, to the one
    /// nothing maps onto.
    fn chain_start(&self, letter: u8) -> u8 {
        let mut current = letter;
        while let Some(source) = self.backward[current as usize] {
            current = source;
        }
        current
    }

    /// Extends the mapping to a permutation. A letter left unmapped keeps its
    /// place unless another letter took it; it then closes its chain by taking
    /// the chain's free start.
    fn complete(&self) -> Alphabet {
        let mut perm = [0u8; ALPHABET.len()];
        for (letter, slot) in perm.iter_mut().enumerate() {
            *slot = self.forward[letter].unwrap_or_else(|| self.chain_start(letter as u8));
        }
        Alphabet::from_permutation(perm)
    }
}

/// Folds the correspondence `crypt -> word` into `alphabet`.
///
/// `crypt` is a cipher word already decoded through `alphabet` and `word` the
/// dictionary word it should read as. The result decodes the cipher word to
/// `word` whenever the two are pattern-compatible, and is a permutation
/// whatever the input.
pub fn update_alphabet(crypt: &str, word: &str, alphabet: &Alphabet) -> Alphabet {
    alphabet.then(&PartialMapping::from_words(crypt, word).complete())
}
