use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

pub const ALPHABET: &[u8] = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".as_bytes();

/// Position of an uppercase plain letter in [`ALPHABET`].
pub fn get_idx(a: char) -> Option<usize> {
    if a.is_ascii_uppercase() {
        Some((a as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Dictionary words are stored trimmed and lowercase.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

pub(crate) fn is_permutation(perm: &[u8; ALPHABET.len()]) -> bool {
    let mut seen = [false; ALPHABET.len()];
    perm.iter().all(|&p| {
        let p = p as usize;
        p < seen.len() && !std::mem::replace(&mut seen[p], true)
    })
}

/// A decoding alphabet: position `i` holds the letter that replaces the `i`-th
/// plain letter. Always a permutation of the 26 letters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet([u8; ALPHABET.len()]);

impl Alphabet {
    pub fn identity() -> Alphabet {
        let mut perm = [0u8; ALPHABET.len()];
        perm.iter_mut().enumerate().for_each(|(i, p)| *p = i as u8);
        Alphabet(perm)
    }

    /// Parses a 26-letter alphabet, case-insensitively.
    pub fn parse(alphabet: &str) -> Result<Alphabet> {
        let letters: Vec<char> = alphabet.to_uppercase().chars().collect();
        if letters.len() != ALPHABET.len() {
            return Err(Error::AlphabetLength(letters.len()));
        }
        if let Some(&c) = letters.iter().find(|c| get_idx(**c).is_none()) {
            return Err(Error::AlphabetCharacter(c));
        }

        let mut perm = [0u8; ALPHABET.len()];
        let mut seen = [false; ALPHABET.len()];
        for (slot, &c) in perm.iter_mut().zip(letters.iter()) {
            let idx = get_idx(c).ok_or(Error::AlphabetCharacter(c))?;
            if seen[idx] {
                return Err(Error::AlphabetRepetition(c));
            }
            seen[idx] = true;
            *slot = idx as u8;
        }
        Ok(Alphabet(perm))
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Alphabet {
        let mut alphabet = Alphabet::identity();
        alphabet.0.shuffle(rng);
        alphabet
    }

    pub(crate) fn from_permutation(perm: [u8; ALPHABET.len()]) -> Alphabet {
        debug_assert!(is_permutation(&perm), "not a permutation: {:?}", perm);
        Alphabet(perm)
    }

    pub fn permutation(&self) -> &[u8; ALPHABET.len()] {
        &self.0
    }

    /// The letter that replaces `plain`, if `plain` is an uppercase plain letter.
    pub fn decode(&self, plain: char) -> Option<char> {
        get_idx(plain).map(|idx| ALPHABET[self.0[idx] as usize] as char)
    }

    pub fn inverse(&self) -> Alphabet {
        let mut inverse = [0u8; ALPHABET.len()];
        self.0.iter().enumerate().for_each(|(i, &p)| inverse[p as usize] = i as u8);
        Alphabet(inverse)
    }

    /// Substitutes through `self`, then through `next`.
    pub fn then(&self, next: &Alphabet) -> Alphabet {
        let mut composed = [0u8; ALPHABET.len()];
        composed.iter_mut().zip(self.0.iter())
            .for_each(|(c, &p)| *c = next.0[p as usize]);
        Alphabet(composed)
    }

    /// Replaces every `A`..`Z`; any other character is left untouched.
    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.decode(c).unwrap_or(c))
            .collect()
    }

    /// Marks with an `x` every position where the two alphabets disagree.
    pub fn diff(&self, other: &Alphabet) -> String {
        self.0.iter().zip(other.0.iter())
            .map(|(a, b)| if a == b { ' ' } else { 'x' })
            .collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::identity()
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.iter()
            .try_for_each(|&p| write!(f, "{}", ALPHABET[p as usize] as char))
    }
}

impl Debug for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Alphabet").field(&self.to_string()).finish()
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Alphabet::parse(s)
    }
}

impl Serialize for Alphabet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: Serializer {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error> where D: Deserializer<'de> {
        deserializer.deserialize_str(AlphabetVisitor {})
    }
}

struct AlphabetVisitor {}

impl<'de> Visitor<'de> for AlphabetVisitor {
    type Value = Alphabet;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "a string of the 26 letters, each exactly once")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E> where E: serde::de::Error {
        Alphabet::parse(v).map_err(E::custom)
    }
}
