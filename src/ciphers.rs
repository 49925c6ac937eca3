use crate::alphabet::Alphabet;
use crate::error::Result;

/// Applies an alphabet-specified substitution to a text.
///
/// Fails if `alphabet` is not exactly the 26 letters, each once. The alphabet
/// is read case-insensitively and always substitutes uppercase letters. Only
/// `A`..`Z` are substituted, so callers decoding lowercase text uppercase it first.
pub fn apply_substitution(text: &str, alphabet: &str) -> Result<String> {
    Ok(Alphabet::parse(alphabet)?.apply(text))
}

/// Produces a cryptogram that `alphabet` decodes back to `text`.
pub fn encrypt(text: &str, alphabet: &Alphabet) -> String {
    alphabet.inverse().apply(&text.to_uppercase())
}
