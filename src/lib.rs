pub mod alphabet;
pub mod boggle;
pub mod ciphers;
pub mod cryptanalysis;
pub mod error;
pub mod wordlist;

pub use error::{Error, Result};
