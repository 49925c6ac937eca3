pub mod analysis;
pub mod config;
pub mod merge;
pub mod pattern;
pub mod refine;
pub mod tokenizer;

pub use analysis::DictionaryAnalysis;
pub use config::AnalysisConfig;
pub use merge::update_alphabet;
pub use pattern::{get_compatible_word, LetterPattern};
pub use refine::{Refinement, RefinementStep};
pub use tokenizer::tokenize;
