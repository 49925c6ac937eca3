#[derive(Default, Debug, Clone)]
pub struct AnalysisConfig {
    /// Shorter cipher words are not worth decoding.
    pub min_word_len: usize,
    /// Score alphabets on the rayon pool.
    pub parallel_scoring: bool,
}

impl AnalysisConfig {
    pub fn new() -> AnalysisConfig {
        let mut c: AnalysisConfig = Default::default();
        c.min_word_len = 3;
        c.parallel_scoring = true;
        c
    }
}
