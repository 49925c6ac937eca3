use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::error::{Error, Result};
use crate::wordlist::index::Index;
use crate::wordlist::trie::Trie;

/// A dictionary loaded from a word file, stored lowercase.
#[derive(Default, Debug, Clone)]
pub struct Wordlist {
    trie: Trie,
}

/// Layout of a dictionary file. By default every line is a word; with a
/// delimiter, the word is taken from `word_column` (0 unless set).
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter).nth(self.word_column.unwrap_or(0)),
        }
    }
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Default::default()
    }

    /// Loads a dictionary, degrading to an empty one if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Wordlist {
        match Self::try_from_file(path, format) {
            Ok(wordlist) => wordlist,
            Err(e) => {
                warn!(error = %e, "using an empty dictionary");
                Wordlist::new()
            }
        }
    }

    pub fn try_from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist> {
        let path = path.as_ref();
        info!(path = ?path, "reading words");

        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file), format))
    }

    /// Lines that are not valid UTF-8 are counted as failures and skipped. Any
    /// other read error ends the load with the words read so far.
    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat) -> Wordlist {
        let start = Instant::now();
        let mut wordlist = Wordlist::new();
        let mut count: usize = 0;
        let mut failures: usize = 0;

        for x in reader.lines() {
            match x {
                Ok(line) => {
                    if let Some(word) = format.parse_line(&line).filter(|w| !w.trim().is_empty()) {
                        wordlist.add(word);
                        count += 1;
                        if count % 100000 == 0 {
                            debug!(count, word, "reading");
                        }
                    }
                }
                Err(e) if e.kind() == ErrorKind::InvalidData => failures += 1,
                Err(e) => {
                    warn!(error = %e, lines = count, "stopped reading words");
                    break;
                }
            }
        }

        if failures > 0 {
            warn!(failures, "skipped unreadable lines");
        }
        info!(lines = count, words = wordlist.len(),
              elapsed_ms = start.elapsed().as_millis() as u64, "dictionary loaded");
        wordlist
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    delegate! {
        to self.trie {
            pub fn contains_word(&self, word: &str) -> bool;
            pub fn contains_prefix(&self, prefix: &str) -> bool;
            pub fn words(&self, prefix: &str) -> Vec<String>;
            pub fn words_of_length(&self, length: usize) -> Vec<String>;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }
}

impl Index for Wordlist {
    fn add(&mut self, word: &str) {
        self.trie.insert(&normalize(word));
    }

    fn contains(&self, word: &str) -> bool {
        self.trie.contains_word(&normalize(word))
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        self.trie.contains_prefix(&normalize(prefix))
    }
}
