use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cryptogram_tools::alphabet::Alphabet;
use cryptogram_tools::boggle::Boggle;
use cryptogram_tools::ciphers::encrypt;
use cryptogram_tools::cryptanalysis::{AnalysisConfig, DictionaryAnalysis};
use cryptogram_tools::wordlist::wordlist::{FileFormat, Wordlist};


#[derive(StructOpt)]
struct DictionaryArgs {
    /// The dictionary, one word per line
    #[structopt(short, long, parse(from_os_str))]
    dictionary: PathBuf,
    /// Column delimiter, for dictionaries with several columns per line
    #[structopt(long)]
    delimiter: Option<char>,
    /// Column holding the word when a delimiter is given
    #[structopt(long)]
    word_column: Option<usize>,
}

impl DictionaryArgs {
    fn load(&self) -> Wordlist {
        let format = match self.delimiter {
            None => FileFormat::builder().build(),
            Some(delimiter) => FileFormat::builder()
                .delimiter(delimiter)
                .word_column(self.word_column.unwrap_or(0))
                .build(),
        };
        Wordlist::from_file(&self.dictionary, &format)
    }
}

/// Dictionary-based tools for substitution ciphers and word grids.
#[derive(StructOpt)]
enum Cli {
    /// Approximate the decoding alphabet of a cryptogram
    Decode {
        #[structopt(flatten)]
        dict: DictionaryArgs,
        /// The file holding the cryptogram
        #[structopt(parse(from_os_str))]
        cryptogram: PathBuf,
        /// The alphabet the analysis starts from
        #[structopt(long, default_value = "ABCDEFGHIJKLMNOPQRSTUVWXYZ")]
        start: Alphabet,
        /// Start from a random alphabet instead
        #[structopt(long)]
        random_start: bool,
        /// The real decoding alphabet, to show the remaining differences
        #[structopt(long)]
        expected: Option<Alphabet>,
        /// How many characters of decoded text to show
        #[structopt(long, default_value = "200")]
        preview: usize,
        /// Score alphabets on a single thread
        #[structopt(long)]
        sequential: bool,
        /// Print the whole refinement as JSON
        #[structopt(long)]
        json: bool,
    },
    /// Encrypt a text so that the given alphabet decodes it
    Encode {
        #[structopt(parse(from_os_str))]
        text: PathBuf,
        #[structopt(long)]
        alphabet: Alphabet,
    },
    /// Find every dictionary word in a letter grid
    Boggle {
        #[structopt(flatten)]
        dict: DictionaryArgs,
        #[structopt(long, default_value = "4")]
        size: usize,
        /// Grid letters row by row; random if omitted
        #[structopt(long)]
        letters: Option<String>,
    },
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("could not read {:?}", path))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::from_args() {
        Cli::Decode { dict, cryptogram, start, random_start, expected, preview, sequential, json } => {
            let wl = dict.load();
            let cryptogram = read(&cryptogram)?;

            let mut config = AnalysisConfig::new();
            config.parallel_scoring = !sequential;
            let start = if random_start { Alphabet::random(&mut rand::thread_rng()) } else { start };

            let begin = Instant::now();
            let analysis = DictionaryAnalysis::with_config(&cryptogram, wl.trie(), config);
            let refinement = analysis.refine(&start);
            info!(elapsed_ms = begin.elapsed().as_millis() as u64, "search done");

            if json {
                println!("{}", serde_json::to_string_pretty(&refinement)?);
                return Ok(());
            }
            if let Some(expected) = expected {
                println!("Decoding     alphabet : {}", expected);
            }
            println!("Approximated alphabet : {}", refinement.alphabet);
            if let Some(expected) = expected {
                println!("Remaining differences : {}", expected.diff(&refinement.alphabet));
            }
            println!("Score                 : {} / {} words", refinement.score, refinement.words);
            println!();
            let decoded = refinement.alphabet.apply(&cryptogram.to_uppercase());
            println!("*** DECODED TEXT ***\n{}", decoded.chars().take(preview).collect::<String>());
        }
        Cli::Encode { text, alphabet } => {
            println!("{}", encrypt(&read(&text)?, &alphabet));
        }
        Cli::Boggle { dict, size, letters } => {
            let wl = dict.load();
            let boggle = match letters {
                Some(letters) => Boggle::new(size, &letters, &wl)?,
                None => Boggle::random(size, &wl, &mut rand::thread_rng())?,
            };
            println!("{}", boggle);
            boggle.solve().iter().for_each(|word| println!("{}", word));
        }
    }
    Ok(())
}
