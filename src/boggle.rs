use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use rand::Rng;

use crate::error::{Error, Result};
use crate::wordlist::index::Index;

const MIN_WORD_LEN: usize = 3;

/// A square grid of letters, searched for dictionary words traced through
/// adjacent cells (diagonals included), each cell used at most once per word.
pub struct Boggle<'d, I: Index> {
    size: usize,
    letters: Vec<char>,
    dict: &'d I,
}

impl<'d, I: Index> Boggle<'d, I> {
    pub fn new(size: usize, letters: &str, dict: &'d I) -> Result<Boggle<'d, I>> {
        if size == 0 {
            return Err(Error::InvalidGrid("the grid size must be positive".to_string()));
        }
        let letters: Vec<char> = letters.chars().map(|c| c.to_ascii_lowercase()).collect();
        if letters.len() != size * size {
            return Err(Error::InvalidGrid(format!("expected {} letters, found {}",
                                                  size * size, letters.len())));
        }
        if let Some(c) = letters.iter().find(|c| !c.is_ascii_lowercase()) {
            return Err(Error::InvalidGrid(format!("{:?} is not a letter", c)));
        }
        Ok(Boggle { size, letters, dict })
    }

    pub fn random<R: Rng + ?Sized>(size: usize, dict: &'d I, rng: &mut R) -> Result<Boggle<'d, I>> {
        let letters: String = (0..size * size)
            .map(|_| rng.gen_range(b'a'..=b'z') as char)
            .collect();
        Boggle::new(size, &letters, dict)
    }

    pub fn letters(&self) -> String {
        self.letters.iter().collect()
    }

    fn neighbours(&self, cell: usize) -> impl Iterator<Item=usize> + '_ {
        let (row, col) = ((cell / self.size) as isize, (cell % self.size) as isize);
        let size = self.size as isize;
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| (row + dr, col + dc)))
            .filter(move |&(r, c)| (r, c) != (row, col) && r >= 0 && c >= 0 && r < size && c < size)
            .map(move |(r, c)| (r * size + c) as usize)
    }

    /// True if `word` is a dictionary word of at least three letters that can
    /// be traced on the grid.
    pub fn contains(&self, word: &str) -> bool {
        let word: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
        if word.len() < MIN_WORD_LEN || !self.dict.contains(&word.iter().collect::<String>()) {
            return false;
        }
        let mut used = vec![false; self.letters.len()];
        (0..self.letters.len()).any(|cell| self.trace(cell, &word, &mut used))
    }

    fn trace(&self, cell: usize, word: &[char], used: &mut [bool]) -> bool {
        if used[cell] || self.letters[cell] != word[0] {
            return false;
        }
        if word.len() == 1 {
            return true;
        }
        used[cell] = true;
        let found = self.neighbours(cell).any(|next| self.trace(next, &word[1..], used));
        used[cell] = false;
        found
    }

    /// Every word of the dictionary found on the grid.
    pub fn solve(&self) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let mut used = vec![false; self.letters.len()];
        let mut path = String::new();
        for cell in 0..self.letters.len() {
            self.explore(cell, &mut path, &mut used, &mut found);
        }
        found
    }

    fn explore(&self, cell: usize, path: &mut String, used: &mut [bool], found: &mut BTreeSet<String>) {
        path.push(self.letters[cell]);
        if self.dict.contains_prefix(path) {
            if path.len() >= MIN_WORD_LEN && self.dict.contains(path) {
                found.insert(path.clone());
            }
            used[cell] = true;
            let next: Vec<usize> = self.neighbours(cell).filter(|&n| !used[n]).collect();
            for n in next {
                self.explore(n, path, used, found);
            }
            used[cell] = false;
        }
        path.pop();
    }
}

impl<I: Index> Display for Boggle<'_, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let separator = format!("{}+\n", "+---".repeat(self.size));
        for row in self.letters.chunks(self.size) {
            f.write_str(&separator)?;
            row.iter().try_for_each(|c| write!(f, "| {} ", c))?;
            f.write_str("|\n")?;
        }
        f.write_str(&separator)
    }
}


#[cfg(test)]
mod tests {
    use maplit::btreeset;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::boggle::Boggle;
    use crate::error::Error;
    use crate::wordlist::trie::Trie;

    fn trie(words: &[&str]) -> Trie {
        words.iter().copied().collect()
    }

    #[test]
    fn finds_words_in_2x2() {
        let dict = trie(&["sega", "sage"]);
        let b = Boggle::new(2, "sgea", &dict).unwrap();
        assert!(b.contains("sage"));
        assert!(b.contains("sega"));
        assert_eq!(b.solve(), btreeset! {"sage".to_string(), "sega".to_string()});
    }

    #[test]
    fn only_dictionary_words_are_found() {
        let dict = trie(&["art", "rate"]);
        let b = Boggle::new(2, "arte", &dict).unwrap();
        assert!(b.contains("art"));
        assert!(b.contains("rate"));
        assert!(!b.contains("rar"));
        assert_eq!(b.solve(), btreeset! {"art".to_string(), "rate".to_string()});
    }

    #[test]
    fn contains_words() {
        let dict = trie(&["aux", "aura", "dure"]);
        let b = Boggle::new(3, "asxduavre", &dict).unwrap();
        for word in ["aux", "aura", "dure", "AURA", "dUrE"] {
            assert!(b.contains(word), "{} not found", word);
        }
        for word in ["auxe", "aurar", "ada", "ase", "dures", "asas", "", "au", "du re", "dure!"] {
            assert!(!b.contains(word), "{} found", word);
        }
    }

    #[test]
    fn cells_are_not_reused() {
        let dict = trie(&["ses", "sss"]);
        let b = Boggle::new(2, "sexx", &dict).unwrap();
        assert!(!b.contains("ses"));
        assert!(b.solve().is_empty());

        let b = Boggle::new(3, "ssssessss", &dict).unwrap();
        assert_eq!(b.solve(), btreeset! {"ses".to_string(), "sss".to_string()});
    }

    #[test]
    fn single_cell_finds_nothing() {
        let dict = trie(&["a"]);
        let b = Boggle::new(1, "a", &dict).unwrap();
        assert!(b.solve().is_empty());
        assert!(!b.contains("a"));
    }

    #[test]
    fn rejects_bad_grids() {
        let dict = Trie::new();
        assert!(matches!(Boggle::new(3, "arte", &dict), Err(Error::InvalidGrid(_))));
        assert!(matches!(Boggle::new(0, "arte", &dict), Err(Error::InvalidGrid(_))));
        assert!(matches!(Boggle::new(4, "", &dict), Err(Error::InvalidGrid(_))));
        assert!(matches!(Boggle::new(2, "abé=", &dict), Err(Error::InvalidGrid(_))));
        assert!(Boggle::new(1, "a", &dict).is_ok());
        assert_eq!(Boggle::new(2, "ABCD", &dict).unwrap().letters(), "abcd");
    }

    #[test]
    fn random_grid_has_the_right_size() {
        let dict = Trie::new();
        let mut rng = StdRng::seed_from_u64(2);
        let b = Boggle::random(4, &dict, &mut rng).unwrap();
        assert_eq!(b.letters().len(), 16);
        assert!(b.solve().is_empty());
    }

    #[test]
    fn displays_the_grid() {
        let dict = Trie::new();
        let b = Boggle::new(2, "sgea", &dict).unwrap();
        assert_eq!(b.to_string(), "+---+---+\n| s | g |\n+---+---+\n| e | a |\n+---+---+\n");
    }
}
