/// What a word search needs from a dictionary: membership, and pruning by prefix.
pub trait Index {
    fn add(&mut self, word: &str);
    fn contains(&self, word: &str) -> bool;
    fn contains_prefix(&self, prefix: &str) -> bool;

    fn add_all<'a, I>(&mut self, items: I)
        where I: IntoIterator<Item=&'a str> {
        items.into_iter().for_each(|x| self.add(x));
    }
}
