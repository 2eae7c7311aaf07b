use crate::alphabet::CharSequence;
use crate::error::TrieError;

/// A word store that can be filled one word at a time.
pub trait Index {
    fn add<W: CharSequence + ?Sized>(&mut self, word: &W) -> Result<(), TrieError>;
    fn contains<W: CharSequence + ?Sized>(&self, word: &W) -> Result<bool, TrieError>;

    /// Adds `items` in order, stopping at the first one that is rejected.
    /// Words added before the failure stay in the store.
    fn add_all<I>(&mut self, items: I) -> Result<(), TrieError>
        where I: IntoIterator, I::Item: CharSequence {
        items.into_iter().try_for_each(|x| self.add(&x))
    }
}
