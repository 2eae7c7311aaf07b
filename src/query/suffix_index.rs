use delegate::delegate;
use derive_new::new;
use log::debug;

use crate::alphabet::{reversed, CharSequence};
use crate::error::TrieError;
use crate::index::Index;
use crate::trie::Trie;

/// Answers prefix questions from a forward trie and suffix questions from a
/// second trie holding every word reversed. Both tries always see the same
/// words.
#[derive(new, Default, Debug)]
pub struct DualTrieSuffixIndex {
    #[new(default)]
    forward: Trie,
    #[new(default)]
    reverse: Trie,
}

impl DualTrieSuffixIndex {
    delegate! {
        to self.forward {
            pub fn word_count(&self) -> usize;
            pub fn words(&self) -> Vec<String>;
        }
    }

    /// Adds `word` to both tries. The value is accepted for interface
    /// compatibility and is not stored.
    pub fn put<W: CharSequence + ?Sized, V>(&mut self, word: &W, _value: V) -> Result<(), TrieError> {
        let word = word.as_word()?;
        self.forward.insert_str(word);
        self.reverse.insert_str(&reversed(word));
        Ok(())
    }

    /// Number of inserted words, duplicates included, that end with `pattern`.
    pub fn count_words_with_suffix<W: CharSequence + ?Sized>(&self, pattern: &W) -> Result<usize, TrieError> {
        let pattern = pattern.as_word()?;
        let count = self.reverse.lookup_node(&reversed(pattern))
            .map(|x| x.count()).unwrap_or(0);
        debug!("{} words end with {:?}", count, pattern);
        Ok(count)
    }

    /// Number of inserted words, duplicates included, that start with `prefix`.
    pub fn count_words_with_prefix<W: CharSequence + ?Sized>(&self, prefix: &W) -> Result<usize, TrieError> {
        let prefix = prefix.as_word()?;
        let count = self.forward.lookup_node(prefix)
            .map(|x| x.count()).unwrap_or(0);
        debug!("{} words start with {:?}", count, prefix);
        Ok(count)
    }

    /// Whether some inserted word runs through `prefix`.
    pub fn has_prefix<W: CharSequence + ?Sized>(&self, prefix: &W) -> Result<bool, TrieError> {
        let prefix = prefix.as_word()?;
        Ok(self.forward.lookup_node(prefix).is_some())
    }

    pub fn words_with_prefix<W: CharSequence + ?Sized>(&self, prefix: &W) -> Result<Vec<String>, TrieError> {
        Ok(self.forward.words_with_prefix(prefix.as_word()?))
    }

    /// Distinct words ending with `pattern`, sorted.
    pub fn words_with_suffix<W: CharSequence + ?Sized>(&self, pattern: &W) -> Result<Vec<String>, TrieError> {
        let pattern = pattern.as_word()?;
        let mut words: Vec<String> = self.reverse.words_with_prefix(&reversed(pattern))
            .iter()
            .map(|x| reversed(x))
            .collect();
        words.sort();
        Ok(words)
    }

    pub fn forward(&self) -> &Trie {
        &self.forward
    }

    pub fn reverse(&self) -> &Trie {
        &self.reverse
    }
}

impl Index for DualTrieSuffixIndex {
    fn add<W: CharSequence + ?Sized>(&mut self, word: &W) -> Result<(), TrieError> {
        self.put(word, ())
    }

    fn contains<W: CharSequence + ?Sized>(&self, word: &W) -> Result<bool, TrieError> {
        self.forward.contains(word)
    }
}
