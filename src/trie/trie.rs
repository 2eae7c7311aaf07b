use std::fmt::{Debug, Formatter};

use log::trace;

use crate::alphabet::CharSequence;
use crate::error::TrieError;
use crate::index::Index;
use crate::trie::node::Node;

#[derive(Default)]
pub struct Trie {
    root: Node,
    insertions: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Default::default()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Inserts `word`, bumping the counter of every node below the root that
    /// the word passes through. Rejected input leaves the trie untouched.
    pub fn insert<W: CharSequence + ?Sized>(&mut self, word: &W) -> Result<(), TrieError> {
        let word = word.as_word()?;
        self.insert_str(word);
        Ok(())
    }

    pub(crate) fn insert_str(&mut self, word: &str) {
        trace!("inserting {:?}", word);
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.get_or_create_child(c);
            current.visit();
        }
        current.mark_end_of_word();
        self.insertions += 1;
    }

    /// The node at the end of `sequence`, if every character of it exists in
    /// order. The empty sequence is the root.
    pub fn lookup_node(&self, sequence: &str) -> Option<&Node> {
        sequence.chars()
            .try_fold(&self.root, |node, c| node.get_child(c))
    }

    pub fn contains<W: CharSequence + ?Sized>(&self, word: &W) -> Result<bool, TrieError> {
        let word = word.as_word()?;
        Ok(self.lookup_node(word)
            .map(|x| x.is_end_of_word()).unwrap_or(false))
    }

    /// Distinct inserted words starting with `prefix`, in character order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = vec![];
        if let Some(node) = self.lookup_node(prefix) {
            node.traverse_prefix(&mut prefix.to_string(), &mut |path, node| {
                if node.is_end_of_word() {
                    results.push(path.to_string());
                }
            });
        }
        results
    }

    pub fn words(&self) -> Vec<String> {
        self.words_with_prefix("")
    }

    /// Successful insertions so far, duplicates included.
    pub fn word_count(&self) -> usize {
        self.insertions
    }
}

impl Index for Trie {
    fn add<W: CharSequence + ?Sized>(&mut self, word: &W) -> Result<(), TrieError> {
        self.insert(word)
    }

    fn contains<W: CharSequence + ?Sized>(&self, word: &W) -> Result<bool, TrieError> {
        Trie::contains(self, word)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_map();
        self.root.traverse_prefix(&mut String::new(), &mut |path, node| {
            l.entry(&path, node);
        });
        l.finish()
    }
}
