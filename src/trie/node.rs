use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// A single trie vertex. Children are owned outright and kept in character
/// order so that walks over them are deterministic.
#[derive(Default)]
pub struct Node {
    children: BTreeMap<char, Node>,
    is_end_of_word: bool,
    count: usize,
}

impl Node {
    pub fn get_child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut Node {
        self.children.entry(c).or_default()
    }

    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &Node)> + '_ {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The child of a node that has exactly one.
    pub fn only_child(&self) -> Option<(char, &Node)> {
        if self.children.len() != 1 {
            return None;
        }
        self.children().next()
    }

    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// Number of insertions that passed through this node.
    pub fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn mark_end_of_word(&mut self) {
        self.is_end_of_word = true;
    }

    pub(crate) fn visit(&mut self) {
        self.count += 1;
    }
}

// Long words make deep chains; tear them down without recursing.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Node> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("count", &self.count)
            .field("is_end_of_word", &self.is_end_of_word)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
