pub mod alphabet;
pub mod batch;
pub mod error;
pub mod index;
pub mod query;
pub mod trie;

pub use alphabet::CharSequence;
pub use error::TrieError;
pub use index::Index;
pub use query::{find_longest_common_word, DualTrieSuffixIndex, LongestCommonPrefixFinder};
pub use trie::{Node, Trie};
