pub mod longest_common;
pub mod suffix_index;

pub use longest_common::{find_longest_common_word, LongestCommonPrefixFinder};
pub use suffix_index::DualTrieSuffixIndex;
