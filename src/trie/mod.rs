pub mod node;
pub mod trie;

mod traverse;

pub use node::Node;
pub use trie::Trie;
