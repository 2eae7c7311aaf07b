use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("expected a character sequence, found {found}")]
    Type { found: &'static str },
}
