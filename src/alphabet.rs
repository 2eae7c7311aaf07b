use serde_json::Value;

use crate::error::TrieError;

/// Anything that may be handed to the trie as a word.
///
/// Plain strings always pass. Dynamically typed input (`serde_json::Value`)
/// passes only when it holds a string; everything else is rejected with
/// [`TrieError::Type`] before the trie is touched.
pub trait CharSequence {
    fn as_word(&self) -> Result<&str, TrieError>;
}

impl CharSequence for str {
    fn as_word(&self) -> Result<&str, TrieError> {
        Ok(self)
    }
}

impl CharSequence for String {
    fn as_word(&self) -> Result<&str, TrieError> {
        Ok(self.as_str())
    }
}

impl CharSequence for Value {
    fn as_word(&self) -> Result<&str, TrieError> {
        self.as_str().ok_or(TrieError::Type { found: json_kind(self) })
    }
}

impl<T: CharSequence + ?Sized> CharSequence for &T {
    fn as_word(&self) -> Result<&str, TrieError> {
        (**self).as_word()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reverses `s` code point by code point.
pub fn reversed(s: &str) -> String {
    s.chars().rev().collect()
}
