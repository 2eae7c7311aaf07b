use log::debug;

use crate::alphabet::CharSequence;
use crate::error::TrieError;
use crate::index::Index;
use crate::trie::Trie;

/// Finds the longest prefix shared by every word of a batch.
#[derive(Default, Debug)]
pub struct LongestCommonPrefixFinder {
    trie: Trie,
}

impl LongestCommonPrefixFinder {
    pub fn new() -> LongestCommonPrefixFinder {
        Default::default()
    }

    /// The trie built from the last successful batch.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Every call starts from a fresh trie. If some word is rejected the
    /// error is returned and the trie of the previous batch is kept.
    pub fn find_longest_common_word<I>(&mut self, words: I) -> Result<String, TrieError>
        where I: IntoIterator, I::Item: CharSequence {
        let mut words = words.into_iter().peekable();
        if words.peek().is_none() {
            self.trie = Trie::new();
            return Ok(String::new());
        }

        let mut trie = Trie::new();
        trie.add_all(words)?;
        self.trie = trie;

        let prefix = self.common_prefix();
        debug!("longest common prefix of {} words: {:?}", self.trie.word_count(), prefix);
        Ok(prefix)
    }

    // Descend while the path is unambiguous: a fork means the words diverge,
    // a terminal node means a shorter word already ended here.
    fn common_prefix(&self) -> String {
        let mut prefix = String::new();
        let mut node = self.trie.root();
        while !node.is_end_of_word() {
            match node.only_child() {
                Some((c, child)) => {
                    prefix.push(c);
                    node = child;
                }
                None => break,
            }
        }
        prefix
    }
}

/// One-shot form of [`LongestCommonPrefixFinder::find_longest_common_word`].
pub fn find_longest_common_word<I>(words: I) -> Result<String, TrieError>
    where I: IntoIterator, I::Item: CharSequence {
    LongestCommonPrefixFinder::new().find_longest_common_word(words)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use serde_json::json;

    use crate::error::TrieError;
    use crate::query::longest_common::{find_longest_common_word, LongestCommonPrefixFinder};

    #[test]
    fn finds_shared_prefixes() {
        assert_eq!(find_longest_common_word(["flower", "flow", "flight"]).unwrap(), "fl");
        assert_eq!(find_longest_common_word(["interspecies", "interstellar", "interstate"]).unwrap(), "inters");
        assert_eq!(find_longest_common_word(["dog", "racecar", "car"]).unwrap(), "");
    }

    #[test]
    fn handles_degenerate_batches() {
        assert_eq!(find_longest_common_word(Vec::<&str>::new()).unwrap(), "");
        assert_eq!(find_longest_common_word(["a"]).unwrap(), "a");
        assert_eq!(find_longest_common_word(["", "b", "c"]).unwrap(), "");
        assert_eq!(find_longest_common_word(["same", "same"]).unwrap(), "same");
    }

    #[test]
    fn stops_where_a_shorter_word_ends() {
        assert_eq!(find_longest_common_word(["carpet", "car"]).unwrap(), "car");
        assert_eq!(find_longest_common_word(["car", "carpet", "cartoon"]).unwrap(), "car");
        assert_eq!(find_longest_common_word(["ab", "abc", "abd"]).unwrap(), "ab");
    }

    #[test]
    fn rejects_non_strings() {
        let batch = vec![json!("flow"), json!(7), json!("flower")];
        assert_eq!(find_longest_common_word(&batch), Err(TrieError::Type { found: "number" }));

        let batch = vec![json!("flow"), json!("flower")];
        assert_eq!(find_longest_common_word(&batch).unwrap(), "flow");
    }

    #[test]
    fn failed_batch_keeps_previous_trie() {
        let mut finder = LongestCommonPrefixFinder::new();
        assert_eq!(finder.find_longest_common_word(["flower", "flow"]).unwrap(), "flow");
        assert!(finder.find_longest_common_word(&[json!("x"), json!(null)]).is_err());
        assert_eq!(finder.trie().words(), vec!["flow", "flower"]);
    }

    #[test]
    fn batches_do_not_accumulate() {
        let mut finder = LongestCommonPrefixFinder::new();
        assert_eq!(finder.find_longest_common_word(["apple", "apply"]).unwrap(), "appl");
        assert_eq!(finder.find_longest_common_word(["banana", "band"]).unwrap(), "ban");
        assert_eq!(finder.trie().word_count(), 2);
    }

    #[test]
    fn distinct_first_letters_share_nothing() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut letters: Vec<char> = ('a'..='z').collect();
        for _ in 0..50 {
            letters.shuffle(&mut rng);
            let batch: Vec<String> = letters[..rng.gen_range(2..10)].iter()
                .map(|first| {
                    let tail: String = (0..rng.gen_range(0..6))
                        .map(|_| rng.gen_range('a'..='z'))
                        .collect();
                    format!("{}{}", first, tail)
                })
                .collect();
            assert_eq!(find_longest_common_word(&batch).unwrap(), "", "{:?}", batch);
        }
    }

    #[test]
    fn empty_word_empties_the_prefix() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let mut batch: Vec<String> = (0..rng.gen_range(1..8))
                .map(|_| "pre".to_string() + &rng.gen_range(0..100).to_string())
                .collect();
            let at = rng.gen_range(0..=batch.len());
            batch.insert(at, String::new());
            assert_eq!(find_longest_common_word(&batch).unwrap(), "", "{:?}", batch);
        }
    }

    #[test]
    fn common_prefix_prefixes_every_word() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let batch: Vec<String> = (0..rng.gen_range(1..6))
                .map(|_| (0..rng.gen_range(0..5)).map(|_| rng.gen_range('a'..='c')).collect())
                .collect();
            let prefix = find_longest_common_word(&batch).unwrap();
            assert!(batch.iter().all(|w| w.starts_with(&prefix)), "{:?} {:?}", batch, prefix);

            let longer = batch.iter()
                .filter(|w| w.chars().count() > prefix.chars().count())
                .map(|w| w.chars().take(prefix.chars().count() + 1).collect::<String>())
                .next();
            if let Some(longer) = longer {
                assert!(!batch.iter().all(|w| w.starts_with(&longer)), "{:?} {:?}", batch, prefix);
            }
        }
    }
}
