use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use structopt::StructOpt;

use trie_tools::batch::{load_batch, BatchFormat};
use trie_tools::{DualTrieSuffixIndex, Index, LongestCommonPrefixFinder};

/// Load a batch of words into a trie and query it.
#[derive(StructOpt)]
struct Cli {
    /// The batch file, one word per line unless --json is given
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// The batch file is a JSON array
    #[structopt(long)]
    json: bool,
    /// Split each line on this character
    #[structopt(long)]
    delimiter: Option<char>,
    /// Column holding the word when --delimiter is given
    #[structopt(long, default_value = "0")]
    column: usize,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Longest prefix shared by every word
    Common,
    /// Count words ending with each pattern
    Suffix { patterns: Vec<String> },
    /// Check whether any word starts with each prefix
    Prefix { prefixes: Vec<String> },
    /// List the distinct words
    Words {
        #[structopt(long, default_value = "")]
        prefix: String,
    },
}

#[derive(Serialize)]
struct Answer<'a, T: Serialize> {
    query: &'a str,
    result: T,
}

fn print_answers<T: Serialize>(answers: &[Answer<T>]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(answers)?);
    Ok(())
}

fn index_of(batch: &[Value]) -> Result<DualTrieSuffixIndex> {
    let mut index = DualTrieSuffixIndex::new();
    index.add_all(batch)?;
    Ok(index)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::from_args();

    let format = BatchFormat::builder()
        .json(args.json)
        .delimiter(args.delimiter)
        .word_column(args.column)
        .build();
    let batch = load_batch(&args.path, &format)?;

    match &args.command {
        Command::Common => {
            let prefix = LongestCommonPrefixFinder::new().find_longest_common_word(&batch)?;
            print_answers(&[Answer { query: "common", result: prefix }])
        }
        Command::Suffix { patterns } => {
            let index = index_of(&batch)?;
            let answers = patterns.iter()
                .map(|x| Ok(Answer { query: x, result: index.count_words_with_suffix(x)? }))
                .collect::<Result<Vec<_>>>()?;
            print_answers(&answers)
        }
        Command::Prefix { prefixes } => {
            let index = index_of(&batch)?;
            let answers = prefixes.iter()
                .map(|x| Ok(Answer { query: x, result: index.has_prefix(x)? }))
                .collect::<Result<Vec<_>>>()?;
            print_answers(&answers)
        }
        Command::Words { prefix } => {
            let index = index_of(&batch)?;
            print_answers(&[Answer { query: prefix, result: index.words_with_prefix(prefix)? }])
        }
    }
}
