use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};
use serde_json::Value;
use typed_builder::TypedBuilder;

/// How a batch file is laid out.
#[derive(TypedBuilder, Debug, Clone)]
pub struct BatchFormat {
    /// The whole file is one JSON array; its elements may be any JSON value.
    #[builder(default)]
    json: bool,
    #[builder(default)]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: usize,
}

impl BatchFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter).nth(self.word_column),
        }
    }

    /// Line files skip empty lines; JSON files keep every element.
    pub fn read<R: BufRead>(&self, reader: R) -> Result<Vec<Value>> {
        if self.json {
            let words: Vec<Value> = serde_json::from_reader(reader)
                .context("batch is not a JSON array")?;
            return Ok(words);
        }

        let mut words = vec![];
        let mut skipped: usize = 0;
        for line in reader.lines() {
            let line = line.context("failed to read batch line")?;
            if line.is_empty() {
                continue;
            }
            match self.parse_line(&line) {
                Some(word) => words.push(Value::String(word.to_string())),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!("{} lines have no column {}", skipped, self.word_column);
        }
        Ok(words)
    }
}

pub fn load_batch(path: &Path, format: &BatchFormat) -> Result<Vec<Value>> {
    info!("Reading words from {:?}", path);
    let start = Instant::now();

    let file = File::open(path)
        .with_context(|| format!("failed to open {:?}", path))?;
    let words = format.read(BufReader::new(file))?;

    info!("Read {} words in {:.3}s", words.len(), start.elapsed().as_secs_f64());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use serde_json::json;

    use crate::batch::BatchFormat;

    #[test]
    fn reads_plain_lines() {
        let format = BatchFormat::builder().build();
        let words = format.read(Cursor::new("apple\n\nbanana\ncat\n")).unwrap();
        assert_eq!(words, vec![json!("apple"), json!("banana"), json!("cat")]);
    }

    #[test]
    fn reads_a_column_of_delimited_lines() {
        let format = BatchFormat::builder().delimiter(Some('\t')).word_column(1).build();
        let words = format.read(Cursor::new("1\tflower\n2\tflow\nbroken\n3\tflight")).unwrap();
        assert_eq!(words, vec![json!("flower"), json!("flow"), json!("flight")]);
    }

    #[test]
    fn reads_json_arrays_as_is() {
        let format = BatchFormat::builder().json(true).build();
        let words = format.read(Cursor::new(r#"["", "b", 3, ["c"]]"#)).unwrap();
        assert_eq!(words, vec![json!(""), json!("b"), json!(3), json!(["c"])]);
    }

    #[test]
    fn rejects_json_that_is_not_an_array() {
        let format = BatchFormat::builder().json(true).build();
        assert!(format.read(Cursor::new(r#"{"words": []}"#)).is_err());
    }
}
