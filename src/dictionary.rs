//! Dictionary readers: the external collaborators that turn on-disk or
//! in-memory corpora into `(term, count, canonical)` triples for
//! [`crate::SymSpell::load_dictionary`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::SpellCheckError;

/// One dictionary record: lowercased at the caller's discretion, not here.
pub type DictionaryEntry = (String, i64, Option<String>);

fn try_parse_count(field: &str) -> Option<i64> {
    field.parse::<i64>().ok()
}

/// Reads a whitespace-delimited dictionary file, one entry per line.
/// Lines with fewer than two fields or a non-integer count are skipped.
pub struct SpaceDelimitedFileIterator {
    lines: std::io::Lines<BufReader<File>>,
    term_index: usize,
    count_index: usize,
    canonical_index: Option<usize>,
}

impl SpaceDelimitedFileIterator {
    pub fn new<P: AsRef<Path>>(
        path: P,
        term_index: usize,
        count_index: usize,
        canonical_index: Option<usize>,
    ) -> Result<Self, SpellCheckError> {
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            term_index,
            count_index,
            canonical_index,
        })
    }
}

impl Iterator for SpaceDelimitedFileIterator {
    type Item = DictionaryEntry;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable dictionary line");
                    continue;
                }
            };
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 2 {
                tracing::debug!(line = %line, "skipping malformed dictionary line: too few fields");
                continue;
            }
            let Some(term) = fields.get(self.term_index) else {
                continue;
            };
            let Some(count_field) = fields.get(self.count_index) else {
                continue;
            };
            let Some(count) = try_parse_count(count_field) else {
                tracing::debug!(field = %count_field, "skipping malformed dictionary line: non-integer count");
                continue;
            };
            let canonical = self
                .canonical_index
                .and_then(|idx| fields.get(idx))
                .map(|s| s.to_string());
            return Some((term.to_string(), count, canonical));
        }
        None
    }
}

/// Reads a delimited-columns file with a header row, mapping columns by name.
pub struct CsvFileIterator {
    reader: csv::Reader<File>,
    term_col: String,
    count_col: String,
    canonical_term_col: String,
}

impl CsvFileIterator {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, SpellCheckError> {
        Self::with_columns(path, "term", "count", "canonical_term")
    }

    pub fn with_columns<P: AsRef<Path>>(
        path: P,
        term_col: &str,
        count_col: &str,
        canonical_term_col: &str,
    ) -> Result<Self, SpellCheckError> {
        let reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
        Ok(Self {
            reader,
            term_col: term_col.to_string(),
            count_col: count_col.to_string(),
            canonical_term_col: canonical_term_col.to_string(),
        })
    }
}

impl Iterator for CsvFileIterator {
    type Item = DictionaryEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let headers = match self.reader.headers() {
            Ok(headers) => headers.clone(),
            Err(err) => {
                tracing::warn!(error = %err, "could not read CSV headers");
                return None;
            }
        };

        let mut record = csv::StringRecord::new();
        loop {
            match self.reader.read_record(&mut record) {
                Ok(false) => return None,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable CSV record");
                    continue;
                }
                Ok(true) => {}
            }

            let term = headers
                .iter()
                .position(|h| h == self.term_col)
                .and_then(|idx| record.get(idx));
            let count = headers
                .iter()
                .position(|h| h == self.count_col)
                .and_then(|idx| record.get(idx))
                .and_then(try_parse_count);
            let canonical = headers
                .iter()
                .position(|h| h == self.canonical_term_col)
                .and_then(|idx| record.get(idx))
                .map(|s| s.to_string());

            match (term, count) {
                (Some(term), Some(count)) => return Some((term.to_string(), count, canonical)),
                _ => {
                    tracing::debug!("skipping malformed CSV record: missing term or count");
                    continue;
                }
            }
        }
    }
}

/// Adapts an in-memory list of words into the dictionary-entry contract.
/// Each entry is emitted as `(lowercase(s), 1, Some(s.trim()))`.
pub struct ListIterator<I> {
    inner: I,
}

impl<I> ListIterator<I>
where
    I: Iterator<Item = String>,
{
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I> Iterator for ListIterator<I>
where
    I: Iterator<Item = String>,
{
    type Item = DictionaryEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|word| {
            let trimmed = word.trim().to_string();
            (trimmed.to_lowercase(), 1, Some(trimmed))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn space_delimited_skips_malformed_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "the 23135851162\nbadline\nof 13151942776 abc\ntravelling 6271787 traveling\n"
        )
        .unwrap();
        let iter = SpaceDelimitedFileIterator::new(file.path(), 0, 1, Some(2)).unwrap();
        let entries: Vec<_> = iter.collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], ("the".to_string(), 23135851162, None));
        assert_eq!(
            entries[2],
            ("travelling".to_string(), 6271787, Some("traveling".to_string()))
        );
    }

    #[test]
    fn csv_reads_named_columns_and_handles_missing_canonical() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "term,count,canonical_term\ntest,1,canonical test\nnope,notanumber,\n"
        )
        .unwrap();
        let entries: Vec<_> = CsvFileIterator::new(file.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "test");
        assert_eq!(entries[0].1, 1);
        assert_eq!(entries[0].2.as_deref(), Some("canonical test"));
    }

    #[test]
    fn list_iterator_lowercases_and_trims() {
        let words = vec![" Hello ".to_string(), "World".to_string()];
        let entries: Vec<_> = ListIterator::new(words.into_iter()).collect();
        assert_eq!(entries[0], ("hello".to_string(), 1, Some("Hello".to_string())));
        assert_eq!(entries[1], ("world".to_string(), 1, Some("World".to_string())));
    }
}
