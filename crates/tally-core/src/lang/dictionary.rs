//! Morphological dictionary for Ukrainian
//!
//! Maps inflected surface forms to their dictionary (lemma) form so that
//! "кави", "каву" and "кавою" all normalize to "кава". The lookup is total:
//! tokens absent from the dictionary lemmatize to themselves, which makes
//! out-of-vocabulary input (brand names, typos, emoji) pass through
//! normalization unchanged instead of failing.
//!
//! A base lexicon of common expense vocabulary ships embedded in the
//! binary and is parsed once per process; callers may merge additional
//! entries from a user-supplied TSV file at startup.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded base lexicon, `surface<TAB>lemma` per line
const EMBEDDED_TSV: &str = include_str!("../../data/uk_lemmas.tsv");

static EMBEDDED: Lazy<MorphDict> = Lazy::new(|| {
    MorphDict::parse_tsv(EMBEDDED_TSV).expect("embedded lemma table is well-formed")
});

/// Surface form → lemma lookup table
#[derive(Debug, Clone, Default)]
pub struct MorphDict {
    lemmas: HashMap<String, String>,
}

impl MorphDict {
    /// The embedded base lexicon, parsed on first use and shared afterwards
    pub fn embedded() -> &'static MorphDict {
        &EMBEDDED
    }

    /// An empty dictionary: every token lemmatizes to itself
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a TSV lemma table. Lines are `surface<TAB>lemma`; blank lines
    /// and `#` comments are skipped. Both columns are case-folded.
    pub fn parse_tsv(text: &str) -> Result<Self> {
        let mut dict = Self::default();
        dict.merge_tsv(text)?;
        Ok(dict)
    }

    /// Load a lemma table from a file
    pub fn from_tsv_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse_tsv(&text)
    }

    /// Merge entries from TSV text into this dictionary. Later entries win,
    /// so a user-supplied table can override the embedded lexicon.
    /// Returns the number of entries merged.
    pub fn merge_tsv(&mut self, text: &str) -> Result<usize> {
        let mut merged = 0;
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (surface, lemma) = line.split_once('\t').ok_or_else(|| {
                Error::Dictionary(format!(
                    "line {}: expected `surface<TAB>lemma`, got {:?}",
                    line_no + 1,
                    line
                ))
            })?;
            let surface = surface.trim().to_lowercase();
            let lemma = lemma.trim().to_lowercase();
            if surface.is_empty() || lemma.is_empty() {
                return Err(Error::Dictionary(format!(
                    "line {}: empty surface form or lemma",
                    line_no + 1
                )));
            }
            self.lemmas.insert(surface, lemma);
            merged += 1;
        }
        debug!("merged {} lemma entries", merged);
        Ok(merged)
    }

    /// Merge a lemma table file into this dictionary
    pub fn merge_tsv_path(&mut self, path: &Path) -> Result<usize> {
        let text = std::fs::read_to_string(path)?;
        self.merge_tsv(&text)
    }

    /// Dictionary form of a token. Unknown tokens map to themselves.
    pub fn lemma<'a>(&'a self, token: &'a str) -> &'a str {
        self.lemmas.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_lexicon_loads() {
        let dict = MorphDict::embedded();
        assert!(!dict.is_empty());
        assert_eq!(dict.lemma("кави"), "кава");
        assert_eq!(dict.lemma("балувана"), "балуваний");
    }

    #[test]
    fn test_unknown_token_passes_through() {
        let dict = MorphDict::embedded();
        assert_eq!(dict.lemma("зумба"), "зумба");
        assert_eq!(dict.lemma("atb-маркет"), "atb-маркет");
    }

    #[test]
    fn test_parse_tsv() {
        let dict = MorphDict::parse_tsv("# comment\n\nКОТИКИ\tкотик\n").unwrap();
        assert_eq!(dict.len(), 1);
        // Both columns are case-folded
        assert_eq!(dict.lemma("котики"), "котик");
    }

    #[test]
    fn test_parse_tsv_malformed_line() {
        let err = MorphDict::parse_tsv("кави кава\n").unwrap_err();
        assert!(matches!(err, Error::Dictionary(_)));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_merge_overrides_existing_entry() {
        let mut dict = MorphDict::embedded().clone();
        assert_eq!(dict.lemma("кави"), "кава");
        dict.merge_tsv("кави\tкавунчик\n").unwrap();
        assert_eq!(dict.lemma("кави"), "кавунчик");
    }

    #[test]
    fn test_from_tsv_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "кавуни\tкавун").unwrap();
        let dict = MorphDict::from_tsv_path(file.path()).unwrap();
        assert_eq!(dict.lemma("кавуни"), "кавун");
    }
}
