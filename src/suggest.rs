//! Corpus-backed correction suggestions for single words.
//!
//! [`Suggest`] loads a corpus into a [`Trie`] once and then answers
//! queries read-only. Suggestions are ranked by edit distance first and by
//! the word's corpus prior second, so among equally close corrections the
//! more frequent word wins.

use std::cmp::Ordering;
use std::io::BufRead;
use std::path::Path;

use log::debug;

use crate::corpus::{self, CorpusFormat};
use crate::error::Result;
use crate::trie::{TolerantHit, Trie};

/// Spelling suggestions against a fixed, corpus-derived dictionary.
///
/// The facade is stateless across queries: [`best`](Suggest::best) and
/// [`all`](Suggest::all) take `&self`, so one loaded `Suggest` can serve
/// any number of concurrent readers.
#[derive(Debug, Clone)]
pub struct Suggest {
    words: Trie<f64>,
    max_edits: u32,
}

impl Suggest {
    /// Load the corpus file at `path` and build the dictionary.
    pub fn open<P: AsRef<Path>>(path: P, format: CorpusFormat, max_edits: u32) -> Result<Self> {
        let entries = corpus::load_corpus(path, format)?;
        Self::from_entries(entries, max_edits)
    }

    /// Read a corpus from an arbitrary reader. `name` identifies the
    /// corpus in parse diagnostics.
    pub fn from_reader<R: BufRead>(
        reader: R,
        name: &str,
        format: CorpusFormat,
        max_edits: u32,
    ) -> Result<Self> {
        let entries = corpus::read_corpus(reader, name, format)?;
        Self::from_entries(entries, max_edits)
    }

    fn from_entries(entries: Vec<(String, f64)>, max_edits: u32) -> Result<Self> {
        let mut words = Trie::new();
        words.insert_all(entries)?;
        debug!(
            "suggestion dictionary holds {} words in {} states",
            words.len(),
            words.state_count()
        );
        Ok(Suggest { words, max_edits })
    }

    /// The configured maximum edit distance.
    pub fn max_edits(&self) -> u32 {
        self.max_edits
    }

    /// Number of dictionary words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The best correction for `word`, or the empty string when nothing
    /// lies within the configured edit distance.
    pub fn best(&self, word: &str) -> String {
        self.words
            .tolerant_find(word, self.max_edits)
            .into_iter()
            .min_by(rank)
            .map(|hit| String::from_utf8_lossy(&hit.term).into_owned())
            .unwrap_or_default()
    }

    /// Every correction for `word` within the configured edit distance,
    /// ordered best to worst.
    pub fn all(&self, word: &str) -> Vec<String> {
        let mut hits = self.words.tolerant_find(word, self.max_edits);
        hits.sort_by(rank);
        hits.into_iter()
            .map(|hit| String::from_utf8_lossy(&hit.term).into_owned())
            .collect()
    }
}

/// Total order on hits: smaller distance first, then larger prior, then
/// the term bytes so equal-priority suggestions come out deterministically.
fn rank(a: &TolerantHit<f64>, b: &TolerantHit<f64>) -> Ordering {
    a.distance
        .cmp(&b.distance)
        .then_with(|| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal))
        .then_with(|| a.term.cmp(&b.term))
}
