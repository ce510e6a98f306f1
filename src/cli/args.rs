//! Flag-token parsing for the salvia command line.
//!
//! The whole option surface is a single hyphen-prefixed token of
//! concatenated flag letters, e.g. `-bpe2`. Letters may appear in any
//! order. `b` (best only) beats `a` (all suggestions) and `s` (simple
//! corpus) beats `p` (probability corpus) when both are present; `e` must
//! be immediately followed by exactly one decimal digit.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::corpus::CorpusFormat;
use crate::error::{Result, SalviaError};

/// Maximum edit distance used when no `eN` flag is given.
pub const DEFAULT_MAX_EDITS: u32 = 1;

/// A flag token carries at most this many flag letters.
const MAX_FLAGS: usize = 5;

/// What to print for each query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputMode {
    /// Every suggestion within the cutoff, ranked best to worst.
    All,
    /// Only the single best suggestion.
    Best,
}

/// The behavior switches encoded in a flag token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    /// What to print for each query.
    pub mode: OutputMode,
    /// How to parse the corpus file.
    pub format: CorpusFormat,
    /// Maximum number of edit operations per suggestion.
    pub max_edits: u32,
}

impl Default for Flags {
    fn default() -> Self {
        Flags {
            mode: OutputMode::All,
            format: CorpusFormat::Probability,
            max_edits: DEFAULT_MAX_EDITS,
        }
    }
}

/// Full program parameters: the flags plus the corpus file.
#[derive(Debug, Clone)]
pub struct Params {
    /// Parsed behavior switches.
    pub flags: Flags,
    /// Path of the corpus or word list.
    pub corpus_file: PathBuf,
}

impl Params {
    /// Bundle flags with the corpus file path.
    pub fn new(flags: Flags, corpus_file: impl Into<PathBuf>) -> Self {
        Params {
            flags,
            corpus_file: corpus_file.into(),
        }
    }
}

/// Parse one flag token into [`Flags`].
///
/// The empty token is valid and yields the defaults (all suggestions,
/// probability corpus, one edit). A non-empty token must start with `-`.
pub fn parse_flags(token: &str) -> Result<Flags> {
    if token.is_empty() {
        return Ok(Flags::default());
    }
    let Some(letters) = token.strip_prefix('-') else {
        return Err(SalviaError::args(format!(
            "malformed parameter list '{token}'"
        )));
    };

    let mut best = false;
    let mut simple = false;
    let mut max_edits = DEFAULT_MAX_EDITS;
    let mut count = 0usize;

    let mut rest = letters.chars();
    while let Some(letter) = rest.next() {
        count += 1;
        if count > MAX_FLAGS {
            return Err(SalviaError::args("too many flags"));
        }
        match letter {
            // The defaults; accepted so they can be spelled out.
            'a' | 'p' => {}
            'b' => best = true,
            's' => simple = true,
            'e' => match rest.next().and_then(|digit| digit.to_digit(10)) {
                Some(n) => max_edits = n,
                None => {
                    return Err(SalviaError::args(
                        "flag 'e' must be followed by a single digit",
                    ));
                }
            },
            other => {
                return Err(SalviaError::args(format!("unrecognized flag '{other}'")));
            }
        }
    }

    Ok(Flags {
        mode: if best { OutputMode::Best } else { OutputMode::All },
        format: if simple {
            CorpusFormat::Simple
        } else {
            CorpusFormat::Probability
        },
        max_edits,
    })
}
