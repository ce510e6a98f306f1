//! Line-oriented corpus parsing for the suggestion dictionary.
//!
//! A corpus is a text file with one word per line. Two formats exist:
//! probability corpora carry a tab-separated floating point prior after
//! each word, and simple corpora are bare word lists where every word gets
//! the default prior. Blank lines are skipped. Anything else is a parse
//! error naming the corpus and the offending line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SalviaError};

/// Default prior assigned to every word of a simple-mode corpus.
pub const DEFAULT_PRIOR: f64 = 1.0;

/// The line format of a corpus file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorpusFormat {
    /// `WORD<TAB>NUMBER` lines; the number becomes the word's prior.
    Probability,
    /// Bare `WORD` lines; every word gets [`DEFAULT_PRIOR`].
    Simple,
}

/// Read `(word, prior)` pairs from a corpus.
///
/// `name` identifies the corpus in parse diagnostics. Blank lines are
/// skipped and do not count toward the line number reported in errors.
pub fn read_corpus<R: BufRead>(
    reader: R,
    name: &str,
    format: CorpusFormat,
) -> Result<Vec<(String, f64)>> {
    let mut entries = Vec::new();
    let mut consumed: u32 = 0;

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        consumed += 1;
        let entry = match format {
            CorpusFormat::Probability => parse_probability_line(&line, name, consumed)?,
            CorpusFormat::Simple => parse_simple_line(&line, name, consumed)?,
        };
        entries.push(entry);
    }

    debug!("read {} corpus entries from {}", entries.len(), name);
    Ok(entries)
}

/// Open `path` and read it with [`read_corpus`].
pub fn load_corpus<P: AsRef<Path>>(path: P, format: CorpusFormat) -> Result<Vec<(String, f64)>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let name = path.to_string_lossy();
    read_corpus(BufReader::new(file), name.as_ref(), format)
}

/// Parse one `WORD<TAB>NUMBER` line.
fn parse_probability_line(line: &str, file: &str, number: u32) -> Result<(String, f64)> {
    let Some((word, value)) = line.split_once('\t') else {
        return Err(SalviaError::parse(
            file,
            number,
            "expected a word and a tab-separated number",
        ));
    };
    check_word(word, file, number)?;
    if !is_fractional_number(value.as_bytes()) {
        return Err(SalviaError::parse(
            file,
            number,
            format!("malformed floating point number '{value}'"),
        ));
    }
    let prior = value.parse::<f64>().map_err(|err| {
        SalviaError::parse(
            file,
            number,
            format!("malformed floating point number '{value}': {err}"),
        )
    })?;
    Ok((word.to_string(), prior))
}

/// Parse one bare `WORD` line.
fn parse_simple_line(line: &str, file: &str, number: u32) -> Result<(String, f64)> {
    check_word(line, file, number)?;
    Ok((line.to_string(), DEFAULT_PRIOR))
}

fn check_word(word: &str, file: &str, number: u32) -> Result<()> {
    if word.is_empty() || !word.bytes().all(|byte| byte.is_ascii_alphabetic()) {
        return Err(SalviaError::parse(
            file,
            number,
            format!("'{word}' is not an alphabetic word"),
        ));
    }
    Ok(())
}

/// Matches `'-'? DIGIT+ '.' DIGIT+` and nothing else: sign-optional
/// integer part of at least one digit, mandatory dot, fractional part of
/// at least one digit.
fn is_fractional_number(bytes: &[u8]) -> bool {
    let unsigned = bytes.strip_prefix(b"-").unwrap_or(bytes);
    let Some(dot) = unsigned.iter().position(|&byte| byte == b'.') else {
        return false;
    };
    let integral = &unsigned[..dot];
    let fractional = &unsigned[dot + 1..];
    !integral.is_empty()
        && !fractional.is_empty()
        && integral.iter().all(u8::is_ascii_digit)
        && fractional.iter().all(u8::is_ascii_digit)
}
