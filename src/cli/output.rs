//! Output formatting for the salvia command line.

use std::io::{self, Write};

/// Write every suggestion on its own line, best first.
pub fn write_ranked<W: Write>(out: &mut W, suggestions: &[String]) -> io::Result<()> {
    for word in suggestions {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

/// Write the single best suggestion (possibly the empty string).
pub fn write_best<W: Write>(out: &mut W, suggestion: &str) -> io::Result<()> {
    writeln!(out, "{suggestion}")
}

/// Usage text shown for bare invocations and argument errors.
pub fn usage(program: &str, message: &str) -> String {
    format!(
        "{program}: {message}\n\
         Usage: {program} [-FLAGS] CORPUSFILE\n\
         Reads words from standard input and prints correction suggestions to standard output.\n\
         Flags are concatenated into a single token, e.g. '-bpe2'.\n\
         Options:\n\
         \x20 a   print all ranked suggestions (default)\n\
         \x20 b   print only the single best suggestion\n\
         \x20 p   corpus lines are a word, a tab, and a probability (default)\n\
         \x20 s   corpus lines are a bare word\n\
         \x20 eN  search up to N edit operations, one digit 0-9 (default 1)\n"
    )
}
