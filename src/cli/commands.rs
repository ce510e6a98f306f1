//! The read-eval loop behind the salvia binary.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::cli::args::{OutputMode, Params};
use crate::cli::output;
use crate::error::Result;
use crate::suggest::Suggest;

/// Load the corpus named by `params` and answer suggestion queries read
/// from standard input until an empty line or end of input.
pub fn run(params: &Params) -> Result<()> {
    let suggest = Suggest::open(
        &params.corpus_file,
        params.flags.format,
        params.flags.max_edits,
    )?;
    debug!(
        "serving queries against {} with cutoff {}",
        params.corpus_file.display(),
        params.flags.max_edits
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&suggest, params.flags.mode, stdin.lock(), stdout.lock())
}

/// The query loop over arbitrary streams. Each non-empty input line is a
/// query; its suggestions are followed by one blank separator line. Split
/// from [`run`] so the loop can be exercised without the process streams.
pub fn serve<R: BufRead, W: Write>(
    suggest: &Suggest,
    mode: OutputMode,
    input: R,
    mut out: W,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        match mode {
            OutputMode::All => output::write_ranked(&mut out, &suggest.all(&line))?,
            OutputMode::Best => output::write_best(&mut out, &suggest.best(&line))?,
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusFormat;
    use std::io::Cursor;

    fn fixture() -> Suggest {
        Suggest::from_reader(
            Cursor::new("cat\t1.0\ncar\t2.0\nbat\t1.5\n"),
            "test.txt",
            CorpusFormat::Probability,
            1,
        )
        .unwrap()
    }

    #[test]
    fn test_serve_all_mode() {
        let suggest = fixture();
        let mut out = Vec::new();
        serve(&suggest, OutputMode::All, Cursor::new("cat\n"), &mut out).unwrap();
        assert_eq!(out, b"cat\ncar\nbat\n\n");
    }

    #[test]
    fn test_serve_best_mode() {
        let suggest = fixture();
        let mut out = Vec::new();
        serve(&suggest, OutputMode::Best, Cursor::new("cot\nca\n"), &mut out).unwrap();
        assert_eq!(out, b"cat\n\ncar\n\n");
    }

    #[test]
    fn test_serve_stops_at_empty_line() {
        let suggest = fixture();
        let mut out = Vec::new();
        serve(
            &suggest,
            OutputMode::Best,
            Cursor::new("cat\n\ncar\n"),
            &mut out,
        )
        .unwrap();
        assert_eq!(out, b"cat\n\n");
    }

    #[test]
    fn test_serve_prints_blank_line_for_no_hits() {
        let suggest = fixture();
        let mut out = Vec::new();
        serve(&suggest, OutputMode::Best, Cursor::new("zzzzzz\n"), &mut out).unwrap();
        assert_eq!(out, b"\n\n");
    }
}
