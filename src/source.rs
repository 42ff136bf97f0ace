//! Where source lines come from: a file, stdin, or (in tests) a fixed list.
//!
//! The evaluator's definition reader is handed a `&mut dyn LineSource` and
//! pulls continuation lines through it directly -- it never sees a file path
//! or stdin handle.

use std::io::{self, BufRead, Write};

/// Strips everything from the first unescaped `;` to end of line. Comments
/// never occur inside a bracketed list (lexing handles that), only at the
/// top-level-line-text stage, before the lexer ever runs.
pub fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Supplies raw source lines to the session loop.
///
/// `next_top_level_line` returns `None` at end of input. `next_continuation_line`
/// is only ever called while collecting a `to ... end` body -- implementations
/// that have genuinely run out of lines there are looking at a malformed
/// program (an unterminated `to`) and should surface that as best fits their
/// medium (a load error for a file, a fresh prompt for a terminal).
pub trait LineSource {
    fn next_top_level_line(&mut self) -> Option<String>;
    fn next_continuation_line(&mut self) -> String;
}

/// A source backed by a fixed list of lines, already split (a loaded file,
/// or a test fixture).
pub struct FileSource {
    lines: Vec<String>,
    pos: usize,
}

impl FileSource {
    pub fn new(contents: &str) -> Self {
        Self {
            lines: contents.lines().map(str::to_string).collect(),
            pos: 0,
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            pos: 0,
        }
    }
}

impl LineSource for FileSource {
    fn next_top_level_line(&mut self) -> Option<String> {
        let line = self.lines.get(self.pos)?.clone();
        self.pos += 1;
        Some(line)
    }

    /// A `to` without a matching `end` by end-of-file is a load error; there
    /// is nothing sensible to return, so this is only ever called on a file
    /// already known to balance (checked before execution starts, see the
    /// session module), and panics otherwise as a defect in that check.
    fn next_continuation_line(&mut self) -> String {
        self.lines
            .get(self.pos)
            .cloned()
            .map(|line| {
                self.pos += 1;
                line
            })
            .expect("next_continuation_line called past end of file")
    }
}

/// An interactive source reading from stdin, printing the two conventional
/// prompts as it goes.
pub struct InteractiveSource<R, W> {
    reader: R,
    writer: W,
}

impl InteractiveSource<io::BufReader<io::Stdin>, io::Stdout> {
    pub fn stdin() -> Self {
        Self {
            reader: io::BufReader::new(io::stdin()),
            writer: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> InteractiveSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_prompted(&mut self, prompt: &str) -> Option<String> {
        write!(self.writer, "{prompt}").ok();
        self.writer.flush().ok();
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.ends_with('\n') {
                    buf.pop();
                    if buf.ends_with('\r') {
                        buf.pop();
                    }
                }
                Some(buf)
            }
            Err(_) => None,
        }
    }
}

impl<R: BufRead, W: Write> LineSource for InteractiveSource<R, W> {
    fn next_top_level_line(&mut self) -> Option<String> {
        self.read_prompted("? ")
    }

    fn next_continuation_line(&mut self) -> String {
        self.read_prompted("> ").unwrap_or_default()
    }
}

/// Used wherever the evaluator needs a `&mut dyn LineSource` but invariant
/// I4 (no nested `to`) guarantees the definition reader will never actually
/// be reached through it -- user procedure bodies and `run`/`if`/`ifelse`
/// branches are already-collected token lines, not live input.
pub struct NoSource;

impl LineSource for NoSource {
    fn next_top_level_line(&mut self) -> Option<String> {
        None
    }

    fn next_continuation_line(&mut self) -> String {
        unreachable!("a nested 'to' would violate the no-nested-definitions invariant")
    }
}

/// Checks that every `to` in `lines` is matched by an `end` before the file
/// runs out, without running any of it. Used by file-mode loading so an
/// unterminated definition is reported as a load error instead of panicking
/// partway through [`FileSource::next_continuation_line`].
pub fn check_balanced_definitions(lines: &[String]) -> Result<(), String> {
    let mut in_definition = false;
    for raw in lines {
        let stripped = strip_comment(raw).trim();
        if stripped.is_empty() {
            continue;
        }
        if in_definition {
            if stripped == "end" {
                in_definition = false;
            }
        } else if stripped == "to" || stripped.starts_with("to ") {
            in_definition = true;
        }
    }
    if in_definition {
        return Err("unterminated 'to' definition: reached end of file before 'end'".to_string());
    }
    Ok(())
}
