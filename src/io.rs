//! Output sink used by `print`/`show`/`type`.
//!
//! Mirrors a teacher-style `PrintWriter` seam: primitives never touch
//! stdout directly, they write through this trait, so tests can capture
//! output instead of racing real stdout.

/// Minimal output capability the primitive library is given.
pub trait PrintWriter {
    /// Writes `text` with no trailing newline.
    fn write_text(&mut self, text: &str);
    /// Writes a single newline.
    fn write_newline(&mut self);
}

/// Writes `text` followed by a newline.
pub fn print_line(sink: &mut dyn PrintWriter, text: &str) {
    sink.write_text(text);
    sink.write_newline();
}

/// Writes `text` with no trailing newline.
pub fn print_no_newline(sink: &mut dyn PrintWriter, text: &str) {
    sink.write_text(text);
}

/// Default writer: writes straight to stdout.
#[derive(Debug, Default)]
pub struct StdPrint;

impl PrintWriter for StdPrint {
    fn write_text(&mut self, text: &str) {
        print!("{text}");
    }

    fn write_newline(&mut self) {
        println!();
    }
}

/// Writer that buffers everything into an owned `String`. Used by tests
/// that want to assert on exact printed output.
#[derive(Debug, Default)]
pub struct CollectStringPrint(String);

impl CollectStringPrint {
    pub fn new() -> Self {
        Self(String::new())
    }

    pub fn output(&self) -> &str {
        &self.0
    }
}

impl PrintWriter for CollectStringPrint {
    fn write_text(&mut self, text: &str) {
        self.0.push_str(text);
    }

    fn write_newline(&mut self) {
        self.0.push('\n');
    }
}

/// Writer that discards everything. Useful when a test only cares about the
/// returned value, not the side-channel output.
#[derive(Debug, Default)]
pub struct NoPrint;

impl PrintWriter for NoPrint {
    fn write_text(&mut self, _text: &str) {}
    fn write_newline(&mut self) {}
}
