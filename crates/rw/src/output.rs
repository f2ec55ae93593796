//! Terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Rendered fragments go to stdout; diagnostics go to stderr.
pub(crate) struct Output {
    out: Term,
    err: Term,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            red: Style::new().red(),
        }
    }

    /// Write a line of command output to stdout.
    pub(crate) fn write(&self, msg: &str) -> std::io::Result<()> {
        self.out.write_line(msg)
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }
}
