//! Terminal progress bar
//!
//! Renders a 30-cell bar followed by a percentage:
//!
//! ```text
//! Progress:[===============                ] 50.0%
//! ```
//!
//! While incomplete the bar carries one extra `=` as its head, so it is
//! always 31 characters wide between the brackets.

use std::io::{self, Write};

/// Number of cells in the bar
pub const BAR_WIDTH: usize = 30;

const CLEAR_LINE: &str = "\r\x1b[K";

/// Render the progress line for `fraction` in `[0, 1]`.
///
/// Values outside the range are clamped.
///
/// # Examples
///
/// ```
/// use upscaler::progress::render_progress;
///
/// assert_eq!(
///     render_progress(1.0),
///     format!("Progress:[{}] 100.0%", "=".repeat(30))
/// );
/// ```
pub fn render_progress(fraction: f64) -> String {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let filled = ((BAR_WIDTH as f64 * fraction) as usize).min(BAR_WIDTH);
    let head = if filled < BAR_WIDTH { "=" } else { "" };
    format!(
        "Progress:[{}{}{}] {:.1}%",
        "=".repeat(filled),
        head,
        " ".repeat(BAR_WIDTH - filled),
        fraction * 100.0
    )
}

/// Progress bar that redraws a single terminal line.
///
/// Each redraw returns the cursor to column 0 and clears the line before
/// writing. Updates that would render the same text are skipped, so a
/// per-pixel observer produces at most one write per visible change.
pub struct ProgressBar<W: Write> {
    sink: W,
    last: Option<String>,
}

impl ProgressBar<io::Stderr> {
    /// Progress bar on standard error
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ProgressBar<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, last: None }
    }

    /// Redraw for `fraction` if the rendered line changed.
    pub fn update(&mut self, fraction: f64) -> io::Result<()> {
        let line = render_progress(fraction);
        if self.last.as_deref() == Some(line.as_str()) {
            return Ok(());
        }
        write!(self.sink, "{}{}", CLEAR_LINE, line)?;
        self.sink.flush()?;
        self.last = Some(line);
        Ok(())
    }

    /// End the bar with a newline and return the sink.
    pub fn finish(mut self) -> io::Result<W> {
        if self.last.is_some() {
            writeln!(self.sink)?;
            self.sink.flush()?;
        }
        Ok(self.sink)
    }
}
