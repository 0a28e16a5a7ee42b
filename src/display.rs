//! Configurable formatting of the recorded timeline.

use crate::history::EditHistory;
use crate::snapshot::Snapshot;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
#[cfg(feature = "colored")]
use colored::Colorize;
use core::fmt::{self, Write};

/// Configurable display formatting for an [`EditHistory`].
///
/// Lists the recorded states newest first, one per line: the states
/// waiting on the redo stack, the current state marked `[HEAD]`, the
/// states on the undo stack, and the position-zero state from before
/// anything was registered.
///
/// # Examples
/// ```
/// use rewind::{EditHistory, VecLayer};
///
/// let mut layer = VecLayer::new();
/// let mut history = EditHistory::new();
/// layer.insert("tower");
/// history.register(&layer);
/// layer.insert("bridge");
/// history.register(&layer);
///
/// println!("{}", history.display());
/// ```
pub struct Display<'a, F, S> {
    history: &'a EditHistory<F, S>,
    format: Format,
}

impl<F, S> Display<'_, F, S> {
    /// Show colored output (on by default).
    ///
    /// Requires the `colored` feature to be enabled.
    #[cfg(feature = "colored")]
    pub fn colored(&mut self, on: bool) -> &mut Self {
        self.format.colored = on;
        self
    }

    /// Show the position of each state (on by default).
    pub fn positions(&mut self, on: bool) -> &mut Self {
        self.format.positions = on;
        self
    }

    /// Show the capture time of each snapshot (on by default).
    ///
    /// Requires the `chrono` feature to be enabled.
    #[cfg(feature = "chrono")]
    pub fn timestamps(&mut self, on: bool) -> &mut Self {
        self.format.timestamps = on;
        self
    }

    fn fmt_state(
        &self,
        f: &mut fmt::Formatter,
        at: usize,
        head: bool,
        state: Option<Option<&Snapshot<F>>>,
    ) -> fmt::Result {
        if self.format.positions {
            self.format.position(f, at)?;
        }
        if head {
            self.format.head(f)?;
        }
        if let Some(state) = state {
            f.write_char(' ')?;
            match state {
                Some(snapshot) => {
                    self.format.count(f, snapshot.len())?;
                    #[cfg(feature = "chrono")]
                    {
                        if self.format.timestamps {
                            self.format.timestamp(f, &snapshot.timestamp())?;
                        }
                    }
                }
                None => self.format.text(f, "empty")?,
            }
        }
        writeln!(f)
    }
}

impl<'a, F, S> From<&'a EditHistory<F, S>> for Display<'a, F, S> {
    fn from(history: &'a EditHistory<F, S>) -> Self {
        Display {
            history,
            format: Format::default(),
        }
    }
}

impl<F, S> fmt::Display for Display<'_, F, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let history = self.history;
        let total = history.undo_stack.len()
            + history.redo_stack.len()
            + usize::from(history.current.is_some());
        for (i, state) in history.redo_stack.iter().enumerate() {
            self.fmt_state(f, total - i, false, Some(state.as_ref()))?;
        }
        if let Some(current) = &history.current {
            self.fmt_state(f, history.undo_stack.len() + 1, true, Some(Some(current)))?;
        }
        for (i, state) in history.undo_stack.iter().enumerate().rev() {
            self.fmt_state(f, i + 1, false, Some(state.as_ref()))?;
        }
        self.fmt_state(f, 0, history.current.is_none(), None)
    }
}

#[derive(Copy, Clone, Debug)]
struct Format {
    #[cfg(feature = "colored")]
    colored: bool,
    positions: bool,
    #[cfg(feature = "chrono")]
    timestamps: bool,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            #[cfg(feature = "colored")]
            colored: true,
            positions: true,
            #[cfg(feature = "chrono")]
            timestamps: true,
        }
    }
}

impl Format {
    fn position(self, f: &mut fmt::Formatter, at: usize) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{}", alloc::format!("{}", at).yellow().bold());
        }
        write!(f, "{}", at)
    }

    fn head(self, f: &mut fmt::Formatter) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(
                f,
                " {}{}{}",
                "[".yellow(),
                "HEAD".cyan().bold(),
                "]".yellow()
            );
        }
        f.write_str(" [HEAD]")
    }

    fn count(self, f: &mut fmt::Formatter, len: usize) -> fmt::Result {
        if len == 1 {
            f.write_str("1 feature")
        } else {
            write!(f, "{} features", len)
        }
    }

    fn text(self, f: &mut fmt::Formatter, text: &str) -> fmt::Result {
        f.write_str(text)
    }

    #[cfg(feature = "chrono")]
    fn timestamp(self, f: &mut fmt::Formatter, timestamp: &DateTime<Utc>) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(
                f,
                " {}",
                alloc::format!("at {}", timestamp.format("%F %T%.3f")).yellow()
            );
        }
        write!(f, " at {}", timestamp.format("%F %T%.3f"))
    }
}
