//! Progress display for directory listings.
//!
//! Progress is an injectable capability: a [`ProgressReporter`] takes the raw
//! directory iterator and hands back an equivalent one that may draw a spinner
//! as a side effect. Reporters never change the items that flow through them.

use indicatif::{ProgressBar, ProgressFinish, ProgressIterator, ProgressStyle};
use std::fs;
use std::io::{self, IsTerminal};
use std::sync::Once;
use std::time::Duration;
use tracing::warn;

/// Raw directory listing as produced by [`std::fs::read_dir`].
pub type EntryIter<'a> = Box<dyn Iterator<Item = io::Result<fs::DirEntry>> + 'a>;

pub trait ProgressReporter {
    /// Wraps `items`, optionally reporting progress under `label`.
    fn wrap<'a>(&self, items: EntryIter<'a>, label: &str) -> EntryIter<'a>;
}

/// Identity reporter: plain iteration, no output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn wrap<'a>(&self, items: EntryIter<'a>, _label: &str) -> EntryIter<'a> {
        items
    }
}

/// Spinner on stderr counting listed items, cleared when the listing ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinnerProgress;

impl SpinnerProgress {
    fn bar(label: &str) -> ProgressBar {
        let style = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
            .template("{spinner} {msg} [{pos} items, {elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let pb = ProgressBar::new_spinner()
            .with_style(style)
            .with_message(label.to_string())
            .with_finish(ProgressFinish::AndClear);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

impl ProgressReporter for SpinnerProgress {
    fn wrap<'a>(&self, items: EntryIter<'a>, label: &str) -> EntryIter<'a> {
        Box::new(items.progress_with(Self::bar(label)))
    }
}

static SPINNER_UNAVAILABLE: Once = Once::new();

/// Picks the reporter for a `show_progress` flag.
///
/// A spinner needs a terminal on stderr. Without one, progress is disabled
/// and a warning is logged the first time this happens in the process.
pub fn reporter_for(show_progress: bool) -> Box<dyn ProgressReporter> {
    if !show_progress {
        return Box::new(NoProgress);
    }
    if io::stderr().is_terminal() {
        return Box::new(SpinnerProgress);
    }
    SPINNER_UNAVAILABLE.call_once(|| {
        warn!("stderr is not a terminal, progress bar disabled");
    });
    Box::new(NoProgress)
}
