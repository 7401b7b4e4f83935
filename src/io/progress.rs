//! Progress display for event script replay

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::algorithm::controller::EventOutcome;

static REPLAY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Events: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks replay position plus running growth and placement counts
pub struct ReplayProgress {
    bar: ProgressBar,
    growths: usize,
    placements: usize,
}

impl ReplayProgress {
    /// Create a visible progress bar over `event_count` events
    pub fn new(event_count: usize) -> Self {
        let bar = ProgressBar::new(event_count as u64);
        bar.set_style(REPLAY_STYLE.clone());
        Self::with_bar(bar)
    }

    /// Create a tracker that counts but draws nothing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            growths: 0,
            placements: 0,
        }
    }

    /// Record one applied event
    pub fn record(&mut self, outcome: &EventOutcome) {
        match outcome {
            EventOutcome::Expanded(_) => self.growths += 1,
            EventOutcome::Clicked(crate::algorithm::features::Placement::Added) => {
                self.placements += 1;
            }
            _ => {}
        }
        self.bar.inc(1);
        self.bar.set_message(format!(
            "{} growths, {} placed",
            self.growths, self.placements
        ));
    }

    /// Growth events seen so far
    pub const fn growths(&self) -> usize {
        self.growths
    }

    /// User placements seen so far
    pub const fn placements(&self) -> usize {
        self.placements
    }

    /// Events recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
