//! Progress bar display for update runs

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress display over a fixed number of manifest sources
pub struct ProgressDisplay {
    pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total step count
    pub fn new(total: usize) -> Self {
        let pb = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        let style =
            ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}");
        if let Ok(style) = style {
            pb.set_style(style.progress_chars("#>-"));
        }

        Self { pb }
    }

    /// Update to show the step in progress
    pub fn update(&self, label: &str) {
        // Truncate long URLs for display
        let display = if label.len() > 60 {
            let cut = label.len() - 57;
            let start = (cut..label.len())
                .find(|i| label.is_char_boundary(*i))
                .unwrap_or(cut);
            format!("...{}", &label[start..])
        } else {
            label.to_string()
        };
        self.pb.set_message(display);
    }

    /// Increment progress
    pub fn inc(&self) {
        self.pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
