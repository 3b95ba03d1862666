use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner for work whose duration is dominated by key derivation.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(description: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})") {
            bar.set_style(style.tick_chars("●○◌ "));
        }

        bar.set_message(description.to_owned());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
