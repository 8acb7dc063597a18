//! Spinner shown while a one-shot fetch is outstanding

use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

/// Await `future` with a spinner on stderr
pub async fn with_spinner<F: Future>(message: &str, future: F) -> F::Output {
    let spinner = Spinner::start(message);
    let output = future.await;
    spinner.finish();
    output
}
