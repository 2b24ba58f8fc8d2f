//! Splash progress bar

use indicatif::{ProgressBar, ProgressStyle};
use spark_application::{SplashOutcome, SplashTimer};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

const TICK: Duration = Duration::from_millis(50);

/// Shows the splash as a filling bar while its timer runs.
pub struct SplashProgress {
    bar: ProgressBar,
}

impl SplashProgress {
    pub fn new(timer: &SplashTimer) -> Self {
        let total = u64::try_from(timer.duration().as_millis()).unwrap_or(u64::MAX);
        let bar = ProgressBar::new(total.max(1));
        bar.set_style(Self::style());
        bar.set_message("Finding your match...");
        Self { bar }
    }

    /// Progress bar that draws nowhere.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.magenta} {msg} [{bar:30.magenta/blue}]")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    /// Wait out `timer`, advancing the bar as time passes.
    pub async fn run(&self, timer: &SplashTimer, skip: &CancellationToken) -> SplashOutcome {
        let started = Instant::now();
        let wait = timer.wait(skip);
        tokio::pin!(wait);
        let mut ticks = tokio::time::interval(TICK);

        let outcome = loop {
            tokio::select! {
                outcome = &mut wait => break outcome,
                _ = ticks.tick() => {
                    let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                    self.bar.set_position(elapsed);
                }
            }
        };

        match outcome {
            SplashOutcome::Finished => self.bar.finish_and_clear(),
            SplashOutcome::Skipped => self.bar.abandon(),
        }
        outcome
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
