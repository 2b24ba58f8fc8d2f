//! Post-submit splash timer

use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// How a splash ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashOutcome {
    /// Ran the full duration.
    Finished,
    /// Cut short by the caller.
    Skipped,
}

/// Waits out the splash screen before the match is revealed.
#[derive(Debug, Clone, Copy)]
pub struct SplashTimer {
    duration: Duration,
}

impl SplashTimer {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Sleep for the splash duration unless `skip` fires first.
    pub async fn wait(&self, skip: &CancellationToken) -> SplashOutcome {
        let outcome = tokio::select! {
            biased;
            _ = skip.cancelled() => SplashOutcome::Skipped,
            _ = tokio::time::sleep(self.duration) => SplashOutcome::Finished,
        };
        debug!("Splash {:?} after {:?}", outcome, self.duration);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_runs_full_duration() {
        let timer = SplashTimer::new(Duration::from_secs(5));
        let started = Instant::now();
        assert_eq!(
            timer.wait(&CancellationToken::new()).await,
            SplashOutcome::Finished
        );
        assert!(started.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_skip_cuts_short() {
        let timer = SplashTimer::new(Duration::from_secs(5));
        let skip = CancellationToken::new();
        let trigger = skip.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            trigger.cancel();
        });

        let started = Instant::now();
        assert_eq!(timer.wait(&skip).await, SplashOutcome::Skipped);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
