//! Onboarding tagline ticker
//!
//! Advances the tagline on a fixed interval while the onboarding screen is
//! shown, publishing each new headline as a [`UiEvent::TaglineChanged`].

use crate::ports::ui_event::UiEvent;
use spark_domain::TaglineRotation;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Handle to a running ticker. Stopping it hands the rotation back.
pub struct TaglineTicker {
    cancel: CancellationToken,
    handle: JoinHandle<TaglineRotation>,
}

impl TaglineTicker {
    /// Spawn the ticker. The first change happens one `interval` after start.
    pub fn start(
        rotation: TaglineRotation,
        interval: Duration,
        tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut rotation = rotation;
            let mut ticks = tokio::time::interval_at(Instant::now() + interval, interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = ticks.tick() => {
                        rotation.advance();
                        debug!("Tagline -> {}", rotation.current());
                        let headline = rotation.headline();
                        if tx.send(UiEvent::TaglineChanged { headline }).is_err() {
                            break;
                        }
                    }
                }
            }
            rotation
        });

        Self { cancel, handle }
    }

    /// Stop ticking and return the rotation as it stood.
    pub async fn stop(self) -> TaglineRotation {
        self.cancel.cancel();
        self.handle.await.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headlines(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> Vec<String> {
        let mut out = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let UiEvent::TaglineChanged { headline } = event {
                out.push(headline);
            }
        }
        out
    }

    #[tokio::test(start_paused = true)]
    async fn test_alternates_every_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = TaglineTicker::start(TaglineRotation::default(), Duration::from_secs(2), tx);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(headlines(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(
            headlines(&mut rx),
            vec![
                "Meet who gets you on Spark",
                "Meet your next buddy on Spark",
                "Meet who gets you on Spark",
            ]
        );

        let rotation = ticker.stop().await;
        assert_eq!(rotation.current(), "who gets you");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_updates() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = TaglineTicker::start(TaglineRotation::default(), Duration::from_secs(2), tx);

        let rotation = ticker.stop().await;
        assert_eq!(rotation.current(), "great friends");

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(headlines(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_exits_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let ticker = TaglineTicker::start(TaglineRotation::default(), Duration::from_secs(2), tx);
        drop(rx);

        tokio::time::sleep(Duration::from_secs(7)).await;
        // Only the first tick ran; its send failed and ended the task.
        let rotation = ticker.stop().await;
        assert_eq!(rotation.current(), "who gets you");
    }
}
