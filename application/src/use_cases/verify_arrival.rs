//! Verify Arrival use case
//!
//! Confirms that the user met their match by scanning the QR code the
//! match carries. Decoded codes come from a capture feed running on its
//! own cadence; they are queued on a channel and only evaluated by the
//! owner of the [`ScanSession`], which keeps all verification state on a
//! single logical thread.

use crate::ports::camera::{CAMERA_FALLBACK_MESSAGE, CameraPermission, CameraPort};
use crate::ports::clock::Clock;
use spark_domain::{Candidate, ScanOutcome, ScanVerifier};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Debounced verification against one target, reading time from a [`Clock`].
pub struct ArrivalVerification {
    verifier: ScanVerifier,
    clock: Arc<dyn Clock>,
}

impl ArrivalVerification {
    pub fn new(target: Candidate, debounce: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            verifier: ScanVerifier::new(target, debounce),
            clock,
        }
    }

    pub fn target(&self) -> &Candidate {
        self.verifier.target()
    }

    pub fn is_verified(&self) -> bool {
        self.verifier.is_verified()
    }

    pub fn on_scan(&mut self, scanned: &str) -> ScanOutcome {
        let outcome = self.verifier.on_scan(scanned, self.clock.now());
        debug!("Scanned {:?}: {:?}", scanned, outcome);
        if outcome == ScanOutcome::Verified {
            info!("Verified arrival of {}", self.verifier.target());
        }
        outcome
    }
}

/// Scanning could not start because of camera permission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (camera permission: {permission})")]
pub struct CameraUnavailable {
    pub permission: CameraPermission,
    pub message: &'static str,
}

impl CameraUnavailable {
    fn new(permission: CameraPermission) -> Self {
        Self {
            permission,
            message: CAMERA_FALLBACK_MESSAGE,
        }
    }
}

/// Sending half handed to the capture feed.
#[derive(Clone)]
pub struct ScanFeed {
    tx: mpsc::Sender<String>,
}

impl ScanFeed {
    /// Queue a decoded code. Returns false once the session is gone.
    pub async fn deliver(&self, text: impl Into<String>) -> bool {
        self.tx.send(text.into()).await.is_ok()
    }

    /// Non-blocking variant for feeds running outside the async runtime.
    /// Codes arriving while the queue is full are dropped.
    pub fn try_deliver(&self, text: impl Into<String>) -> bool {
        self.tx.try_send(text.into()).is_ok()
    }
}

/// A live scanner screen.
///
/// Closing (or cancelling through [`cancellation_token`](Self::cancellation_token))
/// tears the session down; codes still queued at that point are never
/// evaluated.
pub struct ScanSession {
    rx: mpsc::Receiver<String>,
    cancel: CancellationToken,
    verification: ArrivalVerification,
}

impl ScanSession {
    pub const FEED_CAPACITY: usize = 16;

    /// Start scanning if the camera may be used.
    ///
    /// An undetermined permission is requested first. Denied or restricted
    /// access yields [`CameraUnavailable`] and scanning never starts.
    pub async fn open(
        camera: &dyn CameraPort,
        verification: ArrivalVerification,
    ) -> Result<(Self, ScanFeed), CameraUnavailable> {
        let permission = camera.permission();
        let granted = match permission {
            CameraPermission::Authorized => true,
            CameraPermission::NotDetermined => camera.request_access().await,
            CameraPermission::Denied | CameraPermission::Restricted => false,
        };
        if !granted {
            warn!("Camera access {}; scanner not started", permission);
            return Err(CameraUnavailable::new(permission));
        }

        let (tx, rx) = mpsc::channel(Self::FEED_CAPACITY);
        info!("Scanner started for {}", verification.target());
        Ok((
            Self {
                rx,
                cancel: CancellationToken::new(),
                verification,
            },
            ScanFeed { tx },
        ))
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_verified(&self) -> bool {
        self.verification.is_verified()
    }

    pub fn target(&self) -> &Candidate {
        self.verification.target()
    }

    /// Wait for the next code and evaluate it.
    ///
    /// Returns `None` once the session is cancelled or every feed is gone.
    pub async fn next(&mut self) -> Option<ScanOutcome> {
        let text = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return None,
            text = self.rx.recv() => text?,
        };
        Some(self.verification.on_scan(&text))
    }

    /// Evaluate every code already queued, without waiting.
    pub fn drain(&mut self) -> Vec<ScanOutcome> {
        let mut outcomes = Vec::new();
        while !self.cancel.is_cancelled() {
            match self.rx.try_recv() {
                Ok(text) => outcomes.push(self.verification.on_scan(&text)),
                Err(_) => break,
            }
        }
        outcomes
    }

    /// Tear the scanner down, dropping anything still queued.
    pub fn close(mut self) -> ArrivalVerification {
        self.cancel.cancel();
        self.rx.close();
        info!("Scanner closed");
        self.verification
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clock::ManualClock;
    use async_trait::async_trait;
    use spark_domain::default_candidates;

    struct StubCamera {
        permission: CameraPermission,
        grant: bool,
    }

    #[async_trait]
    impl CameraPort for StubCamera {
        fn permission(&self) -> CameraPermission {
            self.permission
        }

        async fn request_access(&self) -> bool {
            self.grant
        }
    }

    fn authorized() -> StubCamera {
        StubCamera {
            permission: CameraPermission::Authorized,
            grant: true,
        }
    }

    fn verification(clock: Arc<ManualClock>) -> ArrivalVerification {
        ArrivalVerification::new(
            default_candidates()[0].clone(),
            Duration::from_secs(1),
            clock,
        )
    }

    #[tokio::test]
    async fn test_mixed_case_scan_verifies() {
        let clock = Arc::new(ManualClock::new());
        let (mut session, feed) = ScanSession::open(&authorized(), verification(clock))
            .await
            .unwrap();
        assert!(feed.deliver("JAMES").await);
        assert_eq!(session.next().await, Some(ScanOutcome::Verified));
        assert!(session.is_verified());
    }

    #[tokio::test]
    async fn test_unknown_code_stays_unverified() {
        let clock = Arc::new(ManualClock::new());
        let (mut session, feed) = ScanSession::open(&authorized(), verification(clock))
            .await
            .unwrap();
        feed.deliver("bob").await;
        assert_eq!(session.next().await, Some(ScanOutcome::Rejected));
        assert!(!session.is_verified());
    }

    #[tokio::test]
    async fn test_debounce_500ms_verifies_once() {
        let clock = Arc::new(ManualClock::new());
        let (mut session, feed) = ScanSession::open(&authorized(), verification(clock.clone()))
            .await
            .unwrap();
        feed.deliver("james").await;
        assert_eq!(session.next().await, Some(ScanOutcome::Verified));
        clock.advance(Duration::from_millis(500));
        feed.deliver("james").await;
        assert_eq!(session.next().await, Some(ScanOutcome::Debounced));
    }

    #[tokio::test]
    async fn test_debounce_1500ms_evaluates_twice() {
        let clock = Arc::new(ManualClock::new());
        let (mut session, feed) = ScanSession::open(&authorized(), verification(clock.clone()))
            .await
            .unwrap();
        feed.deliver("james").await;
        let first = session.next().await.unwrap();
        clock.advance(Duration::from_millis(1500));
        feed.deliver("james").await;
        let second = session.next().await.unwrap();
        assert!(first.was_evaluated() && second.was_evaluated());
        assert_eq!(second, ScanOutcome::AlreadyVerified);
    }

    #[tokio::test]
    async fn test_drain_evaluates_queued_codes_in_order() {
        let clock = Arc::new(ManualClock::new());
        let (mut session, feed) = ScanSession::open(&authorized(), verification(clock))
            .await
            .unwrap();
        assert!(feed.try_deliver("james"));
        assert!(feed.try_deliver("james"));
        assert_eq!(
            session.drain(),
            vec![ScanOutcome::Verified, ScanOutcome::Debounced]
        );
        assert!(session.drain().is_empty());
    }

    #[tokio::test]
    async fn test_no_results_applied_after_teardown() {
        let clock = Arc::new(ManualClock::new());
        let (mut session, feed) = ScanSession::open(&authorized(), verification(clock))
            .await
            .unwrap();
        feed.deliver("james").await;
        session.cancellation_token().cancel();
        assert_eq!(session.next().await, None);
        assert!(session.drain().is_empty());
        let verification = session.close();
        assert!(!verification.is_verified());
        assert!(!feed.deliver("james").await);
    }

    #[tokio::test]
    async fn test_denied_camera_never_scans() {
        for permission in [CameraPermission::Denied, CameraPermission::Restricted] {
            let camera = StubCamera {
                permission,
                grant: true,
            };
            let clock = Arc::new(ManualClock::new());
            let err = ScanSession::open(&camera, verification(clock))
                .await
                .err()
                .unwrap();
            assert_eq!(err.permission, permission);
            assert_eq!(err.message, CAMERA_FALLBACK_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_undetermined_camera_asks_first() {
        let clock = Arc::new(ManualClock::new());
        let granted = StubCamera {
            permission: CameraPermission::NotDetermined,
            grant: true,
        };
        assert!(
            ScanSession::open(&granted, verification(clock.clone()))
                .await
                .is_ok()
        );

        let refused = StubCamera {
            permission: CameraPermission::NotDetermined,
            grant: false,
        };
        assert!(ScanSession::open(&refused, verification(clock)).await.is_err());
    }
}
