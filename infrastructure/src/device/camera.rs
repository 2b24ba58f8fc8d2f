//! Camera permission adapter
//!
//! A console has no camera, so the permission state comes from
//! configuration. Codes are typed in instead of decoded from frames.

use async_trait::async_trait;
use spark_application::{CameraPermission, CameraPort};
use std::sync::Mutex;
use tracing::info;

/// Camera whose authorization is fixed by configuration.
///
/// An undetermined permission resolves on the first request to whatever
/// `grant_on_request` says, and stays resolved.
pub struct ConfiguredCamera {
    permission: Mutex<CameraPermission>,
    grant_on_request: bool,
}

impl ConfiguredCamera {
    pub fn new(permission: CameraPermission, grant_on_request: bool) -> Self {
        Self {
            permission: Mutex::new(permission),
            grant_on_request,
        }
    }
}

#[async_trait]
impl CameraPort for ConfiguredCamera {
    fn permission(&self) -> CameraPermission {
        match self.permission.lock() {
            Ok(permission) => *permission,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    async fn request_access(&self) -> bool {
        let Ok(mut permission) = self.permission.lock() else {
            return false;
        };
        if *permission == CameraPermission::NotDetermined {
            *permission = if self.grant_on_request {
                CameraPermission::Authorized
            } else {
                CameraPermission::Denied
            };
            info!("Camera permission resolved to {}", *permission);
        }
        *permission == CameraPermission::Authorized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_undetermined_resolves_once() {
        let camera = ConfiguredCamera::new(CameraPermission::NotDetermined, false);
        assert!(!camera.request_access().await);
        assert_eq!(camera.permission(), CameraPermission::Denied);

        let camera = ConfiguredCamera::new(CameraPermission::NotDetermined, true);
        assert!(camera.request_access().await);
        assert_eq!(camera.permission(), CameraPermission::Authorized);
    }

    #[tokio::test]
    async fn test_denied_stays_denied() {
        let camera = ConfiguredCamera::new(CameraPermission::Restricted, true);
        assert!(!camera.request_access().await);
        assert_eq!(camera.permission(), CameraPermission::Restricted);
    }
}
