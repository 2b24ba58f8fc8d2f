//! Camera port
//!
//! The camera itself (capture session, preview, QR decoding) lives outside
//! this crate. The core only needs to know whether scanning may start.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Message shown instead of the scanner when the camera cannot be used.
pub const CAMERA_FALLBACK_MESSAGE: &str = "Camera not available on this device";

/// Authorization state of the device camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraPermission {
    Authorized,
    Denied,
    Restricted,
    NotDetermined,
}

impl CameraPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraPermission::Authorized => "authorized",
            CameraPermission::Denied => "denied",
            CameraPermission::Restricted => "restricted",
            CameraPermission::NotDetermined => "not_determined",
        }
    }
}

impl std::str::FromStr for CameraPermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "authorized" | "granted" => Ok(CameraPermission::Authorized),
            "denied" => Ok(CameraPermission::Denied),
            "restricted" => Ok(CameraPermission::Restricted),
            "not_determined" | "ask" => Ok(CameraPermission::NotDetermined),
            other => Err(format!("unknown camera permission: {}", other)),
        }
    }
}

impl std::fmt::Display for CameraPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Port for camera permission handling.
#[async_trait]
pub trait CameraPort: Send + Sync {
    /// Current authorization state.
    fn permission(&self) -> CameraPermission;

    /// Ask the user for access. Only meaningful when the state is
    /// [`CameraPermission::NotDetermined`]; returns whether access was granted.
    async fn request_access(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_from_str() {
        assert_eq!(
            "not-determined".parse::<CameraPermission>(),
            Ok(CameraPermission::NotDetermined)
        );
        assert_eq!("Denied".parse(), Ok(CameraPermission::Denied));
        assert!("maybe".parse::<CameraPermission>().is_err());
    }

    #[test]
    fn test_permission_round_trips_through_as_str() {
        for permission in [
            CameraPermission::Authorized,
            CameraPermission::Denied,
            CameraPermission::Restricted,
            CameraPermission::NotDetermined,
        ] {
            assert_eq!(permission.as_str().parse(), Ok(permission));
        }
    }
}
