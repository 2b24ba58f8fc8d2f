//! Verification configuration from TOML (`[verification]` section)

use serde::{Deserialize, Serialize};
use spark_application::{CameraPermission, VerificationParams};
use spark_domain::{ConfigIssue, ConfigIssueCode, Severity};
use std::time::Duration;

/// Raw verification configuration from TOML
///
/// # Example
///
/// ```toml
/// [verification]
/// debounce_ms = 1000
/// camera_permission = "authorized"   # "denied", "restricted", "not_determined"
/// grant_on_request = true            # answer to the permission prompt
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVerificationConfig {
    pub debounce_ms: u64,
    pub camera_permission: String,
    pub grant_on_request: bool,
}

impl Default for FileVerificationConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1000,
            camera_permission: CameraPermission::Authorized.as_str().to_string(),
            grant_on_request: true,
        }
    }
}

impl FileVerificationConfig {
    /// Parse camera_permission, falling back to "authorized"
    pub fn parse_camera_permission(&self) -> (CameraPermission, Vec<ConfigIssue>) {
        match self.camera_permission.parse::<CameraPermission>() {
            Ok(permission) => (permission, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "verification.camera_permission".to_string(),
                        value: self.camera_permission.clone(),
                        valid_values: vec![
                            "authorized".to_string(),
                            "denied".to_string(),
                            "restricted".to_string(),
                            "not_determined".to_string(),
                        ],
                    },
                    message: format!(
                        "verification.camera_permission: unknown value '{}', falling back to 'authorized'",
                        self.camera_permission
                    ),
                };
                (CameraPermission::Authorized, vec![issue])
            }
        }
    }

    pub fn to_params(&self) -> VerificationParams {
        VerificationParams {
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}
