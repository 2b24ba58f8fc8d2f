//! Application layer for spark-connect
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{MatchingParams, OnboardingParams, QuizParams, SparkConfig, VerificationParams};
pub use ports::{
    answer_store::{AnswerStore, AnswerStoreError, NoAnswerStore},
    camera::{CAMERA_FALLBACK_MESSAGE, CameraPermission, CameraPort},
    clock::{Clock, ManualClock},
    friend_store::{FriendStore, FriendStoreError, NoFriendStore},
    observer::{NoObserver, SessionObserver},
    ui_event::{CardInfo, StatusInfo, UiEvent, UiEventObserver, WelcomeInfo},
};
pub use use_cases::app_controller::{CommandAction, ControllerError, SparkController};
pub use use_cases::present_match::MatchPresenter;
pub use use_cases::quiz_controller::{QuizController, SubmitError};
pub use use_cases::splash_timer::{SplashOutcome, SplashTimer};
pub use use_cases::tagline_ticker::TaglineTicker;
pub use use_cases::verify_arrival::{
    ArrivalVerification, CameraUnavailable, ScanFeed, ScanSession,
};
