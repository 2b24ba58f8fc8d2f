//! Screen navigation state machine

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Screens of the meet flow, in the order a user normally sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Onboarding,
    Quiz,
    Splash,
    Destination,
    MeetingPoint,
    Scanning,
    Verified,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Onboarding => "onboarding",
            Screen::Quiz => "quiz",
            Screen::Splash => "splash",
            Screen::Destination => "destination",
            Screen::MeetingPoint => "meeting_point",
            Screen::Scanning => "scanning",
            Screen::Verified => "verified",
        }
    }

    /// The splash plays full screen without tab bar.
    pub fn hides_tab_bar(&self) -> bool {
        matches!(self, Screen::Splash)
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Navigation triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavEvent {
    StartQuiz,
    SubmitQuiz,
    SplashFinished,
    GoMeet,
    ArrivedHere,
    CodeVerified,
    LeaveScanner,
    Cancel,
}

impl NavEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavEvent::StartQuiz => "start_quiz",
            NavEvent::SubmitQuiz => "submit_quiz",
            NavEvent::SplashFinished => "splash_finished",
            NavEvent::GoMeet => "go_meet",
            NavEvent::ArrivedHere => "arrived_here",
            NavEvent::CodeVerified => "code_verified",
            NavEvent::LeaveScanner => "leave_scanner",
            NavEvent::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for NavEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current position in the meet flow.
#[derive(Debug, Clone, Default)]
pub struct AppFlow {
    screen: Screen,
}

impl AppFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Screen reached by `event` from `from`, if the move is allowed.
    pub fn next(from: Screen, event: NavEvent) -> Option<Screen> {
        use NavEvent::*;
        use Screen::*;

        match (from, event) {
            (Onboarding, StartQuiz) => Some(Quiz),
            (Quiz, SubmitQuiz) => Some(Splash),
            (Quiz, Cancel) => Some(Onboarding),
            (Splash, SplashFinished) => Some(Destination),
            (Destination, GoMeet) => Some(MeetingPoint),
            (Destination, Cancel) => Some(Onboarding),
            (MeetingPoint, ArrivedHere) => Some(Scanning),
            (MeetingPoint, Cancel) => Some(Destination),
            (Scanning, CodeVerified) => Some(Verified),
            (Scanning, LeaveScanner) | (Scanning, Cancel) => Some(MeetingPoint),
            (Verified, Cancel) => Some(Onboarding),
            _ => None,
        }
    }

    pub fn can_handle(&self, event: NavEvent) -> bool {
        Self::next(self.screen, event).is_some()
    }

    pub fn handle(&mut self, event: NavEvent) -> Result<Screen, DomainError> {
        let next = Self::next(self.screen, event).ok_or_else(|| DomainError::InvalidTransition {
            from: self.screen.to_string(),
            event: event.to_string(),
        })?;
        self.screen = next;
        Ok(next)
    }
}
