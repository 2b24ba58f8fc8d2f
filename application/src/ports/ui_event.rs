//! UI event types emitted by SparkController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer, which renders them (console, or any other front end).

use super::observer::SessionObserver;
use spark_domain::{
    Answer, AnswerSheet, Friend, MatchResult, MeetingPoint, QuizItem, QuizItemId, ScanOutcome,
    Screen,
};
use tokio::sync::mpsc;

/// Events emitted by SparkController for presentation layer to render
#[derive(Debug, Clone)]
pub enum UiEvent {
    // === Onboarding ===
    /// Onboarding screen with the current headline
    Welcome(WelcomeInfo),
    /// Rotating tagline ticked
    TaglineChanged { headline: String },
    /// Help text for available commands
    Help,
    /// Where the user is in the flow
    Status(StatusInfo),

    // === Navigation ===
    /// The flow moved to another screen
    ScreenChanged { screen: Screen },

    // === Quiz ===
    /// Card to show next (None once every card has an answer)
    CurrentCard(Option<CardInfo>),
    /// Drag feedback for a card
    CardOffset { id: QuizItemId, offset: f64 },
    /// Card released and springing back
    CardSpringBack { id: QuizItemId, released_at: f64 },
    /// An item was answered
    Answered { id: QuizItemId, answer: Answer },
    /// Completion state flipped
    QuizCompletion { complete: bool },
    /// Answers frozen
    QuizSubmitted { answered: usize, total: usize },
    /// Submission refused by policy
    SubmitBlocked { unanswered: Vec<QuizItemId> },

    // === Match ===
    /// Match reveal
    MatchReady(MatchResult),
    /// Meetup location for the match
    MeetingPoint {
        short_name: String,
        point: MeetingPoint,
    },

    // === Verification ===
    /// Camera unusable; show the static fallback
    CameraUnavailable { message: String },
    /// Scanner is live
    ScannerReady { short_name: String },
    /// A scan callback was handled
    ScanEvaluated { outcome: ScanOutcome },
    /// Identity confirmed
    Verified { short_name: String },

    // === Friends ===
    /// The friends tab, oldest first
    Friends(Vec<Friend>),
    /// A verified match joined the friends tab
    FriendAdded { name: String },
    /// A friend was removed from the tab
    FriendRemoved { name: String },

    // === Errors & Control ===
    /// Command usage/validation error
    CommandError { message: String },
    /// Unknown command entered
    UnknownCommand { command: String },
    /// Exit message
    Exit,
}

// === Supporting Types ===

/// Information for rendering the onboarding screen
#[derive(Debug, Clone)]
pub struct WelcomeInfo {
    pub headline: String,
    pub pitch: String,
    pub promise: String,
}

/// Snapshot for the `status` command
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub screen: Screen,
    pub answered: usize,
    pub total: usize,
    pub matched: Option<String>,
    pub verified: bool,
    pub friends: usize,
}

/// A quiz card to render
#[derive(Debug, Clone)]
pub struct CardInfo {
    pub id: QuizItemId,
    pub title: String,
    pub question: String,
    pub position: usize,
    pub total: usize,
}

impl CardInfo {
    pub fn new(item: &QuizItem, position: usize, total: usize) -> Self {
        Self {
            id: item.id().clone(),
            title: item.title().to_string(),
            question: item.question().to_string(),
            position,
            total,
        }
    }
}

/// Adapter: `SessionObserver` → `UiEvent` channel
///
/// Lets the quiz controller publish its state changes to whatever front
/// end consumes the controller's event stream.
pub struct UiEventObserver {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl UiEventObserver {
    pub fn new(tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self { tx }
    }
}

impl SessionObserver for UiEventObserver {
    fn on_offset_changed(&self, id: &QuizItemId, offset: f64) {
        let _ = self.tx.send(UiEvent::CardOffset {
            id: id.clone(),
            offset,
        });
    }

    fn on_spring_back(&self, id: &QuizItemId, released_at: f64) {
        let _ = self.tx.send(UiEvent::CardSpringBack {
            id: id.clone(),
            released_at,
        });
    }

    fn on_answer_changed(&self, id: &QuizItemId, answer: Answer) {
        let _ = self.tx.send(UiEvent::Answered {
            id: id.clone(),
            answer,
        });
    }

    fn on_completion_changed(&self, complete: bool) {
        let _ = self.tx.send(UiEvent::QuizCompletion { complete });
    }

    fn on_submitted(&self, sheet: &AnswerSheet) {
        let answered = sheet.entries().len() - sheet.count(Answer::Unanswered);
        let _ = self.tx.send(UiEvent::QuizSubmitted {
            answered,
            total: sheet.entries().len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_forwards_events() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let observer = UiEventObserver::new(tx);
        let id = QuizItemId::new("pets");

        observer.on_offset_changed(&id, 42.0);
        observer.on_answer_changed(&id, Answer::Yes);

        assert!(matches!(
            rx.try_recv().unwrap(),
            UiEvent::CardOffset { offset, .. } if offset == 42.0
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            UiEvent::Answered { answer: Answer::Yes, .. }
        ));
    }

    #[test]
    fn test_observer_survives_closed_channel() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let observer = UiEventObserver::new(tx);
        observer.on_completion_changed(true);
    }
}
