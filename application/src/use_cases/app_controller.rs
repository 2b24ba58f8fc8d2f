//! Spark Controller
//!
//! Drives the whole meet flow from text commands: onboarding, the swipe
//! quiz, the splash, the match reveal, the meeting point and the arrival
//! scanner. Emits UiEvent messages to a channel for the presentation layer
//! to render.

use crate::config::SparkConfig;
use crate::ports::answer_store::{AnswerStore, NoAnswerStore};
use crate::ports::camera::CameraPort;
use crate::ports::clock::Clock;
use crate::ports::friend_store::{FriendStore, NoFriendStore};
use crate::ports::ui_event::{CardInfo, StatusInfo, UiEvent, UiEventObserver, WelcomeInfo};
use crate::use_cases::present_match::MatchPresenter;
use crate::use_cases::quiz_controller::{QuizController, SubmitError};
use crate::use_cases::splash_timer::SplashTimer;
use crate::use_cases::tagline_ticker::TaglineTicker;
use crate::use_cases::verify_arrival::{ArrivalVerification, ScanFeed, ScanSession};
use spark_domain::onboarding::{PITCH, PROMISE};
use spark_domain::{
    AppFlow, DomainError, Friend, FriendList, GesturePhase, MatchResult, MeetingPoint, NavEvent, QuizItem, QuizItemId,
    ScanOutcome, Screen, SwipeDecision, TaglineRotation, default_items,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Result of handling a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Continue reading commands
    Continue,
    /// Exit the driver
    Exit,
    /// Quiz submitted: caller should run the splash, then call
    /// [`SparkController::finish_splash`]
    PlaySplash,
}

/// Why a command could not be carried out
#[derive(Error, Debug)]
pub enum ControllerError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error("{0}")]
    Usage(String),
}

/// Controller for one run of the app
pub struct SparkController {
    config: SparkConfig,
    flow: AppFlow,
    catalog: Vec<QuizItem>,
    quiz: Option<QuizController>,
    presenter: MatchPresenter,
    matched: Option<MatchResult>,
    meeting_point: MeetingPoint,
    scanner: Option<ScanSession>,
    scan_feed: Option<ScanFeed>,
    camera: Arc<dyn CameraPort>,
    clock: Arc<dyn Clock>,
    store: Arc<dyn AnswerStore>,
    friends: FriendList,
    friend_store: Arc<dyn FriendStore>,
    tagline: TaglineRotation,
    ticker: Option<TaglineTicker>,
    /// Channel sender for UI events
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl SparkController {
    pub fn new(
        config: SparkConfig,
        presenter: MatchPresenter,
        camera: Arc<dyn CameraPort>,
        clock: Arc<dyn Clock>,
        tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            config,
            flow: AppFlow::new(),
            catalog: default_items(),
            quiz: None,
            presenter,
            matched: None,
            meeting_point: MeetingPoint::default(),
            scanner: None,
            scan_feed: None,
            camera,
            clock,
            store: Arc::new(NoAnswerStore),
            friends: FriendList::default(),
            friend_store: Arc::new(NoFriendStore),
            tagline: TaglineRotation::default(),
            ticker: None,
            tx,
        }
    }

    /// Persist submitted answer sheets through `store`.
    pub fn with_answer_store(mut self, store: Arc<dyn AnswerStore>) -> Self {
        self.store = store;
        self
    }

    /// Keep the friends tab in `store`, starting from what it already holds.
    pub fn with_friend_store(mut self, store: Arc<dyn FriendStore>) -> Self {
        match store.load() {
            Ok(friends) => {
                info!("Loaded {} friend(s)", friends.len());
                self.friends = FriendList::new(friends);
            }
            Err(e) => warn!("Could not load friends: {}", e),
        }
        self.friend_store = store;
        self
    }

    pub fn screen(&self) -> Screen {
        self.flow.screen()
    }

    pub fn quiz(&self) -> Option<&QuizController> {
        self.quiz.as_ref()
    }

    pub fn friends(&self) -> &FriendList {
        &self.friends
    }

    pub fn matched(&self) -> Option<&MatchResult> {
        self.matched.as_ref()
    }

    /// Sender for an external capture feed while the scanner is live.
    pub fn scan_feed(&self) -> Option<ScanFeed> {
        self.scan_feed.clone()
    }

    pub fn splash_timer(&self) -> SplashTimer {
        SplashTimer::new(self.config.onboarding.splash_duration)
    }

    /// Show the onboarding screen and start rotating its tagline.
    pub fn send_welcome(&mut self) {
        self.emit(UiEvent::Welcome(WelcomeInfo {
            headline: self.tagline.headline(),
            pitch: PITCH.to_string(),
            promise: PROMISE.to_string(),
        }));
        if self.flow.screen() == Screen::Onboarding && self.ticker.is_none() {
            self.ticker = Some(TaglineTicker::start(
                self.tagline.clone(),
                self.config.onboarding.tagline_interval,
                self.tx.clone(),
            ));
        }
    }

    /// Handle one command line. Returns what the driver should do next.
    pub async fn handle_command(&mut self, line: &str) -> CommandAction {
        let line = line.trim();
        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim()),
            None => (line, ""),
        };

        let result = match command {
            "" => Ok(CommandAction::Continue),
            "quit" | "exit" | "q" => {
                self.shutdown().await;
                self.emit(UiEvent::Exit);
                Ok(CommandAction::Exit)
            }
            "help" | "h" | "?" => {
                self.emit(UiEvent::Help);
                Ok(CommandAction::Continue)
            }
            "status" => {
                self.send_status();
                Ok(CommandAction::Continue)
            }
            "friends" => self.cmd_friends(),
            "unfriend" => self.cmd_unfriend(args),
            "start" => self.cmd_start().await,
            "drag" => self.cmd_drag(args),
            "release" => self.cmd_release(args),
            "swipe" => self.cmd_swipe(args),
            "yes" | "y" => self.cmd_answer(SwipeDecision::Yes, args),
            "no" | "n" => self.cmd_answer(SwipeDecision::No, args),
            "submit" => self.cmd_submit().await,
            "go" => self
                .navigate(NavEvent::GoMeet)
                .await
                .map(|_| CommandAction::Continue),
            "here" => self.cmd_here().await,
            "scan" => self.cmd_scan(args).await,
            "leave" => self
                .navigate(NavEvent::LeaveScanner)
                .await
                .map(|_| CommandAction::Continue),
            "cancel" | "back" => self
                .navigate(NavEvent::Cancel)
                .await
                .map(|_| CommandAction::Continue),
            _ => {
                self.emit(UiEvent::UnknownCommand {
                    command: command.to_string(),
                });
                Ok(CommandAction::Continue)
            }
        };

        result.unwrap_or_else(|e| {
            self.emit(UiEvent::CommandError {
                message: e.to_string(),
            });
            CommandAction::Continue
        })
    }

    /// Leave the splash for the match reveal.
    pub async fn finish_splash(&mut self) {
        if let Err(e) = self.navigate(NavEvent::SplashFinished).await {
            self.emit(UiEvent::CommandError {
                message: e.to_string(),
            });
        }
    }

    /// Evaluate every queued scan, moving on once the match is verified.
    pub async fn pump_scans(&mut self) -> Vec<ScanOutcome> {
        let outcomes = match self.scanner.as_mut() {
            Some(scanner) => scanner.drain(),
            None => return Vec::new(),
        };
        for outcome in &outcomes {
            self.emit(UiEvent::ScanEvaluated { outcome: *outcome });
        }
        if outcomes.contains(&ScanOutcome::Verified)
            && let Err(e) = self.navigate(NavEvent::CodeVerified).await
        {
            warn!("Verified scan could not leave the scanner: {}", e);
        }
        outcomes
    }

    /// Stop background work before exit.
    pub async fn shutdown(&mut self) {
        self.stop_tagline().await;
        self.close_scanner();
    }

    // ==================== Commands ====================

    async fn cmd_start(&mut self) -> Result<CommandAction, ControllerError> {
        self.ensure_can(NavEvent::StartQuiz)?;
        let quiz = QuizController::new(
            self.catalog.clone(),
            &self.config.quiz,
            Arc::new(UiEventObserver::new(self.tx.clone())),
            self.clock.clone(),
        )?
        .with_answer_store(self.store.clone());
        self.quiz = Some(quiz);
        self.navigate(NavEvent::StartQuiz).await?;
        self.send_current_card();
        Ok(CommandAction::Continue)
    }

    fn cmd_drag(&mut self, args: &str) -> Result<CommandAction, ControllerError> {
        let (dx, card) = parse_offset(args, "drag <dx> [card]")?;
        let id = match card {
            Some(card) => card,
            None => match self.quiz_ref()?.dragging() {
                Some(held) => held.clone(),
                None => self.current_card()?,
            },
        };
        let quiz = self.quiz_mut()?;
        if quiz.gesture_phase(&id) != Some(GesturePhase::Dragging) {
            quiz.begin_drag(&id)?;
        }
        quiz.update_drag(&id, dx)?;
        Ok(CommandAction::Continue)
    }

    fn cmd_release(&mut self, args: &str) -> Result<CommandAction, ControllerError> {
        let quiz = self.quiz_mut()?;
        let id = match args {
            "" => quiz.dragging().cloned().ok_or_else(|| {
                ControllerError::Usage("No card is being dragged".to_string())
            })?,
            card => QuizItemId::new(card),
        };
        quiz.end_drag(&id)?;
        // Console cards have no spring-back animation to wait for.
        quiz.settle(&id)?;
        self.send_current_card();
        Ok(CommandAction::Continue)
    }

    fn cmd_swipe(&mut self, args: &str) -> Result<CommandAction, ControllerError> {
        let (dx, card) = parse_offset(args, "swipe <dx> [card]")?;
        let id = match card {
            Some(card) => card,
            None => self.current_card()?,
        };
        let quiz = self.quiz_mut()?;
        if quiz.gesture_phase(&id) == Some(GesturePhase::Dragging) {
            return Err(ControllerError::Usage(format!(
                "Card {} is being dragged; `release` it first",
                id
            )));
        }
        quiz.begin_drag(&id)?;
        quiz.update_drag(&id, dx)?;
        quiz.end_drag(&id)?;
        quiz.settle(&id)?;
        self.send_current_card();
        Ok(CommandAction::Continue)
    }

    fn cmd_answer(
        &mut self,
        decision: SwipeDecision,
        args: &str,
    ) -> Result<CommandAction, ControllerError> {
        let id = match args {
            "" => self.current_card()?,
            card => QuizItemId::new(card),
        };
        self.quiz_mut()?.apply_decision(&id, decision)?;
        self.send_current_card();
        Ok(CommandAction::Continue)
    }

    async fn cmd_submit(&mut self) -> Result<CommandAction, ControllerError> {
        self.ensure_can(NavEvent::SubmitQuiz)?;
        let sheet = match self.quiz_mut()?.submit() {
            Ok(sheet) => sheet,
            Err(SubmitError::Incomplete { unanswered }) => {
                self.emit(UiEvent::SubmitBlocked { unanswered });
                return Ok(CommandAction::Continue);
            }
            Err(e) => return Err(e.into()),
        };

        let result = self.presenter.present(&sheet)?;
        self.matched = Some(result);
        self.navigate(NavEvent::SubmitQuiz).await?;
        Ok(CommandAction::PlaySplash)
    }

    async fn cmd_here(&mut self) -> Result<CommandAction, ControllerError> {
        self.ensure_can(NavEvent::ArrivedHere)?;
        let target = self
            .matched
            .as_ref()
            .map(|m| m.identity().clone())
            .ok_or_else(|| ControllerError::Usage("No match to meet yet".to_string()))?;
        let verification = ArrivalVerification::new(
            target,
            self.config.verification.debounce,
            self.clock.clone(),
        );

        match ScanSession::open(self.camera.as_ref(), verification).await {
            Ok((scanner, feed)) => {
                self.scanner = Some(scanner);
                self.scan_feed = Some(feed);
                self.navigate(NavEvent::ArrivedHere).await?;
            }
            Err(unavailable) => {
                self.emit(UiEvent::CameraUnavailable {
                    message: unavailable.message.to_string(),
                });
            }
        }
        Ok(CommandAction::Continue)
    }

    async fn cmd_scan(&mut self, args: &str) -> Result<CommandAction, ControllerError> {
        let feed = self
            .scan_feed
            .as_ref()
            .ok_or_else(|| ControllerError::Usage("Scanner is not running".to_string()))?;
        if !feed.try_deliver(args) {
            warn!("Scan feed full; dropped {:?}", args);
        }
        self.pump_scans().await;
        Ok(CommandAction::Continue)
    }

    fn cmd_friends(&mut self) -> Result<CommandAction, ControllerError> {
        self.ensure_tab_bar()?;
        self.emit(UiEvent::Friends(self.friends.friends().to_vec()));
        Ok(CommandAction::Continue)
    }

    fn cmd_unfriend(&mut self, args: &str) -> Result<CommandAction, ControllerError> {
        self.ensure_tab_bar()?;
        let position = args
            .parse::<usize>()
            .map_err(|_| ControllerError::Usage("Usage: unfriend <n>".to_string()))?;
        let removed = self.friends.remove(position)?;
        info!("Removed friend {}", removed.name());
        if let Err(e) = self.friend_store.replace(self.friends.friends()) {
            warn!("Could not store friends: {}", e);
        }
        self.emit(UiEvent::FriendRemoved {
            name: removed.name().to_string(),
        });
        Ok(CommandAction::Continue)
    }

    // ==================== Navigation ====================

    async fn navigate(&mut self, event: NavEvent) -> Result<Screen, ControllerError> {
        let from = self.flow.screen();
        let to = self.flow.handle(event)?;
        info!("{} -> {} ({})", from, to, event);

        self.leave(from).await;
        self.emit(UiEvent::ScreenChanged { screen: to });
        self.enter(to);
        Ok(to)
    }

    async fn leave(&mut self, screen: Screen) {
        match screen {
            Screen::Onboarding => self.stop_tagline().await,
            Screen::Scanning => self.close_scanner(),
            _ => {}
        }
    }

    fn enter(&mut self, screen: Screen) {
        match screen {
            Screen::Onboarding => {
                self.quiz = None;
                self.matched = None;
                self.send_welcome();
            }
            Screen::Destination => {
                if let Some(result) = &self.matched {
                    self.emit(UiEvent::MatchReady(result.clone()));
                }
            }
            Screen::MeetingPoint => {
                if let Some(result) = &self.matched {
                    self.emit(UiEvent::MeetingPoint {
                        short_name: result.identity().short_name().to_string(),
                        point: self.meeting_point.clone(),
                    });
                }
            }
            Screen::Scanning => {
                if let Some(scanner) = &self.scanner {
                    self.emit(UiEvent::ScannerReady {
                        short_name: scanner.target().short_name().to_string(),
                    });
                }
            }
            Screen::Verified => {
                if let Some(result) = &self.matched {
                    self.emit(UiEvent::Verified {
                        short_name: result.identity().short_name().to_string(),
                    });
                    let name = result.identity().display_name().to_string();
                    self.add_friend(name);
                }
            }
            Screen::Quiz | Screen::Splash => {}
        }
    }

    fn add_friend(&mut self, name: String) {
        let friend = Friend::new(name, self.clock.utc_now());
        if !self.friends.add(friend.clone()) {
            return;
        }
        info!("Added friend {}", friend.name());
        if let Err(e) = self.friend_store.append(&friend) {
            warn!("Could not store friends: {}", e);
        }
        self.emit(UiEvent::FriendAdded {
            name: friend.name().to_string(),
        });
    }

    async fn stop_tagline(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            self.tagline = ticker.stop().await;
        }
    }

    fn close_scanner(&mut self) {
        self.scan_feed = None;
        if let Some(scanner) = self.scanner.take() {
            scanner.close();
        }
    }

    // ==================== Helpers ====================

    fn ensure_can(&self, event: NavEvent) -> Result<(), ControllerError> {
        if self.flow.can_handle(event) {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                from: self.flow.screen().to_string(),
                event: event.to_string(),
            }
            .into())
        }
    }

    fn ensure_tab_bar(&self) -> Result<(), ControllerError> {
        let screen = self.flow.screen();
        if screen.hides_tab_bar() {
            Err(ControllerError::Usage(format!(
                "The friends tab is hidden on the {} screen",
                screen
            )))
        } else {
            Ok(())
        }
    }

    fn no_quiz(&self) -> ControllerError {
        ControllerError::Usage(format!(
            "No quiz in progress on the {} screen; type `start` first",
            self.flow.screen()
        ))
    }

    fn quiz_ref(&self) -> Result<&QuizController, ControllerError> {
        match (self.flow.screen(), self.quiz.as_ref()) {
            (Screen::Quiz, Some(quiz)) => Ok(quiz),
            _ => Err(self.no_quiz()),
        }
    }

    fn quiz_mut(&mut self) -> Result<&mut QuizController, ControllerError> {
        if self.flow.screen() != Screen::Quiz {
            return Err(self.no_quiz());
        }
        let error = self.no_quiz();
        self.quiz.as_mut().ok_or(error)
    }

    fn current_card(&self) -> Result<QuizItemId, ControllerError> {
        self.quiz_ref()?
            .current_item()
            .map(|item| item.id().clone())
            .ok_or_else(|| {
                ControllerError::Usage(
                    "Every card is answered; name a card to change it, or `submit`".to_string(),
                )
            })
    }

    fn send_current_card(&self) {
        let Some(quiz) = &self.quiz else {
            return;
        };
        let items = quiz.items();
        let card = items
            .iter()
            .position(|item| !item.answer().is_answered())
            .map(|index| CardInfo::new(&items[index], index + 1, items.len()));
        self.emit(UiEvent::CurrentCard(card));
    }

    fn send_status(&self) {
        let (answered, total) = self
            .quiz
            .as_ref()
            .map(|q| (q.answered_count(), q.items().len()))
            .unwrap_or((0, self.catalog.len()));
        self.emit(UiEvent::Status(StatusInfo {
            screen: self.flow.screen(),
            answered,
            total,
            matched: self
                .matched
                .as_ref()
                .map(|m| m.identity().display_name().to_string()),
            verified: self.flow.screen() == Screen::Verified,
            friends: self.friends.len(),
        }));
    }

    fn emit(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }
}

fn parse_offset(args: &str, usage: &str) -> Result<(f64, Option<QuizItemId>), ControllerError> {
    let mut parts = args.split_whitespace();
    let dx = parts
        .next()
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|dx| dx.is_finite())
        .ok_or_else(|| ControllerError::Usage(format!("Usage: {}", usage)))?;
    Ok((dx, parts.next().map(QuizItemId::new)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizParams;
    use crate::ports::camera::{CAMERA_FALLBACK_MESSAGE, CameraPermission};
    use crate::ports::clock::ManualClock;
    use crate::ports::friend_store::FriendStoreError;
    use async_trait::async_trait;
    use spark_domain::{
        Answer, FixedMatchStrategy, MatchScore, SubmissionPolicy, default_candidates,
    };
    use std::sync::Mutex;
    use std::time::Duration;

    struct StubCamera(CameraPermission);

    #[derive(Default)]
    struct MemoryFriendStore {
        friends: Mutex<Vec<Friend>>,
    }

    impl MemoryFriendStore {
        fn names(&self) -> Vec<String> {
            self.friends
                .lock()
                .unwrap()
                .iter()
                .map(|f| f.name().to_string())
                .collect()
        }
    }

    impl FriendStore for MemoryFriendStore {
        fn load(&self) -> Result<Vec<Friend>, FriendStoreError> {
            Ok(self.friends.lock().unwrap().clone())
        }

        fn append(&self, friend: &Friend) -> Result<(), FriendStoreError> {
            self.friends.lock().unwrap().push(friend.clone());
            Ok(())
        }

        fn replace(&self, friends: &[Friend]) -> Result<(), FriendStoreError> {
            *self.friends.lock().unwrap() = friends.to_vec();
            Ok(())
        }
    }

    #[async_trait]
    impl CameraPort for StubCamera {
        fn permission(&self) -> CameraPermission {
            self.0
        }

        async fn request_access(&self) -> bool {
            false
        }
    }

    struct Harness {
        controller: SparkController,
        rx: mpsc::UnboundedReceiver<UiEvent>,
        clock: Arc<ManualClock>,
    }

    impl Harness {
        fn new(config: SparkConfig, permission: CameraPermission) -> Self {
            let (tx, rx) = mpsc::unbounded_channel();
            let clock = Arc::new(ManualClock::new());
            let presenter = MatchPresenter::new(
                Box::new(FixedMatchStrategy::new(0, MatchScore::new(85).unwrap())),
                default_candidates(),
            )
            .unwrap();
            let controller = SparkController::new(
                config,
                presenter,
                Arc::new(StubCamera(permission)),
                clock.clone(),
                tx,
            );
            Self {
                controller,
                rx,
                clock,
            }
        }

        fn authorized() -> Self {
            Self::new(SparkConfig::default(), CameraPermission::Authorized)
        }

        fn unserialized() -> Self {
            let mut config = SparkConfig::default();
            config.quiz = QuizParams::default().with_serialized_gestures(false);
            Self::new(config, CameraPermission::Authorized)
        }

        fn with_friend_store(self, store: Arc<MemoryFriendStore>) -> Self {
            Self {
                controller: self.controller.with_friend_store(store),
                ..self
            }
        }

        fn answer(&self, id: &str) -> Answer {
            let quiz = self.controller.quiz().unwrap();
            let item = quiz.items().iter().find(|i| i.id().as_str() == id).unwrap();
            item.answer()
        }

        fn phase(&self, id: &str) -> Option<GesturePhase> {
            self.controller
                .quiz()
                .unwrap()
                .gesture_phase(&QuizItemId::new(id))
        }

        async fn run(&mut self, commands: &[&str]) -> Vec<CommandAction> {
            let mut actions = Vec::new();
            for command in commands {
                actions.push(self.controller.handle_command(command).await);
            }
            actions
        }

        fn events(&mut self) -> Vec<UiEvent> {
            let mut events = Vec::new();
            while let Ok(event) = self.rx.try_recv() {
                events.push(event);
            }
            events
        }

        async fn reach_meeting_point(&mut self) {
            self.run(&["start", "yes", "no", "yes", "no"]).await;
            assert_eq!(self.run(&["submit"]).await, vec![CommandAction::PlaySplash]);
            self.controller.finish_splash().await;
            self.run(&["go"]).await;
            assert_eq!(self.controller.screen(), Screen::MeetingPoint);
            self.events();
        }
    }

    fn errors(events: &[UiEvent]) -> Vec<String> {
        events
            .iter()
            .filter_map(|e| match e {
                UiEvent::CommandError { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_full_flow_to_verified() {
        let mut h = Harness::authorized();
        h.controller.send_welcome();

        h.run(&["start", "swipe 150", "swipe -150", "yes", "no"]).await;
        assert!(h.controller.quiz().unwrap().is_complete());
        assert_eq!(h.run(&["submit"]).await, vec![CommandAction::PlaySplash]);
        assert_eq!(h.controller.screen(), Screen::Splash);

        h.controller.finish_splash().await;
        assert_eq!(h.controller.screen(), Screen::Destination);
        let matched = h.controller.matched().unwrap();
        assert_eq!(matched.identity().display_name(), "James Huang");
        assert_eq!(matched.score().value(), 85);

        h.run(&["go", "here", "scan JAMES"]).await;
        assert_eq!(h.controller.screen(), Screen::Verified);
        assert!(h.controller.scan_feed().is_none());

        let events = h.events();
        assert!(errors(&events).is_empty(), "{:?}", errors(&events));
        assert!(events.iter().any(|e| matches!(e, UiEvent::MatchReady(_))));
        assert!(events.iter().any(|e| matches!(e, UiEvent::ScannerReady { .. })));
        assert!(events.iter().any(
            |e| matches!(e, UiEvent::Verified { short_name } if short_name == "James")
        ));

        assert_eq!(h.run(&["quit"]).await, vec![CommandAction::Exit]);
    }

    #[tokio::test]
    async fn test_drag_then_release_answers_current_card() {
        let mut h = Harness::authorized();
        h.run(&["start", "drag 50", "drag 130"]).await;
        let pets = QuizItemId::new("pets");
        assert_eq!(h.controller.quiz().unwrap().offset(&pets), Some(130.0));
        assert_eq!(h.controller.quiz().unwrap().items()[0].answer(), Answer::Unanswered);

        h.run(&["release"]).await;
        let quiz = h.controller.quiz().unwrap();
        assert_eq!(quiz.items()[0].answer(), Answer::Yes);
        assert_eq!(quiz.offset(&pets), Some(0.0));
        assert_eq!(quiz.current_item().unwrap().id().as_str(), "debates");

        let events = h.events();
        assert!(events.iter().any(|e| matches!(e, UiEvent::CardSpringBack { .. })));
    }

    #[tokio::test]
    async fn test_release_without_drag_is_an_error() {
        let mut h = Harness::authorized();
        h.run(&["start", "release", "drag abc"]).await;
        let errors = errors(&h.events());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], "No card is being dragged");
        assert!(errors[1].starts_with("Usage: drag"));
    }

    #[tokio::test]
    async fn test_swipe_on_held_card_asks_for_release() {
        let mut h = Harness::authorized();
        h.run(&["start", "drag 50", "swipe 150"]).await;
        assert_eq!(h.answer("pets"), Answer::Unanswered);
        assert_eq!(h.phase("pets"), Some(GesturePhase::Dragging));
        assert_eq!(
            errors(&h.events()),
            vec!["Card pets is being dragged; `release` it first"]
        );

        h.run(&["release", "drag 30", "drag 30 pets", "release"]).await;
        assert!(errors(&h.events()).is_empty());
        assert_eq!(h.phase("pets"), Some(GesturePhase::Idle));

        h.run(&["swipe 150"]).await;
        assert!(errors(&h.events()).is_empty());
        assert_eq!(h.answer("pets"), Answer::Yes);
    }

    #[tokio::test]
    async fn test_direct_answers_interleave_with_drags() {
        let mut h = Harness::authorized();
        h.run(&["start", "drag 120", "no", "drag 130", "release"]).await;
        assert!(errors(&h.events()).is_empty());
        assert_eq!(h.answer("pets"), Answer::Yes);

        h.run(&["drag -40 pets", "yes pets", "release pets"]).await;
        assert!(errors(&h.events()).is_empty());
        assert_eq!(h.answer("pets"), Answer::Yes);
        assert!(h.controller.quiz().unwrap().dragging().is_none());
    }

    #[tokio::test]
    async fn test_serialized_gestures_hold_one_card() {
        let mut h = Harness::authorized();
        h.run(&["start", "drag 50 pets", "drag 150 pizza", "swipe 150 pizza"])
            .await;
        assert_eq!(errors(&h.events()).len(), 2);
        assert_eq!(h.phase("pizza"), Some(GesturePhase::Idle));
        assert_eq!(h.answer("pizza"), Answer::Unanswered);

        h.run(&["release", "drag 150 pizza", "release"]).await;
        assert!(errors(&h.events()).is_empty());
        assert_eq!(h.answer("pets"), Answer::Unanswered);
        assert_eq!(h.answer("pizza"), Answer::Yes);
        assert!(h.controller.quiz().unwrap().dragging().is_none());
    }

    #[tokio::test]
    async fn test_unserialized_gestures_release_every_card() {
        let mut h = Harness::unserialized();
        h.run(&["start", "drag 50 pets", "drag 150 pizza"]).await;
        assert_eq!(h.phase("pets"), Some(GesturePhase::Dragging));
        assert_eq!(h.phase("pizza"), Some(GesturePhase::Dragging));

        // Releases go in quiz order.
        h.run(&["release", "release"]).await;
        assert_eq!(h.answer("pets"), Answer::Unanswered);
        assert_eq!(h.answer("pizza"), Answer::Yes);

        h.run(&["drag -150 pets", "drag 150 debates", "release debates", "release"])
            .await;
        assert!(errors(&h.events()).is_empty());
        assert_eq!(h.answer("pets"), Answer::No);
        assert_eq!(h.answer("debates"), Answer::Yes);
        assert!(h.controller.quiz().unwrap().dragging().is_none());

        h.run(&["swipe 150 pets", "swipe -150 pets"]).await;
        assert!(errors(&h.events()).is_empty());
        assert_eq!(h.answer("pets"), Answer::No);
    }

    #[tokio::test]
    async fn test_named_card_can_be_reanswered() {
        let mut h = Harness::authorized();
        h.run(&["start", "yes pets", "no pets"]).await;
        assert_eq!(h.controller.quiz().unwrap().items()[0].answer(), Answer::No);
    }

    #[tokio::test]
    async fn test_submit_blocked_when_completion_required() {
        let mut config = SparkConfig::default();
        config.quiz = QuizParams::default().with_submission(SubmissionPolicy::RequireComplete);
        let mut h = Harness::new(config, CameraPermission::Authorized);

        let actions = h.run(&["start", "yes", "submit"]).await;
        assert_eq!(actions[2], CommandAction::Continue);
        assert_eq!(h.controller.screen(), Screen::Quiz);
        let blocked = h.events().into_iter().find_map(|e| match e {
            UiEvent::SubmitBlocked { unanswered } => Some(unanswered),
            _ => None,
        });
        assert_eq!(blocked.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_commands_rejected_on_wrong_screen() {
        let mut h = Harness::authorized();
        h.run(&["submit", "go", "yes"]).await;
        assert_eq!(h.controller.screen(), Screen::Onboarding);
        assert_eq!(errors(&h.events()).len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let mut h = Harness::authorized();
        h.run(&["dance"]).await;
        assert!(h.events().iter().any(
            |e| matches!(e, UiEvent::UnknownCommand { command } if command == "dance")
        ));
    }

    #[tokio::test]
    async fn test_denied_camera_shows_fallback() {
        let mut h = Harness::new(SparkConfig::default(), CameraPermission::Denied);
        h.reach_meeting_point().await;

        h.run(&["here"]).await;
        assert_eq!(h.controller.screen(), Screen::MeetingPoint);
        let message = h.events().into_iter().find_map(|e| match e {
            UiEvent::CameraUnavailable { message } => Some(message),
            _ => None,
        });
        assert_eq!(message.as_deref(), Some(CAMERA_FALLBACK_MESSAGE));
    }

    #[tokio::test]
    async fn test_scans_are_debounced() {
        let mut h = Harness::authorized();
        h.reach_meeting_point().await;
        h.run(&["here", "scan bob", "scan james"]).await;
        assert_eq!(h.controller.screen(), Screen::Scanning);

        h.clock.advance(Duration::from_millis(1100));
        h.run(&["scan james"]).await;
        assert_eq!(h.controller.screen(), Screen::Verified);

        let outcomes: Vec<_> = h
            .events()
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::ScanEvaluated { outcome } => Some(outcome),
                _ => None,
            })
            .collect();
        assert_eq!(
            outcomes,
            vec![
                ScanOutcome::Rejected,
                ScanOutcome::Debounced,
                ScanOutcome::Verified,
            ]
        );
    }

    #[tokio::test]
    async fn test_leaving_scanner_tears_it_down() {
        let mut h = Harness::authorized();
        h.reach_meeting_point().await;
        h.run(&["here"]).await;
        let feed = h.controller.scan_feed().unwrap();

        h.run(&["leave"]).await;
        assert_eq!(h.controller.screen(), Screen::MeetingPoint);
        assert!(!feed.try_deliver("james"));

        h.events();
        h.run(&["scan james"]).await;
        assert_eq!(errors(&h.events()), vec!["Scanner is not running"]);
    }

    #[tokio::test]
    async fn test_cancel_from_quiz_restarts_onboarding() {
        let mut h = Harness::authorized();
        h.controller.send_welcome();
        h.run(&["start", "yes", "cancel"]).await;
        assert_eq!(h.controller.screen(), Screen::Onboarding);
        assert!(h.controller.quiz().is_none());

        let welcomes = h
            .events()
            .iter()
            .filter(|e| matches!(e, UiEvent::Welcome(_)))
            .count();
        assert_eq!(welcomes, 2);
        h.controller.shutdown().await;
    }

    #[tokio::test]
    async fn test_verified_match_joins_friends() {
        let store = Arc::new(MemoryFriendStore::default());
        store
            .append(&Friend::new("Woody Wang", chrono::Utc::now()))
            .unwrap();
        let mut h = Harness::authorized().with_friend_store(store.clone());
        assert_eq!(h.controller.friends().len(), 1);

        h.reach_meeting_point().await;
        h.run(&["here", "scan james"]).await;
        assert_eq!(h.controller.screen(), Screen::Verified);
        assert_eq!(store.names(), vec!["Woody Wang", "James Huang"]);
        assert!(h.events().iter().any(
            |e| matches!(e, UiEvent::FriendAdded { name } if name == "James Huang")
        ));

        h.run(&["friends"]).await;
        let listed = h.events().into_iter().find_map(|e| match e {
            UiEvent::Friends(friends) => Some(friends),
            _ => None,
        });
        assert_eq!(listed.unwrap().len(), 2);

        h.run(&["unfriend 1", "unfriend 5", "unfriend x"]).await;
        assert_eq!(store.names(), vec!["James Huang"]);
        let errors = errors(&h.events());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], "No friend at position 5 (you have 1)");
        assert_eq!(errors[1], "Usage: unfriend <n>");
    }

    #[tokio::test]
    async fn test_friends_tab_hidden_during_splash() {
        let mut h = Harness::authorized();
        h.run(&["start", "yes", "submit"]).await;
        assert_eq!(h.controller.screen(), Screen::Splash);
        h.events();

        h.run(&["friends"]).await;
        assert_eq!(
            errors(&h.events()),
            vec!["The friends tab is hidden on the splash screen"]
        );
    }

    #[tokio::test]
    async fn test_status_reports_progress() {
        let mut h = Harness::authorized();
        h.run(&["start", "yes", "status"]).await;
        let status = h.events().into_iter().find_map(|e| match e {
            UiEvent::Status(info) => Some(info),
            _ => None,
        });
        let status = status.unwrap();
        assert_eq!(status.screen, Screen::Quiz);
        assert_eq!((status.answered, status.total), (1, 4));
        assert!(status.matched.is_none());
        assert_eq!(status.friends, 0);
    }
}
