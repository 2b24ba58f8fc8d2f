//! Console output formatter for spark-connect events

use colored::Colorize;
use spark_application::{CardInfo, StatusInfo, UiEvent, WelcomeInfo};
use spark_domain::onboarding::PROMISE;
use spark_domain::{Answer, Friend, MatchResult, MeetingPoint, QuizItemId, ScanOutcome, Screen};

const BAR_WIDTH: usize = 30;

/// Formats controller events for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Text for one event, or `None` when the event has nothing to show.
    pub fn format_event(event: &UiEvent) -> Option<String> {
        let text = match event {
            UiEvent::Welcome(info) => Self::welcome(info),
            UiEvent::TaglineChanged { headline } => format!("  {}", headline.magenta().italic()),
            UiEvent::Help => Self::help(),
            UiEvent::Status(info) => Self::status(info),
            UiEvent::ScreenChanged { screen } => Self::screen(*screen)?,
            UiEvent::CurrentCard(card) => Self::card(card.as_ref()),
            UiEvent::CardOffset { id, offset } => Self::offset(id, *offset),
            UiEvent::CardSpringBack { id, released_at } => format!(
                "  {} {} springs back from {:+.0}",
                "~".dimmed(),
                id,
                released_at
            )
            .dimmed()
            .to_string(),
            UiEvent::Answered { id, answer } => Self::answered(id, *answer),
            UiEvent::QuizCompletion { complete } => {
                if !*complete {
                    return None;
                }
                format!(
                    "{} {}",
                    "All questions answered.".green().bold(),
                    "Type `submit` to find your match."
                )
            }
            UiEvent::QuizSubmitted { answered, total } => {
                format!("Answers submitted ({}/{} answered)", answered, total)
            }
            UiEvent::SubmitBlocked { unanswered } => format!(
                "{} {}",
                "Answer every question first:".yellow().bold(),
                unanswered
                    .iter()
                    .map(|id| id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            UiEvent::MatchReady(result) => Self::match_result(result),
            UiEvent::MeetingPoint { short_name, point } => Self::meeting_point(short_name, point),
            UiEvent::CameraUnavailable { message } => {
                format!("{} {}", "x".red().bold(), message.red())
            }
            UiEvent::ScannerReady { short_name } => format!(
                "{} Scan {}'s code: type `scan <code>`, or `leave` to go back.",
                "[]".cyan().bold(),
                short_name
            ),
            UiEvent::ScanEvaluated { outcome } => Self::scan(*outcome)?,
            UiEvent::Verified { short_name } => format!(
                "\n{} {}\n",
                "v".green().bold(),
                format!("You met {}! Friendship verified.", short_name)
                    .green()
                    .bold()
            ),
            UiEvent::Friends(friends) => Self::friends(friends),
            UiEvent::FriendAdded { name } => {
                format!("  {} {} added to your friends", "+".green().bold(), name.bold())
            }
            UiEvent::FriendRemoved { name } => {
                format!("  {} {} removed from your friends", "-".red(), name)
            }
            UiEvent::CommandError { message } => format!("{} {}", "Error:".red().bold(), message),
            UiEvent::UnknownCommand { command } => format!(
                "{} {} (type `help` for commands)",
                "Unknown command:".yellow(),
                command
            ),
            UiEvent::Exit => "Bye!".to_string(),
        };
        Some(text)
    }

    fn welcome(info: &WelcomeInfo) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Spark"));
        output.push('\n');
        output.push_str(&format!("{}\n\n", info.headline.magenta().bold()));
        output.push_str(&format!("{}\n\n", info.pitch));
        output.push_str(&format!("{}\n\n", info.promise.italic()));
        output.push_str(&format!(
            "{}",
            "Type `start` to take the quiz, `help` for all commands.".dimmed()
        ));
        output
    }

    /// Command reference
    pub fn help() -> String {
        let commands = [
            ("start", "Take the compatibility quiz"),
            ("drag <dx> [card]", "Drag a card (positive = right, negative = left)"),
            ("release [card]", "Let go of the dragged card"),
            ("swipe <dx> [card]", "Drag and release in one go"),
            ("yes / no [card]", "Answer a card directly"),
            ("submit", "Submit your answers"),
            ("go", "Go meet your match"),
            ("here", "You arrived: open the scanner"),
            ("scan <code>", "Scan a QR code"),
            ("leave", "Close the scanner"),
            ("cancel", "Go back"),
            ("friends", "Show your friends"),
            ("unfriend <n>", "Remove friend number n"),
            ("status", "Show where you are"),
            ("wait <ms>", "Pause (useful in scripts)"),
            ("help", "Show this help"),
            ("quit", "Exit"),
        ];
        let mut output = format!("{}\n", "Commands:".cyan().bold());
        for (usage, description) in commands {
            output.push_str(&format!("  {:<20} {}\n", usage, description));
        }
        output.trim_end().to_string()
    }

    fn status(info: &StatusInfo) -> String {
        let mut output = format!("{} {}\n", "Screen:".cyan().bold(), info.screen);
        output.push_str(&format!(
            "{} {}/{} answered\n",
            "Quiz:".cyan().bold(),
            info.answered,
            info.total
        ));
        let matched = info.matched.as_deref().unwrap_or("-");
        output.push_str(&format!("{} {}", "Match:".cyan().bold(), matched));
        if info.verified {
            output.push_str(&format!(" {}", "(verified)".green()));
        }
        output.push_str(&format!("\n{} {}", "Friends:".cyan().bold(), info.friends));
        output
    }

    fn friends(friends: &[Friend]) -> String {
        let mut output = Self::section_header("Friends");
        output.push('\n');
        if friends.is_empty() {
            output.push_str(&format!(
                "{}",
                "No friends yet. Type `start` to take the incompatibility quiz.".dimmed()
            ));
            return output;
        }
        for (index, friend) in friends.iter().enumerate() {
            output.push_str(&format!(
                "{:>3}. {}\n     {}\n",
                index + 1,
                friend.name().bold(),
                friend
                    .added_at()
                    .format("%B %-d, %Y at %H:%M:%S")
                    .to_string()
                    .dimmed()
            ));
        }
        output.push_str(&format!("\n{}", PROMISE.italic()));
        output
    }

    fn screen(screen: Screen) -> Option<String> {
        let title = match screen {
            Screen::Onboarding => return None,
            Screen::Quiz => "Incompatibility quiz",
            Screen::Splash => "Finding your match",
            Screen::Destination => "Your match",
            Screen::MeetingPoint => "Meeting point",
            Screen::Scanning => "Scanner",
            Screen::Verified => "Verified",
        };
        Some(Self::section_header(title))
    }

    fn card(card: Option<&CardInfo>) -> String {
        match card {
            Some(card) => format!(
                "{} {}\n  {}\n  {}",
                format!("[{}/{}]", card.position, card.total).dimmed(),
                card.title.yellow().bold(),
                card.question,
                "swipe right for yes, left for no".dimmed()
            ),
            None => format!(
                "{}",
                "Every card is answered. Type `submit` when you are ready.".dimmed()
            ),
        }
    }

    fn offset(id: &QuizItemId, offset: f64) -> String {
        let arrow = if offset > 0.0 {
            "->".green()
        } else if offset < 0.0 {
            "<-".red()
        } else {
            "..".dimmed()
        };
        format!("  {} {} {:+.0}", arrow, id, offset)
    }

    fn answered(id: &QuizItemId, answer: Answer) -> String {
        let answer = match answer {
            Answer::Yes => "yes".green().bold(),
            Answer::No => "no".red().bold(),
            Answer::Unanswered => "unanswered".dimmed(),
        };
        format!("  {} {}: {}", "v".green(), id, answer)
    }

    fn match_result(result: &MatchResult) -> String {
        let filled = (result.score().fraction() * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "{}{}",
            "#".repeat(filled.min(BAR_WIDTH)),
            "-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
        );
        format!(
            "{}\n\n  {}\n  [{}] {} compatible\n\n{}",
            "It's a match!".magenta().bold(),
            result.identity().display_name().bold(),
            bar.magenta(),
            result.score().to_string().bold(),
            format!("Type `go` to meet {}.", result.identity().short_name()).dimmed()
        )
    }

    fn meeting_point(short_name: &str, point: &MeetingPoint) -> String {
        format!(
            "{} {} at {} ({:.4}, {:.4})\n{}",
            "Go meet".cyan().bold(),
            short_name.bold(),
            point.label,
            point.latitude,
            point.longitude,
            "Type `here` when you arrive.".dimmed()
        )
    }

    fn scan(outcome: ScanOutcome) -> Option<String> {
        let text = match outcome {
            ScanOutcome::Debounced => "  scan ignored (too soon after the last one)"
                .dimmed()
                .to_string(),
            ScanOutcome::Rejected => format!("  {}", "That code doesn't match.".yellow()),
            ScanOutcome::AlreadyVerified => "  already verified".dimmed().to_string(),
            ScanOutcome::Verified => return None,
        };
        Some(text)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(48);
        format!("{}\n{:^48}\n{}", line.magenta(), title.bold(), line.magenta())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}", title.cyan().bold(), "-".repeat(32))
    }
}
