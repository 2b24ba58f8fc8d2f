//! Line-driven console for the meet flow
//!
//! Reads commands from the terminal or a script file, hands them to the
//! [`SparkController`], and prints the events it emits.

use crate::config::ConsoleConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::splash::SplashProgress;
use colored::Colorize;
use spark_application::{CommandAction, SparkController, UiEvent};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Longest pause a `wait` command may ask for.
const MAX_WAIT: Duration = Duration::from_secs(60);

enum Input {
    Line(Option<String>),
    Event(UiEvent),
    Interrupt,
}

/// Console driver
pub struct SparkRepl {
    controller: SparkController,
    rx: mpsc::UnboundedReceiver<UiEvent>,
    config: ConsoleConfig,
    out: Box<dyn Write + Send>,
}

impl SparkRepl {
    pub fn new(controller: SparkController, rx: mpsc::UnboundedReceiver<UiEvent>) -> Self {
        Self {
            controller,
            rx,
            config: ConsoleConfig::default(),
            out: Box::new(std::io::stdout()),
        }
    }

    pub fn with_config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    /// Write output somewhere other than stdout.
    pub fn with_output(mut self, out: Box<dyn Write + Send>) -> Self {
        self.out = out;
        self
    }

    /// Run against the terminal until `quit`, end of input or Ctrl-C.
    pub async fn run_interactive(self) -> std::io::Result<()> {
        self.run(BufReader::new(tokio::io::stdin()), true).await
    }

    /// Run every command in a script file, then exit.
    pub async fn run_script(self, path: &Path) -> std::io::Result<()> {
        let file = tokio::fs::File::open(path).await?;
        self.run(BufReader::new(file), false).await
    }

    /// Drive the controller from `input`. Interactive runs print a prompt
    /// and show tagline updates as they arrive; scripts echo each command.
    pub async fn run<R: AsyncBufRead + Unpin>(
        mut self,
        input: R,
        interactive: bool,
    ) -> std::io::Result<()> {
        self.controller.send_welcome();
        self.flush_events()?;

        let mut lines = input.lines();
        loop {
            if interactive {
                self.prompt()?;
            }

            let input = tokio::select! {
                line = lines.next_line() => Input::Line(line?),
                Some(event) = self.rx.recv(), if interactive => Input::Event(event),
                _ = tokio::signal::ctrl_c() => Input::Interrupt,
            };

            let line = match input {
                Input::Line(Some(line)) => line,
                Input::Line(None) | Input::Interrupt => {
                    self.controller.handle_command("quit").await;
                    self.flush_events()?;
                    break;
                }
                Input::Event(event) => {
                    writeln!(self.out)?;
                    self.print(&event)?;
                    continue;
                }
            };

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if !interactive {
                writeln!(self.out, "{} {}", ">".dimmed(), line.bold())?;
            }

            if let Some(args) = line
                .strip_prefix("wait")
                .filter(|rest| rest.is_empty() || rest.starts_with(' '))
            {
                self.wait(args.trim()).await?;
                continue;
            }

            let action = self.controller.handle_command(line).await;
            self.flush_events()?;
            match action {
                CommandAction::Continue => {}
                CommandAction::Exit => break,
                CommandAction::PlaySplash => {
                    self.play_splash().await;
                    self.controller.finish_splash().await;
                    self.flush_events()?;
                }
            }
        }

        self.out.flush()
    }

    async fn play_splash(&mut self) {
        if self.config.skip_splash {
            return;
        }
        let timer = self.controller.splash_timer();
        let progress = if self.config.show_progress {
            SplashProgress::new(&timer)
        } else {
            SplashProgress::hidden()
        };

        let skip = CancellationToken::new();
        let trigger = skip.clone();
        let interrupt = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                trigger.cancel();
            }
        });
        let outcome = progress.run(&timer, &skip).await;
        interrupt.abort();
        debug!("Splash ended: {:?}", outcome);
    }

    /// Pause for `wait <ms>`, printing events that arrive meanwhile.
    async fn wait(&mut self, args: &str) -> std::io::Result<()> {
        let Ok(ms) = args.parse::<u64>() else {
            return self.print(&UiEvent::CommandError {
                message: "Usage: wait <ms>".to_string(),
            });
        };
        let deadline = tokio::time::sleep(Duration::from_millis(ms).min(MAX_WAIT));
        tokio::pin!(deadline);
        loop {
            let event = tokio::select! {
                _ = &mut deadline => break,
                Some(event) = self.rx.recv() => event,
            };
            self.print(&event)?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> std::io::Result<()> {
        write!(
            self.out,
            "{} ",
            format!("{}>", self.controller.screen()).magenta().bold()
        )?;
        self.out.flush()
    }

    fn flush_events(&mut self) -> std::io::Result<()> {
        while let Ok(event) = self.rx.try_recv() {
            self.print(&event)?;
        }
        Ok(())
    }

    fn print(&mut self, event: &UiEvent) -> std::io::Result<()> {
        if let Some(text) = ConsoleFormatter::format_event(event) {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }
}
