//! Presentation-level configuration
//!
//! Console behavior that the application layer does not care about.

/// Console driver configuration
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Draw the splash progress bar
    pub show_progress: bool,
    /// Move on from the splash immediately
    pub skip_splash: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
            skip_splash: false,
        }
    }
}

impl ConsoleConfig {
    /// Turn off `colored` output globally when color is disabled.
    /// Otherwise terminal detection decides.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
