//! Rotating onboarding tagline ("Meet <tagline> on Spark").

/// Text shown before the first tick.
pub const INITIAL_TAGLINE: &str = "great friends";

/// Texts the tagline alternates between.
pub const ROTATING_TAGLINES: [&str; 2] = ["who gets you", "your next buddy"];

/// Cycling tagline state.
///
/// Each [`advance`](Self::advance) picks the first text that differs from
/// the current one, falling back to the first text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaglineRotation {
    current: String,
    texts: Vec<String>,
}

impl TaglineRotation {
    pub fn new(initial: impl Into<String>, texts: Vec<String>) -> Self {
        Self {
            current: initial.into(),
            texts,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Move to the next text and return it. With no texts configured the
    /// current text is kept.
    pub fn advance(&mut self) -> &str {
        let next = self
            .texts
            .iter()
            .find(|t| **t != self.current)
            .or_else(|| self.texts.first())
            .cloned();
        if let Some(next) = next {
            self.current = next;
        }
        &self.current
    }

    /// Full headline for the current tick.
    pub fn headline(&self) -> String {
        format!("Meet {} on Spark", self.current)
    }
}

impl Default for TaglineRotation {
    fn default() -> Self {
        Self::new(
            INITIAL_TAGLINE,
            ROTATING_TAGLINES.iter().map(|s| s.to_string()).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sequence() {
        let mut r = TaglineRotation::default();
        assert_eq!(r.current(), "great friends");
        assert_eq!(r.advance(), "who gets you");
        assert_eq!(r.advance(), "your next buddy");
        assert_eq!(r.advance(), "who gets you");
        assert_eq!(r.headline(), "Meet who gets you on Spark");
    }

    #[test]
    fn test_single_text_sticks() {
        let mut r = TaglineRotation::new("a", vec!["b".to_string()]);
        assert_eq!(r.advance(), "b");
        assert_eq!(r.advance(), "b");
    }

    #[test]
    fn test_no_texts_keeps_current() {
        let mut r = TaglineRotation::new("a", vec![]);
        assert_eq!(r.advance(), "a");
    }
}
