//! Built-in question catalog.

use super::item::QuizItem;

/// `(id, title, question)` rows of the incompatibility quiz, in display order.
const DEFAULT_QUESTIONS: [(&str, &str, &str); 4] = [
    ("pets", "Pets", "Do you prefer cats over dogs?"),
    ("debates", "Debates", "Do you enjoy debates?"),
    ("waking-up", "Waking up", "Are you a morning person?"),
    ("pizza", "Pizza", "Do you like pineapple on pizza?"),
];

/// Fresh, unanswered items for a new quiz session.
pub fn default_items() -> Vec<QuizItem> {
    DEFAULT_QUESTIONS
        .iter()
        .map(|(id, title, question)| QuizItem::new(*id, *title, *question))
        .collect()
}
