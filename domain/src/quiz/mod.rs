//! Compatibility quiz domain.
//!
//! - [`item::QuizItem`]: one yes/no question and its answer
//! - [`session::QuizSession`]: the fixed, ordered set of items being answered
//! - [`answer_sheet::AnswerSheet`]: frozen answers handed to matching
//! - [`policy::SubmissionPolicy`]: whether unanswered items block submission

pub mod answer_sheet;
pub mod catalog;
pub mod item;
pub mod policy;
pub mod session;
