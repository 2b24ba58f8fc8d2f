//! Onboarding and destination copy.
//!
//! - [`tagline::TaglineRotation`]: the alternating "Meet … on Spark" text
//! - [`meeting_point::MeetingPoint`]: map region for the meetup

pub mod meeting_point;
pub mod tagline;

/// Pitch shown under the onboarding headline.
pub const PITCH: &str = "Every good friendship starts with a spark.\n\
The best way to get one? A fire; arguments and disagreements.";

/// Promise shown on onboarding and the friends tab.
pub const PROMISE: &str =
    "We match you with those you disagree with to build lasting friendships.";
