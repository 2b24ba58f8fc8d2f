//! Match strategy adapters

mod random_strategy;

pub use random_strategy::RandomMatchStrategy;
