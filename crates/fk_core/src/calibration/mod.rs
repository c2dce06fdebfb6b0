//! Balancing tools: run a fixture many times and summarize the scorelines.

pub mod goal_stats;

pub use goal_stats::{BatchRunner, GoalStats};
