//! CLI module graph.

pub mod chart;
pub mod check;
pub mod command;
pub mod dispatch;
pub mod histogram;
pub mod manager;
pub mod output;
pub mod ratings;

pub use command::Cli;
pub use dispatch::execute;
