//! Reception Bot — Slack bot that announces package arrivals.

pub mod channels;
pub mod config;
pub mod directory;
pub mod error;
pub mod pipeline;
