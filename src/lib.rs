//! Cadence: Randomized Workout Plan Generator
//!
//! Assembles a time-boxed sequence of catalog exercises into a plan that keeps
//! fixed opening and closing blocks, never returns to equipment it has left,
//! and stays within transition and equipment-type budgets. Generation retries
//! and degrades to a best-effort plan instead of failing.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod init;
pub mod logging;
pub mod plan;
pub mod store;
