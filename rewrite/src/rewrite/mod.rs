//! Fixed-point rewrite engine.
//!
//! This module implements the driver loop that applies a rule list to a tree
//! until no rule changes it.

pub mod config;
pub mod engine;

pub use config::RewriteConfig;
pub use engine::{RewriteOutput, rewrite, rewrite_with};
