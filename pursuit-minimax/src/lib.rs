#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements turn-based adversarial tree search for grid pursuit
//! games. You provide a game state that implements the capability traits in
//! [types] plus a scoring function, and the [adversarial::SearchEngine] walks
//! the hypothetical game tree for you under one of three strategies: plain
//! minimax, alpha-beta pruned minimax, or expectimax with uniformly-random
//! non-searching agents.
//!
//! The engine never owns the game logic. Legal actions, successor states and
//! the terminal test all come from the caller through the trait suite, which
//! keeps the search generic over any concrete board representation.

use thiserror::Error;

pub mod adversarial;
pub mod types;

/// Errors raised while configuring a search before it runs.
///
/// These are always rejected at construction time so a running search never
/// has to deal with a malformed configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A depth of zero plies would make the recursion degenerate.
    #[error("search depth must be at least one ply")]
    ZeroDepth,
}
