//! Ready-made decision policies for grid pursuit games, built on the
//! [pursuit_minimax] search engine.
//!
//! The protagonist side gets depth-limited [minimax](MinimaxPolicy),
//! [alpha-beta](AlphaBetaPolicy) and [expectimax](ExpectimaxPolicy) policies
//! plus a one-ply [reflex policy](ReflexPolicy). The adversary side gets
//! policies that answer with a full probability distribution over actions,
//! from [uniformly random](RandomAdversary) up to
//! [tree-searching](AlphaBetaAdversary) pursuers that coordinate with each
//! other through a shared [RoundContext]. [DecisionRound] runs one full turn
//! of everybody.

use thiserror::Error;

pub mod adversary;
pub mod distribution;
pub mod heuristic;
pub mod protagonist;
pub mod reflex;
pub mod round;

pub use adversary::{
    AlphaBetaAdversary, DirectionalAdversary, ExpectimaxAdversary, RandomAdversary,
};
pub use distribution::{ActionDistribution, DominantMass};
pub use protagonist::{AlphaBetaPolicy, ExpectimaxPolicy, MinimaxPolicy};
pub use reflex::ReflexPolicy;
pub use round::{AdversaryPolicy, DecisionRound, ProtagonistPolicy};

pub use pursuit_minimax::adversarial::RoundContext;
pub use pursuit_minimax::ConfigError;

/// Errors raised while building or applying a decision policy.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PolicyError {
    /// A probability mass outside `[0, 1]` was supplied.
    #[error("dominant probability mass {0} is outside [0, 1]")]
    DominantMassOutOfRange(f64),
    /// A distribution was requested over an empty action set.
    #[error("cannot build a distribution over zero legal actions")]
    EmptyLegalActions,
    /// An adversary policy was pointed at agent index 0.
    #[error("agent index 0 is the protagonist, not an adversary")]
    ProtagonistIndex,
    /// The underlying search engine rejected its configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
