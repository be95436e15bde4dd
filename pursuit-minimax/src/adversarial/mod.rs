//! The adversarial tree search itself.
//!
//! One recursive traversal skeleton serves three strategies: plain minimax,
//! alpha-beta pruned minimax and expectimax over uniformly-random
//! non-searching agents. Scores share a single sign convention across all
//! three: higher is always better for the protagonist. The protagonist
//! maximizes, adversaries minimize (or, in expectimax, everyone except the
//! searching agent becomes a uniform chance node).
//!
//! Searches run on behalf of a *searching agent*. When that agent is an
//! adversary the engine also consults the per-round [RoundContext]: committed
//! target cells of sibling adversaries are avoided during expansion, and
//! finished subtrees are memoized so that sibling searches in the same
//! simulation tick do not recompute them.
//!
//! ```rust
//! use decorum::N64;
//! use pursuit_minimax::adversarial::{RoundContext, SearchEngine, Strategy};
//! use pursuit_minimax::types::{AgentIndex, PROTAGONIST};
//! # use pursuit_minimax::types::{Action, Position};
//! # #[derive(Debug, Clone)]
//! # struct Standoff;
//! # impl pursuit_minimax::types::AgentCountableGame for Standoff {
//! #     fn agent_count(&self) -> usize { 2 }
//! # }
//! # impl pursuit_minimax::types::LegalActionsGame for Standoff {
//! #     fn legal_actions(&self, _: AgentIndex) -> Vec<Action> { Action::all().to_vec() }
//! # }
//! # impl pursuit_minimax::types::SimulableGame for Standoff {
//! #     fn successor(&self, _: AgentIndex, _: Action) -> Self { Standoff }
//! # }
//! # impl pursuit_minimax::types::VictorDeterminableGame for Standoff {
//! #     fn is_over(&self) -> bool { false }
//! #     fn is_won(&self) -> bool { false }
//! # }
//! # impl pursuit_minimax::types::PositionGettableGame for Standoff {
//! #     fn agent_position(&self, _: AgentIndex) -> Position { Position::new(0, 0) }
//! # }
//! # impl pursuit_minimax::types::HeadingGettableGame for Standoff {
//! #     fn agent_heading(&self, _: AgentIndex) -> Action { Action::Stop }
//! # }
//! # impl pursuit_minimax::types::ScareQueryableGame for Standoff {
//! #     fn is_scared(&self, _: AgentIndex) -> bool { false }
//! # }
//! // Any scoring function that maps a state to an `N64` works. Higher is
//! // better for the protagonist.
//! fn score(_state: &Standoff, _agent: AgentIndex, _scared: bool) -> N64 {
//!     N64::from(0.0)
//! }
//!
//! let engine = SearchEngine::new(Strategy::AlphaBeta, 2, score, "example").unwrap();
//! let mut round = RoundContext::new();
//! let result = engine.decide(&Standoff, PROTAGONIST, &mut round);
//! assert_eq!(result.score, N64::from(0.0));
//! ```

mod coordination;
pub use coordination::{MemoKey, RoundContext};

mod score;
pub use score::{loss_score, win_score, Scorable};

mod search_return;
pub use search_return::{NodeKind, SearchResult, SearchTree};

mod strategy;
pub use strategy::Strategy;

mod engine;
pub use engine::SearchEngine;
