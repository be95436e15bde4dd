//! Protagonist-side decision policies: thin façades that bind a search
//! strategy to an evaluator and always search on behalf of agent 0.
//!
//! Protagonist searches are self-contained, so these policies run each
//! search in a throwaway [RoundContext]; the commitment filter and the memo
//! table only ever apply to adversary searches.

use pursuit_minimax::adversarial::{RoundContext, Scorable, SearchEngine, SearchResult, Strategy};
use pursuit_minimax::types::{Action, PursuitGame, PROTAGONIST};
use pursuit_minimax::ConfigError;

/// The search depth used when callers have no opinion, in agent plies.
pub const DEFAULT_DEPTH: usize = 2;

/// Depth-limited minimax for the protagonist: assumes every adversary plays
/// the worst case.
#[derive(Debug, Clone)]
pub struct MinimaxPolicy<GameType, ScorableType>
where
    ScorableType: Scorable<GameType> + Clone,
{
    engine: SearchEngine<GameType, ScorableType>,
}

/// Minimax with alpha-beta pruning. Picks the same actions as
/// [MinimaxPolicy], just faster.
#[derive(Debug, Clone)]
pub struct AlphaBetaPolicy<GameType, ScorableType>
where
    ScorableType: Scorable<GameType> + Clone,
{
    engine: SearchEngine<GameType, ScorableType>,
}

/// Expectimax for the protagonist: models every adversary as uniformly
/// random instead of adversarial.
#[derive(Debug, Clone)]
pub struct ExpectimaxPolicy<GameType, ScorableType>
where
    ScorableType: Scorable<GameType> + Clone,
{
    engine: SearchEngine<GameType, ScorableType>,
}

macro_rules! protagonist_policy {
    ($policy:ident, $strategy:expr, $name:literal) => {
        impl<GameType, ScorableType> $policy<GameType, ScorableType>
        where
            GameType: PursuitGame,
            ScorableType: Scorable<GameType> + Clone,
        {
            /// Build the policy around `score_function`, searching
            /// `max_depth` agent plies deep.
            pub fn new(
                max_depth: usize,
                score_function: ScorableType,
            ) -> Result<Self, ConfigError> {
                let engine = SearchEngine::new($strategy, max_depth, score_function, $name)?;
                Ok(Self { engine })
            }

            /// Run the search and return the full result.
            pub fn decide(&self, state: &GameType) -> SearchResult {
                self.engine
                    .decide(state, PROTAGONIST, &mut RoundContext::new())
            }

            /// Run the search and return just the chosen action.
            pub fn choose_action(&self, state: &GameType) -> Action {
                self.decide(state).action
            }
        }
    };
}

protagonist_policy!(MinimaxPolicy, Strategy::Minimax, "minimax");
protagonist_policy!(AlphaBetaPolicy, Strategy::AlphaBeta, "alphabeta");
protagonist_policy!(ExpectimaxPolicy, Strategy::Expectimax, "expectimax");
