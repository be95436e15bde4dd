use decorum::N64;

use crate::types::AgentIndex;

/// Magnitude of the saturating terminal scores. Any heuristic must stay well
/// below this so that a win always outranks every scored leaf and a loss
/// always underranks them.
const SATURATION: f64 = 1.0e18;

/// The saturating score for a protagonist win. Identical across all three
/// strategies and independent of remaining depth.
///
/// Kept finite (rather than literal infinity) so expectation nodes can take
/// probability-weighted sums over mixed win/lose children without producing
/// NaN.
pub fn win_score() -> N64 {
    N64::from(SATURATION)
}

/// The saturating score for a protagonist loss. See [win_score].
pub fn loss_score() -> N64 {
    N64::from(-SATURATION)
}

/// Something that can score a game state when the recursion bottoms out.
///
/// The score is protagonist-oriented: higher is always better for agent 0,
/// no matter which agent the search is running for. `agent` and `is_scared`
/// identify the searching agent's evaluation context so that the same
/// function can score both protagonist-rooted and adversary-rooted searches.
pub trait Scorable<GameType> {
    /// Score `state` for a search run on behalf of `agent`.
    fn score(&self, state: &GameType, agent: AgentIndex, is_scared: bool) -> N64;
}

impl<GameType, FnLike> Scorable<GameType> for FnLike
where
    FnLike: Fn(&GameType, AgentIndex, bool) -> N64,
{
    fn score(&self, state: &GameType, agent: AgentIndex, is_scared: bool) -> N64 {
        (self)(state, agent, is_scared)
    }
}
