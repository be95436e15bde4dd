//! One full decision round: the protagonist picks first, then every
//! adversary in index order, all from the same observed state. Adversaries
//! share a [RoundContext] so the searching ones coordinate their targets and
//! reuse each other's subtrees within the round.

use rand::Rng;
use tracing::info;

use itertools::Itertools;
use pursuit_minimax::adversarial::{RoundContext, Scorable};
use pursuit_minimax::types::{Action, AgentIndex, FoodGettableGame, PursuitGame, PROTAGONIST};

use crate::adversary::{
    AlphaBetaAdversary, DirectionalAdversary, ExpectimaxAdversary, RandomAdversary,
};
use crate::distribution::ActionDistribution;
use crate::protagonist::{AlphaBetaPolicy, ExpectimaxPolicy, MinimaxPolicy};
use crate::reflex::ReflexPolicy;

/// Anything that can pick the protagonist's move.
pub trait ProtagonistPolicy<GameType> {
    /// A short label for logs.
    fn name(&self) -> &'static str;

    /// The move to make in `state`.
    fn choose_action(&self, state: &GameType) -> Action;
}

/// Anything that can produce an adversary's move distribution, possibly
/// coordinating through the shared round context.
pub trait AdversaryPolicy<GameType> {
    /// The agent this policy moves.
    fn agent(&self) -> AgentIndex;

    /// The distribution to draw this turn's move from.
    fn action_distribution(
        &self,
        state: &GameType,
        round: &mut RoundContext,
    ) -> ActionDistribution;
}

/// Drives one decision round at a time, owning the coordination state that
/// lives exactly as long as a round does.
#[derive(Debug, Default)]
pub struct DecisionRound {
    context: RoundContext,
}

impl DecisionRound {
    /// A driver with a fresh coordination context.
    pub fn new() -> Self {
        Self::default()
    }

    /// The coordination state of the round in progress.
    pub fn context(&self) -> &RoundContext {
        &self.context
    }

    /// Resolve one round: clear the previous round's coordination state, let
    /// the protagonist choose, then sample each adversary in ascending agent
    /// order. Returns the `(agent, action)` pairs in decision order.
    pub fn resolve<GameType, RngType>(
        &mut self,
        state: &GameType,
        protagonist: &dyn ProtagonistPolicy<GameType>,
        adversaries: &[&dyn AdversaryPolicy<GameType>],
        rng: &mut RngType,
    ) -> Vec<(AgentIndex, Action)>
    where
        RngType: Rng,
    {
        self.context.reset();

        let mut moves = Vec::with_capacity(adversaries.len() + 1);

        let action = protagonist.choose_action(state);
        info!(policy = protagonist.name(), action = %action, "protagonist moved");
        moves.push((PROTAGONIST, action));

        for policy in adversaries
            .iter()
            .sorted_by_key(|policy| policy.agent())
        {
            let distribution = policy.action_distribution(state, &mut self.context);
            let action = distribution.sample(rng);
            info!(agent = policy.agent(), action = %action, "adversary moved");
            moves.push((policy.agent(), action));
        }

        moves
    }
}

impl<GameType, ScorableType> ProtagonistPolicy<GameType> for MinimaxPolicy<GameType, ScorableType>
where
    GameType: PursuitGame,
    ScorableType: Scorable<GameType> + Clone,
{
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose_action(&self, state: &GameType) -> Action {
        MinimaxPolicy::choose_action(self, state)
    }
}

impl<GameType, ScorableType> ProtagonistPolicy<GameType>
    for AlphaBetaPolicy<GameType, ScorableType>
where
    GameType: PursuitGame,
    ScorableType: Scorable<GameType> + Clone,
{
    fn name(&self) -> &'static str {
        "alphabeta"
    }

    fn choose_action(&self, state: &GameType) -> Action {
        AlphaBetaPolicy::choose_action(self, state)
    }
}

impl<GameType, ScorableType> ProtagonistPolicy<GameType>
    for ExpectimaxPolicy<GameType, ScorableType>
where
    GameType: PursuitGame,
    ScorableType: Scorable<GameType> + Clone,
{
    fn name(&self) -> &'static str {
        "expectimax"
    }

    fn choose_action(&self, state: &GameType) -> Action {
        ExpectimaxPolicy::choose_action(self, state)
    }
}

impl<GameType> ProtagonistPolicy<GameType> for ReflexPolicy
where
    GameType: PursuitGame + FoodGettableGame,
{
    fn name(&self) -> &'static str {
        "reflex"
    }

    fn choose_action(&self, state: &GameType) -> Action {
        ReflexPolicy::choose_action(self, state)
    }
}

impl<GameType> AdversaryPolicy<GameType> for RandomAdversary
where
    GameType: PursuitGame,
{
    fn agent(&self) -> AgentIndex {
        RandomAdversary::agent(self)
    }

    fn action_distribution(
        &self,
        state: &GameType,
        _round: &mut RoundContext,
    ) -> ActionDistribution {
        RandomAdversary::action_distribution(self, state)
    }
}

impl<GameType> AdversaryPolicy<GameType> for DirectionalAdversary
where
    GameType: PursuitGame,
{
    fn agent(&self) -> AgentIndex {
        DirectionalAdversary::agent(self)
    }

    fn action_distribution(
        &self,
        state: &GameType,
        _round: &mut RoundContext,
    ) -> ActionDistribution {
        DirectionalAdversary::action_distribution(self, state)
    }
}

impl<GameType, ScorableType> AdversaryPolicy<GameType>
    for AlphaBetaAdversary<GameType, ScorableType>
where
    GameType: PursuitGame,
    ScorableType: Scorable<GameType> + Clone,
{
    fn agent(&self) -> AgentIndex {
        AlphaBetaAdversary::agent(self)
    }

    fn action_distribution(
        &self,
        state: &GameType,
        round: &mut RoundContext,
    ) -> ActionDistribution {
        AlphaBetaAdversary::action_distribution(self, state, round)
    }
}

impl<GameType, ScorableType> AdversaryPolicy<GameType>
    for ExpectimaxAdversary<GameType, ScorableType>
where
    GameType: PursuitGame,
    ScorableType: Scorable<GameType> + Clone,
{
    fn agent(&self) -> AgentIndex {
        ExpectimaxAdversary::agent(self)
    }

    fn action_distribution(
        &self,
        state: &GameType,
        round: &mut RoundContext,
    ) -> ActionDistribution {
        ExpectimaxAdversary::action_distribution(self, state, round)
    }
}
