//! A one-ply policy that rates each immediate successor directly instead of
//! searching a tree. Cheap, and a useful baseline for the search policies.

use itertools::Itertools;

use pursuit_minimax::types::{
    Action, AgentCountableGame, FoodGettableGame, LegalActionsGame, Position,
    PositionGettableGame, ScareQueryableGame, SimulableGame, PROTAGONIST,
};

use crate::heuristic::{nearest_adversary_distance, nearest_scared_adversary};

/// Picks the protagonist action whose immediate successor looks best: one
/// point for closing in on the current target (a scared adversary when one
/// exists, otherwise the most approachable food), plus a normalized bonus for
/// keeping pursuers at a distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflexPolicy;

impl ReflexPolicy {
    /// A fresh reflex policy. It carries no state.
    pub fn new() -> Self {
        Self
    }

    /// The target cell worth walking toward: the nearest scared adversary,
    /// or failing that the food that is close to us and far from the pack.
    fn target<GameType>(&self, state: &GameType) -> Option<Position>
    where
        GameType: AgentCountableGame
            + PositionGettableGame
            + ScareQueryableGame
            + FoodGettableGame,
    {
        if let Some(prey) = nearest_scared_adversary(state) {
            return Some(prey);
        }

        let protagonist = state.agent_position(PROTAGONIST);
        let adversaries = (1..state.agent_count())
            .map(|adversary| state.agent_position(adversary))
            .collect_vec();

        state
            .food_positions()
            .into_iter()
            .min_by_key(|food| {
                let to_us = food.manhattan_distance(&protagonist);
                if adversaries.is_empty() {
                    return to_us;
                }
                let to_pack: i64 = adversaries
                    .iter()
                    .map(|adversary| food.manhattan_distance(adversary))
                    .sum();
                to_us - to_pack / adversaries.len() as i64
            })
    }

    /// Rate every legal action one ply ahead and take the best. Falls back to
    /// [Action::Stop] when nothing is legal.
    pub fn choose_action<GameType>(&self, state: &GameType) -> Action
    where
        GameType: AgentCountableGame
            + LegalActionsGame
            + SimulableGame
            + PositionGettableGame
            + ScareQueryableGame
            + FoodGettableGame,
    {
        let legal = state.legal_actions(PROTAGONIST);
        if legal.is_empty() {
            return Action::Stop;
        }

        let target = self.target(state);
        let current_to_target = target
            .map(|cell| cell.manhattan_distance(&state.agent_position(PROTAGONIST)));

        let successors = legal
            .iter()
            .map(|&action| (action, state.successor(PROTAGONIST, action)))
            .collect_vec();

        // Normalizing by the best reachable pursuer distance keeps the
        // threat term below the single point awarded for approaching the
        // target, so hunting only yields to evasion when it has to.
        let norm = successors
            .iter()
            .filter_map(|(_, successor)| nearest_adversary_distance(successor))
            .max()
            .unwrap_or(1)
            .max(1) as f64;

        let mut best: Option<(Action, f64)> = None;
        for (action, successor) in successors {
            let approach_term = match (target, current_to_target) {
                (Some(cell), Some(current)) => {
                    let next = cell.manhattan_distance(&successor.agent_position(PROTAGONIST));
                    if next < current {
                        1.0
                    } else {
                        0.0
                    }
                }
                _ => 0.0,
            };
            let threat_term =
                nearest_adversary_distance(&successor).unwrap_or(0) as f64 / norm;
            let score = approach_term + threat_term;

            if best.map_or(true, |(_, incumbent)| score > incumbent) {
                best = Some((action, score));
            }
        }

        best.map(|(action, _)| action).unwrap_or(Action::Stop)
    }
}
