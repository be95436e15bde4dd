//! Scoring functions for the search engine and targeting helpers for the
//! reflex policy. Everything here is manhattan-distance based.

use decorum::N64;

use pursuit_minimax::types::{
    AgentCountableGame, AgentIndex, FoodGettableGame, Position, PositionGettableGame,
    ScareQueryableGame, PROTAGONIST,
};

/// Manhattan distance from the protagonist to the nearest adversary. `None`
/// when the game has no adversaries.
pub fn nearest_adversary_distance<GameType>(state: &GameType) -> Option<i64>
where
    GameType: AgentCountableGame + PositionGettableGame,
{
    let protagonist = state.agent_position(PROTAGONIST);
    (1..state.agent_count())
        .map(|adversary| state.agent_position(adversary).manhattan_distance(&protagonist))
        .min()
}

/// The position of the scared adversary nearest to the protagonist, if any
/// adversary is currently scared.
pub fn nearest_scared_adversary<GameType>(state: &GameType) -> Option<Position>
where
    GameType: AgentCountableGame + PositionGettableGame + ScareQueryableGame,
{
    let protagonist = state.agent_position(PROTAGONIST);
    (1..state.agent_count())
        .filter(|&adversary| state.is_scared(adversary))
        .map(|adversary| state.agent_position(adversary))
        .min_by_key(|position| position.manhattan_distance(&protagonist))
}

/// The default protagonist-oriented evaluator.
///
/// For the protagonist it is the distance to the nearest adversary, so a
/// maximizer keeps its pursuers far away; when that nearest adversary is
/// scared the sign flips and closing in on it scores well instead. For an
/// adversary it is that adversary's own distance to the protagonist, so a
/// minimizer closes in, or flees while scared itself (`is_scared` carries
/// the searching adversary's scare state at the root of the search).
pub fn threat_distance<GameType>(state: &GameType, agent: AgentIndex, is_scared: bool) -> N64
where
    GameType: AgentCountableGame + PositionGettableGame + ScareQueryableGame,
{
    let protagonist = state.agent_position(PROTAGONIST);

    let (distance, scared) = if agent == PROTAGONIST {
        let nearest = (1..state.agent_count())
            .map(|adversary| {
                let distance = state
                    .agent_position(adversary)
                    .manhattan_distance(&protagonist);
                (distance, adversary)
            })
            .min();
        match nearest {
            Some((distance, adversary)) => (distance, state.is_scared(adversary)),
            None => (0, false),
        }
    } else {
        let distance = state.agent_position(agent).manhattan_distance(&protagonist);
        (distance, is_scared)
    };

    let signed = if scared {
        -(distance as f64)
    } else {
        distance as f64
    };
    N64::from(signed)
}

/// A protagonist evaluator that walks toward the nearest food: zero when no
/// food remains, otherwise minus the distance to the closest piece.
pub fn food_seeking<GameType>(state: &GameType, _agent: AgentIndex, _is_scared: bool) -> N64
where
    GameType: PositionGettableGame + FoodGettableGame,
{
    let protagonist = state.agent_position(PROTAGONIST);
    let nearest = state
        .food_positions()
        .iter()
        .map(|food| food.manhattan_distance(&protagonist))
        .min();

    match nearest {
        Some(distance) => N64::from(-(distance as f64)),
        None => N64::from(0.0),
    }
}
