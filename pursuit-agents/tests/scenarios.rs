mod common;

use common::GridWorld;

use rand::rngs::StdRng;
use rand::SeedableRng;

use pursuit_agents::heuristic::{food_seeking, threat_distance};
use pursuit_agents::{
    AdversaryPolicy, AlphaBetaAdversary, AlphaBetaPolicy, DecisionRound, DirectionalAdversary,
    ExpectimaxAdversary, MinimaxPolicy, RandomAdversary, ReflexPolicy, RoundContext,
};
use pursuit_minimax::types::{Action, Position, PROTAGONIST};

fn pursuit_5x5() -> GridWorld {
    GridWorld::new(5, 5)
        .with_agent(Position::new(0, 0))
        .with_agent(Position::new(3, 3))
}

#[test]
fn minimax_walks_toward_food() {
    let state = GridWorld::new(5, 5)
        .with_agent(Position::new(0, 0))
        .with_agent(Position::new(4, 4))
        .with_food(Position::new(2, 0));
    let policy = MinimaxPolicy::new(2, food_seeking).unwrap();

    assert_eq!(policy.choose_action(&state), Action::East);
}

#[test]
fn a_protagonist_search_hunts_a_scared_adversary() {
    let state = GridWorld::new(5, 5)
        .with_agent(Position::new(0, 0))
        .with_agent(Position::new(0, 3))
        .with_scared(1);
    let policy = MinimaxPolicy::new(2, threat_distance).unwrap();

    // Closing in now scores points even against an optimally fleeing
    // target: north keeps the scared pursuer within distance 3, east lets
    // it escape to 5.
    assert_eq!(policy.choose_action(&state), Action::North);
}

#[test]
fn alpha_beta_agrees_with_minimax_on_the_grid() {
    let state = GridWorld::new(5, 5)
        .with_agent(Position::new(2, 2))
        .with_agent(Position::new(0, 0));

    let minimax = MinimaxPolicy::new(2, threat_distance).unwrap();
    let alpha_beta = AlphaBetaPolicy::new(2, threat_distance).unwrap();

    assert_eq!(minimax.decide(&state), alpha_beta.decide(&state));
}

#[test]
fn a_walled_in_protagonist_stops_in_place() {
    let state = GridWorld::new(5, 5)
        .with_agent(Position::new(0, 0))
        .with_wall(Position::new(0, 1))
        .with_wall(Position::new(1, 0));
    let policy = MinimaxPolicy::new(2, threat_distance).unwrap();

    let result = policy.decide(&state);
    assert_eq!(result.action, Action::Stop);
    assert_eq!(result.score, decorum::N64::from(0.0));
}

#[test]
fn searching_adversaries_spread_out_through_commitments() {
    // Both pursuers are adjacent to the protagonist's cell; without
    // coordination both would converge on it.
    let state = GridWorld::new(5, 5)
        .with_agent(Position::new(4, 4))
        .with_agent(Position::new(3, 4))
        .with_agent(Position::new(4, 3));
    let first = AlphaBetaAdversary::new(1, 1, threat_distance).unwrap();
    let second = AlphaBetaAdversary::new(2, 1, threat_distance).unwrap();
    let mut round = RoundContext::new();

    let first_moves = first.action_distribution(&state, &mut round);
    assert_eq!(first_moves.most_likely(), Some(Action::East));
    assert!((first_moves.probability(Action::East) - 1.0).abs() < 1e-9);
    assert_eq!(round.committed_position(1), Some(Position::new(4, 4)));

    // The protagonist's cell is claimed, so the second pursuer flanks.
    let second_moves = second.action_distribution(&state, &mut round);
    assert_eq!(second_moves.most_likely(), Some(Action::South));
    assert_eq!(round.committed_position(2), Some(Position::new(4, 2)));
}

#[test]
fn an_expectimax_adversary_still_closes_in() {
    let state = pursuit_5x5();
    let adversary = ExpectimaxAdversary::new(1, 2, threat_distance).unwrap();
    let mut round = RoundContext::new();

    let moves = adversary.action_distribution(&state, &mut round);
    assert_eq!(moves.most_likely(), Some(Action::South));
}

#[test]
fn a_directional_adversary_splits_mass_between_closing_moves() {
    let state = pursuit_5x5();
    let adversary = DirectionalAdversary::new(1).unwrap();

    let moves = adversary.action_distribution(&state);
    assert!((moves.probability(Action::South) - 0.45).abs() < 1e-9);
    assert!((moves.probability(Action::West) - 0.45).abs() < 1e-9);
    assert!((moves.probability(Action::North) - 0.05).abs() < 1e-9);
    assert!((moves.probability(Action::East) - 0.05).abs() < 1e-9);
}

#[test]
fn a_scared_directional_adversary_flees() {
    let state = pursuit_5x5().with_scared(1);
    let adversary = DirectionalAdversary::new(1).unwrap();

    let moves = adversary.action_distribution(&state);
    assert!((moves.probability(Action::North) - 0.45).abs() < 1e-9);
    assert!((moves.probability(Action::East) - 0.45).abs() < 1e-9);
}

#[test]
fn a_random_adversary_is_uniform() {
    let state = pursuit_5x5();
    let adversary = RandomAdversary::new(1).unwrap();

    let moves = adversary.action_distribution(&state);
    for action in Action::all() {
        assert!((moves.probability(action) - 0.25).abs() < 1e-9);
    }
}

#[test]
fn the_reflex_policy_walks_toward_food() {
    let state = GridWorld::new(5, 5)
        .with_agent(Position::new(0, 0))
        .with_agent(Position::new(4, 4))
        .with_food(Position::new(2, 0));

    assert_eq!(ReflexPolicy::new().choose_action(&state), Action::East);
}

#[test]
fn the_reflex_policy_hunts_scared_adversaries() {
    let state = GridWorld::new(5, 5)
        .with_agent(Position::new(0, 0))
        .with_agent(Position::new(0, 3))
        .with_food(Position::new(3, 0))
        .with_scared(1);

    assert_eq!(ReflexPolicy::new().choose_action(&state), Action::North);
}

#[test]
fn a_decision_round_orders_moves_by_agent_index() {
    let state = GridWorld::new(5, 5)
        .with_agent(Position::new(4, 4))
        .with_agent(Position::new(3, 4))
        .with_agent(Position::new(4, 3));
    let protagonist = MinimaxPolicy::new(2, threat_distance).unwrap();
    let first = AlphaBetaAdversary::new(1, 1, threat_distance).unwrap();
    let second = AlphaBetaAdversary::new(2, 1, threat_distance).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let mut round = DecisionRound::new();

    // Adversaries handed over out of order on purpose.
    let adversaries: Vec<&dyn AdversaryPolicy<GridWorld>> = vec![&second, &first];
    let moves = round.resolve(&state, &protagonist, &adversaries, &mut rng);

    assert_eq!(moves.len(), 3);
    assert_eq!(moves[0], (PROTAGONIST, Action::South));
    assert_eq!(moves[1], (1, Action::East));
    assert_eq!(moves[2], (2, Action::South));
}

#[test]
fn a_decision_round_resets_between_rounds() {
    let state = GridWorld::new(5, 5)
        .with_agent(Position::new(4, 4))
        .with_agent(Position::new(3, 4))
        .with_agent(Position::new(4, 3));
    let protagonist = MinimaxPolicy::new(2, threat_distance).unwrap();
    let first = AlphaBetaAdversary::new(1, 1, threat_distance).unwrap();
    let second = AlphaBetaAdversary::new(2, 1, threat_distance).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let mut round = DecisionRound::new();
    let adversaries: Vec<&dyn AdversaryPolicy<GridWorld>> = vec![&first, &second];

    let first_pass = round.resolve(&state, &protagonist, &adversaries, &mut rng);
    let second_pass = round.resolve(&state, &protagonist, &adversaries, &mut rng);

    // Same state, point-mass distributions: a stale context would change
    // the second pass.
    assert_eq!(first_pass, second_pass);
    assert_eq!(round.context().committed_position(2), Some(Position::new(4, 2)));
}
