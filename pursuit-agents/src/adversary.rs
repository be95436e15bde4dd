//! Adversary-side decision policies. Unlike the protagonist policies these
//! answer with an [ActionDistribution] rather than a single action, and the
//! searching ones coordinate through the round's shared [RoundContext].

use pursuit_minimax::adversarial::{RoundContext, Scorable, SearchEngine, Strategy};
use pursuit_minimax::types::{Action, AgentIndex, PursuitGame, PROTAGONIST};

use crate::distribution::{ActionDistribution, DominantMass};
use crate::PolicyError;

/// The search depth used by searching adversaries when callers have no
/// opinion, in agent plies.
pub const DEFAULT_ADVERSARY_DEPTH: usize = 3;

/// The probability mass a [DirectionalAdversary] concentrates on its
/// preferred actions.
pub const DEFAULT_DIRECTIONAL_MASS: f64 = 0.8;

fn checked_adversary_index(agent: AgentIndex) -> Result<AgentIndex, PolicyError> {
    if agent == PROTAGONIST {
        return Err(PolicyError::ProtagonistIndex);
    }
    Ok(agent)
}

/// An adversary that moves uniformly at random over its legal actions.
#[derive(Debug, Clone, Copy)]
pub struct RandomAdversary {
    agent: AgentIndex,
}

impl RandomAdversary {
    /// Build the policy for adversary `agent` (which must not be 0).
    pub fn new(agent: AgentIndex) -> Result<Self, PolicyError> {
        Ok(Self {
            agent: checked_adversary_index(agent)?,
        })
    }

    /// The agent this policy moves.
    pub fn agent(&self) -> AgentIndex {
        self.agent
    }

    /// A uniform distribution over the legal actions.
    pub fn action_distribution<GameType>(&self, state: &GameType) -> ActionDistribution
    where
        GameType: PursuitGame,
    {
        let legal = state.legal_actions(self.agent);
        if legal.is_empty() {
            return ActionDistribution::stop();
        }

        ActionDistribution::build(&legal, &[], DominantMass::none())
            .unwrap_or_else(|_| ActionDistribution::stop())
    }
}

/// A greedy adversary: most of its probability mass goes to the actions that
/// close the manhattan distance to the protagonist, or that open it while
/// scared. The rest is spread uniformly.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalAdversary {
    agent: AgentIndex,
    attack: DominantMass,
    flee: DominantMass,
}

impl DirectionalAdversary {
    /// Build the policy for adversary `agent` with the default dominant
    /// masses.
    pub fn new(agent: AgentIndex) -> Result<Self, PolicyError> {
        let mass = DominantMass::new(DEFAULT_DIRECTIONAL_MASS)?;
        Self::with_masses(agent, mass, mass)
    }

    /// Build the policy with explicit dominant masses for the pursuing and
    /// the scared case.
    pub fn with_masses(
        agent: AgentIndex,
        attack: DominantMass,
        flee: DominantMass,
    ) -> Result<Self, PolicyError> {
        Ok(Self {
            agent: checked_adversary_index(agent)?,
            attack,
            flee,
        })
    }

    /// The agent this policy moves.
    pub fn agent(&self) -> AgentIndex {
        self.agent
    }

    /// Concentrate mass on the distance-minimizing actions (or the
    /// distance-maximizing ones while scared).
    pub fn action_distribution<GameType>(&self, state: &GameType) -> ActionDistribution
    where
        GameType: PursuitGame,
    {
        let legal = state.legal_actions(self.agent);
        if legal.is_empty() {
            return ActionDistribution::stop();
        }

        let protagonist = state.agent_position(PROTAGONIST);
        let distances: Vec<(Action, i64)> = legal
            .iter()
            .map(|&action| {
                let successor = state.successor(self.agent, action);
                let distance = successor
                    .agent_position(self.agent)
                    .manhattan_distance(&protagonist);
                (action, distance)
            })
            .collect();

        let scared = state.is_scared(self.agent);
        let best = if scared {
            distances.iter().map(|(_, distance)| *distance).max()
        } else {
            distances.iter().map(|(_, distance)| *distance).min()
        };

        let winners: Vec<Action> = distances
            .iter()
            .filter(|(_, distance)| Some(*distance) == best)
            .map(|(action, _)| *action)
            .collect();
        let mass = if scared { self.flee } else { self.attack };

        ActionDistribution::build(&legal, &winners, mass)
            .unwrap_or_else(|_| ActionDistribution::stop())
    }
}

/// Run one coordinated search for an adversary and wrap the chosen action in
/// a distribution. Shared by the two searching adversary policies.
fn searched_distribution<GameType, ScorableType>(
    engine: &SearchEngine<GameType, ScorableType>,
    agent: AgentIndex,
    dominant: DominantMass,
    state: &GameType,
    round: &mut RoundContext,
) -> ActionDistribution
where
    GameType: PursuitGame,
    ScorableType: Scorable<GameType> + Clone,
{
    let legal = state.legal_actions(agent);
    if legal.is_empty() {
        return ActionDistribution::stop();
    }

    // Claim the current cell before searching so siblings already steer
    // around us, then replace the claim with the searched target.
    round.commit(agent, state.agent_position(agent));
    let result = engine.decide(state, agent, round);
    if let Some(position) = result.position {
        round.commit(agent, position);
    }

    let winners = if legal.contains(&result.action) {
        vec![result.action]
    } else {
        vec![]
    };

    ActionDistribution::build(&legal, &winners, dominant)
        .unwrap_or_else(|_| ActionDistribution::stop())
}

/// An adversary that runs a coordinated alpha-beta search each turn and
/// concentrates its probability mass on the searched action.
#[derive(Debug, Clone)]
pub struct AlphaBetaAdversary<GameType, ScorableType>
where
    ScorableType: Scorable<GameType> + Clone,
{
    agent: AgentIndex,
    dominant: DominantMass,
    engine: SearchEngine<GameType, ScorableType>,
}

/// An adversary that runs a coordinated expectimax search each turn,
/// modeling every other agent as uniformly random.
#[derive(Debug, Clone)]
pub struct ExpectimaxAdversary<GameType, ScorableType>
where
    ScorableType: Scorable<GameType> + Clone,
{
    agent: AgentIndex,
    dominant: DominantMass,
    engine: SearchEngine<GameType, ScorableType>,
}

macro_rules! searching_adversary {
    ($policy:ident, $strategy:expr, $name:literal) => {
        impl<GameType, ScorableType> $policy<GameType, ScorableType>
        where
            GameType: PursuitGame,
            ScorableType: Scorable<GameType> + Clone,
        {
            /// Build the policy for adversary `agent` (which must not be 0),
            /// searching `max_depth` agent plies deep. By default the whole
            /// probability mass follows the searched action.
            pub fn new(
                agent: AgentIndex,
                max_depth: usize,
                score_function: ScorableType,
            ) -> Result<Self, PolicyError> {
                Ok(Self {
                    agent: checked_adversary_index(agent)?,
                    dominant: DominantMass::full(),
                    engine: SearchEngine::new($strategy, max_depth, score_function, $name)?,
                })
            }

            /// Soften the policy: follow the searched action with `dominant`
            /// mass and spread the rest uniformly.
            pub fn with_dominant_mass(mut self, dominant: DominantMass) -> Self {
                self.dominant = dominant;
                self
            }

            /// The agent this policy moves.
            pub fn agent(&self) -> AgentIndex {
                self.agent
            }

            /// Search under the round's shared coordination state and wrap
            /// the outcome in a distribution. Commits the searched target
            /// cell to `round` so later siblings steer elsewhere.
            pub fn action_distribution(
                &self,
                state: &GameType,
                round: &mut RoundContext,
            ) -> ActionDistribution {
                searched_distribution(&self.engine, self.agent, self.dominant, state, round)
            }
        }
    };
}

searching_adversary!(AlphaBetaAdversary, Strategy::AlphaBeta, "alphabeta-adversary");
searching_adversary!(ExpectimaxAdversary, Strategy::Expectimax, "expectimax-adversary");
