//! The capability traits a concrete game state must satisfy, plus the small
//! concrete vocabulary (positions, actions, agent indices) shared by every
//! search.
//!
//! The engine deliberately knows nothing about boards, walls or food. A game
//! state only has to answer the questions below, which keeps the search
//! reusable across board representations.

use std::fmt;

/// Identifies one turn-taking participant.
///
/// Index 0 is always the protagonist (the sole maximizer); indices >= 1 are
/// adversaries. Turn order is the fixed cyclic sequence `0, 1, ..., N-1, 0`.
pub type AgentIndex = usize;

/// The agent index of the protagonist.
pub const PROTAGONIST: AgentIndex = 0;

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, growing eastward.
    pub x: i32,
    /// Row, growing northward.
    pub y: i32,
}

impl Position {
    /// Construct a position from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of absolute coordinate differences. The only distance metric the
    /// search and its heuristics use; no diagonal movement, no path
    /// awareness.
    pub fn manhattan_distance(&self, other: &Self) -> i64 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as i64
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One discrete move on the grid.
///
/// `Stop` is the designated no-op. It is never offered by [Action::all] and
/// only appears as the fallback when a node has no legal action to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Move one cell north (`y + 1`).
    North,
    /// Move one cell south (`y - 1`).
    South,
    /// Move one cell east (`x + 1`).
    East,
    /// Move one cell west (`x - 1`).
    West,
    /// Stay in place. Fallback only.
    Stop,
}

impl Action {
    /// The four movement actions, in the canonical iteration order used for
    /// deterministic tie-breaking.
    pub fn all() -> [Action; 4] {
        [Action::North, Action::South, Action::East, Action::West]
    }

    /// The coordinate delta this action applies.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Action::North => (0, 1),
            Action::South => (0, -1),
            Action::East => (1, 0),
            Action::West => (-1, 0),
            Action::Stop => (0, 0),
        }
    }

    /// The position reached by taking this action from `position`.
    pub fn apply(self, position: Position) -> Position {
        let (dx, dy) = self.offset();
        Position::new(position.x + dx, position.y + dy)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::North => "north",
            Action::South => "south",
            Action::East => "east",
            Action::West => "west",
            Action::Stop => "stop",
        };
        write!(f, "{}", name)
    }
}

/// A game where we can count the turn-taking agents.
pub trait AgentCountableGame {
    /// Total number of agents, protagonist included.
    fn agent_count(&self) -> usize;
}

/// A game that can enumerate the legal actions for an agent.
pub trait LegalActionsGame {
    /// The ordered legal actions for `agent` in this state. May be empty,
    /// which the engine treats as an immediate leaf.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Action>;
}

/// A game that can generate successor states.
pub trait SimulableGame: Sized {
    /// The state reached when `agent` takes `action`. Must be pure and
    /// deterministic; the engine never mutates a state it was given.
    fn successor(&self, agent: AgentIndex, action: Action) -> Self;
}

/// A game with a terminal test and a win/lose polarity for the protagonist.
pub trait VictorDeterminableGame {
    /// Is this state terminal?
    fn is_over(&self) -> bool;

    /// Did the protagonist win? Only meaningful when [is_over](VictorDeterminableGame::is_over)
    /// returns true.
    fn is_won(&self) -> bool;
}

/// A game that exposes per-agent positions.
pub trait PositionGettableGame {
    /// Where `agent` currently stands.
    fn agent_position(&self, agent: AgentIndex) -> Position;
}

/// A game that exposes per-agent facing directions.
pub trait HeadingGettableGame {
    /// The direction `agent` last moved in. Used as a memoization key
    /// component, so it must be stable for identical states.
    fn agent_heading(&self, agent: AgentIndex) -> Action;
}

/// A game that exposes per-agent scare status.
pub trait ScareQueryableGame {
    /// Is `agent` currently scared (temporarily a target rather than a
    /// threat)?
    fn is_scared(&self, agent: AgentIndex) -> bool;
}

/// A game that exposes remaining food. Only the food-aware heuristics need
/// this; the engine itself does not.
pub trait FoodGettableGame {
    /// Positions of all remaining food.
    fn food_positions(&self) -> Vec<Position>;
}

/// Umbrella trait for everything the search engine needs from a game state.
pub trait PursuitGame:
    AgentCountableGame
    + LegalActionsGame
    + SimulableGame
    + VictorDeterminableGame
    + PositionGettableGame
    + HeadingGettableGame
    + ScareQueryableGame
    + std::fmt::Debug
{
}

impl<T> PursuitGame for T where
    T: AgentCountableGame
        + LegalActionsGame
        + SimulableGame
        + VictorDeterminableGame
        + PositionGettableGame
        + HeadingGettableGame
        + ScareQueryableGame
        + std::fmt::Debug
{
}
