//! A small concrete grid game for exercising the policies end to end.

use std::collections::HashSet;

use pursuit_minimax::types::{
    Action, AgentCountableGame, AgentIndex, FoodGettableGame, HeadingGettableGame,
    LegalActionsGame, Position, PositionGettableGame, ScareQueryableGame, SimulableGame,
    VictorDeterminableGame, PROTAGONIST,
};

#[derive(Debug, Clone)]
struct AgentState {
    position: Position,
    heading: Action,
    scared: bool,
}

/// A rectangular grid with walls, food and one agent per index. Agent 0 is
/// the protagonist; it wins by eating the last food and loses by sharing a
/// cell with an unscared adversary.
#[derive(Debug, Clone)]
pub struct GridWorld {
    width: i32,
    height: i32,
    walls: HashSet<Position>,
    agents: Vec<AgentState>,
    food: Vec<Position>,
    outcome: Option<bool>,
}

impl GridWorld {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            walls: HashSet::new(),
            agents: Vec::new(),
            food: Vec::new(),
            outcome: None,
        }
    }

    pub fn with_agent(mut self, position: Position) -> Self {
        self.agents.push(AgentState {
            position,
            heading: Action::Stop,
            scared: false,
        });
        self
    }

    pub fn with_wall(mut self, position: Position) -> Self {
        self.walls.insert(position);
        self
    }

    pub fn with_food(mut self, position: Position) -> Self {
        self.food.push(position);
        self
    }

    pub fn with_scared(mut self, agent: AgentIndex) -> Self {
        self.agents[agent].scared = true;
        self
    }

    fn passable(&self, position: Position) -> bool {
        position.x >= 0
            && position.x < self.width
            && position.y >= 0
            && position.y < self.height
            && !self.walls.contains(&position)
    }
}

impl AgentCountableGame for GridWorld {
    fn agent_count(&self) -> usize {
        self.agents.len()
    }
}

impl LegalActionsGame for GridWorld {
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Action> {
        Action::all()
            .into_iter()
            .filter(|action| self.passable(action.apply(self.agents[agent].position)))
            .collect()
    }
}

impl SimulableGame for GridWorld {
    fn successor(&self, agent: AgentIndex, action: Action) -> Self {
        let mut next = self.clone();
        let destination = action.apply(next.agents[agent].position);
        next.agents[agent].position = destination;
        next.agents[agent].heading = action;

        let protagonist = next.agents[PROTAGONIST].position;
        let caught = next
            .agents
            .iter()
            .skip(1)
            .any(|adversary| !adversary.scared && adversary.position == protagonist);
        if caught {
            next.outcome = Some(false);
            return next;
        }

        if agent == PROTAGONIST && !next.food.is_empty() {
            next.food.retain(|&food| food != destination);
            if next.food.is_empty() {
                next.outcome = Some(true);
            }
        }

        next
    }
}

impl VictorDeterminableGame for GridWorld {
    fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    fn is_won(&self) -> bool {
        self.outcome == Some(true)
    }
}

impl PositionGettableGame for GridWorld {
    fn agent_position(&self, agent: AgentIndex) -> Position {
        self.agents[agent].position
    }
}

impl HeadingGettableGame for GridWorld {
    fn agent_heading(&self, agent: AgentIndex) -> Action {
        self.agents[agent].heading
    }
}

impl ScareQueryableGame for GridWorld {
    fn is_scared(&self, agent: AgentIndex) -> bool {
        self.agents[agent].scared
    }
}

impl FoodGettableGame for GridWorld {
    fn food_positions(&self) -> Vec<Position> {
        self.food.clone()
    }
}
