use std::collections::HashMap;

use crate::types::{Action, AgentIndex, Position};

use super::search_return::SearchResult;

/// The canonical key for memoizing an adversary's search result: the
/// protagonist's position, the searching adversary's position and the
/// adversary's facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoKey {
    protagonist: Position,
    searcher: Position,
    heading: Action,
}

impl MemoKey {
    /// Build a key from the three situation components.
    pub fn new(protagonist: Position, searcher: Position, heading: Action) -> Self {
        Self {
            protagonist,
            searcher,
            heading,
        }
    }
}

/// Cross-agent coordination state for one decision round.
///
/// Holds the target cells each adversary has committed to (so sibling
/// adversaries avoid converging on the same cell) and the memo table of
/// subtrees already searched this round. Strictly sequential use: one search
/// per agent at a time, protagonist first, then adversaries in index order.
/// Reset it (or build a fresh one) before the next round so nothing stale
/// leaks across rounds.
#[derive(Debug, Clone, Default)]
pub struct RoundContext {
    commitments: HashMap<AgentIndex, Position>,
    memo: HashMap<MemoKey, SearchResult>,
}

impl RoundContext {
    /// An empty context, ready for the first search of a round.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all commitments and memoized results. Call between rounds.
    pub fn reset(&mut self) {
        self.commitments.clear();
        self.memo.clear();
    }

    /// Record that `agent` is steering toward `position`, replacing any
    /// earlier commitment by the same agent.
    pub fn commit(&mut self, agent: AgentIndex, position: Position) {
        self.commitments.insert(agent, position);
    }

    /// Every currently committed target cell.
    pub fn committed_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.commitments.values().copied()
    }

    /// The cell `agent` last committed to, if any.
    pub fn committed_position(&self, agent: AgentIndex) -> Option<Position> {
        self.commitments.get(&agent).copied()
    }

    /// Has any agent other than `agent` committed to `position`?
    pub fn is_committed_by_other(&self, agent: AgentIndex, position: &Position) -> bool {
        self.commitments
            .iter()
            .any(|(&committer, committed)| committer != agent && committed == position)
    }

    /// Look up a previously stored result for `key`.
    pub fn lookup(&self, key: &MemoKey) -> Option<SearchResult> {
        self.memo.get(key).copied()
    }

    /// Store `result` under `key` for the rest of the round.
    pub fn store(&mut self, key: MemoKey, result: SearchResult) {
        self.memo.insert(key, result);
    }
}
