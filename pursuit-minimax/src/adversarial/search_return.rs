use decorum::N64;
use text_trees::StringTreeNode;

use crate::types::{Action, AgentIndex, Position};

/// The flattened outcome of one search: the chosen action, its score and the
/// searching agent's resulting position under that action.
///
/// This is what callers consume and what the per-round memo table stores.
/// The full explored tree is available as a [SearchTree] when you need it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Protagonist-oriented score of the chosen subtree.
    pub score: N64,
    /// The chosen action. Always drawn from the legal-action set of the
    /// state it was computed for, except for the [Action::Stop] fallback at
    /// terminal and actionless nodes.
    pub action: Action,
    /// Where the searching agent ends up under `action`. `None` for leaves,
    /// which never moved anyone.
    pub position: Option<Position>,
}

/// How children were combined at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The protagonist picked the highest-scoring child.
    Maximizing,
    /// An adversary picked the lowest-scoring child.
    Minimizing,
    /// A non-searching agent modeled as uniformly random; the score is the
    /// mean over its children.
    Chance,
}

/// The explored game tree, one variant per way a recursive call can return.
///
/// Options are kept in legal-action iteration order, which is also the
/// deterministic tie-break order.
#[derive(Debug, Clone)]
pub enum SearchTree {
    /// An expanded interior node.
    Node {
        /// How this node combined its children.
        kind: NodeKind,
        /// Which agent was moving here.
        moving_agent: AgentIndex,
        /// The chosen action (for chance nodes, the first explored one).
        action: Action,
        /// The combined score.
        score: N64,
        /// The moving agent's position under `action`.
        position: Option<Position>,
        /// True when alpha-beta cut the remaining siblings short.
        cutoff: bool,
        /// Every explored child, in exploration order.
        options: Vec<(Action, SearchTree)>,
    },
    /// A terminal state, a depth-limit evaluation, or a node with no legal
    /// action.
    Leaf {
        /// The saturating or heuristic score.
        score: N64,
        /// Always [Action::Stop]; leaves move nobody.
        action: Action,
    },
    /// A memo-table hit: the result of an identical situation searched
    /// earlier in the same round.
    Remembered {
        /// The stored result.
        result: SearchResult,
    },
}

impl SearchTree {
    /// The score this subtree settled on.
    pub fn score(&self) -> N64 {
        match self {
            SearchTree::Node { score, .. } => *score,
            SearchTree::Leaf { score, .. } => *score,
            SearchTree::Remembered { result } => result.score,
        }
    }

    /// The action chosen at this node.
    pub fn chosen_action(&self) -> Action {
        match self {
            SearchTree::Node { action, .. } => *action,
            SearchTree::Leaf { action, .. } => *action,
            SearchTree::Remembered { result } => result.action,
        }
    }

    /// Where the moving agent ends up under the chosen action, when known.
    pub fn resulting_position(&self) -> Option<Position> {
        match self {
            SearchTree::Node { position, .. } => *position,
            SearchTree::Leaf { .. } => None,
            SearchTree::Remembered { result } => result.position,
        }
    }

    /// Flatten this subtree into the triple callers consume.
    pub fn result(&self) -> SearchResult {
        SearchResult {
            score: self.score(),
            action: self.chosen_action(),
            position: self.resulting_position(),
        }
    }

    /// A visual rendering of the explored tree: the moving agent, the chosen
    /// action and the score at every expanded level. Returns `None` for a
    /// bare leaf, which has nothing worth drawing.
    pub fn to_text_tree(&self) -> Option<String> {
        let tree_node = self.to_text_tree_node("".to_owned())?;
        Some(format!("{}", tree_node))
    }

    fn to_text_tree_node(&self, label: String) -> Option<StringTreeNode> {
        match self {
            SearchTree::Leaf { .. } => None,
            SearchTree::Remembered { .. } => None,
            SearchTree::Node {
                kind,
                moving_agent,
                action,
                score,
                options,
                ..
            } => {
                let mut node = StringTreeNode::new(format!(
                    "{} agent {} {:?} chose {} ({:?})",
                    label, moving_agent, kind, action, score
                ));
                for (child_action, subtree) in options {
                    if let Some(child_node) =
                        subtree.to_text_tree_node(format!("{}", child_action))
                    {
                        node.push_node(child_node);
                    }
                }

                Some(node)
            }
        }
    }
}
