use std::marker::PhantomData;

use decorum::N64;
use derivative::Derivative;
use itertools::Itertools;
use tracing::{info, info_span, warn};

use crate::types::{Action, AgentIndex, Position, PursuitGame, PROTAGONIST};
use crate::ConfigError;

use super::coordination::{MemoKey, RoundContext};
use super::score::{loss_score, win_score, Scorable};
use super::search_return::{NodeKind, SearchResult, SearchTree};
use super::strategy::Strategy;

/// The recursive tree-search engine. One instance binds a [Strategy], a
/// maximum depth in agent plies and a scoring function; it can then run any
/// number of searches, each on behalf of one agent.
///
/// It also outputs traces using the [tracing] crate.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct SearchEngine<GameType, ScorableType>
where
    ScorableType: Scorable<GameType> + Clone,
{
    strategy: Strategy,
    max_depth: usize,
    #[derivative(Debug = "ignore")]
    score_function: ScorableType,
    name: &'static str,
    _game: PhantomData<fn() -> GameType>,
}

/// Evaluation context fixed at the root of one search: who we are searching
/// for and whether that agent was scared when the search began.
#[derive(Debug, Clone, Copy)]
struct EvalContext {
    searcher: AgentIndex,
    is_scared: bool,
}

impl<GameType, ScorableType> SearchEngine<GameType, ScorableType>
where
    GameType: PursuitGame,
    ScorableType: Scorable<GameType> + Clone,
{
    /// Construct an engine. `max_depth` is counted in agent plies (a full
    /// round of N agents consumes N depth units) and must be at least one.
    pub fn new(
        strategy: Strategy,
        max_depth: usize,
        score_function: ScorableType,
        name: &'static str,
    ) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }

        Ok(Self {
            strategy,
            max_depth,
            score_function,
            name,
            _game: PhantomData,
        })
    }

    /// The strategy this engine was built with.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The depth limit in agent plies.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Pick the best action for `agent` in `state`, returning the flattened
    /// result. This is the entry point decision policies call.
    pub fn decide(
        &self,
        state: &GameType,
        agent: AgentIndex,
        round: &mut RoundContext,
    ) -> SearchResult {
        info_span!(
            "tree_search",
            policy = self.name,
            agent,
            strategy = ?self.strategy,
            max_depth = self.max_depth,
            chosen_action = tracing::field::Empty,
            chosen_score = tracing::field::Empty,
        )
        .in_scope(|| {
            let tree = self.search_tree(state, agent, round);
            let result = tree.result();

            let current_span = tracing::Span::current();
            current_span.record("chosen_action", format!("{}", result.action).as_str());
            current_span.record("chosen_score", format!("{:?}", result.score).as_str());

            result
        })
    }

    /// Run the search for `agent` and return the whole explored tree. Useful
    /// for debugging; [SearchTree::to_text_tree] renders it.
    pub fn search_tree(
        &self,
        state: &GameType,
        agent: AgentIndex,
        round: &mut RoundContext,
    ) -> SearchTree {
        let ctx = EvalContext {
            searcher: agent,
            is_scared: state.is_scared(agent),
        };

        self.search(
            state,
            0,
            agent,
            N64::from(f64::NEG_INFINITY),
            N64::from(f64::INFINITY),
            ctx,
            round,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn search(
        &self,
        node: &GameType,
        depth: usize,
        agent: AgentIndex,
        alpha: N64,
        beta: N64,
        ctx: EvalContext,
        round: &mut RoundContext,
    ) -> SearchTree {
        if node.is_over() {
            let score = if node.is_won() {
                win_score()
            } else {
                loss_score()
            };
            return SearchTree::Leaf {
                score,
                action: Action::Stop,
            };
        }

        if depth >= self.max_depth {
            let score = self.score_function.score(node, ctx.searcher, ctx.is_scared);
            return SearchTree::Leaf {
                score,
                action: Action::Stop,
            };
        }

        // The memo table only exists for adversary searches, and never
        // covers the protagonist's own plies.
        let memo_key = if ctx.searcher != PROTAGONIST && agent != PROTAGONIST {
            let key = MemoKey::new(
                node.agent_position(PROTAGONIST),
                node.agent_position(agent),
                node.agent_heading(agent),
            );
            if let Some(result) = round.lookup(&key) {
                return SearchTree::Remembered { result };
            }
            Some(key)
        } else {
            None
        };

        let legal = node.legal_actions(agent);
        if legal.is_empty() {
            warn!(agent, "no legal actions, scoring in place");
            let score = self.score_function.score(node, ctx.searcher, ctx.is_scared);
            return SearchTree::Leaf {
                score,
                action: Action::Stop,
            };
        }

        // Cells committed by sibling adversaries are only avoided on the
        // searching adversary's own plies.
        let filter_commitments = ctx.searcher != PROTAGONIST && agent == ctx.searcher;

        let mut candidates = legal
            .iter()
            .copied()
            .map(|action| {
                let child = node.successor(agent, action);
                let position = child.agent_position(agent);
                (action, child, position)
            })
            .filter(|(_, _, position)| {
                !filter_commitments || !round.is_committed_by_other(agent, position)
            })
            .collect_vec();

        if candidates.is_empty() {
            info!(
                agent,
                "every successor targets a committed cell, ignoring commitments"
            );
            let action = legal[0];
            let child = node.successor(agent, action);
            let position = child.agent_position(agent);
            candidates.push((action, child, position));
        }

        let next_agent = (agent + 1) % node.agent_count();
        let kind = self.node_kind(agent, ctx);

        let tree = match kind {
            NodeKind::Maximizing | NodeKind::Minimizing => {
                self.expand_choice(kind, agent, depth, next_agent, candidates, alpha, beta, ctx, round)
            }
            NodeKind::Chance => {
                self.expand_chance(agent, depth, next_agent, candidates, alpha, beta, ctx, round)
            }
        };

        if let Some(key) = memo_key {
            // A cut-short score is only a bound, not the exact value; it
            // must never be served to later searches as exact.
            if !matches!(tree, SearchTree::Node { cutoff: true, .. }) {
                round.store(key, tree.result());
            }
        }

        tree
    }

    #[allow(clippy::too_many_arguments)]
    fn expand_choice(
        &self,
        kind: NodeKind,
        agent: AgentIndex,
        depth: usize,
        next_agent: AgentIndex,
        candidates: Vec<(Action, GameType, Position)>,
        mut alpha: N64,
        mut beta: N64,
        ctx: EvalContext,
        round: &mut RoundContext,
    ) -> SearchTree {
        let maximizing = kind == NodeKind::Maximizing;
        let mut options = Vec::with_capacity(candidates.len());
        let mut best: Option<(N64, Action, Position)> = None;
        let mut cutoff = false;

        for (action, child, position) in candidates {
            let subtree = self.search(&child, depth + 1, next_agent, alpha, beta, ctx, round);
            let value = subtree.score();
            options.push((action, subtree));

            // Ties go to the first action in legal-action order.
            let improved = match best {
                None => true,
                Some((incumbent, _, _)) => {
                    if maximizing {
                        value > incumbent
                    } else {
                        value < incumbent
                    }
                }
            };
            if improved {
                best = Some((value, action, position));
            }

            if self.strategy == Strategy::AlphaBeta {
                if maximizing {
                    if value > beta {
                        cutoff = true;
                        break;
                    }
                    alpha = std::cmp::max(alpha, value);
                } else {
                    if value < alpha {
                        cutoff = true;
                        break;
                    }
                    beta = std::cmp::min(beta, value);
                }
            }
        }

        let (score, action, position) = best.expect("at least one candidate is always explored");

        SearchTree::Node {
            kind,
            moving_agent: agent,
            action,
            score,
            position: Some(position),
            cutoff,
            options,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn expand_chance(
        &self,
        agent: AgentIndex,
        depth: usize,
        next_agent: AgentIndex,
        candidates: Vec<(Action, GameType, Position)>,
        alpha: N64,
        beta: N64,
        ctx: EvalContext,
        round: &mut RoundContext,
    ) -> SearchTree {
        let weight = N64::from(1.0 / candidates.len() as f64);
        let mut options = Vec::with_capacity(candidates.len());
        let mut expected = N64::from(0.0);
        let mut first: Option<(Action, Position)> = None;

        for (action, child, position) in candidates {
            let subtree = self.search(&child, depth + 1, next_agent, alpha, beta, ctx, round);
            expected = expected + subtree.score() * weight;
            if first.is_none() {
                first = Some((action, position));
            }
            options.push((action, subtree));
        }

        let (action, position) = first.expect("at least one candidate is always explored");

        SearchTree::Node {
            kind: NodeKind::Chance,
            moving_agent: agent,
            action,
            score: expected,
            position: Some(position),
            cutoff: false,
            options,
        }
    }

    fn node_kind(&self, agent: AgentIndex, ctx: EvalContext) -> NodeKind {
        let chooser = if agent == PROTAGONIST {
            NodeKind::Maximizing
        } else {
            NodeKind::Minimizing
        };

        match self.strategy {
            Strategy::Minimax | Strategy::AlphaBeta => chooser,
            Strategy::Expectimax => {
                if agent == ctx.searcher {
                    chooser
                } else {
                    NodeKind::Chance
                }
            }
        }
    }
}
