/// The three interchangeable ways the engine combines children while walking
/// the game tree. All three share the same sign convention: the protagonist
/// maximizes a single protagonist-oriented score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Worst-case search: agent 0 maximizes, every other agent minimizes.
    /// No pruning.
    Minimax,
    /// Identical values to [Strategy::Minimax], but an (alpha, beta) bound
    /// pair is threaded through the recursion and a branch is cut short the
    /// instant its running best violates the accumulated bound.
    AlphaBeta,
    /// The searching agent chooses; every other agent is modeled as a
    /// uniform chance node whose contribution is the mean of its children.
    Expectimax,
}
