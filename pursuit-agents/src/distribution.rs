//! Probability distributions over actions, the currency adversary policies
//! answer in.

use rand::Rng;

use pursuit_minimax::types::Action;

use crate::PolicyError;

/// The share of probability mass a policy concentrates on its preferred
/// actions. The remainder is spread uniformly over everything legal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantMass(f64);

impl DominantMass {
    /// Validate a mass in `[0, 1]`.
    pub fn new(mass: f64) -> Result<Self, PolicyError> {
        if !(0.0..=1.0).contains(&mass) {
            return Err(PolicyError::DominantMassOutOfRange(mass));
        }
        Ok(Self(mass))
    }

    /// All mass on the preferred actions.
    pub fn full() -> Self {
        Self(1.0)
    }

    /// No preference at all; the distribution comes out uniform.
    pub fn none() -> Self {
        Self(0.0)
    }

    /// The raw mass.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// A normalized probability distribution over a set of actions.
///
/// Entries stay in legal-action iteration order, so [most_likely](ActionDistribution::most_likely)
/// breaks ties the same way the search engine does.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDistribution {
    entries: Vec<(Action, f64)>,
}

impl ActionDistribution {
    /// Concentrate `dominant` mass on `winners` (split evenly among them)
    /// and spread the remainder uniformly over `legal`, then normalize.
    ///
    /// With no winners the whole distribution is uniform over `legal`.
    pub fn build(
        legal: &[Action],
        winners: &[Action],
        dominant: DominantMass,
    ) -> Result<Self, PolicyError> {
        if legal.is_empty() {
            return Err(PolicyError::EmptyLegalActions);
        }

        let dominant = if winners.is_empty() {
            0.0
        } else {
            dominant.value()
        };
        let residual = 1.0 - dominant;

        let mut entries: Vec<(Action, f64)> = legal
            .iter()
            .map(|&action| (action, residual / legal.len() as f64))
            .collect();
        for winner in winners {
            if let Some(entry) = entries.iter_mut().find(|(action, _)| action == winner) {
                entry.1 += dominant / winners.len() as f64;
            }
        }

        let total: f64 = entries.iter().map(|(_, mass)| mass).sum();
        for entry in &mut entries {
            entry.1 /= total;
        }

        Ok(Self { entries })
    }

    /// The degenerate distribution that always stays put. The answer when an
    /// agent has nothing legal to do.
    pub fn stop() -> Self {
        Self {
            entries: vec![(Action::Stop, 1.0)],
        }
    }

    /// The probability assigned to `action` (zero when absent).
    pub fn probability(&self, action: Action) -> f64 {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == action)
            .map(|(_, mass)| *mass)
            .unwrap_or(0.0)
    }

    /// The sum over all entries. One, up to rounding.
    pub fn total_mass(&self) -> f64 {
        self.entries.iter().map(|(_, mass)| mass).sum()
    }

    /// The highest-probability action; the earliest entry wins ties.
    pub fn most_likely(&self) -> Option<Action> {
        let mut best: Option<(Action, f64)> = None;
        for &(action, mass) in &self.entries {
            if best.map_or(true, |(_, incumbent)| mass > incumbent) {
                best = Some((action, mass));
            }
        }
        best.map(|(action, _)| action)
    }

    /// Draw one action according to the distribution.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Action {
        let mut roll: f64 = rng.gen_range(0.0..self.total_mass());
        for &(action, mass) in &self.entries {
            if roll < mass {
                return action;
            }
            roll -= mass;
        }

        // Rounding pushed the roll past every entry.
        self.entries
            .last()
            .map(|(action, _)| *action)
            .unwrap_or(Action::Stop)
    }

    /// The entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, f64)> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legal() -> Vec<Action> {
        vec![Action::North, Action::South, Action::East, Action::West]
    }

    #[test]
    fn distributions_sum_to_one_for_any_dominant_mass() {
        for mass in [0.0, 0.3, 0.8, 1.0] {
            let distribution = ActionDistribution::build(
                &legal(),
                &[Action::South],
                DominantMass::new(mass).unwrap(),
            )
            .unwrap();
            assert!((distribution.total_mass() - 1.0).abs() < 1e-9, "mass {}", mass);
        }
    }

    #[test]
    fn dominant_mass_splits_between_winners() {
        let distribution = ActionDistribution::build(
            &legal(),
            &[Action::South, Action::West],
            DominantMass::new(0.8).unwrap(),
        )
        .unwrap();

        assert!((distribution.probability(Action::South) - 0.45).abs() < 1e-9);
        assert!((distribution.probability(Action::West) - 0.45).abs() < 1e-9);
        assert!((distribution.probability(Action::North) - 0.05).abs() < 1e-9);
        assert!((distribution.probability(Action::East) - 0.05).abs() < 1e-9);
    }

    #[test]
    fn no_winners_means_uniform() {
        let distribution =
            ActionDistribution::build(&legal(), &[], DominantMass::full()).unwrap();

        for action in Action::all() {
            assert!((distribution.probability(action) - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn full_mass_on_a_single_winner_is_deterministic() {
        let distribution =
            ActionDistribution::build(&legal(), &[Action::East], DominantMass::full()).unwrap();

        assert_eq!(distribution.most_likely(), Some(Action::East));
        assert!((distribution.probability(Action::East) - 1.0).abs() < 1e-9);

        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            assert_eq!(distribution.sample(&mut rng), Action::East);
        }
    }

    #[test]
    fn out_of_range_masses_are_rejected() {
        assert_eq!(
            DominantMass::new(-0.1).unwrap_err(),
            PolicyError::DominantMassOutOfRange(-0.1)
        );
        assert_eq!(
            DominantMass::new(1.5).unwrap_err(),
            PolicyError::DominantMassOutOfRange(1.5)
        );
    }

    #[test]
    fn empty_action_sets_are_rejected() {
        let err = ActionDistribution::build(&[], &[], DominantMass::none()).unwrap_err();
        assert_eq!(err, PolicyError::EmptyLegalActions);
    }

    #[test]
    fn stop_is_a_point_mass() {
        let distribution = ActionDistribution::stop();
        assert_eq!(distribution.most_likely(), Some(Action::Stop));
        assert!((distribution.probability(Action::Stop) - 1.0).abs() < 1e-9);
    }
}
