//! Parameter grids for dispatch sweeps.

use dispatch_core::matching::SelectionPolicyKind;
use serde::Serialize;

/// One scenario to run: a fleet, a request stream, and a selection policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSet {
    pub run_id: usize,
    pub seed: u64,
    pub fleet_size: usize,
    pub request_count: usize,
    /// Fraction of the fleet spawned off duty, in `[0, 1)`.
    pub off_duty_fraction: f64,
    pub surge_multiplier: f64,
    pub policy: SelectionPolicyKind,
}

/// Grid search over sweep dimensions. Every combination becomes one
/// `ParameterSet`, seeded deterministically from the base seed.
#[derive(Debug, Clone)]
pub struct ParameterSpace {
    fleet_sizes: Vec<usize>,
    request_count: usize,
    off_duty_fractions: Vec<f64>,
    surge_multipliers: Vec<f64>,
    policies: Vec<SelectionPolicyKind>,
    base_seed: u64,
}

impl ParameterSpace {
    pub fn grid() -> Self {
        Self {
            fleet_sizes: vec![100],
            request_count: 500,
            off_duty_fractions: vec![0.0],
            surge_multipliers: vec![1.0],
            policies: vec![
                SelectionPolicyKind::Nearest,
                SelectionPolicyKind::BestEfficiency,
            ],
            base_seed: 42,
        }
    }

    pub fn fleet_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.fleet_sizes = sizes;
        self
    }

    pub fn request_count(mut self, count: usize) -> Self {
        self.request_count = count;
        self
    }

    pub fn off_duty_fractions(mut self, fractions: Vec<f64>) -> Self {
        self.off_duty_fractions = fractions;
        self
    }

    pub fn surge_multipliers(mut self, multipliers: Vec<f64>) -> Self {
        self.surge_multipliers = multipliers;
        self
    }

    pub fn policies(mut self, policies: Vec<SelectionPolicyKind>) -> Self {
        self.policies = policies;
        self
    }

    pub fn base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    /// Expand the grid into concrete parameter sets.
    pub fn generate(&self) -> Vec<ParameterSet> {
        let mut sets = Vec::new();
        for &fleet_size in &self.fleet_sizes {
            for &off_duty_fraction in &self.off_duty_fractions {
                for &surge_multiplier in &self.surge_multipliers {
                    for &policy in &self.policies {
                        let run_id = sets.len();
                        sets.push(ParameterSet {
                            run_id,
                            seed: self.base_seed.wrapping_add(run_id as u64),
                            fleet_size,
                            request_count: self.request_count,
                            off_duty_fraction,
                            surge_multiplier,
                            policy,
                        });
                    }
                }
            }
        }
        sets
    }
}
