//! Trial fan-out and aggregation.
//!
//! Every trial resolves its own sampled copy of the template graph and
//! solves it in isolation; the per-path means and the failure tally merge
//! commutatively, so the unordered parallel completion stream feeds the
//! aggregator directly.

use core::fmt::Display;
use core::hash::Hash;

use hashbrown::HashMap;
use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::model::{Graph, SpeedSampling, Street};
use crate::routing::shortest_path;
use crate::stats::Mean;

use super::config::{Execution, SimulationConfig};

/// Fixed ranking depth of a simulation run
const TOP_PATHS: usize = 2;

/// One of the most likely-best paths across all trials
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPath<K> {
    /// Node keys from source to destination
    pub path: Vec<K>,
    /// Mean travel time over the trials that chose this path, in minutes
    pub mean_minutes: f64,
}

/// `Some((path, minutes))` for a solved trial, `None` for a failed one
type TrialResult<K> = Option<(Vec<K>, f64)>;

/// Runs `config.trials` independent trials over `template` and ranks the
/// distinct best paths by mean travel time, best first, at most
/// [`TOP_PATHS`] entries.
///
/// # Errors
///
/// [`Error::UnknownNode`] when the source key was never inserted into the
/// template graph; [`Error::NoPathFound`] when every single trial failed
/// to reach the destination.
pub fn run_simulation<K>(
    template: &Graph<K, Street>,
    source: &K,
    destination: &K,
    config: &SimulationConfig,
) -> Result<Vec<RankedPath<K>>, Error>
where
    K: Eq + Hash + Clone + Display + Send + Sync,
{
    if !template.contains(source) {
        return Err(Error::UnknownNode(source.to_string()));
    }

    info!(
        "Running {} trials between {source} and {destination}",
        config.trials
    );

    let outcomes = match config.execution {
        Execution::Sequential => (0..config.trials)
            .map(|_| run_trial(template, source, destination, config.sampling))
            .fold(Outcomes::default(), Outcomes::absorb),
        Execution::Parallel { workers, batch } => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()?;
            pool.install(|| {
                (0..config.trials)
                    .into_par_iter()
                    .with_min_len(batch.max(1))
                    .map(|_| run_trial(template, source, destination, config.sampling))
                    .fold(Outcomes::default, Outcomes::absorb)
                    .reduce(Outcomes::default, Outcomes::merge)
            })
        }
    };

    if outcomes.failures > 0 {
        debug!(
            "{} of {} trials found no path",
            outcomes.failures, config.trials
        );
    }
    if outcomes.failures == config.trials {
        return Err(Error::NoPathFound {
            source: source.to_string(),
            destination: destination.to_string(),
        });
    }

    let mut candidates = Vec::with_capacity(outcomes.means.len());
    for (path, mean) in outcomes.means {
        candidates.push(RankedPath {
            path,
            mean_minutes: mean.average()?,
        });
    }

    Ok(candidates
        .into_iter()
        .k_smallest_by(TOP_PATHS, |a, b| a.mean_minutes.total_cmp(&b.mean_minutes))
        .collect())
}

/// One independent trial: sample every street once, solve, report minutes
fn run_trial<K>(
    template: &Graph<K, Street>,
    source: &K,
    destination: &K,
    sampling: SpeedSampling,
) -> TrialResult<K>
where
    K: Eq + Hash + Clone,
{
    let mut rng = rand::thread_rng();
    let sampled = template.map_weights(|street| street.resolve(sampling, &mut rng));

    shortest_path(&sampled, source, destination)
        .map(|(cost, path)| (path, cost.time() * 60.0))
}

/// Mergeable aggregate of trial results: one [`Mean`] per distinct path
/// plus the failure tally.
struct Outcomes<K> {
    means: HashMap<Vec<K>, Mean>,
    failures: usize,
}

impl<K> Default for Outcomes<K> {
    fn default() -> Self {
        Outcomes {
            means: HashMap::new(),
            failures: 0,
        }
    }
}

impl<K: Eq + Hash> Outcomes<K> {
    fn absorb(mut self, trial: TrialResult<K>) -> Self {
        match trial {
            Some((path, minutes)) => self.means.entry(path).or_default().insert(minutes),
            None => self.failures += 1,
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        for (path, mean) in other.means {
            self.means.entry(path).or_default().merge(mean);
        }
        self.failures += other.failures;
        self
    }
}
