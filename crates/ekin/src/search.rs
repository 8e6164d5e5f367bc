use crate::state::{BaseInt, EkinState, MAX_SIZE};
use rayon::prelude::*;
use std::collections::HashSet;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("state size must be between 1 and 16, got {0}")]
    InvalidSize(usize),

    #[error("base int overflow (reached {value}) at iteration {iteration}")]
    Overflow { value: BaseInt, iteration: usize },

    #[error("failed to record new max: {0}")]
    Record(#[from] io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub size: usize,
    pub max_iterations: usize,
}

/// Checks that `size` is a supported state length.
pub fn validate_size(size: usize) -> Result<(), SearchError> {
    if size == 0 || size > MAX_SIZE {
        return Err(SearchError::InvalidSize(size));
    }
    Ok(())
}

/// The running maximum grew to `new_max` during `iteration`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewMax {
    pub new_max: BaseInt,
    pub iteration: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchSummary {
    /// Iterations started, including the final empty one when exhausted.
    pub iterations: usize,
    /// No unseen state was left.
    pub exhausted: bool,
    pub states_seen: usize,
    pub last_max: BaseInt,
}

/// Runs the breadth-first search, calling `on_new_max` every time the
/// largest element seen so far grows.
///
/// Successors of the frontier are expanded on the rayon pool; merging into
/// the seen set is sequential, so the record sequence does not depend on the
/// number of threads.
pub fn search<F>(config: &SearchConfig, mut on_new_max: F) -> Result<SearchSummary, SearchError>
where
    F: FnMut(NewMax) -> io::Result<()>,
{
    validate_size(config.size)?;

    let zero = EkinState::zero(config.size);
    let mut seen = HashSet::new();
    seen.insert(zero.clone());
    let mut current = vec![zero];
    let mut last_max: BaseInt = 0;

    for iteration in 0..config.max_iterations {
        let expanded: Vec<Vec<EkinState>> = current
            .par_iter()
            .map(|state| state.successors(&seen))
            .collect::<Result<_, _>>()
            .map_err(|value| SearchError::Overflow { value, iteration })?;

        let mut frontier = Vec::new();
        for state in expanded.into_iter().flatten() {
            if seen.contains(&state) {
                continue;
            }

            let inverse = state.inverse();
            seen.insert(state.clone());
            frontier.push(state);

            if seen.insert(inverse.clone()) {
                frontier.push(inverse);
            }
        }

        log::debug!(
            "iteration {}: {} new states, {} seen",
            iteration,
            frontier.len(),
            seen.len()
        );

        if frontier.is_empty() {
            return Ok(SearchSummary {
                iterations: iteration + 1,
                exhausted: true,
                states_seen: seen.len(),
                last_max,
            });
        }

        for state in &frontier {
            let max = state.max();
            if max > last_max {
                last_max = max;
                log::info!("new max {} at iteration {}", max, iteration);
                on_new_max(NewMax {
                    new_max: max,
                    iteration,
                })?;
            }
        }

        current = frontier;
    }

    log::warn!("max iterations reached ({})", config.max_iterations);
    Ok(SearchSummary {
        iterations: config.max_iterations,
        exhausted: false,
        states_seen: seen.len(),
        last_max,
    })
}
