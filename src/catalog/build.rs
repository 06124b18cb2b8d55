use std::collections::BTreeMap;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::catalog::config::CatalogConfig;
use crate::solver::ExpressionEnumerator;
use crate::utils::generate_multisets;

/// Immutable map from target to every stored expression reaching it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolutionCatalog {
    entries: BTreeMap<i64, Vec<String>>,
    reachable: Vec<i64>,
}

impl SolutionCatalog {
    /// Wrap prebuilt entries; targets with no expressions are dropped.
    pub fn from_entries(mut entries: BTreeMap<i64, Vec<String>>) -> Self {
        entries.retain(|_, exprs| !exprs.is_empty());
        let reachable = entries.keys().copied().collect();
        Self { entries, reachable }
    }

    /// Enumerate every multiset the config describes and collect its targets
    pub fn build(config: &CatalogConfig) -> Self {
        info!(
            "Precomputing all solutions for {} numbers in 1..={} ...",
            config.size, config.max_value
        );
        let started = Instant::now();

        let multisets = generate_multisets(config.size, config.max_value);
        let enumerator = ExpressionEnumerator::new();

        // Indexed parallel collect keeps generation order, so the merge is reproducible
        let solved: Vec<BTreeMap<i64, String>> = multisets
            .par_iter()
            .map(|numbers| enumerator.enumerate(numbers))
            .collect();

        let mut entries: BTreeMap<i64, Vec<String>> = BTreeMap::new();
        let mut configurations = 0_usize;

        for (numbers, solutions) in multisets.iter().zip(solved) {
            debug!("Solved {:?}: {} values", numbers, solutions.len());
            configurations += solutions.len();
            for (value, expr) in solutions {
                if config.accepts_target(value) {
                    entries.entry(value).or_default().push(expr);
                }
            }
        }

        let catalog = Self::from_entries(entries);
        info!(
            "Done precomputing all solutions! found {} configurations with {} unique numbers from {} multisets in {:.2?}",
            configurations,
            catalog.len(),
            multisets.len(),
            started.elapsed()
        );
        catalog
    }

    pub fn expressions(&self, target: i64) -> &[String] {
        self.entries
            .get(&target)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, target: i64) -> bool {
        self.entries.contains_key(&target)
    }

    /// Every target with at least one expression, ascending
    pub fn reachable_targets(&self) -> &[i64] {
        &self.reachable
    }

    /// Reachable targets within the half-open range `[min, max)`
    pub fn reachable_in(&self, min: i64, max: i64) -> &[i64] {
        let start = self.reachable.partition_point(|&t| t < min);
        let end = self.reachable.partition_point(|&t| t < max).max(start);
        self.reachable.get(start..end).unwrap_or(&[])
    }

    pub fn entries(&self) -> &BTreeMap<i64, Vec<String>> {
        &self.entries
    }

    /// Number of reachable targets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
