use std::collections::{BTreeMap, HashMap, btree_map, hash_map};

use log::{debug, warn};

use crate::solver::candidate::Candidate;
use crate::solver::constants::{EPSILON, LARGE_INPUT_WARNING, MAX_EXACT_INTEGER};

/// Grouping key: near-integers collapse onto their integer, everything else
/// keys on its exact bit pattern.
fn value_key(value: f64) -> u64 {
    let rounded = value.round();
    let snapped = if (rounded - value).abs() <= EPSILON {
        rounded
    } else {
        value
    };
    // -0.0 and 0.0 must share a key
    if snapped == 0.0 {
        0.0_f64.to_bits()
    } else {
        snapped.to_bits()
    }
}

/// Collapse candidates whose values lie within `EPSILON` of a group's first value
fn merge_within_tolerance(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| a.value.total_cmp(&b.value));

    let mut merged: Vec<Candidate> = Vec::with_capacity(candidates.len());
    let mut anchor = f64::NEG_INFINITY;

    for candidate in candidates {
        if (candidate.value - anchor).abs() <= EPSILON {
            if let Some(last) = merged.last_mut()
                && candidate.is_better_than(last)
            {
                *last = candidate;
            }
        } else {
            anchor = candidate.value;
            merged.push(candidate);
        }
    }

    merged
}

/// The non-negative integer a value stands for, if it is one
fn integral_value(value: f64) -> Option<i64> {
    if value <= EPSILON {
        return None;
    }
    let rounded = value.round();
    if (rounded - value).abs() > EPSILON || rounded >= MAX_EXACT_INTEGER {
        return None;
    }
    Some(rounded as i64)
}

/// Finds every value reachable from a number sequence with `+ - * / ^`
pub struct ExpressionEnumerator {}

impl ExpressionEnumerator {
    /// Create a new expression enumerator
    pub fn new() -> Self {
        Self {}
    }

    /// Map each reachable positive integer to its canonical expression
    pub fn enumerate(&self, numbers: &[u64]) -> BTreeMap<i64, String> {
        let mut best: BTreeMap<i64, Candidate> = BTreeMap::new();

        for candidate in self.candidates(numbers) {
            let Some(value) = integral_value(candidate.value) else {
                continue;
            };
            match best.entry(value) {
                btree_map::Entry::Occupied(mut slot) => {
                    if candidate.is_better_than(slot.get()) {
                        slot.insert(candidate);
                    }
                }
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(candidate);
                }
            }
        }

        debug!("Numbers {:?} reach {} integer values", numbers, best.len());
        best.into_iter().map(|(value, c)| (value, c.expr)).collect()
    }

    /// Canonical expression for `target`, if the numbers can reach it
    pub fn find_expression(&self, numbers: &[u64], target: i64) -> Option<String> {
        self.enumerate(numbers).remove(&target)
    }

    /// Deduplicated candidates that use every number exactly once
    pub fn candidates(&self, numbers: &[u64]) -> Vec<Candidate> {
        self.subset_states(numbers).pop().unwrap_or_default()
    }

    /// Candidate lists for every subset, indexed by subset bitmask
    pub(crate) fn subset_states(&self, numbers: &[u64]) -> Vec<Vec<Candidate>> {
        if numbers.is_empty() {
            return Vec::new();
        }
        if numbers.len() > LARGE_INPUT_WARNING {
            warn!(
                "Enumerating {} numbers; cost grows roughly as 3^n",
                numbers.len()
            );
        }

        let Some(subsets) = u32::try_from(numbers.len())
            .ok()
            .and_then(|n| 1_usize.checked_shl(n))
        else {
            warn!("Too many numbers to enumerate: {}", numbers.len());
            return Vec::new();
        };

        let mut states: Vec<Vec<Candidate>> = Vec::with_capacity(subsets);
        states.push(Vec::new());

        for mask in 1..subsets {
            let state = if mask.count_ones() == 1 {
                numbers
                    .get(mask.trailing_zeros() as usize)
                    .map(|&n| vec![Candidate::literal(n)])
                    .unwrap_or_default()
            } else {
                Self::combine_subset(&states, mask)
            };
            debug!("Subset {:#b} holds {} candidates", mask, state.len());
            states.push(state);
        }

        states
    }

    /// Join every split of `mask` into two non-empty parts.
    /// Each split is visited once per ordering of its parts.
    fn combine_subset(states: &[Vec<Candidate>], mask: usize) -> Vec<Candidate> {
        let mut best: HashMap<u64, Candidate> = HashMap::new();

        let mut sub = (mask - 1) & mask;
        while sub > 0 {
            if let (Some(left), Some(right)) = (states.get(sub), states.get(mask ^ sub)) {
                for a in left {
                    for b in right {
                        for candidate in Candidate::combinations(a, b) {
                            match best.entry(value_key(candidate.value)) {
                                hash_map::Entry::Occupied(mut slot) => {
                                    if candidate.is_better_than(slot.get()) {
                                        slot.insert(candidate);
                                    }
                                }
                                hash_map::Entry::Vacant(slot) => {
                                    slot.insert(candidate);
                                }
                            }
                        }
                    }
                }
            }
            sub = (sub - 1) & mask;
        }

        merge_within_tolerance(best.into_values().collect())
    }
}

impl Default for ExpressionEnumerator {
    fn default() -> Self {
        Self::new()
    }
}
