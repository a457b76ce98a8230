//! Exact-value selection engine
//!
//! Finds a subset of movements whose values add up exactly to a target
//! amount. Three strategies are tried in order and the first exact match
//! wins:
//!
//! - `memoized`: include-before-exclude search over values sorted
//!   descending, remembering `(position, remaining)` states that failed.
//!   Complete when it finishes within its state budget.
//! - `exhaustive`: every combination of up to `exhaustive_max_size`
//!   candidates, smallest first, for files of at most
//!   `exhaustive_max_records` movements.
//! - `greedy`: ascending include-while-it-fits search with backtracking,
//!   bounded by a node budget. Best effort only.
//!
//! The later strategies only run when the memoized search ran out of
//! budget; a memoized search that finishes without a match proves no subset
//! exists.
//!
//! All arithmetic is on integer cents and equality is exact.

mod exhaustive;
mod greedy;
mod memoized;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::models::{Money, MovementFile};

/// Set of movement indices, ascending
pub type IndexSet = BTreeSet<usize>;

/// Outcome of a single strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TierResult {
    /// Original indices of an exact match
    Found(Vec<usize>),
    /// The whole search space was covered without a match
    Exhausted,
    /// The strategy stopped early (budget or size limit)
    Inconclusive,
}

/// Limits that bound the selection engine's running time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionLimits {
    /// Search states the memoized search may visit before giving up
    pub memo_state_budget: usize,
    /// Largest movement count for which combinations are enumerated
    pub exhaustive_max_records: usize,
    /// Largest combination size enumerated
    pub exhaustive_max_size: usize,
    /// Search nodes the greedy fallback may visit before giving up
    pub greedy_node_budget: usize,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            memo_state_budget: 2_000_000,
            exhaustive_max_records: 30,
            exhaustive_max_size: 10,
            greedy_node_budget: 1_000_000,
        }
    }
}

/// Which strategy produced a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    MemoizedSearch,
    ExhaustiveCombinations,
    BoundedGreedy,
}

impl Strategy {
    /// Whether the strategy can miss a solution that exists
    pub fn is_best_effort(&self) -> bool {
        matches!(self, Self::BoundedGreedy)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemoizedSearch => write!(f, "memoized search"),
            Self::ExhaustiveCombinations => write!(f, "exhaustive combinations"),
            Self::BoundedGreedy => write!(f, "bounded greedy search"),
        }
    }
}

/// An exact match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Indices of the chosen movements
    pub indices: IndexSet,
    /// Sum of the chosen values; always equal to the target
    pub total: Money,
    pub strategy: Strategy,
}

impl Selection {
    pub fn is_best_effort(&self) -> bool {
        self.strategy.is_best_effort()
    }
}

/// Result of a selection request
///
/// Not finding a combination is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Found(Selection),
    /// No subset was found. `exhaustive` is true when the search proved
    /// that none exists, false when a budget or size limit cut it short.
    NoExactCombination { exhaustive: bool },
}

impl SelectionOutcome {
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Self::Found(selection) => Some(selection),
            Self::NoExactCombination { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// The selection engine, configured with its limits
#[derive(Debug, Clone, Default)]
pub struct SelectionEngine {
    limits: SelectionLimits,
}

impl SelectionEngine {
    pub fn new(limits: SelectionLimits) -> Self {
        Self { limits }
    }

    /// Select from the movements of a file
    pub fn find_in_file(&self, file: &MovementFile, target: Money) -> SelectionOutcome {
        self.find_exact(&file.value_candidates(), target)
    }

    /// Find indices whose values sum exactly to `target`
    ///
    /// `candidates` are `(index, value)` pairs. Only non-empty subsets of
    /// non-negative values are searched, so a target of zero or less never
    /// matches. The same input always yields the same index set.
    pub fn find_exact(&self, candidates: &[(usize, Money)], target: Money) -> SelectionOutcome {
        if !target.is_positive() {
            return SelectionOutcome::NoExactCombination { exhaustive: true };
        }

        let usable: Vec<(usize, i64)> = candidates
            .iter()
            .filter(|(_, value)| !value.is_negative())
            .map(|(index, value)| (*index, value.cents()))
            .collect();
        let target = target.cents();

        let memo = memoized::search(&usable, target, self.limits.memo_state_budget);
        let (result, strategy) = match memo {
            TierResult::Inconclusive if usable.len() <= self.limits.exhaustive_max_records => (
                exhaustive::search(&usable, target, self.limits.exhaustive_max_size),
                Strategy::ExhaustiveCombinations,
            ),
            TierResult::Inconclusive => (
                greedy::search(&usable, target, self.limits.greedy_node_budget),
                Strategy::BoundedGreedy,
            ),
            decided => (decided, Strategy::MemoizedSearch),
        };

        match result {
            TierResult::Found(indices) => {
                let indices: IndexSet = indices.into_iter().collect();
                let total = usable
                    .iter()
                    .filter(|(index, _)| indices.contains(index))
                    .map(|(_, cents)| Money::from_cents(*cents))
                    .sum();
                SelectionOutcome::Found(Selection {
                    indices,
                    total,
                    strategy,
                })
            }
            TierResult::Exhausted => SelectionOutcome::NoExactCombination { exhaustive: true },
            TierResult::Inconclusive => SelectionOutcome::NoExactCombination { exhaustive: false },
        }
    }
}
