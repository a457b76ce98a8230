//! Memoized include-before-exclude search
//!
//! Candidates are sorted by descending value (ties keep input order). At
//! each position the search first includes the candidate, then excludes
//! it. A branch is entered only if its remaining target is positive, no
//! larger than the sum of the values still available, and not already
//! known to fail from that position.
//!
//! The walk uses an explicit stack so deep inputs cannot overflow the call
//! stack.

use std::collections::HashSet;

use super::TierResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Include,
    Exclude,
    Done,
}

#[derive(Debug)]
struct Frame {
    position: usize,
    remaining: i64,
    step: Step,
    /// Whether the parent included its candidate to reach this frame
    included_parent: bool,
}

/// Run the search over `(index, cents)` candidates
///
/// `budget` caps the number of search states entered; hitting it yields
/// [`TierResult::Inconclusive`].
pub(crate) fn search(candidates: &[(usize, i64)], target: i64, budget: usize) -> TierResult {
    let mut order = candidates.to_vec();
    order.sort_by(|a, b| b.1.cmp(&a.1));

    let n = order.len();
    let mut suffix = vec![0i64; n + 1];
    for position in (0..n).rev() {
        suffix[position] = suffix[position + 1].saturating_add(order[position].1);
    }

    let mut failed: HashSet<(usize, i64)> = HashSet::new();
    let viable = |failed: &HashSet<(usize, i64)>, position: usize, remaining: i64| {
        position < n
            && remaining > 0
            && remaining <= suffix[position]
            && !failed.contains(&(position, remaining))
    };

    if !viable(&failed, 0, target) {
        return TierResult::Exhausted;
    }
    if budget == 0 {
        return TierResult::Inconclusive;
    }

    let mut entered = 1usize;
    let mut chosen: Vec<usize> = Vec::new();
    let mut stack = vec![Frame {
        position: 0,
        remaining: target,
        step: Step::Include,
        included_parent: false,
    }];

    while let Some(frame) = stack.last_mut() {
        let (position, remaining, step) = (frame.position, frame.remaining, frame.step);
        frame.step = match step {
            Step::Include => Step::Exclude,
            Step::Exclude | Step::Done => Step::Done,
        };

        match step {
            Step::Include => {
                let next = remaining - order[position].1;
                if next == 0 {
                    chosen.push(position);
                    return TierResult::Found(chosen.iter().map(|p| order[*p].0).collect());
                }
                if viable(&failed, position + 1, next) {
                    if entered >= budget {
                        return TierResult::Inconclusive;
                    }
                    entered += 1;
                    chosen.push(position);
                    stack.push(Frame {
                        position: position + 1,
                        remaining: next,
                        step: Step::Include,
                        included_parent: true,
                    });
                }
            }
            Step::Exclude => {
                if viable(&failed, position + 1, remaining) {
                    if entered >= budget {
                        return TierResult::Inconclusive;
                    }
                    entered += 1;
                    stack.push(Frame {
                        position: position + 1,
                        remaining,
                        step: Step::Include,
                        included_parent: false,
                    });
                }
            }
            Step::Done => {
                failed.insert((position, remaining));
                if let Some(done) = stack.pop() {
                    if done.included_parent {
                        chosen.pop();
                    }
                }
            }
        }
    }

    TierResult::Exhausted
}
