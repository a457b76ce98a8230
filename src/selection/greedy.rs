//! Bounded ascending search
//!
//! Candidates are sorted by ascending value and each one is included while
//! it still fits under the target. Because later values are never smaller,
//! a candidate that overshoots ends its whole branch. A node budget bounds
//! the work, so a miss is only conclusive if the search ran to completion.

use super::TierResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Include,
    Exclude,
    Done,
}

#[derive(Debug)]
struct Node {
    position: usize,
    sum: i64,
    step: Step,
    included_parent: bool,
}

pub(crate) fn search(candidates: &[(usize, i64)], target: i64, budget: usize) -> TierResult {
    let mut order = candidates.to_vec();
    order.sort_by_key(|(_, cents)| *cents);
    let n = order.len();

    if n == 0 || target <= 0 {
        return TierResult::Exhausted;
    }
    if budget == 0 {
        return TierResult::Inconclusive;
    }

    let mut visited = 1usize;
    let mut chosen: Vec<usize> = Vec::new();
    let mut stack = vec![Node {
        position: 0,
        sum: 0,
        step: Step::Include,
        included_parent: false,
    }];

    while let Some(node) = stack.last_mut() {
        let (position, sum, step) = (node.position, node.sum, node.step);

        match step {
            Step::Include => {
                let next = sum.saturating_add(order[position].1);
                if next == target {
                    chosen.push(position);
                    return TierResult::Found(chosen.iter().map(|p| order[*p].0).collect());
                }
                if next > target {
                    // Every later candidate overshoots too
                    node.step = Step::Done;
                    continue;
                }
                node.step = Step::Exclude;
                if position + 1 < n {
                    if visited >= budget {
                        return TierResult::Inconclusive;
                    }
                    visited += 1;
                    chosen.push(position);
                    stack.push(Node {
                        position: position + 1,
                        sum: next,
                        step: Step::Include,
                        included_parent: true,
                    });
                }
            }
            Step::Exclude => {
                node.step = Step::Done;
                if position + 1 < n {
                    if visited >= budget {
                        return TierResult::Inconclusive;
                    }
                    visited += 1;
                    stack.push(Node {
                        position: position + 1,
                        sum,
                        step: Step::Include,
                        included_parent: false,
                    });
                }
            }
            Step::Done => {
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
