//! Bounded combination enumeration
//!
//! Tries every combination of 1, 2, ... up to `max_size` candidates, in
//! lexicographic order of movement index within each size.

use super::TierResult;

pub(crate) fn search(candidates: &[(usize, i64)], target: i64, max_size: usize) -> TierResult {
    let mut order = candidates.to_vec();
    order.sort_by_key(|(index, _)| *index);

    let n = order.len();
    let largest = max_size.min(n);

    for size in 1..=largest {
        // Positions of the current combination, strictly increasing
        let mut picks: Vec<usize> = (0..size).collect();
        loop {
            let sum = picks
                .iter()
                .try_fold(0i64, |acc, p| acc.checked_add(order[*p].1));
            if sum == Some(target) {
                return TierResult::Found(picks.iter().map(|p| order[*p].0).collect());
            }
            if !advance(&mut picks, n) {
                break;
            }
        }
    }

    if max_size >= n {
        TierResult::Exhausted
    } else {
        TierResult::Inconclusive
    }
}

/// Step to the next combination; false once the last one was visited
fn advance(picks: &mut [usize], n: usize) -> bool {
    let size = picks.len();
    let mut slot = size;
    while slot > 0 {
        slot -= 1;
        if picks[slot] < n - size + slot {
            picks[slot] += 1;
            for next in slot + 1..size {
                picks[next] = picks[next - 1] + 1;
            }
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smaller_combinations_first() {
        let candidates = vec![(0, 200), (1, 300), (2, 500)];
        assert_eq!(search(&candidates, 500, 10), TierResult::Found(vec![2]));
    }

    #[test]
    fn test_lexicographic_within_size() {
        let candidates = vec![(0, 1), (1, 4), (2, 3), (3, 2)];
        // {0,1} and {2,3} both sum to 5
        assert_eq!(search(&candidates, 5, 10), TierResult::Found(vec![0, 1]));
    }

    #[test]
    fn test_orders_by_index_regardless_of_input_order() {
        let candidates = vec![(3, 5), (1, 5)];
        assert_eq!(search(&candidates, 5, 10), TierResult::Found(vec![1]));
    }

    #[test]
    fn test_size_limit_makes_miss_inconclusive() {
        let candidates = vec![(0, 1), (1, 1), (2, 1)];
        assert_eq!(search(&candidates, 3, 2), TierResult::Inconclusive);
        assert_eq!(search(&candidates, 3, 3), TierResult::Found(vec![0, 1, 2]));
        assert_eq!(search(&candidates, 4, 3), TierResult::Exhausted);
    }

    #[test]
    fn test_advance_walks_all_pairs() {
        let mut picks = vec![0, 1];
        let mut seen = vec![picks.clone()];
        while advance(&mut picks, 4) {
            seen.push(picks.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }
}
