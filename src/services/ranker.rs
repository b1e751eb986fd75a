use std::cmp::Ordering;

/// Indices of the `k` highest scores, skipping `exclude_index`.
///
/// Ordered by descending score; equal scores keep ascending index order.
/// Returns fewer than `k` indices when there are not enough candidates.
pub fn rank(scores: &[f64], exclude_index: usize, k: usize) -> Vec<usize> {
    rank_excluding(scores, &[exclude_index], k)
}

/// Same as [`rank`], skipping every index in `excluded`
pub fn rank_excluding(scores: &[f64], excluded: &[usize], k: usize) -> Vec<usize> {
    let mut candidates: Vec<(usize, f64)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(index, _)| !excluded.contains(index))
        .collect();

    candidates.sort_by(|(a_idx, a_score), (b_idx, b_score)| {
        b_score
            .partial_cmp(a_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a_idx.cmp(b_idx))
    });

    candidates
        .into_iter()
        .take(k)
        .map(|(index, _)| index)
        .collect()
}
