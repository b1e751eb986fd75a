use crate::services::vectorizer::{FeatureMatrix, SparseVector};

/// Cosine similarity between two vectors.
///
/// Zero-magnitude vectors score 0 against everything, themselves included.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    let norms = a.norm() * b.norm();
    if norms == 0.0 {
        return 0.0;
    }

    (a.dot(b) / norms).clamp(0.0, 1.0)
}

/// Scores `query` against every row of `matrix`, in row order
pub fn similarity(query: &SparseVector, matrix: &FeatureMatrix) -> Vec<f64> {
    matrix.rows().iter().map(|row| cosine(query, row)).collect()
}
