//! In-place row normalization for probability matrices.

use ndarray::Array2;

/// Normalizes every row of `probs` in-place so it sums to one.
///
/// 1. Replaces non-finite and negative entries with 0.0.
/// 2. If a row sum is positive, divides the row by its sum.
/// 3. Otherwise, fills the row with the uniform distribution.
pub fn normalize_rows(probs: &mut Array2<f64>) {
    let n_cols = probs.ncols();
    if n_cols == 0 {
        return;
    }
    for mut row in probs.rows_mut() {
        // Step 1: sanitize
        for p in row.iter_mut() {
            if !p.is_finite() || *p < 0.0 {
                *p = 0.0;
            }
        }
        // Step 2-3: normalize or fall back to uniform
        let s: f64 = row.sum();
        if s > 0.0 {
            row.mapv_inplace(|p| p / s);
        } else {
            row.fill(1.0 / n_cols as f64);
        }
    }
}
