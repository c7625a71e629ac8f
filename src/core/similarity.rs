use std::cmp::Ordering;

/// Cosine similarity between two sparse term vectors
///
/// Columns must be sorted ascending, as produced by `TfidfVectorizer`.
/// Returns 0.0 when either vector has zero magnitude (e.g. a candidate
/// with no skills), never NaN. The result is clamped into [0, 1] since
/// TF-IDF weights are non-negative.
pub fn cosine_similarity(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let norm_a = a.iter().map(|(_, x)| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|(_, x)| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (sparse_dot(a, b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Dot product of two column-sorted sparse rows, merging on shared columns
fn sparse_dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0;

    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    dot
}

/// Round a score to 4 decimal places, halves away from zero
pub fn round_score(score: f64) -> f64 {
    ((score * 10_000.0).round() / 10_000.0).clamp(0.0, 1.0)
}
