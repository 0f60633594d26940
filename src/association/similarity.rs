// Cosine similarity between embedding vectors.
//
// Unlike a ranking score, the WEAT statistic needs the raw signed value:
// nothing is clamped, and a zero-norm vector is an error instead of 0.0.
//
// Each vector is divided by its largest absolute component before the dot
// product and norms are taken, so squares neither underflow to 0 for tiny
// vectors nor overflow to inf for huge ones.

use super::error::AssociationError;

/// Cosine similarity of two equal-length vectors, in [-1, 1].
///
/// Fails with `DegenerateVector` when either vector is all zeros, and with
/// `DimensionMismatch` when the lengths differ. Any finite, non-zero vector
/// has a defined similarity regardless of its magnitude.
pub fn cosine_similarity(u: &[f64], v: &[f64]) -> Result<f64, AssociationError> {
    if u.len() != v.len() {
        return Err(AssociationError::DimensionMismatch {
            left: u.len(),
            right: v.len(),
        });
    }

    let scale_u = max_abs(u);
    let scale_v = max_abs(v);
    if scale_u == 0.0 || scale_v == 0.0 {
        return Err(AssociationError::DegenerateVector);
    }

    let mut dot = 0.0;
    let mut sq_u = 0.0;
    let mut sq_v = 0.0;
    for (a, b) in u.iter().zip(v.iter()) {
        let (a, b) = (a / scale_u, b / scale_v);
        dot += a * b;
        sq_u += a * a;
        sq_v += b * b;
    }

    // Backstop for non-finite input; scaled components lie in [-1, 1].
    let sim = dot / (sq_u.sqrt() * sq_v.sqrt());
    if sim.is_finite() {
        Ok(sim)
    } else {
        Err(AssociationError::DegenerateVector)
    }
}

fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0_f64, |max, c| max.max(c.abs()))
}
