//! Weighted random index selection.
//!
//! Every stochastic decision in the engine (zone, possession, scoring) goes
//! through [`pick_weighted`].

use rand::Rng;

/// Draw an index with probability proportional to its weight.
///
/// Weights must be nonnegative. When they sum to zero, or float rounding
/// leaves the draw past the running sum, the last index is returned. An empty
/// slice yields 0.
pub fn pick_weighted<R: Rng + ?Sized>(weights: &[f32], rng: &mut R) -> usize {
    let total: f32 = weights.iter().sum();
    let target = rng.gen::<f32>() * total;

    let mut running = 0.0f32;
    for (i, w) in weights.iter().enumerate() {
        running += w;
        if target < running {
            return i;
        }
    }
    weights.len().saturating_sub(1)
}
