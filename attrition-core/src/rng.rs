//! Seed derivation for independent attack steps.
//!
//! Instantaneous steps draw one base seed from the caller's generator and
//! derive a private [`SmallRng`] per step from it. The derivation depends only
//! on the base seed and the step index, so sequential and parallel execution
//! select the same nodes.

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// SplitMix64 increment (the 64-bit golden ratio) used for per-step seed
/// derivation.
const STEP_SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

#[inline]
pub(crate) fn mix_step_seed(base_seed: u64, step: usize) -> u64 {
    splitmix64(base_seed ^ ((step as u64 + 1).wrapping_mul(STEP_SEED_SPACING)))
}

#[inline]
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(STEP_SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}

/// Draws the base seed that all step generators of one run derive from.
pub(crate) fn draw_base_seed<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.r#gen()
}

pub(crate) fn step_rng(base_seed: u64, step: usize) -> SmallRng {
    SmallRng::seed_from_u64(mix_step_seed(base_seed, step))
}
