//! Sampling a virtual allele frequency from an observed allele count.
//! The weight of frequency i is the binomial likelihood of observing the
//! focal allele `focal` times out of `total` when its true frequency is i/N.

use rand::seq::SliceRandom;
use rand::Rng;

/// Sample a frequency in `0..=virtual_size`.
///
/// The weight of frequency i is `(i/N)^m * (1 - i/N)^(M-m)` with `M = total`
/// and `m = focal`. Zero exponents evaluate to one, so `m == 0` puts all the
/// mass on the low frequencies and `m == M` on the high ones. If every weight
/// underflows to zero (huge, strongly bi-allelic counts), the draw falls back
/// to a uniform one over `0..=virtual_size`.
pub fn sample_frequency<R: Rng>(total: u32, focal: u32, virtual_size: usize, rng: &mut R) -> usize {
    assert!(focal <= total);
    let choises: Vec<_> = frequency_weights(total, focal, virtual_size)
        .into_iter()
        .enumerate()
        .collect();
    match choises.choose_weighted(rng, |&(_, w)| w) {
        Ok(&(freq, _)) => freq,
        Err(_) => rng.gen_range(0..=virtual_size),
    }
}

// powi keeps the 0^0 == 1 convention at i == 0 and i == N.
fn frequency_weights(total: u32, focal: u32, virtual_size: usize) -> Vec<f64> {
    (0..=virtual_size)
        .map(|i| {
            let p = i as f64 / virtual_size as f64;
            p.powi(focal as i32) * (1f64 - p).powi((total - focal) as i32)
        })
        .collect()
}
