//! Mapping one observed count vector onto a PoMo state index.
//!
//! States `0..n_alleles` are the fixed states, one per allele. The states
//! after them are the polymorphic ones, one block of `N - 1` frequencies
//! per edge, in edge order.

use crate::edges::EdgeTable;
use crate::error::ConvertError;
use crate::sampler::sample_frequency;
use rand::Rng;

/// Convert one count vector into a PoMo state index.
///
/// A sampled frequency of `N` yields the fixed state of the focal allele,
/// even for a bi-allelic count: the draw says the data is consistent with
/// fixation. Otherwise a mono-allelic count picks one of the edges incident
/// to its allele at random, while a bi-allelic count determines its edge
/// from the two observed alleles.
pub fn classify<R: Rng>(
    counts: &[u32],
    virtual_size: usize,
    edges: &EdgeTable,
    rng: &mut R,
) -> Result<usize, ConvertError> {
    let n_alleles = counts.len();
    let mut total = 0;
    let mut n_positive = 0;
    // Of a bi-allelic count, the LAST positive entry is the focal one; its
    // count parameterizes the frequency sampling below.
    let mut focal = 0;
    let mut focal_allele = 0;
    let mut positives = vec![];
    for (allele, &count) in counts.iter().enumerate() {
        if 0 < count {
            total += count;
            focal = count;
            n_positive += 1;
            focal_allele = allele;
            positives.push(allele);
        }
    }
    if n_positive == 0 || 2 < n_positive {
        let pattern: Vec<_> = counts.iter().map(|c| c.to_string()).collect();
        return Err(ConvertError::InvalidCountPattern {
            pattern: pattern.join(","),
            positive: n_positive,
        });
    }
    let freq = sample_frequency(total, focal, virtual_size, rng);
    let state = if freq == virtual_size {
        focal_allele
    } else if n_positive == 1 && freq < virtual_size {
        let edge = edges.sample_edge(focal_allele, edges.membership_row(focal_allele), rng);
        n_alleles + edge * (virtual_size - 1) + freq - 1
    } else {
        let edge = edges.edge_of_pair(positives[0], positives[1])?;
        n_alleles + edge * (virtual_size - 1) + freq - 1
    };
    trace!("Pattern\t{:?}\tState\t{}", counts, state);
    Ok(state)
}
