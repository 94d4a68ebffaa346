//! Enumeration of the polymorphic "edges" of the PoMo state space, i.e.,
//! the unordered pairs of distinct alleles.

use crate::error::ConvertError;
use rand::seq::SliceRandom;
use rand::Rng;

/// All unordered allele pairs in lexicographic order, plus the 0/1
/// allele-to-edge membership relation. Built once per run and read-only
/// afterwards; safe to share across threads.
#[derive(Debug, Clone)]
pub struct EdgeTable {
    // Edge index -> (i, j) with i < j.
    pairs: Vec<(usize, usize)>,
    // membership[allele][edge] == 1 iff the pair of the edge contains the allele.
    membership: Vec<Vec<u32>>,
}

impl EdgeTable {
    pub fn new(n_alleles: usize) -> Self {
        assert!(2 <= n_alleles);
        let n_edges = n_alleles * (n_alleles - 1) / 2;
        let mut pairs = Vec::with_capacity(n_edges);
        let mut membership = vec![vec![0; n_edges]; n_alleles];
        for i in 0..n_alleles {
            for j in (i + 1)..n_alleles {
                let edge = pairs.len();
                membership[i][edge] = 1;
                membership[j][edge] = 1;
                pairs.push((i, j));
            }
        }
        Self { pairs, membership }
    }
    pub fn n_edges(&self) -> usize {
        self.pairs.len()
    }
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }
    /// The 0/1 row of the membership relation for `allele`. It doubles as
    /// the weight vector of [sample_edge](EdgeTable::sample_edge), making
    /// every incident edge equally likely.
    pub fn membership_row(&self, allele: usize) -> &[u32] {
        &self.membership[allele]
    }
    /// Edge index of the pair {first, second}. The order of the two alleles
    /// does not matter.
    pub fn edge_of_pair(&self, first: usize, second: usize) -> Result<usize, ConvertError> {
        let key = (first.min(second), first.max(second));
        self.pairs
            .iter()
            .position(|&pair| pair == key)
            .ok_or(ConvertError::EdgeLookupFailure { first, second })
    }
    /// Sample one edge incident to `allele`, weighted by the entries of
    /// `weights` at the incident positions. There are exactly
    /// `n_alleles - 1` incident edges, so the draw cannot fail; if the
    /// given weights all vanish, any incident edge is picked uniformly.
    pub fn sample_edge<R: Rng>(&self, allele: usize, weights: &[u32], rng: &mut R) -> usize {
        let row = &self.membership[allele];
        let choises: Vec<usize> = (0..self.pairs.len()).filter(|&e| row[e] == 1).collect();
        match choises.choose_weighted(rng, |&e| weights[e]) {
            Ok(&edge) => edge,
            Err(_) => *choises.choose(rng).unwrap(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    #[test]
    fn enumeration() {
        let table = EdgeTable::new(4);
        assert_eq!(table.n_edges(), 6);
        let pairs = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        assert_eq!(table.pairs(), &pairs[..]);
    }
    #[test]
    fn membership() {
        for n_alleles in 2..7 {
            let table = EdgeTable::new(n_alleles);
            assert_eq!(table.n_edges(), n_alleles * (n_alleles - 1) / 2);
            for allele in 0..n_alleles {
                let row = table.membership_row(allele);
                let incident = row.iter().sum::<u32>() as usize;
                assert_eq!(incident, n_alleles - 1);
            }
        }
    }
    #[test]
    fn pair_lookup_is_a_bijection() {
        let n_alleles = 5;
        let table = EdgeTable::new(n_alleles);
        let mut seen = vec![false; table.n_edges()];
        for i in 0..n_alleles {
            for j in (i + 1)..n_alleles {
                let edge = table.edge_of_pair(i, j).unwrap();
                assert_eq!(edge, table.edge_of_pair(j, i).unwrap());
                assert!(!seen[edge]);
                seen[edge] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
    #[test]
    fn lookup_failures() {
        let table = EdgeTable::new(4);
        assert!(table.edge_of_pair(2, 2).is_err());
        assert!(table.edge_of_pair(0, 4).is_err());
    }
    #[test]
    fn sampled_edges_are_incident() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(3490);
        let table = EdgeTable::new(4);
        for allele in 0..4 {
            let weights = table.membership_row(allele).to_vec();
            for _ in 0..50 {
                let edge = table.sample_edge(allele, &weights, &mut rng);
                assert_eq!(table.membership_row(allele)[edge], 1);
            }
        }
    }
    #[test]
    fn two_alleles_have_one_edge() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(42);
        let table = EdgeTable::new(2);
        assert_eq!(table.n_edges(), 1);
        let weights = table.membership_row(0).to_vec();
        assert_eq!(table.sample_edge(0, &weights, &mut rng), 0);
    }
}
