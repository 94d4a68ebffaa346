//! Converting observed counts into sampled PoMo states, site by site.
//! # Example
//! ```rust,no_run
//! use pomoconv::convert::*;
//! # let mut ds: definitions::CountsData = todo!();
//! let config = ConvertConfig::new(10, 42);
//! ds.convert(&config).unwrap();
//! ```

use crate::classify::classify;
use crate::edges::EdgeTable;
use crate::error::ConvertError;
use definitions::CountsData;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Number of virtual individuals (N). The polymorphic frequencies run 1..N.
    pub virtual_size: usize,
    pub seed: u64,
}

impl ConvertConfig {
    pub fn new(virtual_size: usize, seed: u64) -> Self {
        assert!(0 < virtual_size);
        Self { virtual_size, seed }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            virtual_size: 10,
            seed: 42,
        }
    }
}

pub trait Convert {
    fn convert(&mut self, config: &ConvertConfig) -> Result<(), ConvertError>;
}

impl Convert for CountsData {
    /// Sample one PoMo state per (site, taxon) pair and append them to the
    /// taxa, one state per site. Sites are independent; each one owns a
    /// generator seeded from `config.seed` and its index, so a fixed seed
    /// reproduces the run at any thread count. Any invalid count aborts the
    /// conversion before a single state is attached.
    fn convert(&mut self, config: &ConvertConfig) -> Result<(), ConvertError> {
        let edges = EdgeTable::new(self.n_alleles);
        let states: Vec<Vec<usize>> = self
            .sites
            .par_iter()
            .enumerate()
            .map(|(idx, site)| {
                let seed = config.seed + idx as u64 * 3490;
                let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(seed);
                site.counts
                    .iter()
                    .map(|counts| classify(counts, config.virtual_size, &edges, &mut rng))
                    .collect()
            })
            .collect::<Result<_, _>>()?;
        for site_states in states {
            for (taxon, state) in self.taxa.iter_mut().zip(site_states) {
                taxon.states.push(state);
            }
        }
        debug!("Convert\tSites\t{}", self.n_sites());
        debug!(
            "Convert\tStateSpace\t{}",
            self.state_space_size(config.virtual_size)
        );
        Ok(())
    }
}
