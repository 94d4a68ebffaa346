//! Definitions -- the data model of the counts-to-PoMo conversion.
//! The subcommands of the converter interact by passing messages via JSON object format. Specifically, the message is encoded as only one, possibly large, structure named [CountsData](CountsData).

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CountsData {
    pub input_file: String,
    /// Number of alleles. Every count vector in `sites` has exactly this many entries.
    pub n_alleles: usize,
    pub taxa: Vec<Taxon>,
    pub sites: Vec<Site>,
}

impl CountsData {
    pub fn new(input_file: &Path, n_alleles: usize, taxa: Vec<Taxon>, sites: Vec<Site>) -> Self {
        Self {
            input_file: input_file.to_string_lossy().into_owned(),
            n_alleles,
            taxa,
            sites,
        }
    }
    pub fn n_taxa(&self) -> usize {
        self.taxa.len()
    }
    pub fn n_sites(&self) -> usize {
        self.sites.len()
    }
    /// Number of unordered pairs of distinct alleles.
    pub fn n_edges(&self) -> usize {
        self.n_alleles * (self.n_alleles - 1) / 2
    }
    /// Total number of PoMo states: one fixed state per allele plus
    /// `virtual_size - 1` polymorphic states per edge.
    pub fn state_space_size(&self, virtual_size: usize) -> usize {
        self.n_alleles + self.n_edges() * (virtual_size - 1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxon {
    /// Name of the taxon. It is the name in the header line of the counts file.
    pub name: String,
    /// The id of the taxon. It is automatically given by the entry step.
    pub id: u64,
    /// PoMo state indices, one per site. Empty until the convert step has run.
    pub states: Vec<usize>,
}

impl Taxon {
    pub fn new(name: String, id: u64) -> Self {
        Self {
            name,
            id,
            states: vec![],
        }
    }
}

impl std::fmt::Display for Taxon {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        for state in self.states.iter() {
            write!(f, " {}", state)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub chrom: String,
    pub position: u64,
    /// One count vector per taxon, in the same order as `CountsData::taxa`.
    pub counts: Vec<Vec<u32>>,
}

impl Site {
    pub fn new(chrom: String, position: u64, counts: Vec<Vec<u32>>) -> Self {
        Self {
            chrom,
            position,
            counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn state_space() {
        let ds = CountsData::new(Path::new("test.cf"), 4, vec![], vec![]);
        assert_eq!(ds.n_edges(), 6);
        assert_eq!(ds.state_space_size(10), 4 + 6 * 9);
        let ds = CountsData::new(Path::new("test.cf"), 2, vec![], vec![]);
        assert_eq!(ds.n_edges(), 1);
        assert_eq!(ds.state_space_size(2), 3);
    }
    #[test]
    fn taxon_display() {
        let mut taxon = Taxon::new("sheep".to_string(), 0);
        assert_eq!(taxon.to_string(), "sheep");
        taxon.states.extend([3, 0, 14]);
        assert_eq!(taxon.to_string(), "sheep 3 0 14");
    }
}
