//! Parsing a counts file into a [CountsData](definitions::CountsData).

use crate::error::ConvertError;
use definitions::{CountsData, Site, Taxon};
use std::path::Path;

pub trait Entry: Sized {
    fn entry(input_file: &Path, content: &str, n_alleles: usize) -> Result<Self, ConvertError>;
}

impl Entry for CountsData {
    /// Parse the whitespace-separated counts format:
    ///
    /// ```text
    /// COUNTSFILE NPOP 2 NSITES 3
    /// CHROM POS sheep goat
    /// chr1 10 5,0,0,0 0,3,2,0
    /// ...
    /// ```
    ///
    /// The first header literal that does not match aborts the parse; the
    /// token stream cannot be trusted after a mismatch.
    fn entry(input_file: &Path, content: &str, n_alleles: usize) -> Result<Self, ConvertError> {
        let mut tokens = content.split_whitespace();
        expect_literal(&mut tokens, "COUNTSFILE")?;
        expect_literal(&mut tokens, "NPOP")?;
        let n_taxa = expect_number(&mut tokens, "number of taxa")?;
        expect_literal(&mut tokens, "NSITES")?;
        let n_sites = expect_number(&mut tokens, "number of sites")?;
        expect_literal(&mut tokens, "CHROM")?;
        expect_literal(&mut tokens, "POS")?;
        let mut taxa = Vec::with_capacity(n_taxa);
        for id in 0..n_taxa {
            let name = tokens.next().ok_or(ConvertError::UnexpectedEof)?;
            taxa.push(Taxon::new(name.to_string(), id as u64));
        }
        let mut sites = Vec::with_capacity(n_sites);
        for site in 0..n_sites {
            let chrom = tokens.next().ok_or(ConvertError::UnexpectedEof)?;
            let position = tokens.next().ok_or(ConvertError::UnexpectedEof)?;
            let position = position
                .parse()
                .map_err(|_| ConvertError::MalformedRecord {
                    token: position.to_string(),
                    site,
                })?;
            let mut counts = Vec::with_capacity(n_taxa);
            for _ in 0..n_taxa {
                let token = tokens.next().ok_or(ConvertError::UnexpectedEof)?;
                counts.push(parse_count_vector(token, n_alleles, site)?);
            }
            sites.push(Site::new(chrom.to_string(), position, counts));
        }
        debug!("Input\tTaxa\t{}", taxa.len());
        debug!("Input\tSites\t{}", sites.len());
        Ok(CountsData::new(input_file, n_alleles, taxa, sites))
    }
}

fn expect_literal<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    expected: &'static str,
) -> Result<(), ConvertError> {
    match tokens.next() {
        Some(found) if found == expected => Ok(()),
        Some(found) => Err(ConvertError::MalformedHeader {
            expected,
            found: found.to_string(),
        }),
        None => Err(ConvertError::UnexpectedEof),
    }
}

fn expect_number<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    expected: &'static str,
) -> Result<usize, ConvertError> {
    let token = tokens.next().ok_or(ConvertError::UnexpectedEof)?;
    token.parse().map_err(|_| ConvertError::MalformedHeader {
        expected,
        found: token.to_string(),
    })
}

fn parse_count_vector(
    token: &str,
    n_alleles: usize,
    site: usize,
) -> Result<Vec<u32>, ConvertError> {
    let malformed = || ConvertError::MalformedRecord {
        token: token.to_string(),
        site,
    };
    let counts: Vec<u32> = token
        .split(',')
        .map(|count| count.parse())
        .collect::<Result<_, _>>()
        .map_err(|_| malformed())?;
    if counts.len() != n_alleles {
        return Err(malformed());
    }
    Ok(counts)
}

#[cfg(test)]
mod test {
    use super::*;
    const CONTENT: &str = "COUNTSFILE NPOP 2 NSITES 3
CHROM POS sheep goat
chr1 10 5,0,0,0 0,3,2,0
chr1 20 0,0,0,1 4,0,0,0
chr2 5 1,1,0,0 0,0,9,0
";
    #[test]
    fn well_formed() {
        let ds = CountsData::entry(Path::new("test.cf"), CONTENT, 4).unwrap();
        assert_eq!(ds.n_taxa(), 2);
        assert_eq!(ds.n_sites(), 3);
        let names: Vec<_> = ds.taxa.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["sheep", "goat"]);
        assert!(ds.taxa.iter().all(|t| t.states.is_empty()));
        assert_eq!(ds.sites[0].chrom, "chr1");
        assert_eq!(ds.sites[2].position, 5);
        assert_eq!(ds.sites[0].counts[0], [5, 0, 0, 0]);
        assert_eq!(ds.sites[1].counts[1], [4, 0, 0, 0]);
    }
    #[test]
    fn mismatched_first_token() {
        let content = CONTENT.replace("COUNTSFILE", "COUNTFILE");
        let why = CountsData::entry(Path::new("test.cf"), &content, 4).unwrap_err();
        match why {
            ConvertError::MalformedHeader { expected, found } => {
                assert_eq!(expected, "COUNTSFILE");
                assert_eq!(found, "COUNTFILE");
            }
            why => panic!("{}", why),
        }
    }
    #[test]
    fn mismatched_inner_literals() {
        for literal in ["NPOP", "NSITES", "CHROM", "POS"] {
            let content = CONTENT.replace(literal, "BOGUS");
            let why = CountsData::entry(Path::new("test.cf"), &content, 4).unwrap_err();
            assert!(matches!(why, ConvertError::MalformedHeader { .. }));
        }
    }
    #[test]
    fn unparsable_taxon_count() {
        let content = CONTENT.replace("NPOP 2", "NPOP two");
        let why = CountsData::entry(Path::new("test.cf"), &content, 4).unwrap_err();
        assert!(matches!(why, ConvertError::MalformedHeader { .. }));
    }
    #[test]
    fn truncated_file() {
        let content = &CONTENT[..CONTENT.find("chr2").unwrap()];
        let why = CountsData::entry(Path::new("test.cf"), content, 4).unwrap_err();
        assert_eq!(why, ConvertError::UnexpectedEof);
    }
    #[test]
    fn short_count_vector() {
        let content = CONTENT.replace("0,3,2,0", "0,3,2");
        let why = CountsData::entry(Path::new("test.cf"), &content, 4).unwrap_err();
        assert!(matches!(
            why,
            ConvertError::MalformedRecord { site: 0, .. }
        ));
    }
    #[test]
    fn unparsable_count() {
        let content = CONTENT.replace("4,0,0,0", "4,x,0,0");
        let why = CountsData::entry(Path::new("test.cf"), &content, 4).unwrap_err();
        assert!(matches!(
            why,
            ConvertError::MalformedRecord { site: 1, .. }
        ));
    }
}
