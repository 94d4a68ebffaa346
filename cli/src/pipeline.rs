//! Pipeline -- the whole counts-to-PoMo conversion in one run.
//!
//! This module chains the entry, convert, extract, and stats steps from a
//! single TOML profile, writing a JSON snapshot of the dataset after the
//! parsing and the conversion stage.
use definitions::CountsData;
use serde::{Deserialize, Serialize};
extern crate log;
use log::*;
use std::path::Path;
use std::path::PathBuf;

/// The configuration of the pipeline.
/// This struct is a comprehensive list of the parameters that can be set by
/// a user; everything else is fixed to values that work for most datasets.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PipelineConfig {
    /// The path to the input counts file.
    input_file: PathBuf,
    /// The path to the output directory.
    out_dir: PathBuf,
    prefix: String,
    verbose: usize,
    threads: usize,
    seed: u64,
    n_alleles: usize,
    virtual_size: usize,
}

use pomoconv::convert::{Convert, ConvertConfig};
use pomoconv::entry::Entry;
use pomoconv::extract::Extract;
use pomoconv::stats::Stats;
use std::io::BufWriter;
pub fn run_pipeline(config: &PipelineConfig) -> std::io::Result<()> {
    let PipelineConfig {
        input_file,
        out_dir,
        prefix,
        verbose,
        threads,
        seed,
        n_alleles,
        virtual_size,
    } = config.clone();
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .unwrap();
    std::fs::create_dir_all(&out_dir)?;
    let file_stem = out_dir.join(prefix);
    let entry = file_stem.with_extension("entry.json");
    let converted = file_stem.with_extension("json");
    let mut ds = parse_input(&input_file, n_alleles)?;
    log_json(&ds, &entry)?;
    let convert_config = ConvertConfig::new(virtual_size, seed);
    ds.convert(&convert_config)?;
    log_json(&ds, &converted)?;
    let mut aln = std::fs::File::create(file_stem.with_extension("aln")).map(BufWriter::new)?;
    ds.extract(&mut aln)?;
    let stats = std::fs::File::create(file_stem.with_extension("stats.txt")).map(BufWriter::new)?;
    ds.stats(stats, virtual_size)
}

fn parse_input(input_file: &Path, n_alleles: usize) -> std::io::Result<CountsData> {
    debug!("Opening {:?}", input_file);
    let content = std::fs::read_to_string(input_file)?;
    let ds = CountsData::entry(input_file, &content, n_alleles)?;
    Ok(ds)
}

fn log_json(ds: &CountsData, path: &Path) -> std::io::Result<()> {
    let mut wtr = std::fs::File::create(path).map(BufWriter::new)?;
    serde_json::ser::to_writer(&mut wtr, ds).unwrap();
    Ok(())
}
