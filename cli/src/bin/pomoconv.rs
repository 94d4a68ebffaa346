use definitions::*;
use std::io::BufReader;
#[macro_use]
extern crate log;

fn main() -> std::io::Result<()> {
    let matches = pomoconv_cli::pomo_commands::pomoconv_parser().get_matches();
    if let Some(("pipeline", sub_m)) = matches.subcommand() {
        let path: &String = sub_m.get_one("profile").unwrap();
        use std::io::Read;
        let mut rdr = std::fs::File::open(path).map(std::io::BufReader::new)?;
        let mut file = String::new();
        rdr.read_to_string(&mut file)?;
        let config: pomoconv_cli::pipeline::PipelineConfig = toml::from_str(&file).unwrap();
        return pomoconv_cli::pipeline::run_pipeline(&config);
    }
    if let Some((_, sub_m)) = matches.subcommand() {
        let level = match sub_m.occurrences_of("verbose") {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }
    if let Some(("entry", sub_m)) = matches.subcommand() {
        return entry(sub_m).and_then(|x| flush_file(&x));
    }
    let mut ds = get_input_file()?;
    let ds = &mut ds;
    match matches.subcommand() {
        Some(("convert", sub_m)) => convert(sub_m, ds)?,
        Some(("extract", sub_m)) => extract(sub_m, ds)?,
        Some(("stats", sub_m)) => stats(sub_m, ds)?,
        _ => unreachable!(),
    };
    flush_file(ds)
}

fn entry(matches: &clap::ArgMatches) -> std::io::Result<CountsData> {
    use pomoconv::entry::Entry;
    debug!("START\tEntry");
    set_threads(matches);
    let file: &String = matches.get_one("input").unwrap();
    let n_alleles: usize = matches
        .get_one("n_alleles")
        .and_then(|e: &String| e.parse().ok())
        .expect("n_alleles");
    debug!("Opening {}", file);
    let content = std::fs::read_to_string(file)?;
    let ds = CountsData::entry(std::path::Path::new(file), &content, n_alleles)?;
    Ok(ds)
}

fn convert(matches: &clap::ArgMatches, dataset: &mut CountsData) -> std::io::Result<()> {
    use pomoconv::convert::{Convert, ConvertConfig};
    debug!("START\tConvert");
    set_threads(matches);
    let virtual_size: usize = matches
        .get_one("virtual_size")
        .and_then(|e: &String| e.parse().ok())
        .expect("virtual_size");
    let seed: u64 = matches
        .get_one("seed")
        .and_then(|e: &String| e.parse().ok())
        .expect("seed");
    let config = ConvertConfig::new(virtual_size, seed);
    dataset.convert(&config)?;
    Ok(())
}

fn extract(matches: &clap::ArgMatches, dataset: &mut CountsData) -> std::io::Result<()> {
    use pomoconv::extract::Extract;
    debug!("START\tExtract");
    let file = std::fs::File::create(matches.get_one::<String>("output").unwrap())?;
    let mut wtr = std::io::BufWriter::new(file);
    dataset.extract(&mut wtr)?;
    Ok(())
}

fn stats(matches: &clap::ArgMatches, dataset: &mut CountsData) -> std::io::Result<()> {
    use pomoconv::stats::Stats;
    debug!("START\tStats step");
    let virtual_size: usize = matches
        .get_one("virtual_size")
        .and_then(|e: &String| e.parse().ok())
        .expect("virtual_size");
    let wtr = matches.get_one::<String>("file").unwrap().as_str();
    let wtr = std::io::BufWriter::new(std::fs::File::create(wtr)?);
    dataset.stats(wtr, virtual_size)?;
    Ok(())
}

fn get_input_file() -> std::io::Result<CountsData> {
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());
    match serde_json::de::from_reader(reader) {
        Err(why) => {
            eprintln!("{:?}", why);
            eprintln!("Invalid Input from STDIN.");
            Err(std::io::Error::from(std::io::ErrorKind::Other))
        }
        Ok(res) => Ok(res),
    }
}

fn flush_file(dataset: &CountsData) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut wtr = std::io::BufWriter::new(stdout.lock());
    match serde_json::ser::to_writer(&mut wtr, dataset) {
        Err(why) => {
            eprintln!("{:?}", why);
            eprintln!("Invalid output to the STDOUT.");
            std::process::exit(1);
        }
        _ => Ok(()),
    }
}

fn set_threads(matches: &clap::ArgMatches) {
    if let Some(threads) = matches
        .get_one("threads")
        .and_then(|num: &String| num.parse().ok())
    {
        debug!("Set Threads\t{}", threads);
        if let Err(why) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            debug!("{:?} If you run `pipeline` module, this is harmless.", why);
        }
    }
}
