use clap::{Arg, Command};
fn subcommand_entry() -> Command<'static> {
    Command::new("entry")
        .version("0.1")
        .about("Entry point. It encodes a counts file into JSON file.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .multiple_occurrences(true)
                .help("Debug mode"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('r')
                .value_name("COUNTS")
                .takes_value(true)
                .required(true)
                .help("Input counts file."),
        )
        .arg(
            Arg::new("n_alleles")
                .long("n_alleles")
                .short('a')
                .takes_value(true)
                .default_value("4")
                .help("Number of alleles of each count vector."),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .takes_value(true)
                .default_value("1")
                .help("number of threads"),
        )
}

fn subcommand_convert() -> Command<'static> {
    Command::new("convert")
        .version("0.1")
        .about("Sample one PoMo state per site and taxon.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .multiple_occurrences(true)
                .help("Debug mode"),
        )
        .arg(
            Arg::new("virtual_size")
                .short('n')
                .long("virtual_size")
                .takes_value(true)
                .default_value("10")
                .help("Number of virtual individuals (N)."),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed value for random number generators")
                .takes_value(true)
                .default_value("42"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .takes_value(true)
                .default_value("1")
                .help("number of threads"),
        )
}

fn subcommand_extract() -> Command<'static> {
    Command::new("extract")
        .version("0.1")
        .about("Write the PoMo state alignment, one line per taxon.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .multiple_occurrences(true)
                .help("Debug mode"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .takes_value(true)
                .value_name("PATH")
                .required(true),
        )
}

fn subcommand_stats() -> Command<'static> {
    Command::new("stats")
        .version("0.1")
        .about("Write stats to the specified file.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .multiple_occurrences(true)
                .help("Debug mode"),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .value_name("FILE")
                .short('f')
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("virtual_size")
                .short('n')
                .long("virtual_size")
                .takes_value(true)
                .default_value("10")
                .help("Number of virtual individuals (N)."),
        )
}

fn subcommand_pipeline() -> Command<'static> {
    Command::new("pipeline")
        .version("0.1")
        .about("Run the whole conversion based on the given TOML file.")
        .arg(
            Arg::new("profile")
                .short('p')
                .takes_value(true)
                .required(true)
                .help("TOML configuration file. See example.toml for an example."),
        )
}

pub fn pomoconv_parser() -> clap::Command<'static> {
    clap::Command::new("pomoconv")
        .version("0.1")
        .about("Converter from allele counts to PoMo state alignments")
        .arg_required_else_help(true)
        .subcommand(subcommand_entry())
        .subcommand(subcommand_convert())
        .subcommand(subcommand_extract())
        .subcommand(subcommand_stats())
        .subcommand(subcommand_pipeline())
}
