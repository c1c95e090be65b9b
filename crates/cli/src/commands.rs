//! Command tree.

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

/// Build the `ocelgen` command.
pub fn build_cli() -> Command {
    Command::new("ocelgen")
        .about("Synthesize object-centric event logs for clinical care pathways")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log per-trace progress (debug level)"),
        )
        .subcommand(generate_command())
        .subcommand(
            Command::new("schema").about("Print the default schema dictionaries as JSON"),
        )
}

fn generate_command() -> Command {
    Command::new("generate")
        .about("Replay traces and write an OCEL document")
        .arg(
            Arg::new("traces")
                .long("traces")
                .short('t')
                .required(true)
                .value_name("FILE")
                .help("JSON array of traces, each an array of activity labels"),
        )
        .arg(
            Arg::new("labels")
                .long("labels")
                .value_name("FILE")
                .help("JSON object mapping trace labels to activity names"),
        )
        .arg(
            Arg::new("korean")
                .long("korean")
                .action(ArgAction::SetTrue)
                .help("Traces use the built-in Korean clinical vocabulary"),
        )
        .group(ArgGroup::new("label-source").args(["labels", "korean"]))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("TOML generator configuration"),
        )
        .arg(
            Arg::new("schema")
                .long("schema")
                .value_name("FILE")
                .help("JSON schema dictionaries to embed instead of the defaults"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .value_name("FILE")
                .default_value("ocel.json")
                .help("Output path"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Random seed"),
        )
        .arg(
            Arg::new("step-mean")
                .long("step-mean")
                .value_name("MINUTES")
                .value_parser(value_parser!(f64))
                .help("Mean of the per-trace step"),
        )
        .arg(
            Arg::new("step-std")
                .long("step-std")
                .value_name("MINUTES")
                .value_parser(value_parser!(f64))
                .help("Standard deviation of the per-trace step"),
        )
        .arg(
            Arg::new("pad")
                .long("pad")
                .value_name("WIDTH")
                .value_parser(value_parser!(usize))
                .help("Zero-pad width of object ids"),
        )
        .arg(
            Arg::new("base-time")
                .long("base-time")
                .value_name("TIME")
                .help("Start of the first trace, e.g. 2025-08-01T09:00:00Z"),
        )
}
