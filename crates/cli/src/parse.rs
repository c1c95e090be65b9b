//! ArgMatches → CliAction conversion.

use std::path::PathBuf;

use clap::ArgMatches;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    /// Replay traces and write a document.
    Generate(GenerateArgs),
    /// Print the default schema dictionaries.
    Schema,
}

/// Where trace labels get their meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSource {
    /// Labels are canonical activity names.
    Canonical,
    /// Built-in Korean vocabulary.
    Korean,
    /// A JSON label map file.
    File(PathBuf),
}

/// Flag overrides applied on top of the configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub step_mean: Option<f64>,
    pub step_std: Option<f64>,
    pub pad: Option<usize>,
    pub base_time: Option<String>,
}

/// Arguments of `ocelgen generate`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    pub traces: PathBuf,
    pub labels: LabelSource,
    pub config: Option<PathBuf>,
    pub schema: Option<PathBuf>,
    pub out: PathBuf,
    pub overrides: Overrides,
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "generate" => parse_generate(sub_matches).map(CliAction::Generate),
        "schema" => Ok(CliAction::Schema),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn path(matches: &ArgMatches, id: &str) -> Option<PathBuf> {
    matches.get_one::<String>(id).map(PathBuf::from)
}

fn parse_generate(m: &ArgMatches) -> Result<GenerateArgs, String> {
    let traces = path(m, "traces").ok_or("--traces is required")?;
    let labels = if m.get_flag("korean") {
        LabelSource::Korean
    } else if let Some(file) = path(m, "labels") {
        LabelSource::File(file)
    } else {
        LabelSource::Canonical
    };
    Ok(GenerateArgs {
        traces,
        labels,
        config: path(m, "config"),
        schema: path(m, "schema"),
        out: path(m, "out").unwrap_or_else(|| PathBuf::from("ocel.json")),
        overrides: Overrides {
            seed: m.get_one::<u64>("seed").copied(),
            step_mean: m.get_one::<f64>("step-mean").copied(),
            step_std: m.get_one::<f64>("step-std").copied(),
            pad: m.get_one::<usize>("pad").copied(),
            base_time: m.get_one::<String>("base-time").cloned(),
        },
    })
}
