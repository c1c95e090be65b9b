//! Command execution.

use std::fs;
use std::io::Write;
use std::path::Path;

use ocelgen::export;
use ocelgen::{Error, GeneratorConfig, LabelMap, LogBuilder, LogSummary, Result, Schema, Timestamp};
use tracing::info;

use crate::parse::{GenerateArgs, LabelSource, Overrides};

/// Load the configuration file (if any) and apply flag overrides.
pub fn load_config(
    path: Option<&Path>,
    schema: Option<&Path>,
    overrides: &Overrides,
) -> Result<GeneratorConfig> {
    let mut config = match path {
        Some(path) => GeneratorConfig::from_toml_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(seed) = overrides.seed {
        config.seed = seed;
    }
    if let Some(mean) = overrides.step_mean {
        config.step_mean_minutes = mean;
    }
    if let Some(std) = overrides.step_std {
        config.step_std_minutes = std;
    }
    if let Some(pad) = overrides.pad {
        config.id_pad_width = pad;
    }
    if let Some(base) = &overrides.base_time {
        config.base_time = Timestamp::parse(base)?;
    }
    if let Some(schema) = schema {
        let text = fs::read_to_string(schema)?;
        config.schema = serde_json::from_str::<Schema>(&text)?;
    }
    config.validate()?;
    Ok(config)
}

/// Read a traces file: a JSON array of arrays of labels.
pub fn read_traces(path: &Path) -> Result<Vec<Vec<String>>> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| {
        Error::Serialization(format!(
            "{}: expected an array of label arrays: {}",
            path.display(),
            e
        ))
    })
}

/// `ocelgen generate`
pub fn generate(args: &GenerateArgs) -> Result<LogSummary> {
    let config = load_config(args.config.as_deref(), args.schema.as_deref(), &args.overrides)?;
    let traces = read_traces(&args.traces)?;
    info!(traces = traces.len(), seed = config.seed, "Loaded traces");

    let mut builder = LogBuilder::new(config)?;
    match &args.labels {
        LabelSource::Canonical => builder.add_traces(&traces)?,
        LabelSource::Korean => {
            let activities = LabelMap::clinical_ko().translate(&traces)?;
            builder.add_activity_traces(&activities)?;
        }
        LabelSource::File(path) => {
            let activities = LabelMap::from_json_file(path)?.translate(&traces)?;
            builder.add_activity_traces(&activities)?;
        }
    }

    let log = builder.finish();
    export::write_json(&log, &args.out)?;
    Ok(log.summary())
}

/// `ocelgen schema`
pub fn print_schema(out: &mut impl Write) -> Result<()> {
    export::to_writer(&mut *out, &Schema::clinical())?;
    writeln!(out)?;
    Ok(())
}
