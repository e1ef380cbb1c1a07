use crate::config::file::FileConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, VmrError};
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_positive_number, validate_range, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "vmrgen")]
#[command(about = "Generates a vPilot model matching rule set from simulator liveries")]
pub struct CliConfig {
    /// JSON dump of enumerated liveries to read instead of a live simulator
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Use the built-in sample livery set
    #[arg(long)]
    pub sample: bool,

    /// Where the rule set is written
    #[arg(long, default_value = "MatchRules.vmr")]
    pub output: PathBuf,

    /// Airline lookup table (Asobo name to ICAO code)
    #[arg(long, default_value = "data/airlines.json")]
    pub airlines: PathBuf,

    /// Type code lookup table (Asobo code to ICAO designator)
    #[arg(long, default_value = "data/typecodes.json")]
    pub typecodes: PathBuf,

    /// Wait until the simulator process is running before exporting
    #[arg(long)]
    pub wait_for_sim: bool,

    /// Seconds between simulator presence checks
    #[arg(long, default_value = "1")]
    pub poll_interval_secs: u64,

    /// Liveries per delivered batch
    #[arg(long, default_value = "64")]
    pub batch_size: usize,

    /// TOML config file; values in it replace the flags above
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Applies a config file on top of the parsed flags.
    pub fn apply_file(&mut self, file: FileConfig) {
        if file.input.is_some() {
            self.input = file.input;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if let Some(airlines) = file.airlines {
            self.airlines = airlines;
        }
        if let Some(typecodes) = file.typecodes {
            self.typecodes = typecodes;
        }
        if let Some(secs) = file.poll_interval_secs {
            self.poll_interval_secs = secs;
        }
        if let Some(batch_size) = file.batch_size {
            self.batch_size = batch_size;
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.input.is_none() && !self.sample {
            return Err(VmrError::MissingConfig {
                field: "input (or --sample)".to_string(),
            });
        }
        if self.input.is_some() && self.sample {
            return Err(VmrError::Config {
                message: "--input and --sample are mutually exclusive".to_string(),
            });
        }

        validate_path("output", &self.output)?;
        if let Some(input) = &self.input {
            validate_path("input", input)?;
            validate_file_extension("input", input, &["json"])?;
            // Lookup tables are only consulted for dump files.
            validate_file_extension("airlines", &self.airlines, &["json"])?;
            validate_file_extension("typecodes", &self.typecodes, &["json"])?;
        }
        validate_range("poll_interval_secs", self.poll_interval_secs, 1, 60)?;
        validate_positive_number("batch_size", self.batch_size, 1)?;

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &Path {
        &self.output
    }

    fn airlines_path(&self) -> &Path {
        &self.airlines
    }

    fn typecodes_path(&self) -> &Path {
        &self.typecodes
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }
}
