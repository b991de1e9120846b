use std::fs;

use serde::Deserialize;

use crate::link::LinkParameters;
use crate::measurement::{Measurement, ValidationOptions};
use crate::request::LinkRequest;

// a scenario file as written by the user, see files/ for samples
#[derive(Deserialize, Debug)]
struct ScenarioConfig {
    seed: Option<u64>,
    #[serde(default)]
    compare: bool,
    #[serde(default)]
    sweep: bool,
    link: LinkRequest,
    #[serde(default)]
    validation: ValidationOptions,
    #[serde(default)]
    measurements: Vec<Measurement>,
}

/// A validated scenario, ready to run.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub seed: Option<u64>,
    pub compare: bool,
    pub sweep: bool,
    pub link: LinkParameters,
    pub validation: ValidationOptions,
    pub measurements: Vec<Measurement>,
}

pub fn parse_scenario(content: &str) -> Result<Scenario, Box<dyn std::error::Error>> {
    let config: ScenarioConfig = toml::from_str(content)?;
    tracing::debug!(?config, "parsed scenario");

    let link = config.link.validate()?;

    Ok(Scenario {
        seed: config.seed,
        compare: config.compare,
        sweep: config.sweep,
        link,
        validation: config.validation,
        measurements: config.measurements,
    })
}

pub fn load_scenario(path: &str) -> Result<Scenario, Box<dyn std::error::Error>> {
    tracing::info!(path, "loading scenario");
    let content = fs::read_to_string(path)?;
    parse_scenario(&content)
}
