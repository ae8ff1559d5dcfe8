//! Command handlers.

use crate::commands::OutputFormat;
use std::path::Path;
use trestle_config::{MasterConfig, MasterSettings};
use trestle_plan::PipelineTemplate;

fn load_settings(path: Option<&Path>) -> trestle_core::Result<MasterSettings> {
    match path {
        Some(path) => MasterSettings::load_file(path),
        None => MasterSettings::load(),
    }
}

fn derive(settings: &MasterSettings) -> trestle_core::Result<MasterConfig> {
    let template = PipelineTemplate::standard(&settings.repository, &settings.branch);
    MasterConfig::derive(settings, &template)
}

pub fn plan(
    settings_path: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(settings_path)?;
    let config = derive(&settings)?;

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&config)?,
        OutputFormat::Yaml => serde_yaml::to_string(&config)?,
    };
    println!("{rendered}");
    Ok(())
}

pub fn validate(settings_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(settings_path)?;
    let config = derive(&settings)?;

    println!(
        "ok: {} workers, {} builders, {} schedulers on branch {}",
        config.workers.len(),
        config.plan.builders.len(),
        config.plan.schedulers.len(),
        config.plan.branch,
    );
    Ok(())
}

pub fn workers(settings_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(settings_path)?;
    let registry = settings.workers()?;

    for worker in &registry {
        println!("{}", worker.name);
    }
    Ok(())
}
