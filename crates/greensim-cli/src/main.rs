// SPDX-License-Identifier: PMPL-1.0-or-later

//! # Greensim CLI
//!
//! Estimate the energy and carbon impact of standard versus green
//! implementations of common data-processing tasks, without running them.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use greensim_carbon::{
    CarbonSource, ElectricityMapsClient, IntensityCache, ResolvedIntensity, CARBON_ZONES,
};
use greensim_models::{
    HardwareProfile, ParamKey, Scenario, WorkloadParams, DEFAULT_PROFILE_ID, HARDWARE_PROFILES,
};
use greensim_report::{scaling_sweep, what_if_sweep, RunReport, SweepPoint};

#[derive(Parser)]
#[command(name = "greensim")]
#[command(about = "Green-software impact simulator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one scenario and compare all its variants
    Run {
        /// Scenario to simulate (sort, sales-report, log-filter)
        scenario: String,

        /// Override a workload parameter (e.g. --set records=50000), repeatable
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,

        /// Hardware profile
        #[arg(short, long, default_value = DEFAULT_PROFILE_ID)]
        profile: String,

        /// Use the static intensity table for a country code
        #[arg(long, conflicts_with = "zone")]
        country: Option<String>,

        /// Fetch live grid intensity for an Electricity Maps zone
        #[arg(long)]
        zone: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Re-run a scenario across growing workload sizes
    Sweep {
        /// Scenario to simulate (sort, sales-report, log-filter)
        scenario: String,

        /// Sizes of the primary parameter, comma-separated
        #[arg(long, value_delimiter = ',', default_value = "100,1000,10000,100000,1000000")]
        sizes: Vec<f64>,

        /// Override a workload parameter (e.g. --set item-size=25), repeatable
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,

        /// Hardware profile
        #[arg(short, long, default_value = DEFAULT_PROFILE_ID)]
        profile: String,

        /// Use the static intensity table for a country code
        #[arg(long, conflicts_with = "zone")]
        country: Option<String>,

        /// Fetch live grid intensity for an Electricity Maps zone
        #[arg(long)]
        zone: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Vary one parameter and watch the sensitivity of every variant
    WhatIf {
        /// Scenario to simulate (sort, sales-report, log-filter)
        scenario: String,

        /// Parameter to vary (e.g. error-percentage)
        #[arg(long)]
        param: String,

        /// Values the parameter takes, comma-separated
        #[arg(long, value_delimiter = ',')]
        values: Vec<f64>,

        /// Override a workload parameter, repeatable
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,

        /// Hardware profile
        #[arg(short, long, default_value = DEFAULT_PROFILE_ID)]
        profile: String,

        /// Use the static intensity table for a country code
        #[arg(long, conflicts_with = "zone")]
        country: Option<String>,

        /// Fetch live grid intensity for an Electricity Maps zone
        #[arg(long)]
        zone: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the hardware profile catalog
    Profiles,

    /// List the static carbon-intensity zone table
    Zones,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .init();

    match cli.command {
        Commands::Run {
            scenario,
            overrides,
            profile,
            country,
            zone,
            format,
            output,
        } => {
            let params = build_params(&scenario, &overrides)?;
            let profile = lookup_profile(&profile)?;
            let intensity = resolve_intensity(country.as_deref(), zone.as_deref());
            info!(
                scenario = params.scenario().id(),
                profile = profile.id,
                gco2_per_kwh = intensity.gco2_per_kwh,
                "running simulation"
            );

            let report = RunReport::build(params, profile, intensity);

            let rendered = match format.as_str() {
                "json" => report.to_json()?,
                "text" => report.to_text(),
                other => bail!("Unsupported format: {}", other),
            };
            emit(&rendered, output.as_deref())?;
        }

        Commands::Sweep {
            scenario,
            sizes,
            overrides,
            profile,
            country,
            zone,
            format,
            output,
        } => {
            let params = build_params(&scenario, &overrides)?;
            let profile = lookup_profile(&profile)?;
            let intensity = resolve_intensity(country.as_deref(), zone.as_deref());
            let factors = profile_factors(profile, &intensity);

            let points = scaling_sweep(&params, &sizes, &factors);
            emit_sweep(&points, &format, output.as_deref())?;
        }

        Commands::WhatIf {
            scenario,
            param,
            values,
            overrides,
            profile,
            country,
            zone,
            format,
            output,
        } => {
            if values.is_empty() {
                bail!("--values must list at least one value");
            }
            let params = build_params(&scenario, &overrides)?;
            let key = parse_param_key(&param)?;
            if params.get(key).is_none() {
                bail!(
                    "parameter '{}' does not belong to scenario '{}' (try: {})",
                    param,
                    params.scenario().id(),
                    params
                        .sensitivity_keys()
                        .iter()
                        .map(|k| k.id())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            let profile = lookup_profile(&profile)?;
            let intensity = resolve_intensity(country.as_deref(), zone.as_deref());
            let factors = profile_factors(profile, &intensity);

            let points = what_if_sweep(&params, key, &values, &factors);
            emit_sweep(&points, &format, output.as_deref())?;
        }

        Commands::Profiles => {
            println!("{:<10} {:<34} {:>14} {:>14}", "ID", "NAME", "kWh/CPU-op", "kWh/move");
            for p in &HARDWARE_PROFILES {
                println!(
                    "{:<10} {:<34} {:>14.1e} {:>14.1e}",
                    p.id, p.name, p.kwh_per_cpu_op, p.kwh_per_data_move
                );
            }
        }

        Commands::Zones => {
            println!("{:<6} {:<20} {:>12}", "CODE", "NAME", "gCO2/kWh");
            for z in &CARBON_ZONES {
                println!("{:<6} {:<20} {:>12.0}", z.code, z.name, z.gco2_per_kwh);
            }
        }
    }

    Ok(())
}

fn parse_scenario(id: &str) -> Result<Scenario> {
    Scenario::ALL
        .into_iter()
        .find(|s| s.id() == id)
        .with_context(|| {
            format!(
                "unknown scenario '{}' (expected one of: {})",
                id,
                Scenario::ALL.map(|s| s.id()).join(", ")
            )
        })
}

fn parse_param_key(id: &str) -> Result<ParamKey> {
    ParamKey::from_id(id).with_context(|| {
        format!(
            "unknown parameter '{}' (expected one of: {})",
            id,
            ParamKey::ALL.map(|k| k.id()).join(", ")
        )
    })
}

/// Scenario defaults with `--set key=value` overrides applied on top
fn build_params(scenario: &str, overrides: &[String]) -> Result<WorkloadParams> {
    let scenario = parse_scenario(scenario)?;
    let mut params = WorkloadParams::defaults(scenario);

    for entry in overrides {
        let (key, value) = entry
            .split_once('=')
            .with_context(|| format!("expected KEY=VALUE, got '{}'", entry))?;
        let key = parse_param_key(key)?;
        let value: f64 = value
            .parse()
            .with_context(|| format!("invalid number '{}' for '{}'", value, key.id()))?;
        if params.get(key).is_none() {
            bail!(
                "parameter '{}' does not belong to scenario '{}'",
                key.id(),
                scenario.id()
            );
        }
        params = params.with(key, value);
    }

    Ok(params)
}

fn lookup_profile(id: &str) -> Result<&'static HardwareProfile> {
    HardwareProfile::by_id(id).with_context(|| {
        format!(
            "unknown hardware profile '{}' (expected one of: {})",
            id,
            HARDWARE_PROFILES.map(|p| p.id).join(", ")
        )
    })
}

/// Resolve the grid factor; any lookup failure degrades inside the source,
/// so this never fails.
fn resolve_intensity(country: Option<&str>, zone: Option<&str>) -> ResolvedIntensity {
    let source = match (country, zone) {
        (_, Some(zone)) => CarbonSource::LiveZone { zone: zone.to_string() },
        (Some(code), None) => CarbonSource::Country { code: code.to_string() },
        (None, None) => CarbonSource::EuAverage,
    };

    let client = ElectricityMapsClient::from_env();
    // One cache per invocation; nothing outlives the process.
    let mut cache = IntensityCache::new();
    source.resolve(&client, &mut cache)
}

fn profile_factors(
    profile: &HardwareProfile,
    intensity: &ResolvedIntensity,
) -> greensim_models::ConversionFactors {
    greensim_models::ConversionFactors::new(
        profile.kwh_per_cpu_op,
        profile.kwh_per_data_move,
        intensity.gco2_per_kwh,
    )
}

/// Emit rendered output to stdout or a file
fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            eprintln!("Output written to: {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn emit_sweep(points: &[SweepPoint], format: &str, output: Option<&Path>) -> Result<()> {
    let rendered = match format {
        "json" => serde_json::to_string_pretty(points)?,
        "text" => format_sweep_text(points),
        other => bail!("Unsupported format: {}", other),
    };
    emit(&rendered, output)
}

fn format_sweep_text(points: &[SweepPoint]) -> String {
    let mut out = String::new();
    for point in points {
        out.push_str(&format!("{} = {:.0}\n", point.key.id(), point.value));
        for result in &point.results {
            if !result.is_applicable() {
                out.push_str(&format!("  {:<46} not applicable\n", result.kind.label()));
                continue;
            }
            out.push_str(&format!(
                "  {:<46} {:>14.6e} kWh {:>14.6} gCO2\n",
                result.kind.label(),
                result.estimated_energy.0,
                result.estimated_co2.0
            ));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_params_applies_overrides() {
        let params =
            build_params("sort", &["records=5000".to_string(), "avg-record-size=250".to_string()])
                .unwrap();
        assert_eq!(params.get(ParamKey::Records), Some(5000.0));
        assert_eq!(params.get(ParamKey::AvgRecordSize), Some(250.0));
        // Untouched parameter keeps its default
        assert_eq!(params.get(ParamKey::KeyIndexPairSize), Some(5.0));
    }

    #[test]
    fn test_build_params_rejects_foreign_key() {
        let err = build_params("sort", &["lines=100".to_string()]).unwrap_err();
        assert!(err.to_string().contains("does not belong"));
    }

    #[test]
    fn test_build_params_rejects_bad_syntax() {
        assert!(build_params("sort", &["records".to_string()]).is_err());
        assert!(build_params("sort", &["records=abc".to_string()]).is_err());
        assert!(build_params("warp-drive", &[]).is_err());
    }

    #[test]
    fn test_parse_scenario_ids() {
        assert_eq!(parse_scenario("sales-report").unwrap(), Scenario::SalesReport);
        assert!(parse_scenario("sales").is_err());
    }

    #[test]
    fn test_emit_writes_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("report.json");
        emit("{\"ok\":true}", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"ok\":true}");
    }
}
