use std::path::Path;
use std::process;

use crate::analysis::{ComparisonResult, LinkAnalyzer, LinkResult, RangeSample};
use crate::file::{load_scenario, Scenario};
use crate::measurement::{self, Comparison, ValidationMetrics};
use crate::report::{self, Report};

/// Everything a scenario run produced.
pub struct RunOutput {
    pub scenario: Scenario,
    pub result: LinkResult,
    pub range_data: Option<Vec<RangeSample>>,
    pub comparison: Option<ComparisonResult>,
    pub measurements: Option<(Vec<Comparison>, ValidationMetrics)>,
}

pub fn run_scenario(scenario: Scenario) -> RunOutput {
    let mut analyzer = match scenario.seed {
        Some(seed) => LinkAnalyzer::seeded(seed),
        None => LinkAnalyzer::new(),
    };

    // the comparison reruns every system through simulate, so it goes first
    // and the requested link ends up as the last result
    let comparison = if scenario.compare {
        let link = &scenario.link;
        Some(analyzer.compare_systems(link.power_dbm, link.frequency_hz, link.distance_m))
    } else {
        None
    };

    let result = analyzer.simulate(&scenario.link);

    let range_data = if scenario.sweep {
        let link = &scenario.link;
        Some(analyzer.range_sweep(link.power_dbm, link.frequency_hz, link.system))
    } else {
        None
    };

    let comparisons = measurement::compare(&scenario.measurements, &scenario.validation);
    let measurements = measurement::compute_metrics(&comparisons).map(|metrics| (comparisons, metrics));

    RunOutput {
        scenario,
        result,
        range_data,
        comparison,
        measurements,
    }
}

/// `files/link.toml` → `files/link.html`
pub fn output_html_path(config_path: &Path) -> String {
    let mut output = config_path.with_extension("html").display().to_string();
    // Remove the UNC prefix on Windows if present
    if cfg!(target_os = "windows") && output.starts_with(r"\\?\") {
        output = output[4..].to_string();
    }
    output
}

pub struct Config {}

impl Config {
    pub fn run(args: &[String]) -> Result<Config, Box<dyn std::error::Error>> {
        if args.len() < 2 {
            return Err("not enough arguments".into());
        }

        if args.len() > 2 {
            return Err("too many arguments, expecting only 2, such as `linklab filepath`".into());
        }

        // Check for special flags
        match args[1].as_str() {
            "--version" | "-v" => {
                print_version();
                process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            _ => {}
        }

        let cwd = std::env::current_dir()?;
        // linklab arg[1], such as linklab files/simple_link.toml
        let full_path_to_config = cwd.join(&args[1]);
        tracing::info!(path = %full_path_to_config.display(), "scenario");

        let scenario = load_scenario(&full_path_to_config.display().to_string())?;
        let output = run_scenario(scenario);

        print_result(&output.result);
        if let Some(range_data) = &output.range_data {
            print_range_sweep(range_data);
        }
        if let Some(comparison) = &output.comparison {
            print_comparison(comparison);
        }
        if let Some((rows, metrics)) = &output.measurements {
            print_validation(rows, metrics);
        }

        let output_html_path = output_html_path(&full_path_to_config);
        tracing::info!(path = %output_html_path, "writing HTML report");

        let report = Report {
            params: &output.scenario.link,
            result: &output.result,
            range_data: output.range_data.as_deref(),
            comparison: output.comparison.as_ref(),
            measurements: output
                .measurements
                .as_ref()
                .map(|(rows, metrics)| (rows.as_slice(), metrics)),
        };
        if let Err(e) = report::generate_html_report(&report, &output_html_path) {
            tracing::error!(error = %e, "could not write HTML report");
        }

        Ok(Config {})
    }
}

pub fn print_version() {
    println!("linklab {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_error(error: &str) {
    const RED: &str = "\x1b[31m";
    const RESET: &str = "\x1b[0m";
    println!("{}Problem running scenario: {error}{}", RED, RESET);
}

pub fn print_help() {
    // ANSI color codes
    const BOLD: &str = "\x1b[1m";
    const CYAN: &str = "\x1b[36m";
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const RESET: &str = "\x1b[0m";

    println!("📡 linklab - RF link budget and spectrum calculator{}", RESET);
    println!();
    println!("{}{}VERSION:{}", BOLD, YELLOW, RESET);
    println!("    {}{}{}", GREEN, env!("CARGO_PKG_VERSION"), RESET);
    println!();
    println!("{}{}USAGE:{}", BOLD, YELLOW, RESET);
    println!("    {} linklab <FILE_PATH>{}", GREEN, RESET);
    println!();
    println!("     FILE_PATH: path to a toml scenario file");
    println!();
    println!("     The scenario is run and an html report is written next to the file.");
    println!("     Set RUST_LOG=debug for per-step values.");
    println!();
    println!("{}{}OPTIONS:{}", BOLD, YELLOW, RESET);
    println!(
        "    {}  -v, --version{}{}    Print version information",
        GREEN, RESET, RESET
    );
    println!(
        "    {}  -h, --help{}{}       Print help information",
        GREEN, RESET, RESET
    );
    println!();
    println!("{}{}EXAMPLES:{}", BOLD, YELLOW, RESET);
    println!("    {} # Single link (Relative path){}", CYAN, RESET);
    println!("    {} linklab files/simple_link.toml{}", GREEN, RESET);
    println!();
}

pub fn print_result(result: &LinkResult) {
    // `{:>8.2}` aligns positive and negative numbers on the decimal
    println!();
    println!("Link Budget ({}):", result.system);
    println!("----------------------");
    println!("Path Loss:\t\t{:>8.2} dB", result.path_loss_db);
    println!("System Gain:\t\t{:>8.2} dB", result.system_gain_db);
    println!("Antenna Gain:\t\t{:>8.2} dB", result.antenna_result.antenna_gain_db);
    println!(
        "Polarization Loss:\t{:>8.2} dB",
        result.antenna_result.polarization_mismatch_loss_db
    );
    println!("Received Power:\t\t{:>8.2} dBm", result.power_received_dbm);
    println!("Bandwidth:\t\t{:>8.2} MHz", result.bandwidth_hz / 1e6);
    println!("Noise Floor:\t\t{:>8.2} dBm", result.noise_floor_dbm);
    println!("SNR:\t\t\t{:>8.2} dB", result.snr_db);
    println!("Spectrum Points:\t{:>8}", result.spectrum.len());
}

pub fn print_range_sweep(range_data: &[RangeSample]) {
    println!();
    println!("Range Sweep:");
    println!("----------------------");
    println!("{:>10} {:>10} {:>10} {:>10}", "d (m)", "FSPL (dB)", "Prx (dBm)", "SNR (dB)");
    for sample in range_data {
        println!(
            "{:>10.1} {:>10.2} {:>10.2} {:>10.2}",
            sample.distance_m, sample.path_loss_db, sample.power_received_dbm, sample.snr_db
        );
    }
}

pub fn print_comparison(comparison: &ComparisonResult) {
    println!();
    println!("System Comparison:");
    println!("----------------------");
    for (system, summary) in comparison.systems.iter() {
        println!(
            "{:<6} Prx {:>8.2} dBm  SNR {:>8.2} dB  BW {:>6.0} MHz  Gsys {:>5.2} dB",
            system.label(),
            summary.power_received_dbm,
            summary.snr_db,
            summary.bandwidth_hz / 1e6,
            summary.system_gain_db
        );
    }
}

pub fn print_validation(rows: &[Comparison], metrics: &ValidationMetrics) {
    println!();
    println!("Measurement Validation ({} rows):", metrics.count);
    println!("----------------------");
    println!("MAE:\t{:>8.3} dB", metrics.mae_db);
    println!("RMSE:\t{:>8.3} dB", metrics.rmse_db);
    println!("Bias:\t{:>8.3} dB (positive = model overestimates losses)", metrics.bias_db);
    for (i, row) in rows.iter().take(5).enumerate() {
        println!(
            "  [{}] measured={:.2} dBm, predicted={:.2} dBm, error={:.2} dB",
            i, row.measurement.measured_power_dbm_rx, row.predicted_power_dbm_rx, row.error_db
        );
    }
}
