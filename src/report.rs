use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::analysis::{ComparisonResult, LinkResult, RangeSample};
use crate::link::LinkParameters;
use crate::measurement::{Comparison, ValidationMetrics};

/// Everything a run produced, borrowed for rendering.
pub struct Report<'a> {
    pub params: &'a LinkParameters,
    pub result: &'a LinkResult,
    pub range_data: Option<&'a [RangeSample]>,
    pub comparison: Option<&'a ComparisonResult>,
    pub measurements: Option<(&'a [Comparison], &'a ValidationMetrics)>,
}

pub fn format_frequency(frequency_hz: f64) -> (f64, &'static str) {
    if frequency_hz >= 1e12 {
        (frequency_hz / 1e12, "THz")
    } else if frequency_hz >= 1e9 {
        (frequency_hz / 1e9, "GHz")
    } else if frequency_hz >= 1e6 {
        (frequency_hz / 1e6, "MHz")
    } else if frequency_hz >= 1e3 {
        (frequency_hz / 1e3, "kHz")
    } else {
        (frequency_hz, "Hz")
    }
}

fn write_row<W: Write>(out: &mut W, label: &str, value: f64, unit: &str) -> std::io::Result<()> {
    writeln!(out, "<tr>")?;
    writeln!(out, "<td>{}</td>", label)?;
    writeln!(out, "<td>{:.2}</td>", value)?;
    writeln!(out, "<td>{}</td>", unit)?;
    writeln!(out, "</tr>")?;
    Ok(())
}

pub fn write_html<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    let params = report.params;
    let result = report.result;

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>Link Budget</title>")?;
    writeln!(out, "<style>")?;
    writeln!(out, "table {{ border-collapse: collapse; }}")?;
    writeln!(out, ".wide {{ width: 100%; }}")?;
    writeln!(out, ".parameters {{ width: auto; }}")?;
    writeln!(out, ".parameters td:nth-child(2) {{ text-align: right; }}")?;
    writeln!(
        out,
        "th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}"
    )?;
    writeln!(out, "th {{ background-color: #f2f2f2; }}")?;
    writeln!(out, "tr:nth-child(even) {{ background-color: #f9f9f9; }}")?;
    writeln!(out, "</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h1>Link Budget ({})</h1>", params.system)?;

    writeln!(out, "<h2>Input Parameters</h2>")?;
    writeln!(out, "<table class=\"parameters\">")?;
    writeln!(out, "<tr><th>Parameter</th><th>Value</th><th>Unit</th></tr>")?;
    write_row(out, "Transmit Power", params.power_dbm, "dBm")?;
    let (freq_val, freq_unit) = format_frequency(params.frequency_hz);
    write_row(out, "Frequency", freq_val, freq_unit)?;
    write_row(out, "Distance", params.distance_m, "m")?;
    write_row(out, "TX Antenna Gain", params.tx_antenna.gain_dbi, "dBi")?;
    write_row(out, "RX Antenna Gain", params.rx_antenna.gain_dbi, "dBi")?;
    writeln!(out, "</table>")?;
    writeln!(out, "<br>")?;

    writeln!(out, "<h2>Budget</h2>")?;
    writeln!(out, "<table class=\"parameters\">")?;
    writeln!(out, "<tr><th>Quantity</th><th>Value</th><th>Unit</th></tr>")?;
    write_row(out, "Path Loss", result.path_loss_db, "dB")?;
    write_row(out, "System Gain", result.system_gain_db, "dB")?;
    write_row(out, "Antenna Gain", result.antenna_result.antenna_gain_db, "dB")?;
    write_row(
        out,
        "Polarization Mismatch",
        result.antenna_result.polarization_mismatch_loss_db,
        "dB",
    )?;
    write_row(out, "Received Power", result.power_received_dbm, "dBm")?;
    let (bw_val, bw_unit) = format_frequency(result.bandwidth_hz);
    write_row(out, "Bandwidth", bw_val, bw_unit)?;
    write_row(out, "Noise Floor", result.noise_floor_dbm, "dBm")?;
    write_row(out, "SNR", result.snr_db, "dB")?;
    writeln!(out, "</table>")?;

    if let Some(range_data) = report.range_data {
        writeln!(out, "<h2>Range Sweep</h2>")?;
        write_range_table(out, range_data)?;
    }

    if let Some(comparison) = report.comparison {
        writeln!(out, "<h2>System Comparison</h2>")?;
        writeln!(out, "<table class=\"wide\">")?;
        writeln!(out, "<tr>")?;
        writeln!(out, "<th>System</th>")?;
        writeln!(out, "<th>Bandwidth (MHz)</th>")?;
        writeln!(out, "<th>System Gain (dB)</th>")?;
        writeln!(out, "<th>Path Loss (dB)</th>")?;
        writeln!(out, "<th>Received Power (dBm)</th>")?;
        writeln!(out, "<th>SNR (dB)</th>")?;
        writeln!(out, "</tr>")?;
        for (system, summary) in comparison.systems.iter() {
            writeln!(out, "<tr>")?;
            writeln!(out, "<td>{}</td>", system)?;
            writeln!(out, "<td>{:.0}</td>", summary.bandwidth_hz / 1e6)?;
            writeln!(out, "<td>{:.2}</td>", summary.system_gain_db)?;
            writeln!(out, "<td>{:.2}</td>", summary.path_loss_db)?;
            writeln!(out, "<td>{:.2}</td>", summary.power_received_dbm)?;
            writeln!(out, "<td>{:.2}</td>", summary.snr_db)?;
            writeln!(out, "</tr>")?;
        }
        writeln!(out, "</table>")?;
    }

    if let Some((rows, metrics)) = report.measurements {
        writeln!(out, "<h2>Measurement Validation</h2>")?;
        writeln!(out, "<table class=\"parameters\">")?;
        writeln!(out, "<tr><th>Metric</th><th>Value</th><th>Unit</th></tr>")?;
        write_row(out, "MAE", metrics.mae_db, "dB")?;
        write_row(out, "RMSE", metrics.rmse_db, "dB")?;
        write_row(out, "Bias", metrics.bias_db, "dB")?;
        writeln!(out, "</table>")?;
        writeln!(out, "<br>")?;
        writeln!(out, "<table class=\"wide\">")?;
        writeln!(
            out,
            "<tr><th>Distance (m)</th><th>Measured (dBm)</th><th>Predicted (dBm)</th><th>Error (dB)</th></tr>"
        )?;
        for row in rows {
            writeln!(
                out,
                "<tr><td>{:.1}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td></tr>",
                row.measurement.distance_m,
                row.measurement.measured_power_dbm_rx,
                row.predicted_power_dbm_rx,
                row.error_db
            )?;
        }
        writeln!(out, "</table>")?;
    }

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;

    Ok(())
}

fn write_range_table<W: Write>(out: &mut W, range_data: &[RangeSample]) -> std::io::Result<()> {
    writeln!(out, "<table class=\"wide\">")?;
    writeln!(
        out,
        "<tr><th>Distance (m)</th><th>Path Loss (dB)</th><th>Received Power (dBm)</th><th>SNR (dB)</th></tr>"
    )?;
    for sample in range_data {
        writeln!(
            out,
            "<tr><td>{:.1}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td></tr>",
            sample.distance_m, sample.path_loss_db, sample.power_received_dbm, sample.snr_db
        )?;
    }
    writeln!(out, "</table>")?;
    Ok(())
}

pub fn generate_html_report(report: &Report, output_path_str: &str) -> Result<(), std::io::Error> {
    let path = Path::new(output_path_str);
    let mut file = File::create(path)?;
    write_html(&mut file, report)
}
