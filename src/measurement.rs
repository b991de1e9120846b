use serde::{Deserialize, Serialize};

use crate::propagation;
use crate::system::System;

/// One measured received power from the field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub distance_m: f64,
    pub frequency_hz: f64,
    pub tx_power_dbm: f64,
    pub measured_power_dbm_rx: f64,
}

/// Model settings used when comparing predictions against measurements.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    pub system: System,
    pub tx_gain_dbi: f64,
    pub rx_gain_dbi: f64,
    pub polarization_mismatch_db: f64, // 0 for H-H or V-V, 20 for crossed
    pub system_gain_override_db: Option<f64>,
}

/// Error statistics of the model, errors taken as measured minus predicted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ValidationMetrics {
    pub count: usize,
    pub mae_db: f64,
    pub rmse_db: f64,
    pub bias_db: f64, // positive means the model overestimates losses
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub measurement: Measurement,
    pub predicted_power_dbm_rx: f64,
    pub error_db: f64,
}

pub fn predict_power_rx_dbm(measurement: &Measurement, options: &ValidationOptions) -> f64 {
    let path_loss_db = propagation::path_loss_db(measurement.distance_m, measurement.frequency_hz);
    let system_gain_db = options
        .system_gain_override_db
        .unwrap_or_else(|| options.system.profile().system_gain_db);
    let antenna_gain_db = options.tx_gain_dbi + options.rx_gain_dbi;

    measurement.tx_power_dbm - path_loss_db + system_gain_db + antenna_gain_db
        - options.polarization_mismatch_db
}

pub fn compare(measurements: &[Measurement], options: &ValidationOptions) -> Vec<Comparison> {
    measurements
        .iter()
        .map(|m| {
            let predicted = predict_power_rx_dbm(m, options);
            Comparison {
                measurement: *m,
                predicted_power_dbm_rx: predicted,
                error_db: m.measured_power_dbm_rx - predicted,
            }
        })
        .collect()
}

/// MAE, RMSE and bias over the comparisons; `None` when there are none.
pub fn compute_metrics(comparisons: &[Comparison]) -> Option<ValidationMetrics> {
    if comparisons.is_empty() {
        return None;
    }
    let n = comparisons.len() as f64;
    let errors = comparisons.iter().map(|c| c.error_db);

    let mae_db = errors.clone().map(f64::abs).sum::<f64>() / n;
    let rmse_db = (errors.clone().map(|e| e * e).sum::<f64>() / n).sqrt();
    let bias_db = errors.sum::<f64>() / n;

    Some(ValidationMetrics {
        count: comparisons.len(),
        mae_db,
        rmse_db,
        bias_db,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(distance_m: f64, measured: f64) -> Measurement {
        Measurement {
            distance_m,
            frequency_hz: 1.0e9,
            tx_power_dbm: 30.0,
            measured_power_dbm_rx: measured,
        }
    }

    #[test]
    fn prediction_uses_link_formula() {
        let options = ValidationOptions {
            system: System::FiveGAdvanced,
            tx_gain_dbi: 5.0,
            rx_gain_dbi: 2.0,
            polarization_mismatch_db: 20.0,
            system_gain_override_db: None,
        };
        let predicted = predict_power_rx_dbm(&row(1000.0, 0.0), &options);
        let expected = 30.0 - propagation::path_loss_db(1000.0, 1.0e9) + 3.0 + 7.0 - 20.0;
        assert!((predicted - expected).abs() < 1e-12);
    }

    #[test]
    fn override_replaces_system_gain() {
        let options = ValidationOptions {
            system: System::SixG,
            system_gain_override_db: Some(1.5),
            ..ValidationOptions::default()
        };
        let base = predict_power_rx_dbm(&row(1000.0, 0.0), &ValidationOptions::default());
        let overridden = predict_power_rx_dbm(&row(1000.0, 0.0), &options);
        assert!((overridden - base - 1.5).abs() < 1e-12);
    }

    #[test]
    fn metrics() {
        let options = ValidationOptions::default();
        let predicted = predict_power_rx_dbm(&row(1000.0, 0.0), &options);
        // errors of +2 and -4 dB
        let rows = [row(1000.0, predicted + 2.0), row(1000.0, predicted - 4.0)];
        let metrics = compute_metrics(&compare(&rows, &options)).unwrap();

        assert_eq!(metrics.count, 2);
        assert!((metrics.mae_db - 3.0).abs() < 1e-9);
        assert!((metrics.rmse_db - 10.0_f64.sqrt()).abs() < 1e-9);
        assert!((metrics.bias_db - (-1.0)).abs() < 1e-9);
    }

    #[test]
    fn no_measurements_no_metrics() {
        assert!(compute_metrics(&[]).is_none());
    }
}
