use std::fmt;

use serde::{Deserialize, Serialize};

use crate::antenna::{AntennaProfile, AntennaResult};
use crate::constants::{RECEIVER_NOISE_FIGURE_DB, THERMAL_NOISE_DENSITY_DBM_PER_HZ};
use crate::propagation;
use crate::system::System;

// validated inputs for one link computation, see request.rs for the checks
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkParameters {
    pub power_dbm: f64,    // dBm, transmit power
    pub frequency_hz: f64, // Hz, carrier frequency
    pub distance_m: f64,   // m, tx to rx separation
    pub system: System,
    pub tx_antenna: AntennaProfile,
    pub rx_antenna: AntennaProfile,
}

impl Default for LinkParameters {
    fn default() -> Self {
        Self {
            power_dbm: 0.0,       // placeholder value, you should change this
            frequency_hz: 1.0e9,  // placeholder value, you should change this
            distance_m: 1000.0,   // placeholder value, you should change this
            system: System::default(),
            tx_antenna: AntennaProfile::default(),
            rx_antenna: AntennaProfile::default(),
        }
    }
}

impl fmt::Display for LinkParameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "LinkParameters {{ power_dbm: {}, frequency_hz: {}, distance_m: {}, system: {} }}",
            self.power_dbm, self.frequency_hz, self.distance_m, self.system
        )
    }
}

impl LinkParameters {
    pub fn new(power_dbm: f64, frequency_hz: f64, distance_m: f64, system: System) -> LinkParameters {
        LinkParameters {
            power_dbm,
            frequency_hz,
            distance_m,
            system,
            ..LinkParameters::default()
        }
    }

    pub fn with_antennas(mut self, tx_antenna: AntennaProfile, rx_antenna: AntennaProfile) -> Self {
        self.tx_antenna = tx_antenna;
        self.rx_antenna = rx_antenna;
        self
    }
}

/// Derived quantities for one link, before any spectrum is attached.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinkBudget {
    pub power_received_dbm: f64,
    pub snr_db: f64,
    pub path_loss_db: f64,
    pub bandwidth_hz: f64,
    pub system_gain_db: f64,
    pub noise_floor_dbm: f64,
    pub antenna_result: AntennaResult,
}

/// Receiver noise floor (dBm) over `bandwidth_hz`: kTB at 290 K plus the receiver NF.
pub fn noise_floor_dbm(bandwidth_hz: f64) -> f64 {
    THERMAL_NOISE_DENSITY_DBM_PER_HZ + 10.0 * bandwidth_hz.log10() + RECEIVER_NOISE_FIGURE_DB
}

pub fn compute_link(params: &LinkParameters) -> LinkBudget {
    let path_loss_db = propagation::path_loss_db(params.distance_m, params.frequency_hz);
    let profile = params.system.profile();
    let antenna_result = AntennaResult::from_pair(&params.tx_antenna, &params.rx_antenna);

    let power_received_dbm = params.power_dbm - path_loss_db + profile.system_gain_db
        + antenna_result.antenna_gain_db
        - antenna_result.polarization_mismatch_loss_db;

    let noise_floor_dbm = noise_floor_dbm(profile.bandwidth_hz);
    let snr_db = power_received_dbm - noise_floor_dbm;

    tracing::debug!(
        system = %params.system,
        path_loss_db,
        power_received_dbm,
        noise_floor_dbm,
        snr_db,
        "computed link budget"
    );

    LinkBudget {
        power_received_dbm,
        snr_db,
        path_loss_db,
        bandwidth_hz: profile.bandwidth_hz,
        system_gain_db: profile.system_gain_db,
        noise_floor_dbm,
        antenna_result,
    }
}
