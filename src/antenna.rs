use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BEAMWIDTH_DEG, POLARIZATION_MISMATCH_LOSS_DB};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarization {
    #[default]
    H,
    V,
}

impl fmt::Display for Polarization {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Polarization::H => write!(f, "H"),
            Polarization::V => write!(f, "V"),
        }
    }
}

// one end of the link
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AntennaProfile {
    pub gain_dbi: f64,
    pub polarization: Polarization,
    pub beamwidth_deg: f64, // recorded only, not part of the loss model
}

impl Default for AntennaProfile {
    fn default() -> Self {
        Self {
            gain_dbi: 0.0,
            polarization: Polarization::default(),
            beamwidth_deg: DEFAULT_BEAMWIDTH_DEG,
        }
    }
}

impl AntennaProfile {
    pub fn new(gain_dbi: f64, polarization: Polarization, beamwidth_deg: f64) -> AntennaProfile {
        AntennaProfile {
            gain_dbi,
            polarization,
            beamwidth_deg,
        }
    }
}

/// Antenna contribution to a link, echoing both ends.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AntennaResult {
    pub tx_gain_dbi: f64,
    pub rx_gain_dbi: f64,
    pub tx_polarization: Polarization,
    pub rx_polarization: Polarization,
    pub tx_beamwidth_deg: f64,
    pub rx_beamwidth_deg: f64,
    pub polarization_mismatch_loss_db: f64,
    pub antenna_gain_db: f64,
}

impl AntennaResult {
    pub fn from_pair(tx: &AntennaProfile, rx: &AntennaProfile) -> AntennaResult {
        AntennaResult {
            tx_gain_dbi: tx.gain_dbi,
            rx_gain_dbi: rx.gain_dbi,
            tx_polarization: tx.polarization,
            rx_polarization: rx.polarization,
            tx_beamwidth_deg: tx.beamwidth_deg,
            rx_beamwidth_deg: rx.beamwidth_deg,
            polarization_mismatch_loss_db: polarization_mismatch_loss_db(
                tx.polarization,
                rx.polarization,
            ),
            antenna_gain_db: tx.gain_dbi + rx.gain_dbi,
        }
    }
}

/// Binary mismatch penalty: 0 dB when matched, 20 dB otherwise.
pub fn polarization_mismatch_loss_db(tx: Polarization, rx: Polarization) -> f64 {
    if tx == rx {
        0.0
    } else {
        POLARIZATION_MISMATCH_LOSS_DB
    }
}
