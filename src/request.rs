use std::error::Error;
use std::fmt;

use serde::Deserialize;

use crate::antenna::{AntennaProfile, Polarization};
use crate::constants::DEFAULT_BEAMWIDTH_DEG;
use crate::link::LinkParameters;
use crate::system::System;

pub const MIN_POWER_DBM: f64 = 0.0;
pub const MAX_POWER_DBM: f64 = 50.0;
pub const MIN_ANTENNA_GAIN_DBI: f64 = -10.0;
pub const MAX_ANTENNA_GAIN_DBI: f64 = 30.0;
pub const MAX_BEAMWIDTH_DEG: f64 = 360.0;

/// Why a [`LinkRequest`] was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    NotFinite { field: &'static str },
    PowerOutOfRange(f64),
    NonPositiveFrequency(f64),
    NonPositiveDistance(f64),
    AntennaGainOutOfRange { end: &'static str, gain_dbi: f64 },
    BeamwidthOutOfRange { end: &'static str, beamwidth_deg: f64 },
    UnknownPolarization { end: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::NotFinite { field } => write!(f, "{} must be a finite number", field),
            ValidationError::PowerOutOfRange(p) => write!(
                f,
                "power_dbm must be between {} and {} dBm, got {}",
                MIN_POWER_DBM, MAX_POWER_DBM, p
            ),
            ValidationError::NonPositiveFrequency(fr) => {
                write!(f, "frequency_hz must be greater than 0, got {}", fr)
            }
            ValidationError::NonPositiveDistance(d) => {
                write!(f, "distance_m must be greater than 0, got {}", d)
            }
            ValidationError::AntennaGainOutOfRange { end, gain_dbi } => write!(
                f,
                "{} antenna gain must be between {} and {} dBi, got {}",
                end, MIN_ANTENNA_GAIN_DBI, MAX_ANTENNA_GAIN_DBI, gain_dbi
            ),
            ValidationError::BeamwidthOutOfRange { end, beamwidth_deg } => write!(
                f,
                "{} antenna beamwidth must be in (0, {}] degrees, got {}",
                end, MAX_BEAMWIDTH_DEG, beamwidth_deg
            ),
            ValidationError::UnknownPolarization { end, value } => write!(
                f,
                "{} antenna polarization must be \"H\" or \"V\", got \"{}\"",
                end, value
            ),
        }
    }
}

impl Error for ValidationError {}

/// Unvalidated antenna settings; missing fields take the defaults.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AntennaRequest {
    pub gain_dbi: Option<f64>,
    pub polarization: Option<String>,
    pub beamwidth_deg: Option<f64>,
}

/// Unvalidated link settings, as read from a scenario file or a request body.
#[derive(Clone, Debug, Deserialize)]
pub struct LinkRequest {
    pub power_dbm: f64,
    pub frequency_hz: f64,
    pub distance_m: f64,
    pub system: Option<String>,
    #[serde(default)]
    pub tx_antenna: AntennaRequest,
    #[serde(default)]
    pub rx_antenna: AntennaRequest,
}

fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

impl AntennaRequest {
    pub fn validate(&self, end: &'static str) -> Result<AntennaProfile, ValidationError> {
        let gain_dbi = finite("gain_dbi", self.gain_dbi.unwrap_or(0.0))?;
        if !(MIN_ANTENNA_GAIN_DBI..=MAX_ANTENNA_GAIN_DBI).contains(&gain_dbi) {
            return Err(ValidationError::AntennaGainOutOfRange { end, gain_dbi });
        }

        let beamwidth_deg = finite("beamwidth_deg", self.beamwidth_deg.unwrap_or(DEFAULT_BEAMWIDTH_DEG))?;
        if beamwidth_deg <= 0.0 || beamwidth_deg > MAX_BEAMWIDTH_DEG {
            return Err(ValidationError::BeamwidthOutOfRange { end, beamwidth_deg });
        }

        let polarization = match self.polarization.as_deref().map(str::trim) {
            None => Polarization::default(),
            Some(p) if p.eq_ignore_ascii_case("h") => Polarization::H,
            Some(p) if p.eq_ignore_ascii_case("v") => Polarization::V,
            Some(other) => {
                return Err(ValidationError::UnknownPolarization {
                    end,
                    value: other.to_string(),
                })
            }
        };

        Ok(AntennaProfile::new(gain_dbi, polarization, beamwidth_deg))
    }
}

impl LinkRequest {
    pub fn validate(&self) -> Result<LinkParameters, ValidationError> {
        let power_dbm = finite("power_dbm", self.power_dbm)?;
        if !(MIN_POWER_DBM..=MAX_POWER_DBM).contains(&power_dbm) {
            return Err(ValidationError::PowerOutOfRange(power_dbm));
        }
        let frequency_hz = finite("frequency_hz", self.frequency_hz)?;
        if frequency_hz <= 0.0 {
            return Err(ValidationError::NonPositiveFrequency(frequency_hz));
        }
        let distance_m = finite("distance_m", self.distance_m)?;
        if distance_m <= 0.0 {
            return Err(ValidationError::NonPositiveDistance(distance_m));
        }

        let system = self
            .system
            .as_deref()
            .map(System::from_label)
            .unwrap_or_default();

        Ok(LinkParameters {
            power_dbm,
            frequency_hz,
            distance_m,
            system,
            tx_antenna: self.tx_antenna.validate("tx")?,
            rx_antenna: self.rx_antenna.validate("rx")?,
        })
    }
}
