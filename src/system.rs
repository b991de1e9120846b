use std::fmt;

use serde::{Deserialize, Serialize};

/// Communication system profile.
///
/// The three profiles map to fixed bandwidth and effective gain values,
/// see [`SystemProfile`]. `FiveG` (profile A) is the default, and unknown
/// labels resolve to it rather than failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum System {
    #[default]
    #[serde(rename = "5G", alias = "A")]
    FiveG,
    #[serde(rename = "5G-A", alias = "B")]
    FiveGAdvanced,
    #[serde(rename = "6G", alias = "C")]
    SixG,
}

/// Bandwidth and effective gain for a [`System`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SystemProfile {
    pub bandwidth_hz: f64,
    pub system_gain_db: f64,
}

impl System {
    pub const ALL: [System; 3] = [System::FiveG, System::FiveGAdvanced, System::SixG];

    pub fn profile(&self) -> SystemProfile {
        match self {
            System::FiveG => SystemProfile {
                bandwidth_hz: 20.0e6,
                system_gain_db: 0.0,
            },
            System::FiveGAdvanced => SystemProfile {
                bandwidth_hz: 80.0e6,
                system_gain_db: 3.0,
            },
            System::SixG => SystemProfile {
                bandwidth_hz: 200.0e6,
                system_gain_db: 6.0,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            System::FiveG => "5G",
            System::FiveGAdvanced => "5G-A",
            System::SixG => "6G",
        }
    }

    /// Resolve a label such as `"5G-A"` or `"B"` to a system.
    ///
    /// Unrecognized labels fall back to [`System::FiveG`].
    pub fn from_label(label: &str) -> System {
        match label.trim() {
            "5G" | "A" => System::FiveG,
            "5G-A" | "B" => System::FiveGAdvanced,
            "6G" | "C" => System::SixG,
            other => {
                tracing::warn!(label = other, "unknown system, falling back to 5G");
                System::default()
            }
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for System {
    fn from(label: &str) -> Self {
        System::from_label(label)
    }
}
