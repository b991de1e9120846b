//! RF link budget calculator with spectrum synthesis.
//!
//! Free-space path loss, received power and SNR for a transmitter/receiver
//! pair under one of three system profiles, plus a synthetic tone-and-noise
//! spectrum whose noise floor follows the computed SNR. [`LinkAnalyzer`]
//! runs single links, range sweeps and three-system comparisons and keeps
//! the latest results.
//!
//! ```
//! use linklab::{LinkAnalyzer, LinkParameters, System};
//!
//! let mut analyzer = LinkAnalyzer::seeded(42);
//! let result = analyzer.simulate(&LinkParameters::new(30.0, 3.5e9, 1000.0, System::FiveG));
//! assert!(result.snr_db > 0.0);
//! assert_eq!(result.spectrum.len(), 2000);
//! ```

pub mod analysis;
pub mod antenna;
#[cfg(feature = "cli")]
pub mod cli;
pub mod constants;
pub mod file;
pub mod link;
pub mod measurement;
pub mod propagation;
#[cfg(feature = "plot")]
pub mod report;
pub mod request;
pub mod spectrum;
pub mod system;

pub use analysis::{
    ComparisonParameters, ComparisonResult, LastComparison, LastLinkResult, LinkAnalyzer,
    LinkResult, RangeSample, ResultSlot, SystemSummary,
};
pub use antenna::{AntennaProfile, AntennaResult, Polarization};
pub use link::{compute_link, noise_floor_dbm, LinkBudget, LinkParameters};
pub use propagation::path_loss_db;
pub use request::{AntennaRequest, LinkRequest, ValidationError};
pub use spectrum::{SpectrumPoint, SpectrumSynthesizer};
pub use system::{System, SystemProfile};
