/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Thermal noise power spectral density at 290 K (dBm/Hz).
pub const THERMAL_NOISE_DENSITY_DBM_PER_HZ: f64 = -174.0;

/// Receiver noise figure applied to every link (dB).
pub const RECEIVER_NOISE_FIGURE_DB: f64 = 5.0;

/// Loss applied when transmit and receive polarizations differ (dB).
pub const POLARIZATION_MISMATCH_LOSS_DB: f64 = 20.0;

/// Default antenna half-power beamwidth (degrees).
pub const DEFAULT_BEAMWIDTH_DEG: f64 = 65.0;

// baseband waveform used for the spectrum view
pub const SPECTRUM_DURATION_S: f64 = 0.02;
pub const SPECTRUM_SAMPLE_RATE_HZ: f64 = 500_000.0;
pub const SPECTRUM_TONE_HZ: f64 = 10_000.0;
pub const SPECTRUM_TONE_AMPLITUDE: f64 = 1.0;
pub const SPECTRUM_MAX_POINTS: usize = 2000;
/// Added to bin magnitudes before taking the log.
pub const SPECTRUM_EPSILON: f64 = 1e-12;

// range sweep grid, inclusive on both ends
pub const SWEEP_START_M: f64 = 100.0;
pub const SWEEP_STOP_M: f64 = 10_000.0;
pub const SWEEP_POINTS: usize = 50;
