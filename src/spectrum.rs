use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use serde::Serialize;

use crate::constants::{
    SPECTRUM_DURATION_S, SPECTRUM_EPSILON, SPECTRUM_MAX_POINTS, SPECTRUM_SAMPLE_RATE_HZ,
    SPECTRUM_TONE_AMPLITUDE, SPECTRUM_TONE_HZ,
};

/// One bin of a one-sided magnitude spectrum.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpectrumPoint {
    pub frequency_hz: f64,
    pub magnitude_db: f64,
}

/// Standard deviation of the additive noise that puts a tone of
/// `signal_amplitude` at `snr_db` above the noise.
pub fn noise_amplitude(signal_amplitude: f64, snr_db: f64) -> f64 {
    let snr_linear = rfconversions::power::db_to_linear(snr_db);
    (signal_amplitude * signal_amplitude / snr_linear).sqrt()
}

/// Synthesizes a baseband tone plus Gaussian noise and returns its spectrum.
///
/// The noise level is derived from the link SNR, so the floor in the returned
/// spectrum follows the computed budget. The random source is injected; seed
/// it for reproducible output.
#[derive(Clone, Debug)]
pub struct SpectrumSynthesizer<R: Rng = StdRng> {
    rng: R,
}

impl SpectrumSynthesizer<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SpectrumSynthesizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Time-domain samples: tone at [`SPECTRUM_TONE_HZ`] plus noise scaled to `snr_db`.
    pub fn waveform(&mut self, snr_db: f64) -> Vec<f64> {
        let sample_count = (SPECTRUM_DURATION_S * SPECTRUM_SAMPLE_RATE_HZ).round() as usize;
        let sigma = noise_amplitude(SPECTRUM_TONE_AMPLITUDE, snr_db);

        (0..sample_count)
            .map(|i| {
                let t = i as f64 / SPECTRUM_SAMPLE_RATE_HZ;
                let tone = SPECTRUM_TONE_AMPLITUDE * (2.0 * PI * SPECTRUM_TONE_HZ * t).sin();
                let noise: f64 = self.rng.sample(StandardNormal);
                tone + sigma * noise
            })
            .collect()
    }

    /// One-sided magnitude spectrum in dB, DC first, at most
    /// [`SPECTRUM_MAX_POINTS`] bins.
    pub fn synthesize(&mut self, snr_db: f64) -> Vec<SpectrumPoint> {
        let samples = self.waveform(snr_db);
        let spectrum = magnitude_spectrum_db(&samples, SPECTRUM_SAMPLE_RATE_HZ);
        tracing::debug!(snr_db, bins = spectrum.len(), "synthesized spectrum");
        spectrum
    }
}

/// Real-input magnitude spectrum (unnormalized, like a plain rfft) in dB.
pub fn magnitude_spectrum_db(samples: &[f64], sample_rate_hz: f64) -> Vec<SpectrumPoint> {
    let n = samples.len();
    if n == 0 {
        return Vec::new();
    }

    let mut buffer: Vec<Complex<f64>> = samples.iter().map(|&x| Complex::new(x, 0.0)).collect();
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    // the upper half mirrors the lower half for real input
    let one_sided_bins = n / 2 + 1;
    let bin_width_hz = sample_rate_hz / n as f64;

    buffer
        .iter()
        .take(one_sided_bins.min(SPECTRUM_MAX_POINTS))
        .enumerate()
        .map(|(k, bin)| SpectrumPoint {
            frequency_hz: k as f64 * bin_width_hz,
            magnitude_db: 20.0 * (bin.norm() + SPECTRUM_EPSILON).log10(),
        })
        .collect()
}
