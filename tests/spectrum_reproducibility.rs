//! Integration tests: spectrum structure and seeded reproducibility.

use linklab::{LinkAnalyzer, LinkParameters, SpectrumSynthesizer, System};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn spectrum_bounds_and_order() {
    let mut analyzer = LinkAnalyzer::seeded(99);
    for system in System::ALL {
        let result = analyzer.simulate(&LinkParameters::new(30.0, 3.5e9, 1000.0, system));
        let spectrum = &result.spectrum;

        assert!(spectrum.len() <= 2000);
        assert!(!spectrum.is_empty());
        assert_eq!(spectrum[0].frequency_hz, 0.0);
        assert!(spectrum.iter().all(|p| p.frequency_hz >= 0.0));
        assert!(spectrum.windows(2).all(|w| w[0].frequency_hz < w[1].frequency_hz));
        assert!(spectrum.iter().all(|p| p.magnitude_db.is_finite()));
    }
}

#[test]
fn seeded_analyzers_agree_exactly() {
    let params = LinkParameters::new(15.0, 2.4e9, 2000.0, System::SixG);
    let a = LinkAnalyzer::seeded(1234).simulate(&params);
    let b = LinkAnalyzer::seeded(1234).simulate(&params);
    assert_eq!(a.spectrum, b.spectrum);
}

#[test]
fn injected_rng_matches_seeded_constructor() {
    let from_seed = SpectrumSynthesizer::from_seed(8).synthesize(12.0);
    let injected = SpectrumSynthesizer::new(StdRng::seed_from_u64(8)).synthesize(12.0);
    assert_eq!(from_seed, injected);
}

#[test]
fn low_snr_link_buries_the_floor_higher() {
    let mut analyzer = LinkAnalyzer::seeded(5);
    let strong = analyzer.simulate(&LinkParameters::new(40.0, 1.0e9, 100.0, System::FiveG));
    let weak = analyzer.simulate(&LinkParameters::new(0.0, 6.0e9, 10_000.0, System::FiveG));
    assert!(strong.snr_db > weak.snr_db);

    let median = |values: &[f64]| {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        sorted[sorted.len() / 2]
    };
    let floor = |r: &linklab::LinkResult| {
        let mags: Vec<f64> = r.spectrum.iter().map(|p| p.magnitude_db).collect();
        median(&mags)
    };
    assert!(floor(&weak) > floor(&strong));
}
