//! Integration tests: range sweeps, three-system comparison and the
//! retained last results.

use linklab::{LastLinkResult, LinkAnalyzer, LinkParameters, System};

#[test]
fn range_sweep_covers_100_m_to_10_km() {
    let analyzer = LinkAnalyzer::seeded(0);
    let data = analyzer.range_sweep(20.0, 2.4e9, System::FiveG);

    assert_eq!(data.len(), 50);
    assert_eq!(data.first().unwrap().distance_m, 100.0);
    assert_eq!(data.last().unwrap().distance_m, 10_000.0);

    let path_losses: Vec<f64> = data.iter().map(|s| s.path_loss_db).collect();
    assert!(path_losses.windows(2).all(|w| w[0] < w[1]));

    // 100x the distance is 40 dB more loss
    let span = path_losses[49] - path_losses[0];
    assert!((span - 40.0).abs() < 1e-9, "span {}", span);
}

#[test]
fn range_sweep_does_not_touch_last_result() {
    let analyzer = LinkAnalyzer::seeded(0);
    let _ = analyzer.range_sweep(20.0, 2.4e9, System::SixG);
    assert!(analyzer.last_result().is_empty());
}

#[test]
fn compare_all_systems_structure() {
    let mut analyzer = LinkAnalyzer::seeded(17);
    let comparison = analyzer.compare_systems(20.0, 3.5e9, 500.0);

    let keys: Vec<System> = comparison.systems.keys().copied().collect();
    assert_eq!(keys, vec![System::FiveG, System::FiveGAdvanced, System::SixG]);

    for system in System::ALL {
        let summary = comparison.systems[&system];
        let profile = system.profile();
        assert_eq!(summary.bandwidth_hz, profile.bandwidth_hz);
        assert_eq!(summary.system_gain_db, profile.system_gain_db);
        assert!(summary.snr_db.is_finite());

        let range = &comparison.range_data[&system];
        assert!(!range.is_empty());
        assert_eq!(range.len(), 50);
    }

    // same geometry, same path loss everywhere
    let fspl = comparison.systems[&System::FiveG].path_loss_db;
    assert!(comparison.systems.values().all(|s| s.path_loss_db == fspl));

    assert_eq!(comparison.parameters.power_dbm, 20.0);
    assert_eq!(comparison.parameters.frequency_hz, 3.5e9);
    assert_eq!(comparison.parameters.distance_m, 500.0);
}

#[test]
fn last_comparison_is_replaced() {
    let mut analyzer = LinkAnalyzer::seeded(17);
    assert!(analyzer.last_comparison().is_empty());

    let _first = analyzer.compare_systems(20.0, 3.5e9, 500.0);
    let second = analyzer.compare_systems(10.0, 2.4e9, 50.0);

    assert_eq!(analyzer.last_comparison().get(), Some(&second));
    let snapshot = analyzer.last_comparison_snapshot();
    assert_eq!(snapshot.parameters, Some(second.parameters));
    assert_eq!(snapshot.systems, second.systems);
}

#[test]
fn last_result_sentinel_then_filled() {
    let mut analyzer = LinkAnalyzer::seeded(3);
    assert_eq!(analyzer.last_result_snapshot(), LastLinkResult::default());

    let result = analyzer.simulate(&LinkParameters::new(25.0, 1.8e9, 300.0, System::FiveG));
    let snapshot = analyzer.last_result_snapshot();
    assert_eq!(snapshot.power_received_dbm, Some(result.power_received_dbm));
    assert_eq!(snapshot.snr_db, Some(result.snr_db));
    assert_eq!(snapshot.path_loss_db, Some(result.path_loss_db));
    assert_eq!(snapshot.system, Some(System::FiveG));
    assert_eq!(snapshot.spectrum.len(), result.spectrum.len());
}
