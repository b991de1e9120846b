use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

use crate::antenna::AntennaResult;
use crate::constants::{SWEEP_POINTS, SWEEP_START_M, SWEEP_STOP_M};
use crate::link::{compute_link, LinkBudget, LinkParameters};
use crate::spectrum::{SpectrumPoint, SpectrumSynthesizer};
use crate::system::System;

/// Full result of a single simulation: link budget plus spectrum.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinkResult {
    pub power_received_dbm: f64,
    pub snr_db: f64,
    pub path_loss_db: f64,
    pub bandwidth_hz: f64,
    pub system_gain_db: f64,
    pub noise_floor_dbm: f64,
    pub antenna_result: AntennaResult,
    pub spectrum: Vec<SpectrumPoint>,
    pub system: System,
}

impl LinkResult {
    fn from_budget(budget: LinkBudget, spectrum: Vec<SpectrumPoint>, system: System) -> LinkResult {
        LinkResult {
            power_received_dbm: budget.power_received_dbm,
            snr_db: budget.snr_db,
            path_loss_db: budget.path_loss_db,
            bandwidth_hz: budget.bandwidth_hz,
            system_gain_db: budget.system_gain_db,
            noise_floor_dbm: budget.noise_floor_dbm,
            antenna_result: budget.antenna_result,
            spectrum,
            system,
        }
    }

    pub fn summary(&self) -> SystemSummary {
        SystemSummary {
            power_received_dbm: self.power_received_dbm,
            snr_db: self.snr_db,
            path_loss_db: self.path_loss_db,
            bandwidth_hz: self.bandwidth_hz,
            system_gain_db: self.system_gain_db,
        }
    }
}

/// Budget at one distance of a range sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RangeSample {
    pub distance_m: f64,
    pub power_received_dbm: f64,
    pub snr_db: f64,
    pub path_loss_db: f64,
}

/// Per-system figures reported in a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SystemSummary {
    pub power_received_dbm: f64,
    pub snr_db: f64,
    pub path_loss_db: f64,
    pub bandwidth_hz: f64,
    pub system_gain_db: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ComparisonParameters {
    pub power_dbm: f64,
    pub frequency_hz: f64,
    pub distance_m: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub systems: BTreeMap<System, SystemSummary>,
    pub range_data: BTreeMap<System, Vec<RangeSample>>,
    pub parameters: ComparisonParameters,
}

/// Holder for the most recent value of something; starts `Empty`.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultSlot<T> {
    Empty,
    Filled(T),
}

impl<T> Default for ResultSlot<T> {
    fn default() -> Self {
        ResultSlot::Empty
    }
}

impl<T> ResultSlot<T> {
    /// Replace the held value, last write wins.
    pub fn store(&mut self, value: T) {
        *self = ResultSlot::Filled(value);
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            ResultSlot::Empty => None,
            ResultSlot::Filled(value) => Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ResultSlot::Empty)
    }
}

/// The latest single run and the latest comparison.
#[derive(Clone, Debug, Default)]
pub struct ResultStore {
    pub last_result: ResultSlot<LinkResult>,
    pub last_comparison: ResultSlot<ComparisonResult>,
}

/// Serializable view of the last single run; every field is `None`
/// (and the spectrum empty) before the first simulation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LastLinkResult {
    pub power_received_dbm: Option<f64>,
    pub snr_db: Option<f64>,
    pub path_loss_db: Option<f64>,
    pub bandwidth_hz: Option<f64>,
    pub antenna_result: Option<AntennaResult>,
    pub spectrum: Vec<SpectrumPoint>,
    pub system: Option<System>,
}

impl From<&ResultSlot<LinkResult>> for LastLinkResult {
    fn from(slot: &ResultSlot<LinkResult>) -> Self {
        match slot.get() {
            None => LastLinkResult::default(),
            Some(result) => LastLinkResult {
                power_received_dbm: Some(result.power_received_dbm),
                snr_db: Some(result.snr_db),
                path_loss_db: Some(result.path_loss_db),
                bandwidth_hz: Some(result.bandwidth_hz),
                antenna_result: Some(result.antenna_result.clone()),
                spectrum: result.spectrum.clone(),
                system: Some(result.system),
            },
        }
    }
}

/// Serializable view of the last comparison; empty maps and no parameters
/// before the first comparison.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LastComparison {
    pub systems: BTreeMap<System, SystemSummary>,
    pub range_data: BTreeMap<System, Vec<RangeSample>>,
    pub parameters: Option<ComparisonParameters>,
}

impl From<&ResultSlot<ComparisonResult>> for LastComparison {
    fn from(slot: &ResultSlot<ComparisonResult>) -> Self {
        match slot.get() {
            None => LastComparison::default(),
            Some(comparison) => LastComparison {
                systems: comparison.systems.clone(),
                range_data: comparison.range_data.clone(),
                parameters: Some(comparison.parameters),
            },
        }
    }
}

/// Distances (m) of the range sweep, ascending, both ends included.
pub fn sweep_distances_m() -> Vec<f64> {
    let step = (SWEEP_STOP_M - SWEEP_START_M) / (SWEEP_POINTS - 1) as f64;
    (0..SWEEP_POINTS)
        .map(|i| {
            if i == SWEEP_POINTS - 1 {
                SWEEP_STOP_M
            } else {
                SWEEP_START_M + step * i as f64
            }
        })
        .collect()
}

/// Runs link budgets, sweeps and comparisons, and keeps the latest results.
///
/// Every operation recomputes from scratch. Mutating operations overwrite the
/// held results; wrap the analyzer in a lock to share it between threads.
#[derive(Debug)]
pub struct LinkAnalyzer<R: Rng = StdRng> {
    synthesizer: SpectrumSynthesizer<R>,
    store: ResultStore,
}

impl LinkAnalyzer<StdRng> {
    pub fn new() -> Self {
        Self::with_synthesizer(SpectrumSynthesizer::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_synthesizer(SpectrumSynthesizer::from_seed(seed))
    }
}

impl Default for LinkAnalyzer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> LinkAnalyzer<R> {
    pub fn with_synthesizer(synthesizer: SpectrumSynthesizer<R>) -> Self {
        Self {
            synthesizer,
            store: ResultStore::default(),
        }
    }

    /// Link budget plus spectrum for `params`; stored as the last result.
    pub fn simulate(&mut self, params: &LinkParameters) -> LinkResult {
        tracing::debug!(%params, "simulating link");
        let budget = compute_link(params);
        let spectrum = self.synthesizer.synthesize(budget.snr_db);
        let result = LinkResult::from_budget(budget, spectrum, params.system);
        self.store.last_result.store(result.clone());
        result
    }

    /// Budgets at [`sweep_distances_m`] with default antennas on both ends.
    pub fn range_sweep(&self, power_dbm: f64, frequency_hz: f64, system: System) -> Vec<RangeSample> {
        sweep_distances_m()
            .into_iter()
            .map(|distance_m| {
                let budget = compute_link(&LinkParameters::new(power_dbm, frequency_hz, distance_m, system));
                RangeSample {
                    distance_m,
                    power_received_dbm: budget.power_received_dbm,
                    snr_db: budget.snr_db,
                    path_loss_db: budget.path_loss_db,
                }
            })
            .collect()
    }

    /// Simulates and sweeps every system at the same power, frequency and
    /// distance; stored as the last comparison.
    ///
    /// Each per-system run goes through [`simulate`](Self::simulate), so the
    /// last result afterwards is the final system's run.
    pub fn compare_systems(&mut self, power_dbm: f64, frequency_hz: f64, distance_m: f64) -> ComparisonResult {
        let mut systems = BTreeMap::new();
        let mut range_data = BTreeMap::new();

        for system in System::ALL {
            let result = self.simulate(&LinkParameters::new(power_dbm, frequency_hz, distance_m, system));
            systems.insert(system, result.summary());
            range_data.insert(system, self.range_sweep(power_dbm, frequency_hz, system));
        }

        let comparison = ComparisonResult {
            systems,
            range_data,
            parameters: ComparisonParameters {
                power_dbm,
                frequency_hz,
                distance_m,
            },
        };
        tracing::debug!(power_dbm, frequency_hz, distance_m, "compared all systems");
        self.store.last_comparison.store(comparison.clone());
        comparison
    }

    pub fn last_result(&self) -> &ResultSlot<LinkResult> {
        &self.store.last_result
    }

    pub fn last_comparison(&self) -> &ResultSlot<ComparisonResult> {
        &self.store.last_comparison
    }

    pub fn last_result_snapshot(&self) -> LastLinkResult {
        LastLinkResult::from(&self.store.last_result)
    }

    pub fn last_comparison_snapshot(&self) -> LastComparison {
        LastComparison::from(&self.store.last_comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_grid() {
        let distances = sweep_distances_m();
        assert_eq!(distances.len(), 50);
        assert_eq!(distances[0], 100.0);
        assert_eq!(distances[49], 10_000.0);
        assert!((distances[1] - (100.0 + 9900.0 / 49.0)).abs() < 1e-9);
    }

    #[test]
    fn range_sweep_path_loss_strictly_increasing() {
        let analyzer = LinkAnalyzer::seeded(1);
        let data = analyzer.range_sweep(20.0, 2.4e9, System::FiveG);
        assert_eq!(data.len(), 50);
        for pair in data.windows(2) {
            assert!(pair[1].distance_m > pair[0].distance_m);
            assert!(pair[1].path_loss_db > pair[0].path_loss_db);
            assert!(pair[1].power_received_dbm < pair[0].power_received_dbm);
        }
    }

    #[test]
    fn empty_before_first_run() {
        let analyzer = LinkAnalyzer::seeded(1);
        assert!(analyzer.last_result().is_empty());
        assert!(analyzer.last_comparison().is_empty());

        let snapshot = analyzer.last_result_snapshot();
        assert_eq!(snapshot, LastLinkResult::default());
        assert!(snapshot.power_received_dbm.is_none());
        assert!(snapshot.spectrum.is_empty());
        assert!(analyzer.last_comparison_snapshot().parameters.is_none());
    }

    #[test]
    fn simulate_overwrites_last_result() {
        let mut analyzer = LinkAnalyzer::seeded(5);
        let first = analyzer.simulate(&LinkParameters::new(20.0, 2.4e9, 100.0, System::FiveG));
        assert_eq!(analyzer.last_result().get(), Some(&first));

        let second = analyzer.simulate(&LinkParameters::new(40.0, 2.4e9, 100.0, System::SixG));
        assert_eq!(analyzer.last_result().get(), Some(&second));
        assert_eq!(analyzer.last_result_snapshot().system, Some(System::SixG));
    }

    #[test]
    fn compare_systems_structure() {
        let mut analyzer = LinkAnalyzer::seeded(9);
        let comparison = analyzer.compare_systems(20.0, 3.5e9, 500.0);

        assert_eq!(comparison.systems.len(), 3);
        assert_eq!(comparison.range_data.len(), 3);
        for system in System::ALL {
            assert!(comparison.systems.contains_key(&system));
            assert_eq!(comparison.range_data[&system].len(), 50);
        }
        assert_eq!(comparison.systems[&System::FiveGAdvanced].system_gain_db, 3.0);
        assert_eq!(comparison.parameters.distance_m, 500.0);

        assert_eq!(analyzer.last_comparison().get(), Some(&comparison));
        // the per-system runs also pass through the last-result slot
        assert_eq!(analyzer.last_result_snapshot().system, Some(System::SixG));
    }
}
