use std::f64::consts::PI;

use crate::constants::SPEED_OF_LIGHT;

/// Free-space path loss (dB) for a distance in meters and frequency in Hz.
///
/// `20·log10(4π·d / λ)` with `λ = c / f`. Both inputs must be strictly
/// positive; callers validate before getting here.
pub fn path_loss_db(distance_m: f64, frequency_hz: f64) -> f64 {
    let wavelength_m = SPEED_OF_LIGHT / frequency_hz;
    20.0 * (4.0 * PI * distance_m / wavelength_m).log10()
}

/// Classical FSPL with distance in km and frequency in MHz.
///
/// The constant is `20·log10(4π·10⁹ / c)` ≈ 32.4478 dB; the often quoted
/// 32.44 is this value truncated.
pub fn path_loss_db_km_mhz(distance_km: f64, frequency_mhz: f64) -> f64 {
    let constant_db = 20.0 * (4.0 * PI * 1.0e9 / SPEED_OF_LIGHT).log10();
    20.0 * distance_km.log10() + 20.0 * frequency_mhz.log10() + constant_db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_km_one_ghz() {
        let fspl = path_loss_db(1000.0, 1.0e9);
        assert!((fspl - 92.447_783).abs() < 1e-6, "got {}", fspl);
        // textbook rounding of the constant
        assert!((fspl - 92.44).abs() < 0.01, "got {}", fspl);
    }

    #[test]
    fn matches_km_mhz_formula() {
        let distances_m = [1.0, 37.5, 100.0, 1000.0, 12_345.0, 1.0e6];
        let frequencies_hz = [1.0e6, 915.0e6, 2.4e9, 3.5e9, 28.0e9];
        for &d in distances_m.iter() {
            for &f in frequencies_hz.iter() {
                let si = path_loss_db(d, f);
                let classical = path_loss_db_km_mhz(d / 1000.0, f / 1.0e6);
                assert!(
                    (si - classical).abs() < 1e-6,
                    "d = {} m, f = {} Hz: {} vs {}",
                    d,
                    f,
                    si,
                    classical
                );
            }
        }
    }

    #[test]
    fn doubling_distance_adds_six_db() {
        let near = path_loss_db(500.0, 3.5e9);
        let far = path_loss_db(1000.0, 3.5e9);
        assert!((far - near - 20.0 * 2.0_f64.log10()).abs() < 1e-9);
    }
}
