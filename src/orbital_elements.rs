use crate::constants::{AstronomicalUnit, Radian, DPI, KEPLER_MAX_ITER, KEPLER_TOL};
use crate::planetarium_errors::PlanetariumError;

/// Classical orbital elements of a body, evaluated at a specific instant.
///
/// Produced fresh per query by the [`OrbitalElementsProvider`](crate::ephemeris::OrbitalElementsProvider);
/// no persistent identity.
///
/// Units:
/// * `semi_major_axis`: AU (Astronomical Units)
/// * `eccentricity`: unitless
/// * `inclination`: radians
/// * `ascending_node_longitude`: radians
/// * `perihelion_longitude`: radians (longitude of perihelion, ϖ = Ω + ω)
/// * `mean_longitude`: radians (L = ϖ + M)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub perihelion_longitude: Radian,
    pub mean_longitude: Radian,
}

impl OrbitalElements {
    /// Mean anomaly M = L − ϖ, reduced to [0, 2π).
    pub fn mean_anomaly(&self) -> Radian {
        principal_angle(self.mean_longitude - self.perihelion_longitude)
    }

    /// True anomaly ν, obtained by Newton iteration of Kepler's equation
    /// M = E − e·sin E, then converting the eccentric anomaly E.
    ///
    /// Return
    /// ------
    /// * the true anomaly in [0, 2π), or
    ///   [`PlanetariumError::KeplerNotConverged`] if the iteration does not
    ///   reach [`KEPLER_TOL`] within [`KEPLER_MAX_ITER`] steps.
    pub fn true_anomaly(&self) -> Result<Radian, PlanetariumError> {
        let m = self.mean_anomaly();
        let e = self.eccentricity;

        // Starting guess good for the low eccentricities of the solar system.
        let mut ea = m + e * m.sin() * (1.0 + e * m.cos());

        for _ in 0..KEPLER_MAX_ITER {
            let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
            ea -= delta;
            if delta.abs() < KEPLER_TOL {
                let nu = 2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (ea / 2.0).tan()).atan();
                return Ok(principal_angle(nu));
            }
        }

        Err(PlanetariumError::KeplerNotConverged {
            eccentricity: e,
            mean_anomaly: m,
        })
    }
}

/// Principal value of an angle in radians, reduced to [0, 2π).
pub(crate) fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

#[cfg(test)]
mod orbital_elements_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn elements(eccentricity: f64, mean_longitude: f64) -> OrbitalElements {
        OrbitalElements {
            semi_major_axis: 1.0,
            eccentricity,
            inclination: 0.0,
            ascending_node_longitude: 0.0,
            perihelion_longitude: 0.0,
            mean_longitude,
        }
    }

    #[test]
    fn test_principal_angle() {
        assert_eq!(principal_angle(0.0), 0.0);
        assert_relative_eq!(principal_angle(DPI + 0.25), 0.25, epsilon = 1e-12);
        assert_relative_eq!(principal_angle(-0.25), DPI - 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_anomaly_wraps() {
        let elem = OrbitalElements {
            perihelion_longitude: 1.5,
            mean_longitude: 0.5,
            ..elements(0.1, 0.0)
        };
        assert_relative_eq!(elem.mean_anomaly(), DPI - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_true_anomaly_circular_orbit() {
        // For e = 0 the true anomaly equals the mean anomaly.
        for m in [0.1, 1.0, 2.5, 4.0, 6.0] {
            let nu = elements(0.0, m).true_anomaly().unwrap();
            assert_relative_eq!(nu, m, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_true_anomaly_symmetry_points() {
        // Perihelion (M = 0) and aphelion (M = π) are fixed points of the
        // mean → true anomaly mapping for any eccentricity.
        for e in [0.05, 0.2, 0.6] {
            assert_relative_eq!(elements(e, 0.0).true_anomaly().unwrap(), 0.0, epsilon = 1e-5);
            assert_relative_eq!(elements(e, PI).true_anomaly().unwrap(), PI, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_true_anomaly_leads_mean_anomaly_before_aphelion() {
        // On the perihelion → aphelion half of the orbit the body is past the
        // point a uniformly-moving body would be at.
        let elem = elements(0.2, 1.0);
        let nu = elem.true_anomaly().unwrap();
        assert!(nu > elem.mean_anomaly());
    }

    #[test]
    fn test_true_anomaly_deterministic() {
        let elem = elements(0.0934, 2.2);
        assert_eq!(elem.true_anomaly().unwrap(), elem.true_anomaly().unwrap());
    }
}
