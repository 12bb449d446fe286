//! # Orbital element tables
//!
//! Polynomial mean orbital elements of the Sun and the planets, linear in
//! Julian centuries since J2000.0 (Standish's approximate ephemerides, the
//! classic table for chart-plotting accuracy). The provider is an explicit
//! immutable table constructed once, not ambient global state.
//!
//! Two bodies are special:
//!
//! * **Sun** — evaluated from Earth's row with the perihelion and mean
//!   longitudes advanced by π. The resulting "heliocentric position of the
//!   Sun" is the negative of Earth's heliocentric position, which is exactly
//!   the geocentric sun direction used for lighting and for the geocentric
//!   conversion in [`crate::coords`].
//! * **Moon** — has no heliocentric row at all; its geocentric position comes
//!   from a dedicated lunar series in [`crate::coords`]. Requesting Moon
//!   elements here is a contract violation and yields
//!   [`PlanetariumError::UnknownBody`].

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::body::SolarSystemBody;
use crate::constants::{EpochMillis, JulianCenturies, RADEG};
use crate::orbital_elements::{principal_angle, OrbitalElements};
use crate::planetarium_errors::PlanetariumError;
use crate::time::julian_centuries_since_j2000;

/// Arcseconds → degrees
const ARCSEC_TO_DEG: f64 = 1.0 / 3600.0;

/// One row of the element table: J2000 value and linear rate for each element.
///
/// Angles are stored in degrees with rates in arcseconds per Julian century,
/// matching the published table; [`ElementRecord::evaluate`] converts to the
/// radian-based [`OrbitalElements`].
#[derive(Debug, Clone, Copy)]
struct ElementRecord {
    /// semi-major axis: AU, AU per century
    a: (f64, f64),
    /// eccentricity: unitless, per century
    e: (f64, f64),
    /// inclination: degrees, arcsec per century
    i: (f64, f64),
    /// longitude of the ascending node: degrees, arcsec per century
    node: (f64, f64),
    /// longitude of perihelion: degrees, arcsec per century
    peri: (f64, f64),
    /// mean longitude: degrees, arcsec per century
    mean_lon: (f64, f64),
}

impl ElementRecord {
    fn evaluate(&self, t: JulianCenturies) -> OrbitalElements {
        let angle = |(v, rate): (f64, f64)| principal_angle((v + rate * ARCSEC_TO_DEG * t) * RADEG);
        OrbitalElements {
            semi_major_axis: self.a.0 + self.a.1 * t,
            eccentricity: self.e.0 + self.e.1 * t,
            inclination: angle(self.i),
            ascending_node_longitude: angle(self.node),
            perihelion_longitude: angle(self.peri),
            mean_longitude: angle(self.mean_lon),
        }
    }
}

const EARTH_RECORD: ElementRecord = ElementRecord {
    a: (1.000_000_11, -0.000_000_05),
    e: (0.016_710_22, -0.000_038_04),
    i: (0.000_05, -46.94),
    node: (-11.260_64, -18_228.25),
    peri: (102.947_19, 1_198.28),
    mean_lon: (100.464_35, 129_597_740.63),
};

/// Mean orbital elements of the solar system, queryable by body and instant.
///
/// Pure lookup + evaluation; owns no mutable state, performs no I/O.
#[derive(Debug, Clone)]
pub struct OrbitalElementsProvider {
    records: HashMap<SolarSystemBody, ElementRecord>,
}

impl OrbitalElementsProvider {
    pub fn new() -> Self {
        let mut records = HashMap::new();
        records.insert(
            SolarSystemBody::Mercury,
            ElementRecord {
                a: (0.387_098_93, 0.000_000_66),
                e: (0.205_630_69, 0.000_025_27),
                i: (7.004_87, -23.51),
                node: (48.331_67, -446.30),
                peri: (77.456_45, 573.57),
                mean_lon: (252.250_84, 538_101_628.29),
            },
        );
        records.insert(
            SolarSystemBody::Venus,
            ElementRecord {
                a: (0.723_331_99, 0.000_000_92),
                e: (0.006_773_23, -0.000_049_38),
                i: (3.394_71, -2.86),
                node: (76.680_69, -996.89),
                peri: (131.532_98, -108.80),
                mean_lon: (181.979_73, 210_664_136.06),
            },
        );
        records.insert(
            SolarSystemBody::Mars,
            ElementRecord {
                a: (1.523_662_31, -0.000_072_21),
                e: (0.093_412_33, 0.000_119_02),
                i: (1.850_61, -25.47),
                node: (49.578_54, -1_020.19),
                peri: (336.040_84, 1_560.78),
                mean_lon: (355.453_32, 68_905_103.78),
            },
        );
        records.insert(
            SolarSystemBody::Jupiter,
            ElementRecord {
                a: (5.203_363_01, 0.000_607_37),
                e: (0.048_392_66, -0.000_128_80),
                i: (1.305_30, -4.15),
                node: (100.556_15, 1_217.17),
                peri: (14.753_85, 839.93),
                mean_lon: (34.404_38, 10_925_078.35),
            },
        );
        records.insert(
            SolarSystemBody::Saturn,
            ElementRecord {
                a: (9.537_070_32, -0.003_015_30),
                e: (0.054_150_60, -0.000_367_62),
                i: (2.484_46, 6.11),
                node: (113.715_04, -1_591.05),
                peri: (92.431_94, -1_948.89),
                mean_lon: (49.944_32, 4_401_052.95),
            },
        );
        records.insert(
            SolarSystemBody::Uranus,
            ElementRecord {
                a: (19.191_263_93, 0.001_520_25),
                e: (0.047_167_71, -0.000_191_50),
                i: (0.769_86, -2.09),
                node: (74.229_88, -1_681.40),
                peri: (170.964_24, 1_312.56),
                mean_lon: (313.232_18, 1_542_547.79),
            },
        );
        records.insert(
            SolarSystemBody::Neptune,
            ElementRecord {
                a: (30.068_963_48, -0.001_251_96),
                e: (0.008_585_87, 0.000_025_10),
                i: (1.769_17, -3.64),
                node: (131.721_69, -151.25),
                peri: (44.971_35, -844.43),
                mean_lon: (304.880_03, 786_449.21),
            },
        );
        Self { records }
    }

    /// Mean orbital elements of `body` at `time_ms`.
    ///
    /// Arguments
    /// ---------
    /// * `body`: the body whose elements are requested (Sun or a planet)
    /// * `time_ms`: the instant, milliseconds since the Unix epoch
    ///
    /// Return
    /// ------
    /// * the elements evaluated at the instant, or
    ///   [`PlanetariumError::UnknownBody`] for a body without a heliocentric
    ///   row (the Moon)
    pub fn orbital_elements(
        &self,
        body: SolarSystemBody,
        time_ms: EpochMillis,
    ) -> Result<OrbitalElements, PlanetariumError> {
        let t = julian_centuries_since_j2000(time_ms);
        match body {
            SolarSystemBody::Sun => {
                let mut elem = EARTH_RECORD.evaluate(t);
                elem.perihelion_longitude = principal_angle(elem.perihelion_longitude + PI);
                elem.mean_longitude = principal_angle(elem.mean_longitude + PI);
                Ok(elem)
            }
            _ => self
                .records
                .get(&body)
                .map(|record| record.evaluate(t))
                .ok_or(PlanetariumError::UnknownBody(body)),
        }
    }
}

impl Default for OrbitalElementsProvider {
    fn default() -> Self {
        Self::new()
    }
}
