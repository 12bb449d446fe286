//! # Coordinate transforms
//!
//! Converts orbital elements to heliocentric Cartesian positions, combines
//! them into geocentric right ascension / declination, and maps RA/Dec onto
//! the unit render-space vector consumed by the rendering collaborator.
//!
//! Conventions:
//! * heliocentric vectors are ecliptic Cartesian, in AU;
//! * the "heliocentric position of the Sun" is the negative of Earth's
//!   position (see [`crate::ephemeris`]) and doubles as the geocentric sun
//!   direction;
//! * RA/Dec → render space: `x = cos RA · cos Dec`, `y = sin RA · cos Dec`,
//!   `z = sin Dec`, so 0°/0° maps to +X and RA grows counterclockwise seen
//!   from +Z.
//!
//! Everything here is a pure function of (body, instant); no caching, no I/O.

use nalgebra::Vector3;

use crate::body::SolarSystemBody;
use crate::constants::{
    Degree, EpochMillis, JulianCenturies, Radian, DPI, OBLIQUITY_J2000_DEG, RADEG,
};
use crate::ephemeris::OrbitalElementsProvider;
use crate::orbital_elements::{principal_angle, OrbitalElements};
use crate::planetarium_errors::PlanetariumError;
use crate::time::julian_centuries_since_j2000;

/// Equatorial coordinates of a body as seen from Earth's center.
///
/// Both angles in radians, `ra` in [0, 2π), `dec` in [−π/2, π/2].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaDec {
    pub ra: Radian,
    pub dec: Radian,
}

/// Phase of the Moon, quantized into the eight classic appearance buckets.
///
/// Doubles as the time-dependent part of the Moon's image selector: the
/// renderer keeps one textured image per phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Bucket a Moon−Sun elongation (geocentric, in ecliptic longitude) into
    /// a phase. Each bucket spans 45°, centered on the nominal phase angle
    /// (0° new, 90° first quarter, 180° full, 270° last quarter).
    pub fn from_elongation(elongation: Radian) -> Self {
        const BUCKETS: [MoonPhase; 8] = [
            MoonPhase::New,
            MoonPhase::WaxingCrescent,
            MoonPhase::FirstQuarter,
            MoonPhase::WaxingGibbous,
            MoonPhase::Full,
            MoonPhase::WaningGibbous,
            MoonPhase::LastQuarter,
            MoonPhase::WaningCrescent,
        ];
        let eighth = DPI / 8.0;
        let index = ((principal_angle(elongation) + eighth / 2.0) / eighth) as usize % 8;
        BUCKETS[index]
    }
}

/// Heliocentric ecliptic Cartesian position from orbital elements, in AU.
///
/// Solves Kepler's equation for the true anomaly, then rotates the in-plane
/// position by the argument of latitude, inclination and node.
pub fn heliocentric_from_elements(
    elem: &OrbitalElements,
) -> Result<Vector3<f64>, PlanetariumError> {
    let nu = elem.true_anomaly()?;
    let e = elem.eccentricity;
    let r = elem.semi_major_axis * (1.0 - e * e) / (1.0 + e * nu.cos());

    // argument of latitude: angle from the ascending node to the body
    let u = nu + elem.perihelion_longitude - elem.ascending_node_longitude;
    let node = elem.ascending_node_longitude;
    let inc = elem.inclination;

    Ok(Vector3::new(
        r * (node.cos() * u.cos() - node.sin() * u.sin() * inc.cos()),
        r * (node.sin() * u.cos() + node.cos() * u.sin() * inc.cos()),
        r * (u.sin() * inc.sin()),
    ))
}

/// Mean obliquity of the ecliptic at `t` Julian centuries since J2000, radians.
fn obliquity(t: JulianCenturies) -> Radian {
    (OBLIQUITY_J2000_DEG - 0.013_004_2 * t) * RADEG
}

/// Rotate an ecliptic Cartesian vector into the equatorial frame of date.
fn ecliptic_to_equatorial(v: &Vector3<f64>, t: JulianCenturies) -> Vector3<f64> {
    let eps = obliquity(t);
    Vector3::new(
        v.x,
        v.y * eps.cos() - v.z * eps.sin(),
        v.y * eps.sin() + v.z * eps.cos(),
    )
}

fn ra_dec_from_equatorial(v: &Vector3<f64>) -> RaDec {
    RaDec {
        ra: principal_angle(v.y.atan2(v.x)),
        dec: v.z.atan2((v.x * v.x + v.y * v.y).sqrt()),
    }
}

fn sin_deg(x: Degree) -> f64 {
    (x * RADEG).sin()
}

/// Geocentric ecliptic longitude and latitude of the Moon, in radians.
///
/// Low-precision trigonometric series (Astronomical Almanac), good to a few
/// arcminutes — ample for chart plotting and phase selection.
fn lunar_ecliptic(t: JulianCenturies) -> (Radian, Radian) {
    let lambda = 218.32 + 481_267.883 * t
        + 6.29 * sin_deg(134.9 + 477_198.85 * t)
        - 1.27 * sin_deg(259.2 - 413_335.38 * t)
        + 0.66 * sin_deg(235.7 + 890_534.23 * t)
        + 0.21 * sin_deg(269.9 + 954_397.70 * t)
        - 0.19 * sin_deg(357.5 + 35_999.05 * t)
        - 0.11 * sin_deg(186.6 + 966_404.05 * t);
    let beta = 5.13 * sin_deg(93.3 + 483_202.03 * t)
        + 0.28 * sin_deg(228.2 + 960_400.87 * t)
        - 0.28 * sin_deg(318.3 + 6_003.18 * t)
        - 0.17 * sin_deg(217.6 - 407_332.20 * t);
    (principal_angle(lambda * RADEG), beta * RADEG)
}

/// Mean ecliptic longitude of the Sun, radians. Used only for the phase
/// elongation, where the ±2° equation-of-center error is far below the 45°
/// bucket width.
fn sun_mean_longitude(t: JulianCenturies) -> Radian {
    principal_angle((280.460 + 36_000.770 * t) * RADEG)
}

/// Current phase of the Moon at an instant.
pub fn lunar_phase(time_ms: EpochMillis) -> MoonPhase {
    let t = julian_centuries_since_j2000(time_ms);
    let (lambda, _) = lunar_ecliptic(t);
    MoonPhase::from_elongation(lambda - sun_mean_longitude(t))
}

/// Geocentric RA/Dec of a body at an instant.
///
/// Arguments
/// ---------
/// * `provider`: the orbital element tables
/// * `body`: the target body
/// * `time_ms`: the instant, milliseconds since the Unix epoch
///
/// Return
/// ------
/// * the equatorial coordinates of date, or an error if the element
///   evaluation fails
pub fn geocentric_ra_dec(
    provider: &OrbitalElementsProvider,
    body: SolarSystemBody,
    time_ms: EpochMillis,
) -> Result<RaDec, PlanetariumError> {
    let t = julian_centuries_since_j2000(time_ms);
    let ecliptic = match body {
        SolarSystemBody::Moon => {
            let (lambda, beta) = lunar_ecliptic(t);
            Vector3::new(
                beta.cos() * lambda.cos(),
                beta.cos() * lambda.sin(),
                beta.sin(),
            )
        }
        SolarSystemBody::Sun => {
            heliocentric_from_elements(&provider.orbital_elements(SolarSystemBody::Sun, time_ms)?)?
        }
        _ => {
            let sun = heliocentric_from_elements(
                &provider.orbital_elements(SolarSystemBody::Sun, time_ms)?,
            )?;
            let planet =
                heliocentric_from_elements(&provider.orbital_elements(body, time_ms)?)?;
            planet + sun
        }
    };
    Ok(ra_dec_from_equatorial(&ecliptic_to_equatorial(&ecliptic, t)))
}

/// Unit render-space vector for an RA/Dec pair.
pub fn unit_vector_from_ra_dec(ra_dec: &RaDec) -> Vector3<f64> {
    Vector3::new(
        ra_dec.ra.cos() * ra_dec.dec.cos(),
        ra_dec.ra.sin() * ra_dec.dec.cos(),
        ra_dec.dec.sin(),
    )
}

/// Full position transform for one body: unit render vector plus the Sun's
/// heliocentric vector (the lighting direction for textured images).
///
/// Pure function of (body, instant); produces new vectors on every call.
pub fn compute_position(
    provider: &OrbitalElementsProvider,
    body: SolarSystemBody,
    time_ms: EpochMillis,
) -> Result<(Vector3<f64>, Vector3<f64>), PlanetariumError> {
    let sun_coords =
        heliocentric_from_elements(&provider.orbital_elements(SolarSystemBody::Sun, time_ms)?)?;
    let ra_dec = geocentric_ra_dec(provider, body, time_ms)?;
    Ok((unit_vector_from_ra_dec(&ra_dec), sun_coords))
}
