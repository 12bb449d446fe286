use thiserror::Error;

use crate::body::SolarSystemBody;

/// Failure modes of the position pipeline.
///
/// Both variants are fatal for the computation that raised them; there are no
/// transient failures in this crate (all inputs are deterministic in-memory
/// values, so there is nothing to retry). A failed position update leaves the
/// previous position and its timestamp untouched, so the next tick retries
/// from the old baseline.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PlanetariumError {
    /// The orbital-element table has no row for this body. With the closed
    /// [`SolarSystemBody`](crate::body::SolarSystemBody) enumeration this
    /// indicates a caller bug (e.g. asking for heliocentric elements of the
    /// Moon, which only has a geocentric model), not bad data.
    #[error("no orbital element data for body: {0}")]
    UnknownBody(SolarSystemBody),

    #[error("Kepler's equation failed to converge (e = {eccentricity}, M = {mean_anomaly} rad)")]
    KeplerNotConverged { eccentricity: f64, mean_anomaly: f64 },
}
