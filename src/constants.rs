//! # Constants and type definitions for Planetarium
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `planetarium` library.
//!
//! ## Overview
//!
//! - Time conversions (milliseconds ↔ Julian centuries)
//! - Unit conversions (degrees ↔ radians)
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the orbital element tables,
//! the coordinate transforms, and the per-body update scheduling.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00)
pub const JD_J2000: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Milliseconds in one hour
pub const MILLISECONDS_PER_HOUR: i64 = 3_600_000;

/// Milliseconds in one Julian day
pub const MILLISECONDS_PER_DAY: i64 = 86_400_000;

/// Milliseconds in one week
pub const MILLISECONDS_PER_WEEK: i64 = 7 * MILLISECONDS_PER_DAY;

/// Mean obliquity of the ecliptic at J2000.0, in degrees.
/// The small secular drift is applied in [`crate::coords`].
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_281;

/// Convergence tolerance for the Kepler equation solver, in radians
pub const KEPLER_TOL: f64 = 1e-6;

/// Iteration cap for the Kepler equation solver
pub const KEPLER_MAX_ITER: usize = 100;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Time in Julian centuries since J2000.0
pub type JulianCenturies = f64;
/// An instant expressed as milliseconds since the Unix epoch
pub type EpochMillis = i64;
/// A packed 0xAARRGGBB color, as consumed by the rendering collaborator
pub type ArgbColor = u32;
