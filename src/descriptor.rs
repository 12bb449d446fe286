//! # Per-body display metadata
//!
//! Static descriptors for every displayable body: display-name key, minimum
//! re-evaluation interval, image selector, angular image size and colors.
//! The registry is an explicit immutable table constructed once at startup;
//! nothing here is ambient global state.

use std::collections::HashMap;

use crate::body::SolarSystemBody;
use crate::constants::{
    ArgbColor, EpochMillis, MILLISECONDS_PER_DAY, MILLISECONDS_PER_HOUR, MILLISECONDS_PER_WEEK,
};
use crate::coords::{lunar_phase, MoonPhase};
use crate::planetarium_errors::PlanetariumError;

/// Marker color for bodies drawn as points (faint violet).
pub const PLANET_POINT_COLOR: ArgbColor = 0x14_81_7E_F6;

/// Point marker size, in renderer pixels.
pub const PLANET_POINT_SIZE: u32 = 3;

/// Label color shared by all bodies (pale salmon).
pub const PLANET_LABEL_COLOR: ArgbColor = 0x00_F6_7E_81;

/// Angular size of planet images, in render-space units.
const PLANET_IMAGE_SCALE: f64 = 0.02;

/// Angular size of the Sun and Moon images, which subtend ~0.5° of real sky.
const SUN_MOON_IMAGE_SCALE: f64 = 0.035;

/// Selector for the textured image of a body.
///
/// Stable per body except for the Moon, whose selector tracks the current
/// phase; a change of selector value is what triggers an `ImagesChanged`
/// signal toward the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKey {
    Sun,
    Moon(MoonPhase),
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Constant display metadata of one body. Immutable for the process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct BodyDescriptor {
    body: SolarSystemBody,
    /// Minimum elapsed time between two position re-evaluations. Tuned per
    /// body: apparent angular velocities span three orders of magnitude
    /// between the Moon (~13°/day) and Neptune (~0.006°/day).
    pub update_interval_ms: i64,
    /// Angular size of the textured image, render-space units.
    pub image_scale: f64,
    pub point_color: ArgbColor,
    pub point_size: u32,
    pub label_color: ArgbColor,
}

impl BodyDescriptor {
    /// Key for the localized display name in a
    /// [`ResourceStore`](crate::resources::ResourceStore).
    pub fn name_key(&self) -> &'static str {
        self.body.name_key()
    }

    /// Image selector at an instant. Time-dependent only for the Moon.
    pub fn image_key(&self, time_ms: EpochMillis) -> ImageKey {
        match self.body {
            SolarSystemBody::Sun => ImageKey::Sun,
            SolarSystemBody::Moon => ImageKey::Moon(lunar_phase(time_ms)),
            SolarSystemBody::Mercury => ImageKey::Mercury,
            SolarSystemBody::Venus => ImageKey::Venus,
            SolarSystemBody::Mars => ImageKey::Mars,
            SolarSystemBody::Jupiter => ImageKey::Jupiter,
            SolarSystemBody::Saturn => ImageKey::Saturn,
            SolarSystemBody::Uranus => ImageKey::Uranus,
            SolarSystemBody::Neptune => ImageKey::Neptune,
        }
    }
}

/// Immutable table of [`BodyDescriptor`]s, one per displayable body.
#[derive(Debug, Clone)]
pub struct BodyDescriptorRegistry {
    descriptors: HashMap<SolarSystemBody, BodyDescriptor>,
}

impl BodyDescriptorRegistry {
    pub fn new() -> Self {
        let mut descriptors = HashMap::new();
        for body in SolarSystemBody::ALL {
            let update_interval_ms = match body {
                SolarSystemBody::Moon => MILLISECONDS_PER_HOUR,
                SolarSystemBody::Sun => 6 * MILLISECONDS_PER_HOUR,
                SolarSystemBody::Mercury
                | SolarSystemBody::Venus
                | SolarSystemBody::Mars => MILLISECONDS_PER_DAY,
                SolarSystemBody::Jupiter
                | SolarSystemBody::Saturn
                | SolarSystemBody::Uranus
                | SolarSystemBody::Neptune => MILLISECONDS_PER_WEEK,
            };
            let image_scale = match body {
                SolarSystemBody::Sun | SolarSystemBody::Moon => SUN_MOON_IMAGE_SCALE,
                _ => PLANET_IMAGE_SCALE,
            };
            descriptors.insert(
                body,
                BodyDescriptor {
                    body,
                    update_interval_ms,
                    image_scale,
                    point_color: PLANET_POINT_COLOR,
                    point_size: PLANET_POINT_SIZE,
                    label_color: PLANET_LABEL_COLOR,
                },
            );
        }
        Self { descriptors }
    }

    /// Descriptor of `body`.
    ///
    /// A miss means the registry table was built without a row for an enum
    /// variant, which is a programming-contract violation.
    pub fn descriptor(&self, body: SolarSystemBody) -> Result<&BodyDescriptor, PlanetariumError> {
        self.descriptors
            .get(&body)
            .ok_or(PlanetariumError::UnknownBody(body))
    }
}

impl Default for BodyDescriptorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
