//! # Per-body render source
//!
//! [`PlanetSource`] is the unit this crate exists for: one displayable body,
//! its current render-space position, the set of render sources representing
//! it, and the staleness policy deciding when both get refreshed.
//!
//! The protocol is `new` → `initialize` (exactly once) → any number of
//! `update` calls, each driven by the outer per-frame orchestrator with an
//! explicit timestamp. `update` returns the set of change signals the
//! orchestrator aggregates into a scene update.

use log::{debug, trace};
use nalgebra::Vector3;
use smallvec::{smallvec, SmallVec};

use crate::body::SolarSystemBody;
use crate::constants::EpochMillis;
use crate::coords;
use crate::descriptor::{BodyDescriptor, BodyDescriptorRegistry, ImageKey};
use crate::ephemeris::OrbitalElementsProvider;
use crate::planetarium_errors::PlanetariumError;
use crate::resources::{Preferences, ResourceStore};
use crate::sources::{ImageSource, LabelSource, PointSource, SourceCollection};

/// Preference key controlling whether non-Sun/Moon bodies get textured
/// images or plain point markers.
pub const SHOW_PLANETARY_IMAGES: &str = "show_planetary_images";

/// One kind of change produced by [`PlanetSource::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSignal {
    PositionsChanged,
    ImagesChanged,
}

impl UpdateSignal {
    const fn bit(self) -> u8 {
        match self {
            UpdateSignal::PositionsChanged => 1 << 0,
            UpdateSignal::ImagesChanged => 1 << 1,
        }
    }
}

/// Set of [`UpdateSignal`]s accumulated by one `update` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateSignals {
    bits: u8,
}

impl UpdateSignals {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn contains(&self, signal: UpdateSignal) -> bool {
        self.bits & signal.bit() != 0
    }

    pub fn insert(&mut self, signal: UpdateSignal) {
        self.bits |= signal.bit();
    }
}

/// The canonical up-vector for image billboards that are not lit by the live
/// sun direction.
fn canonical_up() -> Vector3<f64> {
    Vector3::y()
}

/// One displayable body: position pipeline, render sources and per-body
/// update scheduling.
///
/// Each instance exclusively owns its sources, its element tables and its
/// scheduling state; instances share nothing mutable and may be driven from
/// different threads by an outer orchestrator.
#[derive(Debug, Clone)]
pub struct PlanetSource {
    body: SolarSystemBody,
    descriptor: BodyDescriptor,
    provider: OrbitalElementsProvider,
    name: String,
    sources: SourceCollection,
    current_coords: Vector3<f64>,
    sun_coords: Vector3<f64>,
    image_key: Option<ImageKey>,
    /// 0 is the "never updated" sentinel; any realistic timestamp differs
    /// from it by more than every update interval.
    last_update_time_ms: EpochMillis,
}

impl PlanetSource {
    /// Build an uninitialized source for `body`.
    ///
    /// The display name is read from `resources` once, here; the descriptor
    /// is copied out of the registry. Fails only on a registry table missing
    /// a row for the body, which is a programming-contract violation.
    pub fn new(
        body: SolarSystemBody,
        registry: &BodyDescriptorRegistry,
        resources: &dyn ResourceStore,
    ) -> Result<Self, PlanetariumError> {
        let descriptor = *registry.descriptor(body)?;
        let name = resources.display_name(descriptor.name_key());
        Ok(Self {
            body,
            descriptor,
            provider: OrbitalElementsProvider::new(),
            name,
            sources: SourceCollection::new(),
            current_coords: Vector3::zeros(),
            sun_coords: Vector3::zeros(),
            image_key: None,
            last_update_time_ms: 0,
        })
    }

    /// Search and label names of this body (always exactly one).
    pub fn names(&self) -> SmallVec<[String; 1]> {
        smallvec![self.name.clone()]
    }

    /// Current render-space position. Valid after `initialize`.
    pub fn search_location(&self) -> Vector3<f64> {
        self.current_coords
    }

    pub fn images(&self) -> &[ImageSource] {
        self.sources.images()
    }

    pub fn labels(&self) -> &[LabelSource] {
        self.sources.labels()
    }

    pub fn points(&self) -> &[PointSource] {
        self.sources.points()
    }

    pub fn sources(&self) -> &SourceCollection {
        &self.sources
    }

    /// Recompute the position pipeline for `time_ms` and commit the result.
    ///
    /// The transform runs to completion before any field is touched, so a
    /// failure leaves position, sun vector and timestamp at the previous
    /// consistent baseline and the next tick retries from there.
    fn update_coords(&mut self, time_ms: EpochMillis) -> Result<(), PlanetariumError> {
        let (coords, sun_coords) = coords::compute_position(&self.provider, self.body, time_ms)?;
        self.last_update_time_ms = time_ms;
        self.current_coords = coords;
        self.sun_coords = sun_coords;
        self.sources.set_positions(coords);
        Ok(())
    }

    /// One-time setup: compute the initial position, select which
    /// representations this body gets, and populate the source collection.
    ///
    /// The `show_planetary_images` preference is read here, once; a later
    /// preference change takes effect only through a full re-initialization
    /// of a fresh instance. Must be called exactly once — a second call
    /// would duplicate representations and is outside the contract.
    pub fn initialize(
        &mut self,
        time_ms: EpochMillis,
        preferences: &dyn Preferences,
    ) -> Result<&SourceCollection, PlanetariumError> {
        self.update_coords(time_ms)?;
        let image_key = self.descriptor.image_key(time_ms);
        self.image_key = Some(image_key);

        if self.body == SolarSystemBody::Moon {
            self.sources.add_image(ImageSource {
                position: self.current_coords,
                image: image_key,
                up_vector: self.sun_coords,
                scale: self.descriptor.image_scale,
            });
        } else {
            let use_images = preferences.get_boolean(SHOW_PLANETARY_IMAGES, true);
            if use_images || self.body == SolarSystemBody::Sun {
                // Only the Moon's image is lit by the live sun direction.
                self.sources.add_image(ImageSource {
                    position: self.current_coords,
                    image: image_key,
                    up_vector: canonical_up(),
                    scale: self.descriptor.image_scale,
                });
            } else {
                self.sources.add_point(PointSource {
                    position: self.current_coords,
                    color: self.descriptor.point_color,
                    size: self.descriptor.point_size,
                });
            }
        }
        self.sources.add_label(LabelSource {
            position: self.current_coords,
            text: self.name.clone(),
            color: self.descriptor.label_color,
        });

        Ok(&self.sources)
    }

    /// Advance the body to `time_ms` if its update interval has elapsed.
    ///
    /// The staleness check uses the absolute time difference so that
    /// rewinding simulated time also triggers a refresh. Up to date means an
    /// empty signal set and no mutation at all; a due recomputation reports
    /// `PositionsChanged`, plus `ImagesChanged` when the Moon's phase
    /// selector moved to a new value.
    pub fn update(&mut self, time_ms: EpochMillis) -> Result<UpdateSignals, PlanetariumError> {
        let mut signals = UpdateSignals::empty();

        let elapsed_ms = (time_ms - self.last_update_time_ms).abs();
        if elapsed_ms <= self.descriptor.update_interval_ms {
            trace!("{}: {elapsed_ms}ms elapsed, still fresh", self.body);
            return Ok(signals);
        }

        self.update_coords(time_ms)?;
        signals.insert(UpdateSignal::PositionsChanged);
        debug!("{}: position recomputed at t={time_ms}ms", self.body);

        if self.body == SolarSystemBody::Moon {
            let new_key = self.descriptor.image_key(time_ms);
            let phase_changed = self.image_key != Some(new_key);
            if let Some(image) = self.sources.first_image_mut() {
                image.up_vector = self.sun_coords;
                if phase_changed {
                    self.image_key = Some(new_key);
                    image.image = new_key;
                    signals.insert(UpdateSignal::ImagesChanged);
                    debug!("{}: phase image switched to {new_key:?}", self.body);
                }
            }
        }

        Ok(signals)
    }
}
