//! # Render sources
//!
//! The representation objects a body exposes to the rendering collaborator:
//! point markers, textured images and text labels. The set of kinds is fixed
//! and small, so the collection holds three separate ordered sequences of
//! closed struct types rather than trait objects.

use nalgebra::Vector3;

use crate::constants::ArgbColor;
use crate::descriptor::ImageKey;

/// A single pixel-sized marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSource {
    pub position: Vector3<f64>,
    pub color: ArgbColor,
    pub size: u32,
}

/// A textured image billboard. `up_vector` orients the texture; for the Moon
/// it tracks the Sun direction so the lit limb faces the right way.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    pub position: Vector3<f64>,
    pub image: ImageKey,
    pub up_vector: Vector3<f64>,
    pub scale: f64,
}

/// A text label anchored at a sky position.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSource {
    pub position: Vector3<f64>,
    pub text: String,
    pub color: ArgbColor,
}

/// The mutable set of render sources owned by one body instance.
///
/// Membership is fixed after initialization; positions (and, for the Moon,
/// the image selector and up-vector) mutate in place. Insertion order is
/// preserved within each kind.
#[derive(Debug, Clone, Default)]
pub struct SourceCollection {
    points: Vec<PointSource>,
    images: Vec<ImageSource>,
    labels: Vec<LabelSource>,
}

impl SourceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PointSource] {
        &self.points
    }

    pub fn images(&self) -> &[ImageSource] {
        &self.images
    }

    pub fn labels(&self) -> &[LabelSource] {
        &self.labels
    }

    pub(crate) fn add_point(&mut self, point: PointSource) {
        self.points.push(point);
    }

    pub(crate) fn add_image(&mut self, image: ImageSource) {
        self.images.push(image);
    }

    pub(crate) fn add_label(&mut self, label: LabelSource) {
        self.labels.push(label);
    }

    /// Move every source to `position` in lockstep, so a single coordinate
    /// update propagates to all representations of the body.
    pub(crate) fn set_positions(&mut self, position: Vector3<f64>) {
        for point in &mut self.points {
            point.position = position;
        }
        for image in &mut self.images {
            image.position = position;
        }
        for label in &mut self.labels {
            label.position = position;
        }
    }

    pub(crate) fn first_image_mut(&mut self) -> Option<&mut ImageSource> {
        self.images.first_mut()
    }
}

#[cfg(test)]
mod sources_test {
    use super::*;
    use crate::descriptor::{PLANET_LABEL_COLOR, PLANET_POINT_COLOR, PLANET_POINT_SIZE};

    #[test]
    fn test_set_positions_moves_every_kind() {
        let mut sources = SourceCollection::new();
        let origin = Vector3::zeros();
        sources.add_point(PointSource {
            position: origin,
            color: PLANET_POINT_COLOR,
            size: PLANET_POINT_SIZE,
        });
        sources.add_image(ImageSource {
            position: origin,
            image: ImageKey::Mars,
            up_vector: Vector3::y(),
            scale: 0.02,
        });
        sources.add_label(LabelSource {
            position: origin,
            text: "Mars".to_string(),
            color: PLANET_LABEL_COLOR,
        });

        let target = Vector3::new(0.5, -0.5, 0.7);
        sources.set_positions(target);

        assert_eq!(sources.points()[0].position, target);
        assert_eq!(sources.images()[0].position, target);
        assert_eq!(sources.labels()[0].position, target);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut sources = SourceCollection::new();
        for text in ["first", "second"] {
            sources.add_label(LabelSource {
                position: Vector3::zeros(),
                text: text.to_string(),
                color: PLANET_LABEL_COLOR,
            });
        }
        assert_eq!(sources.labels()[0].text, "first");
        assert_eq!(sources.labels()[1].text, "second");
    }
}
