use nalgebra::Vector3;

use planetarium::body::SolarSystemBody;
use planetarium::coords;
use planetarium::descriptor::BodyDescriptorRegistry;
use planetarium::ephemeris::OrbitalElementsProvider;
use planetarium::planet_source::{PlanetSource, UpdateSignal, SHOW_PLANETARY_IMAGES};
use planetarium::resources::{EnglishNames, InMemoryPreferences};

// 2000-01-01T12:00:00 UTC
const J2000_MS: i64 = 946_728_000_000;

fn new_source(body: SolarSystemBody) -> PlanetSource {
    let registry = BodyDescriptorRegistry::new();
    PlanetSource::new(body, &registry, &EnglishNames).unwrap()
}

fn prefs(show_images: bool) -> InMemoryPreferences {
    let mut prefs = InMemoryPreferences::new();
    prefs.set_boolean(SHOW_PLANETARY_IMAGES, show_images);
    prefs
}

#[test]
fn representation_policy_with_images_enabled() {
    for body in SolarSystemBody::ALL {
        let mut source = new_source(body);
        source.initialize(J2000_MS, &prefs(true)).unwrap();

        assert_eq!(source.images().len(), 1, "{body}: expected one image");
        assert_eq!(source.points().len(), 0, "{body}: expected no points");
        assert_eq!(source.labels().len(), 1, "{body}: expected one label");
    }
}

#[test]
fn representation_policy_with_images_disabled() {
    for body in SolarSystemBody::ALL {
        let mut source = new_source(body);
        source.initialize(J2000_MS, &prefs(false)).unwrap();

        match body {
            // Sun and Moon always render as images, regardless of preference
            SolarSystemBody::Sun | SolarSystemBody::Moon => {
                assert_eq!(source.images().len(), 1, "{body}");
                assert_eq!(source.points().len(), 0, "{body}");
            }
            _ => {
                assert_eq!(source.images().len(), 0, "{body}");
                assert_eq!(source.points().len(), 1, "{body}");
            }
        }
        assert_eq!(source.labels().len(), 1, "{body}: expected one label");
    }
}

#[test]
fn exactly_one_of_image_or_point_after_initialize() {
    for show_images in [true, false] {
        for body in SolarSystemBody::ALL {
            if body == SolarSystemBody::Moon {
                continue;
            }
            let mut source = new_source(body);
            source.initialize(J2000_MS, &prefs(show_images)).unwrap();
            let images = !source.images().is_empty();
            let points = !source.points().is_empty();
            assert!(images ^ points, "{body}: images={images} points={points}");
        }
    }
}

#[test]
fn label_text_is_invariant_across_updates() {
    let mut saturn = new_source(SolarSystemBody::Saturn);
    saturn.initialize(J2000_MS, &prefs(true)).unwrap();
    assert_eq!(saturn.labels()[0].text, "Saturn");

    let mut t = J2000_MS;
    for _ in 0..5 {
        t += 10 * 86_400_000;
        saturn.update(t).unwrap();
        assert_eq!(saturn.labels().len(), 1);
        assert_eq!(saturn.labels()[0].text, "Saturn");
    }
}

#[test]
fn all_sources_share_the_updated_position() {
    let mut mercury = new_source(SolarSystemBody::Mercury);
    mercury.initialize(J2000_MS, &prefs(false)).unwrap();

    let t1 = J2000_MS + 3 * 86_400_000;
    let signals = mercury.update(t1).unwrap();
    assert!(signals.contains(UpdateSignal::PositionsChanged));

    let position = mercury.search_location();
    assert_eq!(mercury.points()[0].position, position);
    assert_eq!(mercury.labels()[0].position, position);
}

#[test]
fn moon_image_up_vector_tracks_the_sun() {
    let provider = OrbitalElementsProvider::new();
    let mut moon = new_source(SolarSystemBody::Moon);
    moon.initialize(J2000_MS, &prefs(true)).unwrap();

    let (_, sun_at_t0) = coords::compute_position(&provider, SolarSystemBody::Moon, J2000_MS).unwrap();
    assert_eq!(moon.images()[0].up_vector, sun_at_t0);

    let t1 = J2000_MS + 2 * 86_400_000;
    moon.update(t1).unwrap();
    let (_, sun_at_t1) = coords::compute_position(&provider, SolarSystemBody::Moon, t1).unwrap();
    assert_eq!(moon.images()[0].up_vector, sun_at_t1);
    assert_ne!(sun_at_t0, sun_at_t1);
}

#[test]
fn non_moon_images_keep_the_canonical_up_vector() {
    let up = Vector3::new(0.0, 1.0, 0.0);
    for body in [SolarSystemBody::Sun, SolarSystemBody::Jupiter] {
        let mut source = new_source(body);
        source.initialize(J2000_MS, &prefs(true)).unwrap();
        assert_eq!(source.images()[0].up_vector, up, "{body}");

        // still canonical after a due update
        source.update(J2000_MS + 30 * 86_400_000).unwrap();
        assert_eq!(source.images()[0].up_vector, up, "{body}");
    }
}

#[test]
fn position_pipeline_is_deterministic_across_instances() {
    let mut a = new_source(SolarSystemBody::Venus);
    let mut b = new_source(SolarSystemBody::Venus);
    a.initialize(J2000_MS, &prefs(true)).unwrap();
    b.initialize(J2000_MS, &prefs(true)).unwrap();
    assert_eq!(a.search_location(), b.search_location());
}

#[test]
fn search_location_is_unit_length_after_initialize() {
    for body in SolarSystemBody::ALL {
        let mut source = new_source(body);
        source.initialize(J2000_MS, &prefs(true)).unwrap();
        let norm = source.search_location().norm();
        assert!((norm - 1.0).abs() < 1e-9, "{body}: norm = {norm}");
    }
}

// The concrete scheduling scenario: Moon, 1-hour interval, t0 = 0.
#[test]
fn moon_hourly_scenario() {
    let registry = BodyDescriptorRegistry::new();
    let descriptor = *registry.descriptor(SolarSystemBody::Moon).unwrap();
    assert_eq!(descriptor.update_interval_ms, 3_600_000);

    let mut moon = new_source(SolarSystemBody::Moon);
    let sources = moon.initialize(0, &prefs(true)).unwrap();
    assert_eq!(sources.images().len(), 1);
    assert_eq!(sources.labels().len(), 1);
    assert_eq!(sources.points().len(), 0);

    // 30 minutes later: inside the interval, nothing happens
    let signals = moon.update(1_800_000).unwrap();
    assert!(signals.is_empty());

    // 61⅔ minutes later: position refresh is due
    let signals = moon.update(3_700_000).unwrap();
    assert!(signals.contains(UpdateSignal::PositionsChanged));

    // image change must agree with the descriptor's own selector function
    let phase_moved = descriptor.image_key(3_700_000) != descriptor.image_key(0);
    assert_eq!(signals.contains(UpdateSignal::ImagesChanged), phase_moved);
    assert_eq!(moon.images()[0].image, descriptor.image_key(3_700_000));
}

#[test]
fn names_and_search_surface() {
    let mut neptune = new_source(SolarSystemBody::Neptune);
    neptune.initialize(J2000_MS, &prefs(true)).unwrap();

    let names = neptune.names();
    assert_eq!(names.len(), 1);
    assert_eq!(names[0], "Neptune");

    // the search location is the same vector the sources carry
    assert_eq!(neptune.images()[0].position, neptune.search_location());
}
