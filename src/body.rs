use std::fmt;

/// Identifier of a displayable solar-system body.
///
/// This is a closed set: the crate is parameterized over the fixed
/// Sun/Moon/planet collection and does not manage an open catalog.
/// Earth never appears here; it only exists as the implicit origin of the
/// geocentric conversion in [`crate::coords`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SolarSystemBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl SolarSystemBody {
    /// All displayable bodies, in registry order.
    pub const ALL: [SolarSystemBody; 9] = [
        SolarSystemBody::Sun,
        SolarSystemBody::Moon,
        SolarSystemBody::Mercury,
        SolarSystemBody::Venus,
        SolarSystemBody::Mars,
        SolarSystemBody::Jupiter,
        SolarSystemBody::Saturn,
        SolarSystemBody::Uranus,
        SolarSystemBody::Neptune,
    ];

    /// Stable key used to look the display name up in a
    /// [`ResourceStore`](crate::resources::ResourceStore).
    pub fn name_key(&self) -> &'static str {
        match self {
            SolarSystemBody::Sun => "body_name_sun",
            SolarSystemBody::Moon => "body_name_moon",
            SolarSystemBody::Mercury => "body_name_mercury",
            SolarSystemBody::Venus => "body_name_venus",
            SolarSystemBody::Mars => "body_name_mars",
            SolarSystemBody::Jupiter => "body_name_jupiter",
            SolarSystemBody::Saturn => "body_name_saturn",
            SolarSystemBody::Uranus => "body_name_uranus",
            SolarSystemBody::Neptune => "body_name_neptune",
        }
    }
}

impl fmt::Display for SolarSystemBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolarSystemBody::Sun => "Sun",
            SolarSystemBody::Moon => "Moon",
            SolarSystemBody::Mercury => "Mercury",
            SolarSystemBody::Venus => "Venus",
            SolarSystemBody::Mars => "Mars",
            SolarSystemBody::Jupiter => "Jupiter",
            SolarSystemBody::Saturn => "Saturn",
            SolarSystemBody::Uranus => "Uranus",
            SolarSystemBody::Neptune => "Neptune",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod body_test {
    use super::*;

    #[test]
    fn test_all_is_exhaustive_and_unique() {
        for (i, a) in SolarSystemBody::ALL.iter().enumerate() {
            for b in SolarSystemBody::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(SolarSystemBody::ALL.len(), 9);
    }

    #[test]
    fn test_name_keys_are_distinct() {
        let keys: std::collections::HashSet<_> =
            SolarSystemBody::ALL.iter().map(|b| b.name_key()).collect();
        assert_eq!(keys.len(), SolarSystemBody::ALL.len());
    }
}
