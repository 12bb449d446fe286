//! # Collaborator seams
//!
//! Traits for the external configuration and localization stores, plus
//! in-memory defaults usable in tests and headless tools. The core reads
//! each collaborator exactly once (preferences at initialization, display
//! names at construction); it never watches for changes.

use std::collections::HashMap;

/// User configuration store. Only booleans are consumed by this crate.
pub trait Preferences {
    fn get_boolean(&self, key: &str, default: bool) -> bool;
}

/// Localized string store, keyed by the descriptor's name key.
pub trait ResourceStore {
    fn display_name(&self, key: &str) -> String;
}

/// In-memory [`Preferences`]; unset keys fall back to the caller's default.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    values: HashMap<String, bool>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_boolean(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
    }
}

impl Preferences for InMemoryPreferences {
    fn get_boolean(&self, key: &str, default: bool) -> bool {
        self.values.get(key).copied().unwrap_or(default)
    }
}

/// Built-in English display names; stands in for a localized resource bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNames;

impl ResourceStore for EnglishNames {
    fn display_name(&self, key: &str) -> String {
        let name = match key {
            "body_name_sun" => "Sun",
            "body_name_moon" => "Moon",
            "body_name_mercury" => "Mercury",
            "body_name_venus" => "Venus",
            "body_name_mars" => "Mars",
            "body_name_jupiter" => "Jupiter",
            "body_name_saturn" => "Saturn",
            "body_name_uranus" => "Uranus",
            "body_name_neptune" => "Neptune",
            other => other,
        };
        name.to_string()
    }
}
