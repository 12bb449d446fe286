//! # Planetarium
//!
//! Positions of the Sun, Moon and planets in a viewer-centered render space,
//! plus the per-body scheduling that decides when their visual
//! representation must be refreshed.
//!
//! The crate is the computational core of a sky renderer: orbital-element
//! evaluation ([`ephemeris`]), coordinate transforms down to a unit
//! render-space vector ([`coords`]), per-body display metadata
//! ([`descriptor`]) and the per-body instance tying it together
//! ([`planet_source::PlanetSource`]). Rendering, asset loading, persisted
//! configuration and the clock are external collaborators reached through
//! the seams in [`resources`] and explicit timestamps.

pub mod body;
pub mod constants;
pub mod coords;
pub mod descriptor;
pub mod ephemeris;
pub mod orbital_elements;
pub mod planet_source;
pub mod planetarium_errors;
pub mod resources;
pub mod sources;
pub mod time;
