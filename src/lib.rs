//! Tilequest library.
//!
//! A tile-based adventure core: collision resolution against a tile map,
//! sweep-based tile triggers, a modal event scheduler (messages, menus,
//! conversations) and the actions that tie them together. Exposed as a
//! library for the binary and for integration tests.

pub mod actions;
pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod modal;
pub mod resources;
pub mod systems;
