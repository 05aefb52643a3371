//! Global game-state context.
//!
//! The [`WorldSignals`] resource holds the keyed flags and values that game
//! logic reads and writes: dialogue availability, tile triggers, object
//! actions. It is passed explicitly into the code that needs it rather than
//! looked up behind the caller's back.
//!
//! Missing keys read as their neutral value: flags are false, integers are 0
//! and scalars are 0.0.

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Keyed flag/value storage shared by the whole game.
#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Floating-point values addressed by string keys.
    pub scalars: FxHashMap<String, f32>,
    /// Integer values addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Set a floating-point value.
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }
    /// Get a floating-point value, 0.0 if never set.
    pub fn get_scalar(&self, key: &str) -> f32 {
        self.scalars.get(key).copied().unwrap_or(0.0)
    }
    /// Add `amount` to a scalar, creating it at 0.0 first if needed.
    pub fn add_scalar(&mut self, key: impl Into<String>, amount: f32) {
        *self.scalars.entry(key.into()).or_insert(0.0) += amount;
    }
    pub fn has_scalar(&self, key: &str) -> bool {
        self.scalars.contains_key(key)
    }
    /// Set an integer value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    /// Get an integer value, 0 if never set.
    pub fn get_integer(&self, key: &str) -> i32 {
        self.integers.get(key).copied().unwrap_or(0)
    }
    /// Add `amount` to an integer, creating it at 0 first if needed.
    pub fn add_integer(&mut self, key: impl Into<String>, amount: i32) {
        let value = self.integers.entry(key.into()).or_insert(0);
        *value = value.saturating_add(amount);
    }
    pub fn has_integer(&self, key: &str) -> bool {
        self.integers.contains_key(key)
    }
    /// Set a flag to `value`. Clearing a flag removes its key.
    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        let key = key.into();
        if value {
            self.flags.insert(key);
        } else {
            self.flags.remove(&key);
        }
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}
