//! Error type shared by the map store, the action runner and the asset stores.
//!
//! Configuration mistakes (duplicate map names, unknown maps, object-name
//! misses during rebinding) are fatal at the call site and are never retried.
//! Geometry degeneracy is not represented here: clipping simply yields an
//! invalid segment.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("map '{0}' already exists")]
    DuplicateMap(String),
    #[error("map '{0}' does not exist")]
    UnknownMap(String),
    #[error("no currently selected map")]
    NoCurrentMap,
    #[error("attempt to set {what} on non-existent object: {name}")]
    UnknownObject { what: &'static str, name: String },
    #[error("no avatar entity has been spawned")]
    NoAvatar,
    #[error("unable to load {kind}: {path}")]
    ResourceMissing { kind: &'static str, path: String },
    #[error("invalid map data: {0}")]
    MapData(#[from] serde_json::Error),
    #[error("invalid map layout: {0}")]
    MapLayout(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
