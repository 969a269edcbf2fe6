//! A scene is a canvas description plus an ordered list of drawing operations, read from JSON.
//!
//! [`Scene::render`] validates the scene, allocates a [`crate::Surface`] and runs every
//! operation in order.

pub mod model;
pub mod render;

pub use model::{DrawOp, FormatPreset, Scene};
pub use render::SceneStats;
