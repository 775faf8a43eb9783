//! Camera module — pose and projection state, view/projection matrices.
//!
//! The camera is owned and driven by the caller (scene or render-graph
//! node). A controller feeds it a pose through the `set_view_*` setters,
//! a renderer reads the resulting matrices. The crate does NOT store or
//! manage cameras.

mod camera;

pub use camera::{Camera, Orientation, ProjectionMode};
