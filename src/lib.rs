/*!
# Lantern Camera

Camera transform module for the Lantern renderer.

This crate holds pose and projection state and produces the two matrices a
renderer consumes every frame: a view matrix (world space → camera space) and
a projection matrix (camera space → clip space, z in [0, 1]).

The camera is a leaf component: a controller decides what pose to feed it,
a renderer reads the resulting matrices. The crate computes nothing else:
no culling, no render-target ownership, no interpretation of the matrices
it produces.

## Architecture

- **Camera**: pose + projection state, setters that recompute the matrices
- **Error**: explicit rejection of recoverable degenerate input; contract
  violations (near >= far, zero aspect ratio) panic instead
- **log**: pluggable logging via the `Logger` trait
*/

mod error;
pub mod log;

mod camera;

pub use error::{Error, Result};
pub use camera::{Camera, Orientation, ProjectionMode};

// Re-export math library at crate root
pub use glam;
