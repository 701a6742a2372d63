//! Incremental growth of planar figures made of equilateral triangles.
//!
//! A [`Drawing`] starts from a seed triangle, attaches a branch triangle to
//! one of its edges, then keeps joining pairs of free vertices with new
//! triangles until no legal placement remains.

pub mod drawing;
pub mod error;
pub mod math;
pub mod operations;
pub mod topology;

pub use drawing::{Drawing, DrawingParams, Shapes};
pub use error::{Result, TriangbergError};
pub use operations::growth::{CandidatePicker, FirstCandidate, LastCandidate};
