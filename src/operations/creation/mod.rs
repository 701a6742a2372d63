mod make_triangle;

pub use make_triangle::{fill_in_apex, MakeTriangle, TriangleRequest};
