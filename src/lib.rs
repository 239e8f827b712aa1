//! Clustering of glTF mesh primitives by vertex layout.
//!
//! Primitives which read their vertex attributes & morph targets from the same accessors can be
//! merged into a single mesh. [ShapeComparer] decides which primitives qualify, and [cluster]
//! groups a mesh's primitives accordingly.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod error;

mod attribute;
mod cluster;
mod comparer;
pub mod de;
mod morph;
mod primitive;

pub use attribute::*;
pub use cluster::*;
pub use comparer::*;
pub use morph::*;
pub use primitive::*;
