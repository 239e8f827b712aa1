//! Extraction of primitive descriptors from various storage formats.

#[cfg(feature = "de_gltf")]
pub mod gltf;
