//! Utilities for extracting [MeshPrimitives](MeshPrimitive) from glTF data.
//!
//! # Notes
//!
//! * Only accessor *indices* are read; buffers are never loaded, so a [gltf::Document] without
//!   its binary data is sufficient.
//! * Attribute semantics outside of the fixed [AttributeChannel] set (ex. `TEXCOORD_8`, `COLOR_1`,
//!   custom `_ATTRIBUTE`s) are skipped.
//!
//! # See Also
//!
//! * [glTF 2.0 Spec](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#meshes)

use gltf::Semantic;

use crate::{
    error::Error, AccessorRef, AttributeChannel, AttributeSet, MeshPrimitive, Mode, MorphTarget,
    MorphTargetList, PrimitiveShape,
};

impl AttributeChannel {
    /// The channel corresponding to a glTF attribute semantic, if it's one this library tracks.
    pub fn from_semantic(semantic: &Semantic) -> Option<Self> {
        match semantic {
            Semantic::Positions => Some(Self::Position),
            Semantic::Normals => Some(Self::Normal),
            Semantic::Tangents => Some(Self::Tangent),
            Semantic::TexCoords(n) => Self::texcoord(*n),
            Semantic::Colors(0) => Some(Self::Color0),
            Semantic::Joints(0) => Some(Self::Joints0),
            Semantic::Weights(0) => Some(Self::Weights0),
            _ => None,
        }
    }
}

impl From<gltf::mesh::Mode> for Mode {
    fn from(value: gltf::mesh::Mode) -> Self {
        use gltf::mesh::Mode as G;
        match value {
            G::Points => Self::Points,
            G::Lines => Self::Lines,
            G::LineLoop => Self::LineLoop,
            G::LineStrip => Self::LineStrip,
            G::Triangles => Self::Triangles,
            G::TriangleStrip => Self::TriangleStrip,
            G::TriangleFan => Self::TriangleFan,
        }
    }
}

fn accessor_ref(acc: Option<gltf::Accessor<'_>>) -> Result<AccessorRef, Error> {
    match acc {
        Some(acc) => AccessorRef::new(acc.index()),
        None => Ok(AccessorRef::ABSENT),
    }
}

impl TryFrom<&gltf::Primitive<'_>> for MeshPrimitive {
    type Error = Error;
    fn try_from(prim: &gltf::Primitive<'_>) -> Result<Self, Self::Error> {
        let mut attributes = AttributeSet::empty();
        for (semantic, acc) in prim.attributes() {
            match AttributeChannel::from_semantic(&semantic) {
                Some(channel) => {
                    attributes.set(channel, AccessorRef::new(acc.index())?);
                }
                None => tracing::debug!(
                    primitive = prim.index(),
                    accessor = acc.index(),
                    semantic = ?semantic,
                    "skipping unsupported primitive attribute"
                ),
            }
        }

        let targets = prim
            .morph_targets()
            .map(|target| {
                Ok(Some(MorphTarget::new(
                    accessor_ref(target.positions())?,
                    accessor_ref(target.normals())?,
                    accessor_ref(target.tangents())?,
                )))
            })
            .collect::<Result<MorphTargetList, Error>>()?;

        Ok(Self {
            shape: PrimitiveShape {
                attributes: Some(attributes),
                targets: Some(targets),
            },
            indices: accessor_ref(prim.indices())?,
            material: prim.material().index(),
            mode: prim.mode().into(),
        })
    }
}

/// Extract every primitive of a mesh, in order.
#[tracing::instrument(skip_all, fields(mesh = mesh.index(), mesh_name = mesh.name()))]
pub fn primitives_of(mesh: &gltf::Mesh<'_>) -> Result<Vec<MeshPrimitive>, Error> {
    let res = mesh
        .primitives()
        .map(|prim| MeshPrimitive::try_from(&prim))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::trace!(count = res.len(), "extracted primitives");
    Ok(res)
}
