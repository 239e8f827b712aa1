use crate::{AccessorRef, AttributeSet, MorphTarget, MorphTargetList};

/// glTF primitive topology type
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Points = 0,
    Lines = 1,
    LineLoop = 2,
    LineStrip = 3,
    // Triangles as default: https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#schema-reference-mesh-primitive
    #[default]
    Triangles = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
}

/// The vertex layout of a primitive: which accessors feed each attribute and morph target.
///
/// This is the part of a primitive examined by [ShapeComparer](crate::ShapeComparer). Absent
/// attribute sets, absent target lists, and absent targets within a list are all valid, and
/// each is distinct from its present-but-empty counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PrimitiveShape {
    pub attributes: Option<AttributeSet>,
    pub targets: Option<MorphTargetList>,
}

impl PrimitiveShape {
    /// A shape with the given attributes and no morph targets (an empty, present list).
    pub fn new(attributes: AttributeSet) -> Self {
        Self {
            attributes: Some(attributes),
            targets: Some(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = MorphTarget>) -> Self {
        self.targets = Some(targets.into_iter().map(Some).collect());
        self
    }

    /// The number of morph targets, or 0 if the list is absent.
    pub fn target_count(&self) -> usize {
        self.targets.as_ref().map_or(0, Vec::len)
    }
}

/// A mesh primitive: its [shape](PrimitiveShape) plus the data which doesn't affect clustering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MeshPrimitive {
    pub shape: PrimitiveShape,
    /// Accessor of the vertex indices; absent for non-indexed geometry
    pub indices: AccessorRef,
    /// Material with which this primitive is rendered
    pub material: Option<usize>,
    /// The method by which vertices are interpreted as topological primitives
    pub mode: Mode,
}

impl From<PrimitiveShape> for MeshPrimitive {
    fn from(shape: PrimitiveShape) -> Self {
        Self {
            shape,
            ..Default::default()
        }
    }
}
