//! Equality & hashing of primitives by their [shape](PrimitiveShape) alone.
//!
//! Two primitives with the same shape read their vertices from the same accessors, so they can
//! share a vertex buffer and be merged into a single mesh (with one submesh per primitive).

use std::hash::{Hash, Hasher};

use primcluster_common::MulAccumulator;

use crate::{
    AttributeChannel, AttributeSet, MeshPrimitive, MorphChannel, MorphTarget, PrimitiveShape,
};

const PRIMITIVE_SEED: u8 = 13;
const FIELD_SEED: u8 = 17;
/// Hash contribution of an absent value.
const ABSENT_HASH: i32 = 0;

/// An equality relation over optional values of `T`, along with a hash function consistent with
/// it.
///
/// Implementations must uphold:
/// * `equals` is reflexive, symmetric, and transitive, including over `None`
/// * `equals(a, b)` ⇒ `hash_code(a) == hash_code(b)`
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: Option<&T>, b: Option<&T>) -> bool;
    fn hash_code(&self, value: Option<&T>) -> i32;
}

/// Compares primitives by their vertex attribute accessors and morph target accessors.
///
/// Everything else about a primitive (indices, material, mode) is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeComparer;

/// Whether two shapes have identical attribute & morph target accessors.
#[inline]
pub fn are_equal(a: Option<&PrimitiveShape>, b: Option<&PrimitiveShape>) -> bool {
    ShapeComparer.equals(a, b)
}

/// Hash of a shape, consistent with [are_equal].
#[inline]
pub fn hash_of(shape: Option<&PrimitiveShape>) -> i32 {
    ShapeComparer.hash_code(shape)
}

/// Absence & identity handling shared by every comparison; `fields` only runs when both values
/// are present and distinct.
#[inline]
fn compare<T: ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    fields: impl FnOnce(&T, &T) -> bool,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::eq(a, b) || fields(a, b),
        _ => false,
    }
}

impl EqualityComparer<AttributeSet> for ShapeComparer {
    fn equals(&self, a: Option<&AttributeSet>, b: Option<&AttributeSet>) -> bool {
        compare(a, b, |a, b| AttributeChannel::ALL.into_iter().all(|c| a[c] == b[c]))
    }

    fn hash_code(&self, value: Option<&AttributeSet>) -> i32 {
        match value {
            None => ABSENT_HASH,
            Some(set) => MulAccumulator::standard(FIELD_SEED)
                .mix_all(set.iter().map(|(_, acc)| acc.raw()))
                .finish(),
        }
    }
}

impl EqualityComparer<MorphTarget> for ShapeComparer {
    fn equals(&self, a: Option<&MorphTarget>, b: Option<&MorphTarget>) -> bool {
        compare(a, b, |a, b| MorphChannel::ALL.into_iter().all(|c| a[c] == b[c]))
    }

    fn hash_code(&self, value: Option<&MorphTarget>) -> i32 {
        match value {
            None => ABSENT_HASH,
            Some(target) => MulAccumulator::standard(FIELD_SEED)
                .mix_all(target.iter().map(|(_, acc)| acc.raw()))
                .finish(),
        }
    }
}

impl EqualityComparer<[Option<MorphTarget>]> for ShapeComparer {
    fn equals(
        &self,
        a: Option<&[Option<MorphTarget>]>,
        b: Option<&[Option<MorphTarget>]>,
    ) -> bool {
        compare(a, b, |a, b| {
            a.len() == b.len()
                && a.iter().zip(b).all(|(x, y)| {
                    EqualityComparer::<MorphTarget>::equals(self, x.as_ref(), y.as_ref())
                })
        })
    }

    fn hash_code(&self, value: Option<&[Option<MorphTarget>]>) -> i32 {
        let Some(targets) = value else {
            return ABSENT_HASH;
        };
        let mut hash = MulAccumulator::standard(FIELD_SEED);
        // truncation only matters for lists longer than i32::MAX, which still hash consistently
        hash.mix(targets.len() as i32);
        for target in targets {
            match target {
                None => hash.mix(ABSENT_HASH),
                Some(target) => hash.mix_all(target.iter().map(|(_, acc)| acc.raw())),
            };
        }
        hash.finish()
    }
}

impl EqualityComparer<PrimitiveShape> for ShapeComparer {
    fn equals(&self, a: Option<&PrimitiveShape>, b: Option<&PrimitiveShape>) -> bool {
        compare(a, b, |a, b| {
            EqualityComparer::<AttributeSet>::equals(
                self,
                a.attributes.as_ref(),
                b.attributes.as_ref(),
            ) && EqualityComparer::<[Option<MorphTarget>]>::equals(
                self,
                a.targets.as_deref(),
                b.targets.as_deref(),
            )
        })
    }

    fn hash_code(&self, value: Option<&PrimitiveShape>) -> i32 {
        let Some(shape) = value else {
            return ABSENT_HASH;
        };
        MulAccumulator::standard(PRIMITIVE_SEED)
            .mix(EqualityComparer::<AttributeSet>::hash_code(self, shape.attributes.as_ref()))
            .mix(EqualityComparer::<[Option<MorphTarget>]>::hash_code(
                self,
                shape.targets.as_deref(),
            ))
            .finish()
    }
}

impl EqualityComparer<MeshPrimitive> for ShapeComparer {
    #[inline]
    fn equals(&self, a: Option<&MeshPrimitive>, b: Option<&MeshPrimitive>) -> bool {
        EqualityComparer::<PrimitiveShape>::equals(
            self,
            a.map(|p| &p.shape),
            b.map(|p| &p.shape),
        )
    }

    #[inline]
    fn hash_code(&self, value: Option<&MeshPrimitive>) -> i32 {
        EqualityComparer::<PrimitiveShape>::hash_code(self, value.map(|p| &p.shape))
    }
}

/// A borrowed value which implements [Hash] & [Eq] through an [EqualityComparer], making the
/// comparer usable as the key strategy of standard collections.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use primcluster::{AccessorRef, AttributeChannel, AttributeSet, ByComparer, PrimitiveShape, ShapeComparer};
///
/// let a = PrimitiveShape::new(AttributeSet::empty().with(AttributeChannel::Position, AccessorRef::from_raw(0)));
/// let b = a.clone();
///
/// let mut set = HashSet::new();
/// set.insert(ByComparer::new(&a, &ShapeComparer));
/// assert!(!set.insert(ByComparer::new(&b, &ShapeComparer)));
/// ```
#[derive(Debug)]
pub struct ByComparer<'a, T: ?Sized, C> {
    value: Option<&'a T>,
    comparer: &'a C,
}

impl<'a, T: ?Sized, C> Clone for ByComparer<'a, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: ?Sized, C> Copy for ByComparer<'a, T, C> {}

impl<'a, T: ?Sized, C: EqualityComparer<T>> ByComparer<'a, T, C> {
    #[inline]
    pub fn new(value: &'a T, comparer: &'a C) -> Self {
        Self {
            value: Some(value),
            comparer,
        }
    }

    /// A key standing for an absent value.
    #[inline]
    pub fn absent(comparer: &'a C) -> Self {
        Self {
            value: None,
            comparer,
        }
    }

    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.value
    }
}

impl<'a, T: ?Sized, C: EqualityComparer<T>> PartialEq for ByComparer<'a, T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.comparer.equals(self.value, other.value)
    }
}

impl<'a, T: ?Sized, C: EqualityComparer<T>> Eq for ByComparer<'a, T, C> {}

impl<'a, T: ?Sized, C: EqualityComparer<T>> Hash for ByComparer<'a, T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.comparer.hash_code(self.value));
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::AccessorRef;

    // a small range of values, so that independently generated values collide often enough to
    // exercise the equal case
    impl Arbitrary for AccessorRef {
        fn arbitrary(g: &mut Gen) -> Self {
            AccessorRef::from_raw(*g.choose(&[-1, 0, 1, 2]).unwrap())
        }
    }

    impl Arbitrary for AttributeSet {
        fn arbitrary(g: &mut Gen) -> Self {
            AttributeChannel::ALL
                .into_iter()
                .map(|c| (c, AccessorRef::arbitrary(g)))
                .collect()
        }
    }

    impl Arbitrary for MorphTarget {
        fn arbitrary(g: &mut Gen) -> Self {
            MorphTarget::new(
                AccessorRef::arbitrary(g),
                AccessorRef::arbitrary(g),
                AccessorRef::arbitrary(g),
            )
        }
    }

    impl Arbitrary for PrimitiveShape {
        fn arbitrary(g: &mut Gen) -> Self {
            let len = usize::arbitrary(g) % 4;
            Self {
                attributes: Option::arbitrary(g),
                targets: bool::arbitrary(g)
                    .then(|| (0..len).map(|_| Option::arbitrary(g)).collect()),
            }
        }
    }

    #[quickcheck]
    fn reflexive(a: PrimitiveShape) -> bool {
        are_equal(Some(&a), Some(&a)) && are_equal(Some(&a), Some(&a.clone()))
    }

    #[quickcheck]
    fn symmetric(a: PrimitiveShape, b: PrimitiveShape) -> bool {
        are_equal(Some(&a), Some(&b)) == are_equal(Some(&b), Some(&a))
    }

    #[quickcheck]
    fn transitive(a: PrimitiveShape, b: PrimitiveShape, c: PrimitiveShape) -> bool {
        !(are_equal(Some(&a), Some(&b)) && are_equal(Some(&b), Some(&c)))
            || are_equal(Some(&a), Some(&c))
    }

    #[quickcheck]
    fn hash_consistent(a: PrimitiveShape, b: PrimitiveShape) -> bool {
        !are_equal(Some(&a), Some(&b)) || hash_of(Some(&a)) == hash_of(Some(&b))
    }

    #[quickcheck]
    fn clone_hashes_equal(a: PrimitiveShape) -> bool {
        hash_of(Some(&a)) == hash_of(Some(&a.clone()))
    }

    /// Comparing field by field must agree with structural equality of the whole value.
    #[quickcheck]
    fn agrees_with_structural_eq(a: PrimitiveShape, b: PrimitiveShape) -> bool {
        are_equal(Some(&a), Some(&b)) == (a == b)
    }

    #[quickcheck]
    fn attribute_field_sensitive(attrs: AttributeSet, channel: u8) -> bool {
        let channel = AttributeChannel::ALL[channel as usize % AttributeChannel::COUNT];
        let changed = attrs.with(channel, AccessorRef::from_raw(attrs[channel].raw() + 1));
        let a = PrimitiveShape::new(attrs);
        let b = PrimitiveShape::new(changed);
        !are_equal(Some(&a), Some(&b))
    }

    #[quickcheck]
    fn morph_field_sensitive(
        attrs: AttributeSet,
        targets: Vec<MorphTarget>,
        pick: usize,
        channel: u8,
    ) -> bool {
        if targets.is_empty() {
            return true;
        }
        let pick = pick % targets.len();
        let channel = MorphChannel::ALL[channel as usize % MorphChannel::COUNT];
        let mut changed = targets.clone();
        let bumped = AccessorRef::from_raw(targets[pick][channel].raw() + 1);
        changed[pick] = changed[pick].with(channel, bumped);
        let a = PrimitiveShape::new(attrs).with_targets(targets);
        let b = PrimitiveShape::new(attrs).with_targets(changed);
        !are_equal(Some(&a), Some(&b))
    }

    #[test]
    fn absent_shapes() {
        let a = PrimitiveShape::default();
        assert!(are_equal(None, None));
        assert!(!are_equal(None, Some(&a)));
        assert!(!are_equal(Some(&a), None));
        assert_eq!(hash_of(None), 0);
    }

    #[test]
    fn absent_vs_empty_targets() {
        let empty = PrimitiveShape::new(AttributeSet::empty());
        let absent = PrimitiveShape {
            targets: None,
            ..empty.clone()
        };
        assert!(!are_equal(Some(&empty), Some(&absent)));
        assert!(are_equal(Some(&absent), Some(&absent.clone())));
    }

    #[test]
    fn absent_vs_empty_attributes() {
        let empty = PrimitiveShape::new(AttributeSet::empty());
        let absent = PrimitiveShape {
            attributes: None,
            ..empty.clone()
        };
        assert!(!are_equal(Some(&empty), Some(&absent)));
        assert!(are_equal(Some(&absent), Some(&absent.clone())));
    }

    #[test]
    fn absent_target_element() {
        let target = MorphTarget::new(
            AccessorRef::from_raw(5),
            AccessorRef::ABSENT,
            AccessorRef::ABSENT,
        );
        let present = PrimitiveShape {
            attributes: None,
            targets: Some(vec![Some(target)]),
        };
        let hole = PrimitiveShape {
            attributes: None,
            targets: Some(vec![None]),
        };
        assert!(!are_equal(Some(&present), Some(&hole)));
        assert!(are_equal(Some(&hole), Some(&hole.clone())));
        assert_eq!(hash_of(Some(&hole)), hash_of(Some(&hole.clone())));
    }

    #[test]
    fn hash_layout() {
        let shape = PrimitiveShape::new(
            AttributeSet::empty().with(AttributeChannel::Position, AccessorRef::from_raw(0)),
        );
        let attrs = AttributeChannel::ALL.into_iter().fold(17i32, |acc, c| {
            let v = if c == AttributeChannel::Position { 0 } else { -1 };
            acc.wrapping_mul(31).wrapping_add(v)
        });
        let targets = 17 * 31;
        let expected = 13i32
            .wrapping_mul(31)
            .wrapping_add(attrs)
            .wrapping_mul(31)
            .wrapping_add(targets);
        assert_eq!(hash_of(Some(&shape)), expected);
    }

    #[test]
    fn mesh_primitive_ignores_render_state() {
        let shape = PrimitiveShape::new(
            AttributeSet::empty().with(AttributeChannel::Position, AccessorRef::from_raw(3)),
        );
        let a = MeshPrimitive {
            shape: shape.clone(),
            indices: AccessorRef::from_raw(0),
            material: Some(1),
            mode: crate::Mode::Triangles,
        };
        let b = MeshPrimitive {
            shape,
            indices: AccessorRef::from_raw(7),
            material: None,
            mode: crate::Mode::Lines,
        };
        assert!(ShapeComparer.equals(Some(&a), Some(&b)));
        assert_eq!(ShapeComparer.hash_code(Some(&a)), ShapeComparer.hash_code(Some(&b)));
    }
}
