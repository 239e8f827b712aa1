//! Grouping of primitives into clusters which can share a single mesh.

use std::collections::HashMap;

use crate::{ByComparer, EqualityComparer, MeshPrimitive, ShapeComparer};

/// A set of primitives considered equivalent by an [EqualityComparer].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    members: Vec<usize>,
}

impl Cluster {
    /// Indices of the primitives in this cluster, in input order. Never empty.
    #[inline]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Index of the first primitive in this cluster.
    #[inline]
    pub fn representative(&self) -> usize {
        self.members[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Group primitives by their [shape](crate::PrimitiveShape).
///
/// See [cluster_by].
pub fn cluster(primitives: &[MeshPrimitive]) -> Vec<Cluster> {
    cluster_by(primitives, &ShapeComparer)
}

/// Group values into clusters of equivalent values, as decided by `comparer`.
///
/// Clusters are ordered by their first member, and members are kept in input order.
pub fn cluster_by<T, C: EqualityComparer<T>>(values: &[T], comparer: &C) -> Vec<Cluster> {
    let mut index: HashMap<ByComparer<'_, T, C>, usize> = HashMap::with_capacity(values.len());
    let mut clusters: Vec<Cluster> = Vec::new();
    for (i, value) in values.iter().enumerate() {
        let next = clusters.len();
        let c = *index.entry(ByComparer::new(value, comparer)).or_insert(next);
        if c == next {
            clusters.push(Cluster { members: vec![i] });
        } else {
            clusters[c].members.push(i);
        }
    }

    #[cfg(feature = "tracing")]
    for (i, c) in clusters.iter().enumerate() {
        tracing::trace!(cluster = i, members = ?c.members, "clustered primitives");
    }

    clusters
}
