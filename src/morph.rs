//! Morph target accessor references.

use crate::AccessorRef;

primcluster_common::ordered_enum! {
    /// The morph target channels considered when comparing primitives.
    pub enum MorphChannel {
        Position => "POSITION",
        Normal => "NORMAL",
        Tangent => "TANGENT",
    }
}

/// Accessors holding the displacements of a single morph target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MorphTarget {
    channels: [AccessorRef; MorphChannel::COUNT],
}

/// The morph targets of a primitive, in order.
///
/// Both the list and its elements may be absent; see [PrimitiveShape](crate::PrimitiveShape).
pub type MorphTargetList = Vec<Option<MorphTarget>>;

primcluster_common::impl_index!(self: MorphTarget -> AccessorRef, c: MorphChannel;
    &self.channels[c.index()];
    &mut self.channels[c.index()]);

impl MorphTarget {
    pub fn new(position: AccessorRef, normal: AccessorRef, tangent: AccessorRef) -> Self {
        Self {
            channels: [position, normal, tangent],
        }
    }

    #[inline]
    #[must_use]
    pub fn with(mut self, channel: MorphChannel, acc: AccessorRef) -> Self {
        self[channel] = acc;
        self
    }

    #[inline]
    pub fn get(&self, channel: MorphChannel) -> AccessorRef {
        self[channel]
    }

    /// Iterate over every channel and its accessor, in [MorphChannel::ALL] order.
    pub fn iter(&self) -> impl Iterator<Item = (MorphChannel, AccessorRef)> + '_ {
        MorphChannel::ALL.into_iter().map(|c| (c, self[c]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels() {
        let mut target = MorphTarget::new(
            AccessorRef::from_raw(4),
            AccessorRef::ABSENT,
            AccessorRef::from_raw(6),
        );
        assert_eq!(target[MorphChannel::Position].raw(), 4);
        assert!(!target.get(MorphChannel::Normal).is_present());

        target[MorphChannel::Normal] = AccessorRef::from_raw(5);
        let raw: Vec<i32> = target.iter().map(|(_, acc)| acc.raw()).collect();
        assert_eq!(raw, [4, 5, 6]);
        let cleared = target.with(MorphChannel::Tangent, AccessorRef::ABSENT);
        assert!(!cleared[MorphChannel::Tangent].is_present());
    }
}
