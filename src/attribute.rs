//! Vertex attribute accessor references.
//!
//! # See Also
//!
//! * [glTF Mesh Specification](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#meshes-overview)

use crate::error::Error;

/// Reference to an accessor within a glTF document, or the absence of one.
///
/// Stored as an `i32` where [AccessorRef::ABSENT] (`-1`) means "no accessor". Comparison and
/// hashing operate on the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessorRef(i32);

impl Default for AccessorRef {
    fn default() -> Self {
        Self::ABSENT
    }
}

impl AccessorRef {
    /// Sentinel for an attribute which isn't present.
    pub const ABSENT: Self = Self(-1);

    /// Reference the accessor at `index`.
    ///
    /// # Errors
    /// * `index` > `i32::MAX`
    pub fn new(index: usize) -> Result<Self, Error> {
        i32::try_from(index)
            .map(Self)
            .map_err(|_| Error::AccessorIndexOutOfRange { index })
    }

    /// Wrap a raw sentinel-encoded value without checking it.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_present(self) -> bool {
        self.0 >= 0
    }

    /// The referenced accessor index, if any.
    #[inline]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

primcluster_common::ordered_enum! {
    /// The vertex attribute channels considered when comparing primitives.
    ///
    /// Declaration order is the order in which channels are hashed.
    pub enum AttributeChannel {
        Position => "POSITION",
        Normal => "NORMAL",
        Tangent => "TANGENT",
        Texcoord0 => "TEXCOORD_0",
        Texcoord1 => "TEXCOORD_1",
        Texcoord2 => "TEXCOORD_2",
        Texcoord3 => "TEXCOORD_3",
        Texcoord4 => "TEXCOORD_4",
        Texcoord5 => "TEXCOORD_5",
        Texcoord6 => "TEXCOORD_6",
        Texcoord7 => "TEXCOORD_7",
        Color0 => "COLOR_0",
        Joints0 => "JOINTS_0",
        Weights0 => "WEIGHTS_0",
    }
}

impl AttributeChannel {
    /// The `TEXCOORD_n` channel, if `n` is within the supported range (0..8).
    pub fn texcoord(n: u32) -> Option<Self> {
        const TEXCOORDS: [AttributeChannel; 8] = [
            AttributeChannel::Texcoord0,
            AttributeChannel::Texcoord1,
            AttributeChannel::Texcoord2,
            AttributeChannel::Texcoord3,
            AttributeChannel::Texcoord4,
            AttributeChannel::Texcoord5,
            AttributeChannel::Texcoord6,
            AttributeChannel::Texcoord7,
        ];
        TEXCOORDS.get(n as usize).copied()
    }
}

/// The accessor referenced by each [AttributeChannel] of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttributeSet {
    channels: [AccessorRef; AttributeChannel::COUNT],
}

primcluster_common::impl_index!(self: AttributeSet -> AccessorRef, c: AttributeChannel;
    &self.channels[c.index()];
    &mut self.channels[c.index()]);

impl FromIterator<(AttributeChannel, AccessorRef)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (AttributeChannel, AccessorRef)>>(iter: I) -> Self {
        let mut res = Self::default();
        for (channel, acc) in iter {
            res.set(channel, acc);
        }
        res
    }
}

impl AttributeSet {
    /// An attribute set with every channel absent.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder-style [AttributeSet::set].
    #[inline]
    #[must_use]
    pub fn with(mut self, channel: AttributeChannel, acc: AccessorRef) -> Self {
        self.set(channel, acc);
        self
    }

    /// Set the accessor of a channel, returning the previous one.
    pub fn set(&mut self, channel: AttributeChannel, acc: AccessorRef) -> AccessorRef {
        std::mem::replace(&mut self[channel], acc)
    }

    #[inline]
    pub fn get(&self, channel: AttributeChannel) -> AccessorRef {
        self[channel]
    }

    /// Iterate over every channel and its accessor, in [AttributeChannel::ALL] order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeChannel, AccessorRef)> + '_ {
        AttributeChannel::ALL.into_iter().map(|c| (c, self[c]))
    }

    /// Iterate over the channels which reference an accessor.
    pub fn present(&self) -> impl Iterator<Item = AttributeChannel> + '_ {
        self.iter().filter_map(|(c, acc)| acc.is_present().then_some(c))
    }
}
