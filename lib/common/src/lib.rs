use num_traits::{WrappingAdd, WrappingMul};

pub mod macros;

/// Multiplier used by [MulAccumulator::standard].
pub const HASH_MULTIPLIER: u8 = 31;

/// Multiply-accumulate hash combinator; `acc = acc * K + value`, with wrapping arithmetic.
///
/// The result depends on the order values are [mixed](MulAccumulator::mix) in, so callers must
/// always feed fields in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulAccumulator<T> {
    acc: T,
    multiplier: T,
}

impl<T> MulAccumulator<T>
where
    T: Copy + WrappingMul + WrappingAdd + From<u8>,
{
    /// Start a new accumulator with an explicit seed and multiplier.
    #[inline]
    pub fn new(seed: T, multiplier: T) -> Self {
        Self {
            acc: seed,
            multiplier,
        }
    }

    /// Start a new accumulator with the given seed and a multiplier of [HASH_MULTIPLIER].
    #[inline]
    pub fn standard(seed: u8) -> Self {
        Self::new(T::from(seed), T::from(HASH_MULTIPLIER))
    }

    #[inline]
    pub fn mix(&mut self, value: T) -> &mut Self {
        self.acc = self.acc.wrapping_mul(&self.multiplier).wrapping_add(&value);
        self
    }

    /// Mix every value of an iterator, in iteration order.
    pub fn mix_all(&mut self, values: impl IntoIterator<Item = T>) -> &mut Self {
        for v in values {
            self.mix(v);
        }
        self
    }

    #[inline]
    pub fn finish(&self) -> T {
        self.acc
    }
}
