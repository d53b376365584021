extern crate num;

use num::PrimInt;

/// Abstraction layer for the bitwise operations on a row.
/// # Purpose
/// The BitOps trait brings in scope the few operations the encoder and the
/// decoder need on an accumulator. These operations make the row logic
/// compatible with any primitive unsigned integer, from [u8] to [u128].
/// # Indexing
/// [BitOps::field] and [BitOps::push_bits] count from the right, like the
/// arithmetic does. The first token pushed ends up in the highest bits.
pub trait BitOps:
    std::ops::BitAnd<Output = Self> +
    std::ops::BitOr<Output = Self> +
    Sized +
    Copy +
    std::ops::Not<Output = Self> +
    std::cmp::PartialEq
{
    /// Number of bits in the underlying integer.
    fn n_bits() -> usize;
    /// Returns a run of `width` set bits at the low end. Saturates to an all
    /// set bitstring when `width` is the full width or more.
    fn low_ones(width: usize) -> Self;
    /// Shifts the accumulator left by `width` and places the low `width` bits
    /// of `code` in the vacated positions.
    fn push_bits(self, code: Self, width: usize) -> Self;
    /// Extracts the `width` bits whose lowest bit sits `offset` bits from the
    /// right.
    fn field(self, offset: usize, width: usize) -> Self;
    /// True if `self` holds the bits of `pattern` wherever `mask` is set.
    fn matches(self, pattern: Self, mask: Self) -> bool {
        (self & mask) == (pattern & mask)
    }
}

/// BitWise operations for all primitive ints. All methods are inlined and use
/// shifts of a bitmask. Shifts by the full width are never issued.
impl<I> BitOps for I
    where I: PrimInt + From<u8>
{
    #[inline(always)]
    fn n_bits() -> usize {
        std::mem::size_of::<I>() * u8::BITS as usize
    }
    #[inline(always)]
    fn low_ones(width: usize) -> Self {
        if width >= <I as BitOps>::n_bits() {
            return <I>::max_value();
        }
        let one: I = 1.into();
        (one << width) - one
    }
    #[inline(always)]
    fn push_bits(self, code: Self, width: usize) -> Self {
        let code = code & <I as BitOps>::low_ones(width);
        if width >= <I as BitOps>::n_bits() {
            return code;
        }
        (self << width) | code
    }
    #[inline(always)]
    fn field(self, offset: usize, width: usize) -> Self {
        if offset >= <I as BitOps>::n_bits() {
            return 0.into();
        }
        (self >> offset) & <I as BitOps>::low_ones(width)
    }
}
