//! Bit manipulation on integer presence vectors
//!
//! Presence vectors are 1, 2 or 4 byte unsigned integers. Bit positions past the
//! integer's width are ignored: testing them yields `false` and setting them leaves
//! the vector untouched.

/// Bit access on the unsigned integers used as presence vectors
pub trait BitVector: Copy {
    /// Width of the vector in bits
    const BITS: u32;

    /// True when `bit` is set
    fn is_bit_set(self, bit: u32) -> bool;

    /// Set (`value = true`) or clear (`value = false`) `bit` in place
    fn set_bit(&mut self, bit: u32, value: bool);
}

macro_rules! impl_bit_vector {
    ($($ty:ty),*) => {
        $(
            impl BitVector for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn is_bit_set(self, bit: u32) -> bool {
                    match (1 as $ty).checked_shl(bit) {
                        Some(mask) => (self & mask) != 0,
                        None => false,
                    }
                }

                #[inline]
                fn set_bit(&mut self, bit: u32, value: bool) {
                    if let Some(mask) = (1 as $ty).checked_shl(bit) {
                        if value {
                            *self |= mask;
                        } else {
                            *self &= !mask;
                        }
                    }
                }
            }
        )*
    };
}

impl_bit_vector!(u8, u16, u32, u64);

/// Free-function form of [`BitVector::is_bit_set`]
#[inline]
pub fn is_bit_set<T: BitVector>(vector: T, bit: u32) -> bool {
    vector.is_bit_set(bit)
}

/// Free-function form of [`BitVector::set_bit`]
#[inline]
pub fn set_bit<T: BitVector>(vector: &mut T, bit: u32, value: bool) {
    vector.set_bit(bit, value);
}
