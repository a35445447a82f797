use alloc::vec::Vec;

use num_traits::{Bounded, One, Zero};

use crate::bytesrepr::{self, Error, FromBytes, ToBytes};

/// The number of bytes in a fully-populated [`U512`].
const U512_TOTAL_BYTES: usize = 64;

#[allow(
    clippy::assign_op_pattern,
    clippy::ptr_offset_with_cast,
    clippy::range_plus_one,
    clippy::transmute_ptr_to_ptr
)]
mod macro_code {
    use uint::construct_uint;

    construct_uint! {
        pub struct U512(8);
    }
}

pub use self::macro_code::U512;

// Wire format: length prefix, then little-endian bytes with trailing zeros
// trimmed.
impl ToBytes for U512 {
    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut buf = [0u8; U512_TOTAL_BYTES];
        self.to_little_endian(&mut buf);
        let mut non_zero_bytes: Vec<u8> =
            buf.iter().rev().skip_while(|b| **b == 0).cloned().collect();
        let num_bytes = non_zero_bytes.len() as u8;
        non_zero_bytes.push(num_bytes);
        non_zero_bytes.reverse();
        Ok(non_zero_bytes)
    }
}

impl FromBytes for U512 {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), Error> {
        let (num_bytes, rem): (u8, &[u8]) = FromBytes::from_bytes(bytes)?;

        if num_bytes as usize > U512_TOTAL_BYTES {
            Err(Error::FormattingError)
        } else {
            let (value, rem) = bytesrepr::safe_split_at(rem, num_bytes as usize)?;
            let result = U512::from_little_endian(value);
            Ok((result, rem))
        }
    }
}

// Trait implementations unifying U512 with the num_traits numeric types.
impl Zero for U512 {
    fn zero() -> Self {
        U512::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl One for U512 {
    fn one() -> Self {
        U512::one()
    }
}

impl Bounded for U512 {
    fn min_value() -> Self {
        U512::zero()
    }

    fn max_value() -> Self {
        U512::MAX
    }
}
