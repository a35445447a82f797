use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

use bitflags::bitflags;

use crate::bytesrepr::{self, Error, FromBytes, ToBytes};

/// The number of bytes in a serialized [`AccessRights`].
pub const ACCESS_RIGHTS_SERIALIZED_LENGTH: usize = 1;

bitflags! {
    /// The rights attached to a [`URef`](crate::URef).
    #[allow(clippy::derive_hash_xor_eq)]
    pub struct AccessRights: u8 {
        /// No rights.
        const NONE = 0;
        /// Permission to read the entity behind the reference.
        const READ  = 0b001;
        /// Permission to write the entity behind the reference.
        const WRITE = 0b010;
        /// Permission to add to the entity behind the reference.
        const ADD   = 0b100;
        /// Permission to read or add.
        const READ_ADD       = Self::READ.bits | Self::ADD.bits;
        /// Permission to read or write.
        const READ_WRITE     = Self::READ.bits | Self::WRITE.bits;
        /// Permission to add or write.
        const ADD_WRITE      = Self::ADD.bits  | Self::WRITE.bits;
        /// Permission to read, add or write.
        const READ_ADD_WRITE = Self::READ.bits | Self::ADD.bits | Self::WRITE.bits;
    }
}

impl AccessRights {
    /// Returns `true` if the `READ` flag is set.
    pub fn is_readable(self) -> bool {
        self & AccessRights::READ == AccessRights::READ
    }

    /// Returns `true` if the `WRITE` flag is set.
    pub fn is_writeable(self) -> bool {
        self & AccessRights::WRITE == AccessRights::WRITE
    }

    /// Returns `true` if the `ADD` flag is set.
    pub fn is_addable(self) -> bool {
        self & AccessRights::ADD == AccessRights::ADD
    }
}

impl Display for AccessRights {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            AccessRights::NONE => write!(f, "NONE"),
            AccessRights::READ => write!(f, "READ"),
            AccessRights::WRITE => write!(f, "WRITE"),
            AccessRights::ADD => write!(f, "ADD"),
            AccessRights::READ_ADD => write!(f, "READ_ADD"),
            AccessRights::READ_WRITE => write!(f, "READ_WRITE"),
            AccessRights::ADD_WRITE => write!(f, "ADD_WRITE"),
            AccessRights::READ_ADD_WRITE => write!(f, "READ_ADD_WRITE"),
            _ => write!(f, "UNKNOWN"),
        }
    }
}

impl ToBytes for AccessRights {
    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        self.bits().to_bytes()
    }
}

impl FromBytes for AccessRights {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), Error> {
        let (bits, rem): (u8, &[u8]) = FromBytes::from_bytes(bytes)?;
        match AccessRights::from_bits(bits) {
            Some(rights) => Ok((rights, rem)),
            None => Err(bytesrepr::Error::FormattingError),
        }
    }
}
