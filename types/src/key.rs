//! Home of [`Key`], the named capability reference under which entities are
//! addressed when building contract calls.

use alloc::{format, string::String, vec::Vec};
use core::fmt::{self, Debug, Display, Formatter};

use hex_fmt::HexFmt;

use crate::{
    bytesrepr::{self, Error, FromBytes, ToBytes, U8_SERIALIZED_LENGTH},
    uref::{URef, UREF_SERIALIZED_LENGTH},
};

/// The number of bytes in the address of a [`Key::Account`] or [`Key::Hash`].
pub const KEY_ADDR_LENGTH: usize = 32;

/// The number of bytes in a serialized [`Key::URef`].
pub const KEY_UREF_SERIALIZED_LENGTH: usize = U8_SERIALIZED_LENGTH + UREF_SERIALIZED_LENGTH;

const ACCOUNT_TAG: u8 = 0;
const HASH_TAG: u8 = 1;
const UREF_TAG: u8 = 2;

/// A capability reference wrapping a purse, account or contract.
///
/// Possession of a `Key` (or the [`URef`] inside one) is what grants access;
/// a `Key` is not a plain address.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key {
    /// A key under which an account is stored.
    Account([u8; KEY_ADDR_LENGTH]),
    /// A key under which a contract is stored.
    Hash([u8; KEY_ADDR_LENGTH]),
    /// A key wrapping an unforgeable reference.
    URef(URef),
}

impl Key {
    /// Returns a reference to the wrapped [`URef`] if `self` is the `URef`
    /// variant.
    pub fn as_uref(&self) -> Option<&URef> {
        match self {
            Key::URef(uref) => Some(uref),
            _ => None,
        }
    }

    /// Formats `self` in a unique way suitable for use as a name in a
    /// named-key map.
    pub fn as_string(&self) -> String {
        match self {
            Key::Account(addr) => format!("account-{}", base16::encode_lower(addr)),
            Key::Hash(addr) => format!("hash-{}", base16::encode_lower(addr)),
            Key::URef(uref) => uref.as_string(),
        }
    }
}

impl From<URef> for Key {
    fn from(uref: URef) -> Self {
        Key::URef(uref)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Key::Account(addr) => write!(f, "Key::Account({})", HexFmt(addr)),
            Key::Hash(addr) => write!(f, "Key::Hash({})", HexFmt(addr)),
            Key::URef(uref) => write!(f, "Key::{}", uref),
        }
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ToBytes for Key {
    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        match self {
            Key::Account(addr) => {
                let mut result = Vec::with_capacity(U8_SERIALIZED_LENGTH + KEY_ADDR_LENGTH);
                result.push(ACCOUNT_TAG);
                result.append(&mut addr.to_bytes()?);
                Ok(result)
            }
            Key::Hash(addr) => {
                let mut result = Vec::with_capacity(U8_SERIALIZED_LENGTH + KEY_ADDR_LENGTH);
                result.push(HASH_TAG);
                result.append(&mut addr.to_bytes()?);
                Ok(result)
            }
            Key::URef(uref) => {
                let mut result = Vec::with_capacity(KEY_UREF_SERIALIZED_LENGTH);
                result.push(UREF_TAG);
                result.append(&mut uref.to_bytes()?);
                Ok(result)
            }
        }
    }
}

impl FromBytes for Key {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), Error> {
        let (tag, rem): (u8, &[u8]) = FromBytes::from_bytes(bytes)?;
        match tag {
            ACCOUNT_TAG => {
                let (addr, rem): ([u8; 32], &[u8]) = FromBytes::from_bytes(rem)?;
                Ok((Key::Account(addr), rem))
            }
            HASH_TAG => {
                let (addr, rem): ([u8; 32], &[u8]) = FromBytes::from_bytes(rem)?;
                Ok((Key::Hash(addr), rem))
            }
            UREF_TAG => {
                let (uref, rem): (URef, &[u8]) = FromBytes::from_bytes(rem)?;
                Ok((Key::URef(uref), rem))
            }
            _ => Err(bytesrepr::Error::FormattingError),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{bytesrepr::deserialize, gens, AccessRights};

    fn round_trip(key: Key) {
        let bytes = key.to_bytes().expect("should serialize");
        let parsed: Key = deserialize(bytes).expect("should deserialize");
        assert_eq!(key, parsed);
    }

    #[test]
    fn variants_round_trip() {
        round_trip(Key::Account([1u8; 32]));
        round_trip(Key::Hash([2u8; 32]));
        round_trip(Key::URef(URef::new([3u8; 32], AccessRights::READ_ADD_WRITE)));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let mut bytes = alloc::vec![3u8];
        bytes.extend(&[0u8; 32][..]);
        let result: Result<Key, Error> = deserialize(bytes);
        assert_eq!(result, Err(Error::FormattingError));
    }

    #[test]
    fn key_as_string() {
        let addr = [0u8; 32];
        assert_eq!(
            Key::Account(addr).as_string(),
            format!("account-{}", "0".repeat(64))
        );
        assert_eq!(Key::Hash(addr).as_string(), format!("hash-{}", "0".repeat(64)));
    }

    proptest! {
        #[test]
        fn bytesrepr_round_trip(key in gens::key_arb()) {
            round_trip(key);
        }
    }
}
