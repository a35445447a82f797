//! Contains functions for generating arbitrary values for use by
//! [`proptest`](https://crates.io/crates/proptest).

use proptest::{array, collection, prelude::*};

use crate::{AccessRights, Key, URef, U512};

pub fn u8_slice_32() -> impl Strategy<Value = [u8; 32]> {
    array::uniform32(any::<u8>())
}

pub fn access_rights_arb() -> impl Strategy<Value = AccessRights> {
    prop_oneof![
        Just(AccessRights::READ),
        Just(AccessRights::ADD),
        Just(AccessRights::WRITE),
        Just(AccessRights::READ_ADD),
        Just(AccessRights::READ_WRITE),
        Just(AccessRights::ADD_WRITE),
        Just(AccessRights::READ_ADD_WRITE),
    ]
}

pub fn uref_arb() -> impl Strategy<Value = URef> {
    (u8_slice_32(), access_rights_arb())
        .prop_map(|(addr, access_rights)| URef::new(addr, access_rights))
}

pub fn key_arb() -> impl Strategy<Value = Key> {
    prop_oneof![
        u8_slice_32().prop_map(Key::Account),
        u8_slice_32().prop_map(Key::Hash),
        uref_arb().prop_map(Key::URef),
    ]
}

pub fn u512_arb() -> impl Strategy<Value = U512> {
    collection::vec(any::<u8>(), 0..=64).prop_map(|bytes| U512::from_little_endian(&bytes))
}
