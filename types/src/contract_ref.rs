use crate::{Key, URef};

/// A reference to a contract stored on the network, as resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractRef {
    /// The hash under which the contract is stored.
    Hash([u8; 32]),
    /// The [`URef`] under which the contract is stored.
    URef(URef),
}

impl From<ContractRef> for Key {
    fn from(contract_ref: ContractRef) -> Self {
        match contract_ref {
            ContractRef::Hash(h) => Key::Hash(h),
            ContractRef::URef(uref) => Key::URef(uref),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccessRights;

    #[test]
    fn contract_ref_converts_to_key() {
        assert_eq!(Key::from(ContractRef::Hash([1u8; 32])), Key::Hash([1u8; 32]));

        let uref = URef::new([2u8; 32], AccessRights::READ);
        assert_eq!(Key::from(ContractRef::URef(uref)), Key::URef(uref));
    }
}
