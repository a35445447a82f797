//! Contains types associated with accounts and the purses which hold their
//! funds.

use crate::URef;

/// A reference to a purse: an account-like entity capable of holding a
/// transferable value balance.
///
/// A `PurseId` can only be built from a [`URef`] the host has already
/// granted; possession of one confers the right to operate on the underlying
/// purse within the rules the host enforces.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PurseId(URef);

impl PurseId {
    /// Wraps a granted [`URef`] as a purse reference.
    pub fn new(uref: URef) -> Self {
        PurseId(uref)
    }

    /// Returns the underlying [`URef`].
    pub fn value(&self) -> URef {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccessRights;

    #[test]
    fn purse_id_exposes_its_uref() {
        let uref = URef::new([7u8; 32], AccessRights::READ_ADD_WRITE);
        let purse_id = PurseId::new(uref);
        assert_eq!(purse_id.value(), uref);
    }
}
