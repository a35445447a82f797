//! The interface a transaction body consumes from its host runtime.

use alloc::vec::Vec;

use types::{account::PurseId, CLValue, ContractRef, Key, SystemContractType, U512};

/// Host functions available to a transaction body.
///
/// The host serializes transaction execution: no other transaction can
/// interleave with the one being executed, and every operation here returns
/// synchronously. Implementations must be deterministic; given identical
/// state and arguments they must produce identical results on every
/// replaying node.
pub trait Host {
    /// Resolves a system contract by its well-known identity.
    fn get_system_contract(&self, system_contract_type: SystemContractType)
        -> Option<ContractRef>;

    /// Returns the main purse of the account executing the transaction.
    fn get_main_purse(&self) -> Option<PurseId>;

    /// Creates a new purse with a zero balance, owned by the executing
    /// context.
    fn create_purse(&mut self) -> Option<PurseId>;

    /// Returns the raw bytes of the i-th argument passed to the transaction,
    /// or `None` if no such argument was supplied.
    fn get_arg(&self, index: u32) -> Option<Vec<u8>>;

    /// Moves `amount` from `source` to `target`.
    ///
    /// Returns `0` on success. Any nonzero code is a failure and leaves both
    /// balances unchanged; the code carries no further meaning at this
    /// layer.
    fn transfer_from_purse_to_purse(
        &mut self,
        source: PurseId,
        target: PurseId,
        amount: U512,
    ) -> i32;

    /// Calls the contract stored under `contract_key` with the given
    /// argument sequence, additionally granting the callee access to
    /// `extra_urefs`.
    ///
    /// Returns the payload produced by the callee, or `None` if the call
    /// failed.
    fn call_contract(
        &mut self,
        contract_key: Key,
        args: Vec<CLValue>,
        extra_urefs: Vec<Key>,
    ) -> Option<CLValue>;

    /// Terminates the transaction, surfacing `status` to the caller.
    ///
    /// All ledger effects of the transaction are rolled back by the host.
    fn revert(&mut self, status: u32);
}
