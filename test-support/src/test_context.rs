use std::collections::BTreeMap;

use log::debug;

use executor::host::Host;
use types::{
    account::PurseId, api_error, bytesrepr::ToBytes, AccessRights, ApiError, CLValue, ContractRef,
    Key, SystemContractType, URef, U512,
};

/// Initial balance of the default account's main purse, in motes.
pub const DEFAULT_ACCOUNT_INITIAL_BALANCE: u64 = 100_000_000;

/// Hash under which the proof-of-stake contract is installed by default.
pub const DEFAULT_POS_CONTRACT_HASH: [u8; 32] = [1u8; 32];

// Host codes returned by the mock transfer primitive. Deliberately opaque to
// the executor, which only distinguishes zero from nonzero.
const TRANSFER_SOURCE_NOT_FOUND: i32 = 1;
const TRANSFER_TARGET_NOT_FOUND: i32 = 2;
const TRANSFER_INSUFFICIENT_FUNDS: i32 = 3;

/// A purse-to-purse transfer applied by the ledger.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PurseTransfer {
    pub source: PurseId,
    pub target: PurseId,
    pub amount: U512,
}

/// A contract invocation observed by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractCall {
    pub contract_key: Key,
    pub args: Vec<CLValue>,
    pub extra_urefs: Vec<Key>,
}

/// Context in which to run a bonding transaction: an in-memory purse ledger
/// plus scripted behavior for every host operation the transaction consumes.
///
/// Purse addresses are allocated from a counter, so identical session
/// histories produce identical ledgers on every run.
pub struct TestContext {
    system_contracts: BTreeMap<u32, ContractRef>,
    main_purse: Option<PurseId>,
    balances: BTreeMap<[u8; 32], U512>,
    args: Vec<Vec<u8>>,
    next_purse_index: u64,
    create_purse_fails: bool,
    forced_transfer_code: Option<i32>,
    pos_call_fails: bool,
    transfers: Vec<PurseTransfer>,
    calls: Vec<ContractCall>,
    revert_status: Option<u32>,
}

impl TestContext {
    /// Runs `session` against the current ledger, then commits or rolls
    /// back: if the session reverted, all ledger effects (balances and purse
    /// creations) are undone, exactly as the production host rolls back a
    /// reverted transaction.
    ///
    /// The [`transfers`](TestContext::transfers) and
    /// [`calls`](TestContext::calls) journals record what happened during
    /// the session and survive the rollback.
    pub fn run<F: FnOnce(&mut TestContext)>(&mut self, session: F) -> Result<(), ApiError> {
        let balances = self.balances.clone();
        let next_purse_index = self.next_purse_index;
        self.revert_status = None;

        session(&mut *self);

        match self.revert_status {
            None => Ok(()),
            Some(status) => {
                self.balances = balances;
                self.next_purse_index = next_purse_index;
                api_error::result_from(status as i32)
            }
        }
    }

    /// Returns the main purse configured for the executing account, if any.
    pub fn main_purse(&self) -> Option<PurseId> {
        self.main_purse
    }

    /// Gets the committed balance of the given purse, or `None` if the purse
    /// does not exist.
    pub fn get_balance(&self, purse_id: PurseId) -> Option<U512> {
        self.balances.get(&purse_id.value().addr()).cloned()
    }

    /// Gets the committed balance of the account's main purse.
    pub fn get_main_purse_balance(&self) -> U512 {
        let main_purse = self.main_purse.expect("context should have a main purse");
        self.get_balance(main_purse)
            .expect("main purse should have a balance")
    }

    /// The transfers applied by the ledger, in order, including ones later
    /// undone by a rollback.
    pub fn transfers(&self) -> &[PurseTransfer] {
        &self.transfers
    }

    /// The contract invocations observed by the host, in order.
    pub fn calls(&self) -> &[ContractCall] {
        &self.calls
    }

    fn new_purse(&mut self) -> PurseId {
        let mut addr = [0u8; 32];
        addr[..8].copy_from_slice(&self.next_purse_index.to_le_bytes());
        self.next_purse_index += 1;

        let uref = URef::new(addr, AccessRights::READ_ADD_WRITE);
        self.balances.insert(addr, U512::zero());
        debug!("created purse {}", uref);
        PurseId::new(uref)
    }
}

impl Host for TestContext {
    fn get_system_contract(
        &self,
        system_contract_type: SystemContractType,
    ) -> Option<ContractRef> {
        let index: u32 = system_contract_type.into();
        self.system_contracts.get(&index).cloned()
    }

    fn get_main_purse(&self) -> Option<PurseId> {
        self.main_purse
    }

    fn create_purse(&mut self) -> Option<PurseId> {
        if self.create_purse_fails {
            debug!("purse creation failed by script");
            return None;
        }
        Some(self.new_purse())
    }

    fn get_arg(&self, index: u32) -> Option<Vec<u8>> {
        self.args.get(index as usize).cloned()
    }

    fn transfer_from_purse_to_purse(
        &mut self,
        source: PurseId,
        target: PurseId,
        amount: U512,
    ) -> i32 {
        if let Some(code) = self.forced_transfer_code {
            debug!("transfer rejected by script with code {}", code);
            return code;
        }

        let source_addr = source.value().addr();
        let target_addr = target.value().addr();

        let source_balance = match self.balances.get(&source_addr) {
            None => return TRANSFER_SOURCE_NOT_FOUND,
            Some(balance) => *balance,
        };
        if !self.balances.contains_key(&target_addr) {
            return TRANSFER_TARGET_NOT_FOUND;
        }
        if source_balance < amount {
            debug!(
                "transfer of {} rejected: {} holds only {}",
                amount,
                source.value(),
                source_balance
            );
            return TRANSFER_INSUFFICIENT_FUNDS;
        }

        // Debit and credit together, never one without the other.
        self.balances.insert(source_addr, source_balance - amount);
        let target_balance = self.balances[&target_addr];
        self.balances.insert(target_addr, target_balance + amount);

        self.transfers.push(PurseTransfer {
            source,
            target,
            amount,
        });
        debug!("transferred {} from {} to {}", amount, source.value(), target.value());
        0
    }

    fn call_contract(
        &mut self,
        contract_key: Key,
        args: Vec<CLValue>,
        extra_urefs: Vec<Key>,
    ) -> Option<CLValue> {
        debug!("contract call to {} with {} args", contract_key, args.len());
        self.calls.push(ContractCall {
            contract_key,
            args,
            extra_urefs,
        });

        if self.pos_call_fails {
            return None;
        }
        Some(CLValue::from_t(()).expect("should create unit CLValue"))
    }

    fn revert(&mut self, status: u32) {
        debug!("session reverted with status {}", status);
        self.revert_status = Some(status);
    }
}

/// Builder for a [`TestContext`].
pub struct TestContextBuilder {
    initial_balance: U512,
    install_pos: bool,
    create_main_purse: bool,
    args: Vec<Vec<u8>>,
    create_purse_fails: bool,
    forced_transfer_code: Option<i32>,
    pos_call_fails: bool,
}

impl TestContextBuilder {
    /// Constructs a new `TestContextBuilder` initialised with default
    /// values: the proof-of-stake contract installed at
    /// [`DEFAULT_POS_CONTRACT_HASH`] and a main purse holding
    /// [`DEFAULT_ACCOUNT_INITIAL_BALANCE`] motes.
    pub fn new() -> Self {
        TestContextBuilder {
            initial_balance: U512::from(DEFAULT_ACCOUNT_INITIAL_BALANCE),
            install_pos: true,
            create_main_purse: true,
            args: Vec::new(),
            create_purse_fails: false,
            forced_transfer_code: None,
            pos_call_fails: false,
        }
    }

    /// Returns `self` with the main purse seeded with `initial_balance`
    /// motes instead of the default.
    pub fn with_main_purse_balance(mut self, initial_balance: U512) -> Self {
        self.initial_balance = initial_balance;
        self
    }

    /// Returns `self` with `arg` appended to the transaction's argument
    /// list in serialized form.
    pub fn with_arg<T: ToBytes>(mut self, arg: T) -> Self {
        let bytes = types::bytesrepr::serialize(arg).expect("should serialize arg");
        self.args.push(bytes);
        self
    }

    /// Returns `self` with raw `bytes` appended to the transaction's
    /// argument list unmodified.
    pub fn with_raw_arg(mut self, bytes: Vec<u8>) -> Self {
        self.args.push(bytes);
        self
    }

    /// Returns `self` configured without any proof-of-stake contract
    /// installed, so resolving it fails.
    pub fn without_proof_of_stake(mut self) -> Self {
        self.install_pos = false;
        self
    }

    /// Returns `self` configured without a main purse for the executing
    /// account.
    pub fn without_main_purse(mut self) -> Self {
        self.create_main_purse = false;
        self
    }

    /// Returns `self` configured so purse creation fails.
    pub fn with_purse_creation_failure(mut self) -> Self {
        self.create_purse_fails = true;
        self
    }

    /// Returns `self` configured so every transfer is rejected with the
    /// given nonzero host code.
    pub fn with_transfer_failure(mut self, code: i32) -> Self {
        assert_ne!(code, 0, "a forced transfer failure code must be nonzero");
        self.forced_transfer_code = Some(code);
        self
    }

    /// Returns `self` configured so proof-of-stake invocations produce no
    /// payload.
    pub fn with_failing_proof_of_stake(mut self) -> Self {
        self.pos_call_fails = true;
        self
    }

    /// Builds the [`TestContext`].
    pub fn build(self) -> TestContext {
        let mut context = TestContext {
            system_contracts: BTreeMap::new(),
            main_purse: None,
            balances: BTreeMap::new(),
            args: self.args,
            next_purse_index: 0,
            create_purse_fails: self.create_purse_fails,
            forced_transfer_code: self.forced_transfer_code,
            pos_call_fails: self.pos_call_fails,
            transfers: Vec::new(),
            calls: Vec::new(),
            revert_status: None,
        };

        if self.install_pos {
            let index: u32 = SystemContractType::ProofOfStake.into();
            context
                .system_contracts
                .insert(index, ContractRef::Hash(DEFAULT_POS_CONTRACT_HASH));
        }

        if self.create_main_purse {
            let main_purse = context.new_purse();
            context
                .balances
                .insert(main_purse.value().addr(), self.initial_balance);
            context.main_purse = Some(main_purse);
        }

        context
    }
}

impl Default for TestContextBuilder {
    fn default() -> Self {
        TestContextBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_purses(context: &mut TestContext) -> (PurseId, PurseId) {
        let main_purse = context.main_purse().expect("should have a main purse");
        let other = context.create_purse().expect("should create purse");
        (main_purse, other)
    }

    #[test]
    fn transfer_debits_and_credits_together() {
        let mut context = TestContextBuilder::new().build();
        let (source, target) = two_purses(&mut context);

        let outcome = context.transfer_from_purse_to_purse(source, target, U512::from(500u64));
        assert_eq!(outcome, 0);
        assert_eq!(
            context.get_balance(source),
            Some(U512::from(DEFAULT_ACCOUNT_INITIAL_BALANCE - 500))
        );
        assert_eq!(context.get_balance(target), Some(U512::from(500u64)));
        assert_eq!(context.transfers().len(), 1);
    }

    #[test]
    fn insufficient_funds_leave_balances_untouched() {
        let mut context = TestContextBuilder::new()
            .with_main_purse_balance(U512::from(10u64))
            .build();
        let (source, target) = two_purses(&mut context);

        let outcome = context.transfer_from_purse_to_purse(source, target, U512::from(11u64));
        assert_ne!(outcome, 0);
        assert_eq!(context.get_balance(source), Some(U512::from(10u64)));
        assert_eq!(context.get_balance(target), Some(U512::zero()));
        assert!(context.transfers().is_empty());
    }

    #[test]
    fn transfer_to_unknown_purse_is_rejected() {
        let mut context = TestContextBuilder::new().build();
        let source = context.main_purse().expect("should have a main purse");
        let unknown = PurseId::new(URef::new([99u8; 32], AccessRights::READ_ADD_WRITE));

        let outcome = context.transfer_from_purse_to_purse(source, unknown, U512::one());
        assert_ne!(outcome, 0);
        assert!(context.transfers().is_empty());
    }

    #[test]
    fn purse_allocation_is_deterministic() {
        let mut context_a = TestContextBuilder::new().build();
        let mut context_b = TestContextBuilder::new().build();

        let purse_a = context_a.create_purse().expect("should create purse");
        let purse_b = context_b.create_purse().expect("should create purse");
        assert_eq!(purse_a, purse_b);
    }

    #[test]
    fn run_rolls_back_reverted_sessions() {
        let mut context = TestContextBuilder::new().build();
        let main_purse = context.main_purse().expect("should have a main purse");

        let result = context.run(|host| {
            let escrow = host.create_purse().expect("should create purse");
            let outcome = host.transfer_from_purse_to_purse(main_purse, escrow, U512::one());
            assert_eq!(outcome, 0);
            host.revert(u32::from(ApiError::User(0)));
        });

        assert_eq!(result, Err(ApiError::User(0)));
        // Committed state is untouched; the journal still shows the attempt.
        assert_eq!(
            context.get_main_purse_balance(),
            U512::from(DEFAULT_ACCOUNT_INITIAL_BALANCE)
        );
        assert_eq!(context.transfers().len(), 1);
    }

    #[test]
    fn run_commits_successful_sessions() {
        let mut context = TestContextBuilder::new().build();
        let main_purse = context.main_purse().expect("should have a main purse");

        let result = context.run(|host| {
            let escrow = host.create_purse().expect("should create purse");
            let outcome = host.transfer_from_purse_to_purse(main_purse, escrow, U512::one());
            assert_eq!(outcome, 0);
        });

        assert_eq!(result, Ok(()));
        assert_eq!(
            context.get_main_purse_balance(),
            U512::from(DEFAULT_ACCOUNT_INITIAL_BALANCE - 1)
        );
    }
}
