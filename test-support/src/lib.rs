//! An in-memory host runtime for testing bonding transactions.
//!
//! [`TestContext`] implements the executor's `Host` trait on top of a purse
//! ledger held in memory, with scripted failure points for every host
//! operation the executor consumes. [`TestContextBuilder`] plays the role of
//! a genesis configuration: it seeds the ledger, installs system contracts
//! and stages the transaction's arguments.

mod test_context;

pub use test_context::{
    ContractCall, PurseTransfer, TestContext, TestContextBuilder, DEFAULT_ACCOUNT_INITIAL_BALANCE,
    DEFAULT_POS_CONTRACT_HASH,
};
