//! The bonding transaction: locks value in a freshly created escrow purse
//! and registers that value as bonded stake with the proof-of-stake
//! contract.

// Can be removed once https://github.com/rust-lang/rustfmt/issues/3362 is resolved.
#[rustfmt::skip]
use alloc::vec;

use types::{
    bytesrepr, system_contract_errors::pos, ApiError, Key, SystemContractType, U512,
};

use crate::{args_parser::ArgsParser, host::Host};

const POS_ACTION: &str = "bond";

enum Arg {
    BondAmount = 0,
}

/// The transaction body.
///
/// Runs the bonding flow and reverts the transaction with the most specific
/// applicable code if any stage fails. Exactly one of normal completion or a
/// single revert results.
pub fn call<H: Host>(host: &mut H) {
    if let Err(error) = execute(host) {
        host.revert(error.into());
    }
}

/// Executes the bonding flow: resolves the proof-of-stake contract and the
/// caller's main purse, creates the bonding purse, decodes the requested
/// amount, funds the bonding purse, and issues the bond request.
///
/// The bonding purse is created and funded before the proof-of-stake
/// contract ever sees a reference to it; any failure terminates the flow
/// without executing the stages that follow it.
pub fn execute<H: Host>(host: &mut H) -> Result<(), ApiError> {
    let pos_ref = host
        .get_system_contract(SystemContractType::ProofOfStake)
        .ok_or(ApiError::InvalidSystemContract)?;

    let source_purse = host.get_main_purse().ok_or(ApiError::MissingArgument)?;

    let bonding_purse = host.create_purse().ok_or(ApiError::PurseNotCreated)?;

    let bond_amount = get_bond_amount(host)?;

    let transfer_outcome =
        host.transfer_from_purse_to_purse(source_purse, bonding_purse, bond_amount);
    if transfer_outcome != 0 {
        return Err(ApiError::Transfer);
    }

    let bonding_purse_key = Key::URef(bonding_purse.value());
    let args = (POS_ACTION, bond_amount, bonding_purse_key).parse()?;
    let extra_urefs = vec![bonding_purse_key];

    host.call_contract(pos_ref.into(), args, extra_urefs)
        .ok_or(ApiError::from(pos::Error::BondTransferFailed))?;

    Ok(())
}

// No range validation happens here: zero and maximal amounts are forwarded
// unchanged, and acceptance is the proof-of-stake contract's decision.
fn get_bond_amount<H: Host>(host: &H) -> Result<U512, ApiError> {
    let bytes = host
        .get_arg(Arg::BondAmount as u32)
        .ok_or(ApiError::MissingArgument)?;
    bytesrepr::deserialize(bytes).map_err(|_| ApiError::InvalidArgument)
}
