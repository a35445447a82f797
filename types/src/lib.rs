//! Types used by the stake-bonding transaction executor and by host runtimes
//! which execute it.
//!
//! The crate is `no_std` (with the `std` feature disabled) and is intended to
//! be shared between the in-wasm transaction body and engine-side tooling.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod access_rights;
pub mod account;
pub mod api_error;
pub mod bytesrepr;
mod cl_type;
mod cl_value;
mod contract_ref;
#[cfg(any(feature = "gens", test))]
pub mod gens;
mod key;
pub mod system_contract_errors;
mod system_contract_type;
mod uint;
mod uref;

pub use crate::uint::U512;
pub use access_rights::AccessRights;
pub use api_error::ApiError;
pub use cl_type::{CLType, CLTyped};
pub use cl_value::{CLTypeMismatch, CLValue, CLValueError};
pub use contract_ref::ContractRef;
pub use key::Key;
pub use system_contract_type::SystemContractType;
pub use uref::{URef, UREF_ADDR_LENGTH};
