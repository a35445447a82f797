//! Execution logic for the stake-bonding transaction.
//!
//! The transaction body lives in [`bonding`]; everything it needs from the
//! surrounding runtime is consumed through the [`host::Host`] trait, so the
//! same logic runs under the production runtime and under the in-memory test
//! context.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod args_parser;
pub mod bonding;
pub mod host;
