//! Shared types for the Conduit router: call specs, splice logic, and
//! ERC-20 return conventions.
//!
//! Everything here is deterministic byte-level logic with no host dependency,
//! so the same code backs the on-chain router and off-chain tooling.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod calls;
pub mod erc20;
pub mod splice;

pub use calls::{CallOutcome, CallSpec};
pub use splice::SpliceError;
