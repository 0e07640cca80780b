//! Conduit router: a conditional delegated-execution and settlement engine
//! for smart-account hosts.
//!
//! The router is meant to run **borrowed** inside a host account's execution
//! context (delegatecall). It provides:
//! - balance injection: splicing a just-measured balance into a pre-built
//!   call payload without re-signing it (`injectAndCall`);
//! - batched forwarding to the shared batch executor with the host's
//!   identity preserved (`executeBatch`);
//! - sentinel-gated settlement: sweep and refund-then-sweep of residual
//!   balances, gated on whether an earlier leg actually succeeded
//!   (`validateAndSweep` / `handle`).
//!
//! Authorization is entirely the host's responsibility; the router exposes
//! no signature scheme of its own.

#![cfg_attr(not(any(test, feature = "export-abi")), no_std)]

extern crate alloc;

pub mod batch;
pub mod constants;
pub mod errors;
pub mod events;
pub mod router;
pub mod sentinel;
pub mod transfer;


pub use router::Router;
