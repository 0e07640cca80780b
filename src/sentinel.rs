//! Namespaced sentinel flag store.
//!
//! Sentinel state lives in the *host's* storage (the router runs borrowed),
//! so it is addressed as explicit hashed slots rather than a `sol_storage!`
//! field: `slot = keccak256(keccak256(NAMESPACE) || opHash)`.
//!
//! The Stylus host exposes no per-transaction (transient) storage primitive,
//! so the durable tier backs the store. A durable sentinel outlives the
//! transaction that wrote it, which is why every gated consumer must clear
//! the flag on consumption (`Router::validate_and_sweep` does).

use alloc::vec::Vec;

use stylus_sdk::{
    alloy_primitives::{keccak256, B256, FixedBytes, U256},
    prelude::*,
};

use crate::{
    constants::{SENTINEL_NAMESPACE, SENTINEL_SUCCESS},
    router::Router,
};

/// Derive the storage slot for an operation hash.
pub fn sentinel_slot(op_hash: FixedBytes<32>) -> U256 {
    let namespace = keccak256(SENTINEL_NAMESPACE);
    let mut buf = Vec::with_capacity(32 + 32);
    buf.extend_from_slice(namespace.as_slice());
    buf.extend_from_slice(op_hash.as_slice());
    U256::from_be_bytes(keccak256(buf).0)
}

impl Router {
    pub(crate) fn sentinel_get(&self, op_hash: FixedBytes<32>) -> bool {
        self.vm().storage_load_bytes32(sentinel_slot(op_hash)) == SENTINEL_SUCCESS
    }

    pub(crate) fn sentinel_set(&mut self, op_hash: FixedBytes<32>) {
        self.store_sentinel_word(op_hash, SENTINEL_SUCCESS);
    }

    pub(crate) fn sentinel_clear(&mut self, op_hash: FixedBytes<32>) {
        self.store_sentinel_word(op_hash, B256::ZERO);
    }

    fn store_sentinel_word(&mut self, op_hash: FixedBytes<32>, word: B256) {
        // SAFETY: the slot is namespaced under SENTINEL_NAMESPACE and cannot
        // alias the router's own `sol_storage!` layout.
        unsafe {
            self.vm().storage_cache_bytes32(sentinel_slot(op_hash), word);
        }
        // Persist before any subsequent external call can observe the slot.
        self.vm().flush_cache(false);
    }
}
