//! Well-known addresses and domain constants.

use stylus_sdk::alloy_primitives::{Address, B256};

/// Canonical CREATE2 deployment address of this router.
///
/// The router is deployed deterministically to the same address on every
/// chain; a guarded entry point observing this address as its execution
/// context is being called directly rather than delegated into.
pub const ROUTER_CANONICAL: Address = Address::new([
    0x00, 0x00, 0x00, 0x00, 0x00, 0xd1, 0x5c, 0x21, 0x1e, 0x41, 0x99, 0x43, 0x7b, 0xbf, 0x6a,
    0x1d, 0x8e, 0x6b, 0xdf, 0x1e,
]);

/// Multicall3 deterministic deployment (0xcA11bde05977b3631167028862bE2a173976CA11).
///
/// The shared batch executor; its code is trusted and its address is
/// integrity-critical.
pub const BATCH_EXECUTOR: Address = Address::new([
    0xca, 0x11, 0xbd, 0xe0, 0x59, 0x77, 0xb3, 0x63, 0x11, 0x67, 0x02, 0x88, 0x62, 0xbe, 0x2a,
    0x17, 0x39, 0x76, 0xca, 0x11,
]);

/// Domain-separation namespace for sentinel slots, so sentinel words can
/// never alias the host application's storage layout.
pub const SENTINEL_NAMESPACE: &[u8] = b"org.conduit.router.sentinel";

/// Word stored at a sentinel slot after a wrapped call returns without
/// reverting. Absence reads as `B256::ZERO`.
pub const SENTINEL_SUCCESS: B256 = B256::with_last_byte(1);

/// Gas cap for `balanceOf` staticcalls.
pub const BALANCE_READ_GAS_CAP: u64 = 100_000;
