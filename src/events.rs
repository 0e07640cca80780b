//! Observable side effects.
//!
//! Events are only emitted on paths that complete; failures revert, and the
//! revert payload carries the diagnostics instead.

use alloy_sol_types::sol;

sol! {
    /// A wrapped call for `opHash` completed without reverting.
    event SentinelSet(bytes32 indexed opHash);

    /// The sentinel for `opHash` was consumed by a gated settlement.
    event SentinelCleared(bytes32 indexed opHash);

    /// A placeholder word was replaced with a live balance and the target
    /// call succeeded. `offset == 0` with a zero placeholder denotes the
    /// passthrough (no-injection) case.
    ///
    /// No success flag or result field: a failed injection reverts (so the
    /// event is never emitted), and the target's return data is already
    /// surfaced to the caller as the operation's return value.
    event BalanceInjected(
        address indexed asset,
        address indexed target,
        uint256 offset,
        bytes32 placeholder,
        uint256 amount
    );

    /// Residual balance moved to a recipient.
    event Swept(address indexed asset, address indexed recipient, uint256 amount);

    /// A refund was honored in full and the remaining residual swept.
    event RefundSwept(
        address indexed asset,
        address refundRecipient,
        uint256 refundAmount,
        address sweepRecipient,
        uint256 sweptAmount
    );
}
