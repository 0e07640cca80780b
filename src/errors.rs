//! Router error surface (Solidity custom errors).
//!
//! Nothing is recovered locally: every failure unwinds to the caller, and
//! downstream revert payloads are attached verbatim for diagnostics.

use alloc::vec::Vec;

use alloy_sol_types::sol;
use stylus_sdk::{
    alloy_primitives::U256,
    stylus_core::calls::errors::Error as CallError,
    stylus_proc::SolidityError,
};

use conduit_router_types::SpliceError;

/// Extract the downstream revert payload from a call error so it can be
/// attached verbatim to the surfaced router error.
pub(crate) fn revert_data(err: CallError) -> Vec<u8> {
    match err {
        CallError::Revert(data) => data,
        _ => Vec::new(),
    }
}

sol! {
    error NotDelegated();
    error ZeroAddress();
    error InvalidOffset(uint256 offset, uint256 payloadLength);
    error PlaceholderMismatch(bytes32 expected, bytes32 found);
    error TargetCallFailed(bytes revertData);
    error ExecutorReverted(bytes revertData);
    error MalformedExecutorReturn();
    error WrappedCallFailed(bytes revertData);
    error SentinelNotSet(bytes32 opHash);
    error RefundShortfall(uint256 requested, uint256 available);
    error TransferFailed(address token);
    error PullFailed(address token);
    error ApproveFailed(address token);
    error BalanceReadFailed(address token);
}

#[derive(SolidityError)]
pub enum RouterError {
    NotDelegated(NotDelegated),
    ZeroAddress(ZeroAddress),
    InvalidOffset(InvalidOffset),
    PlaceholderMismatch(PlaceholderMismatch),
    TargetCallFailed(TargetCallFailed),
    ExecutorReverted(ExecutorReverted),
    MalformedExecutorReturn(MalformedExecutorReturn),
    WrappedCallFailed(WrappedCallFailed),
    SentinelNotSet(SentinelNotSet),
    RefundShortfall(RefundShortfall),
    TransferFailed(TransferFailed),
    PullFailed(PullFailed),
    ApproveFailed(ApproveFailed),
    BalanceReadFailed(BalanceReadFailed),
}

impl From<SpliceError> for RouterError {
    fn from(err: SpliceError) -> Self {
        match err {
            SpliceError::InvalidOffset {
                offset,
                payload_len,
            } => RouterError::InvalidOffset(InvalidOffset {
                offset: U256::from(offset),
                payloadLength: U256::from(payload_len),
            }),
            SpliceError::PlaceholderMismatch { expected, found } => {
                RouterError::PlaceholderMismatch(PlaceholderMismatch { expected, found })
            }
        }
    }
}
