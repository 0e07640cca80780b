//! Batch relay to the shared batch executor.
//!
//! The batch is forwarded to Multicall3's `aggregate3Value` by delegatecall,
//! so every sub-call is attributed to the current execution context (the
//! host when the router itself runs borrowed). The router's only contract is
//! faithful relay: `allowFailure` is honored by the executor, and an
//! executor-level revert is surfaced with its payload attached.

use alloc::vec::Vec;

use alloy_sol_types::{sol, SolCall};
use stylus_sdk::{
    alloy_primitives::{Address, U256},
    prelude::*,
    stylus_core::calls::context::Call,
};

use conduit_router_types::{CallOutcome, CallSpec};

use crate::{
    constants::BATCH_EXECUTOR,
    errors::{revert_data, ExecutorReverted, MalformedExecutorReturn, RouterError},
    router::Router,
};

sol! {
    /// Multicall3.Call3Value (struct names are not part of the ABI).
    struct ExecutorCall {
        address target;
        bool allowFailure;
        uint256 value;
        bytes callData;
    }

    /// Multicall3.Result.
    struct ExecutorResult {
        bool success;
        bytes returnData;
    }

    function aggregate3Value(ExecutorCall[] calldata calls) external payable returns (ExecutorResult[] memory returnData);
}

/// Encode the executor calldata for a batch.
pub fn encode_batch(batch: Vec<CallSpec>) -> Vec<u8> {
    let calls = batch
        .into_iter()
        .map(|spec| ExecutorCall {
            target: spec.target,
            allowFailure: spec.allow_failure,
            value: spec.value,
            callData: spec.payload.into(),
        })
        .collect();
    aggregate3ValueCall { calls }.abi_encode()
}

/// Decode the executor's per-call outcomes.
pub fn decode_outcomes(data: &[u8]) -> Result<Vec<CallOutcome>, RouterError> {
    let decoded = aggregate3ValueCall::abi_decode_returns(data, true)
        .map_err(|_| RouterError::MalformedExecutorReturn(MalformedExecutorReturn {}))?;
    Ok(decoded
        .returnData
        .into_iter()
        .map(|r| CallOutcome {
            success: r.success,
            return_data: r.returnData.to_vec(),
        })
        .collect())
}

impl Router {
    pub(crate) fn forward_batch(
        &mut self,
        batch: Vec<(Address, U256, Vec<u8>, bool)>,
    ) -> Result<Vec<(bool, Vec<u8>)>, RouterError> {
        let specs: Vec<CallSpec> = batch.into_iter().map(CallSpec::from).collect();
        let data = encode_batch(specs);

        // SAFETY: the executor is the fixed Multicall3 deployment, whose code
        // is trusted with the current storage context.
        let out = unsafe {
            self.vm()
                .delegate_call(&Call::new(), BATCH_EXECUTOR, &data)
        }
        .map_err(|err| {
            RouterError::ExecutorReverted(ExecutorReverted {
                revertData: revert_data(err).into(),
            })
        })?;

        Ok(decode_outcomes(&out)?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
