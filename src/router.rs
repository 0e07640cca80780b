//! Stylus router contract: guarded invocation, balance injection, batch
//! forwarding, and sentinel-gated settlement.
//!
//! Design notes:
//! - Guarded entry points must run **borrowed** (delegatecalled) inside the
//!   host's context; a direct call would act on the router's own balance and
//!   storage, so it is rejected outright with `NotDelegated`.
//! - Residual balances are always re-measured immediately before use; no
//!   operation acts on a balance reading taken before an external call.
//! - The sentinel for an operation hash is written only after the wrapped
//!   call returns without reverting, and is cleared before any gated
//!   value-moving action.

use alloc::{vec, vec::Vec};

use stylus_sdk::{
    alloy_primitives::{Address, FixedBytes, U256},
    prelude::*,
    stylus_core::calls::context::Call,
};

use conduit_router_types::splice;

use crate::{
    constants::ROUTER_CANONICAL,
    errors::{
        revert_data, InvalidOffset, NotDelegated, RefundShortfall, RouterError, SentinelNotSet,
        TargetCallFailed, WrappedCallFailed, ZeroAddress,
    },
    events::{BalanceInjected, RefundSwept, SentinelCleared, SentinelSet, Swept},
};

sol_storage! {
    /// The router keeps no declared storage of its own: sentinel words are
    /// written to namespaced hashed slots (see `sentinel`), and everything
    /// else lives in the balances of whatever context it executes in.
    #[entrypoint]
    pub struct Router {
    }
}

#[public]
impl Router {
    /// Splice the executing context's residual balance of `asset` into
    /// `payload` at `offset` (replacing `placeholder`), then dispatch to
    /// `target`. Delegated contexts only.
    ///
    /// Native asset (`asset == 0`): the balance rides as call value.
    /// Token asset: the target's allowance is set to exactly the balance and
    /// the call carries no value.
    #[payable]
    pub fn inject_and_call(
        &mut self,
        asset: Address,
        target: Address,
        payload: Vec<u8>,
        offset: U256,
        placeholder: FixedBytes<32>,
    ) -> Result<Vec<u8>, RouterError> {
        self.ensure_delegated()?;
        self.inject_with_context_balance(asset, target, payload, offset, placeholder)
    }

    /// Injection variant for ordinary (non-delegated) invocation: first pull
    /// `amount` of `asset` from `payer` into the executing context, then
    /// inject the context's (now funded) balance.
    ///
    /// For the native asset the pull is `msg.value`; `payer` and `amount`
    /// are ignored.
    #[payable]
    pub fn pull_inject_and_call(
        &mut self,
        payer: Address,
        asset: Address,
        amount: U256,
        target: Address,
        payload: Vec<u8>,
        offset: U256,
        placeholder: FixedBytes<32>,
    ) -> Result<Vec<u8>, RouterError> {
        if asset != Address::ZERO {
            let ctx = self.vm().contract_address();
            self.erc20_transfer_from(asset, payer, ctx, amount)?;
        }
        self.inject_with_context_balance(asset, target, payload, offset, placeholder)
    }

    /// Relay a batch of `(target, value, payload, allowFailure)` sub-calls to
    /// the shared batch executor, preserving the current context's identity,
    /// and return the per-call `(success, returnData)` outcomes.
    #[payable]
    pub fn execute_batch(
        &mut self,
        batch: Vec<(Address, U256, Vec<u8>, bool)>,
    ) -> Result<Vec<(bool, Vec<u8>)>, RouterError> {
        self.forward_batch(batch)
    }

    /// Pull the payer's full token balance into the executing context, then
    /// forward the batch.
    #[payable]
    pub fn pull_and_execute(
        &mut self,
        asset: Address,
        payer: Address,
        batch: Vec<(Address, U256, Vec<u8>, bool)>,
    ) -> Result<Vec<(bool, Vec<u8>)>, RouterError> {
        if asset == Address::ZERO {
            return Err(RouterError::ZeroAddress(ZeroAddress {}));
        }
        let amount = self.erc20_balance_of(asset, payer)?;
        if amount != U256::ZERO {
            let ctx = self.vm().contract_address();
            self.erc20_transfer_from(asset, payer, ctx, amount)?;
        }
        self.forward_batch(batch)
    }

    /// Pull an explicit token amount into the executing context, then forward
    /// the batch.
    #[payable]
    pub fn pull_amount_and_execute(
        &mut self,
        asset: Address,
        payer: Address,
        amount: U256,
        batch: Vec<(Address, U256, Vec<u8>, bool)>,
    ) -> Result<Vec<(bool, Vec<u8>)>, RouterError> {
        if asset == Address::ZERO {
            return Err(RouterError::ZeroAddress(ZeroAddress {}));
        }
        if amount != U256::ZERO {
            let ctx = self.vm().contract_address();
            self.erc20_transfer_from(asset, payer, ctx, amount)?;
        }
        self.forward_batch(batch)
    }

    /// Move the context's entire residual balance of `asset` to `recipient`.
    /// A zero balance is a non-reverting no-op. Delegated contexts only.
    pub fn sweep(&mut self, asset: Address, recipient: Address) -> Result<(), RouterError> {
        self.ensure_delegated()?;
        if recipient == Address::ZERO {
            return Err(RouterError::ZeroAddress(ZeroAddress {}));
        }
        self.sweep_residual(asset, recipient)
    }

    /// Refund exactly `refund_amount` to `refund_recipient`, then sweep the
    /// remaining residual to `sweep_recipient`. Delegated contexts only.
    ///
    /// A refund promise that cannot be honored in full is a hard failure
    /// (`RefundShortfall`), never a silent under-delivery.
    pub fn refund_and_sweep(
        &mut self,
        asset: Address,
        refund_recipient: Address,
        refund_amount: U256,
        sweep_recipient: Address,
    ) -> Result<(), RouterError> {
        self.ensure_delegated()?;
        if refund_recipient == Address::ZERO || sweep_recipient == Address::ZERO {
            return Err(RouterError::ZeroAddress(ZeroAddress {}));
        }

        let available = self.asset_balance(asset)?;
        if available < refund_amount {
            return Err(RouterError::RefundShortfall(RefundShortfall {
                requested: refund_amount,
                available,
            }));
        }
        self.transfer_asset(asset, refund_recipient, refund_amount)?;

        // Re-measure from chain state; the refund transfer may have reentered
        // or the token may not move exactly `refund_amount`.
        let remainder = self.asset_balance(asset)?;
        if remainder != U256::ZERO {
            self.transfer_asset(asset, sweep_recipient, remainder)?;
        }

        log(
            self.vm(),
            RefundSwept {
                asset,
                refundRecipient: refund_recipient,
                refundAmount: refund_amount,
                sweepRecipient: sweep_recipient,
                sweptAmount: remainder,
            },
        );
        Ok(())
    }

    /// Sweep gated on an earlier leg's sentinel. Fails with `SentinelNotSet`
    /// unless `handle` recorded a success for `op_hash`; consumes the
    /// sentinel so the same hash cannot authorize a second settlement.
    pub fn validate_and_sweep(
        &mut self,
        op_hash: FixedBytes<32>,
        asset: Address,
        recipient: Address,
    ) -> Result<(), RouterError> {
        self.ensure_delegated()?;
        if recipient == Address::ZERO {
            return Err(RouterError::ZeroAddress(ZeroAddress {}));
        }
        if !self.sentinel_get(op_hash) {
            return Err(RouterError::SentinelNotSet(SentinelNotSet {
                opHash: op_hash,
            }));
        }

        // Consume before the sweep's external call can reenter and observe
        // the flag still set.
        self.sentinel_clear(op_hash);
        log(self.vm(), SentinelCleared { opHash: op_hash });

        self.sweep_residual(asset, recipient)
    }

    /// Forward `inner_payload`/`inner_value` to the router's own (ordinary-
    /// call) surface and, only if that call returns without reverting, commit
    /// the sentinel for `op_hash`. Delegated contexts only.
    #[payable]
    pub fn handle(
        &mut self,
        op_hash: FixedBytes<32>,
        inner_payload: Vec<u8>,
        inner_value: U256,
    ) -> Result<Vec<u8>, RouterError> {
        self.ensure_delegated()?;

        let out = self
            .vm()
            .call(
                &Call::new().value(inner_value),
                ROUTER_CANONICAL,
                &inner_payload,
            )
            .map_err(|err| {
                RouterError::WrappedCallFailed(WrappedCallFailed {
                    revertData: revert_data(err).into(),
                })
            })?;

        self.sentinel_set(op_hash);
        log(self.vm(), SentinelSet { opHash: op_hash });
        Ok(out)
    }
}

impl Router {
    /// Guarded invocation: reject execution as the canonical deployment.
    fn ensure_delegated(&self) -> Result<(), RouterError> {
        if self.vm().contract_address() == ROUTER_CANONICAL {
            return Err(RouterError::NotDelegated(NotDelegated {}));
        }
        Ok(())
    }

    fn inject_with_context_balance(
        &mut self,
        asset: Address,
        target: Address,
        mut payload: Vec<u8>,
        offset: U256,
        placeholder: FixedBytes<32>,
    ) -> Result<Vec<u8>, RouterError> {
        if target == Address::ZERO {
            return Err(RouterError::ZeroAddress(ZeroAddress {}));
        }

        let balance = self.asset_balance(asset)?;

        if !splice::is_passthrough(offset, placeholder) {
            let off = usize::try_from(offset).map_err(|_| {
                RouterError::InvalidOffset(InvalidOffset {
                    offset,
                    payloadLength: U256::from(payload.len()),
                })
            })?;
            splice::splice_balance(&mut payload, off, placeholder, balance)?;
        }

        let result = if asset == Address::ZERO {
            self.vm()
                .call(&Call::new().value(balance), target, &payload)
        } else {
            self.approve_exact(asset, target, balance)?;
            self.vm().call(&Call::new(), target, &payload)
        };
        let out = result.map_err(|err| {
            RouterError::TargetCallFailed(TargetCallFailed {
                revertData: revert_data(err).into(),
            })
        })?;

        log(
            self.vm(),
            BalanceInjected {
                asset,
                target,
                offset,
                placeholder,
                amount: balance,
            },
        );
        Ok(out)
    }

    pub(crate) fn sweep_residual(
        &mut self,
        asset: Address,
        recipient: Address,
    ) -> Result<(), RouterError> {
        let amount = self.asset_balance(asset)?;
        if amount == U256::ZERO {
            return Ok(());
        }
        self.transfer_asset(asset, recipient, amount)?;
        log(
            self.vm(),
            Swept {
                asset,
                recipient,
                amount,
            },
        );
        Ok(())
    }
}
