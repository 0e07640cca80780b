//! Asset plumbing: balance reads, native/token transfers, exact-allowance
//! approvals.
//!
//! Token calls are raw selector-addressed calls with hand-packed 32-byte
//! argument words, tolerant of implementations that omit boolean returns
//! (see `conduit_router_types::erc20::returns_success`).

use alloc::vec::Vec;

use stylus_sdk::{
    alloy_primitives::{keccak256, Address, U256},
    prelude::*,
    stylus_core::calls::context::Call,
};

use conduit_router_types::erc20::returns_success;

use crate::{
    constants::BALANCE_READ_GAS_CAP,
    errors::{ApproveFailed, BalanceReadFailed, PullFailed, RouterError, TransferFailed},
    router::Router,
};

fn selector(sig: &str) -> [u8; 4] {
    let h = keccak256(sig.as_bytes());
    [h[0], h[1], h[2], h[3]]
}

fn address_word(addr: Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..32].copy_from_slice(addr.as_slice());
    word
}

fn encode_call(sel: [u8; 4], words: &[[u8; 32]]) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 32 * words.len());
    data.extend_from_slice(&sel);
    for word in words {
        data.extend_from_slice(word);
    }
    data
}

impl Router {
    /// Residual balance of the executing context, measured now.
    ///
    /// `Address::ZERO` denotes the native asset.
    pub(crate) fn asset_balance(&self, asset: Address) -> Result<U256, RouterError> {
        let ctx = self.vm().contract_address();
        if asset == Address::ZERO {
            Ok(self.vm().balance(ctx))
        } else {
            self.erc20_balance_of(asset, ctx)
        }
    }

    pub(crate) fn erc20_balance_of(
        &self,
        token: Address,
        owner: Address,
    ) -> Result<U256, RouterError> {
        let data = encode_call(selector("balanceOf(address)"), &[address_word(owner)]);
        let out = self
            .vm()
            .static_call(&Call::new().gas(BALANCE_READ_GAS_CAP), token, &data)
            .map_err(|_| RouterError::BalanceReadFailed(BalanceReadFailed { token }))?;
        if out.len() < 32 {
            return Err(RouterError::BalanceReadFailed(BalanceReadFailed { token }));
        }
        Ok(U256::from_be_slice(&out[0..32]))
    }

    /// Move `amount` of `asset` from the executing context to `to`.
    pub(crate) fn transfer_asset(
        &mut self,
        asset: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), RouterError> {
        if asset == Address::ZERO {
            self.vm()
                .call(&Call::new().value(amount), to, &[])
                .map_err(|_| RouterError::TransferFailed(TransferFailed { token: asset }))?;
            return Ok(());
        }
        let data = encode_call(
            selector("transfer(address,uint256)"),
            &[address_word(to), amount.to_be_bytes::<32>()],
        );
        let out = self
            .vm()
            .call(&Call::new(), asset, &data)
            .map_err(|_| RouterError::TransferFailed(TransferFailed { token: asset }))?;
        if !returns_success(&out) {
            return Err(RouterError::TransferFailed(TransferFailed { token: asset }));
        }
        Ok(())
    }

    /// Pull `amount` of `token` from `from` into `to` (requires allowance).
    pub(crate) fn erc20_transfer_from(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), RouterError> {
        let data = encode_call(
            selector("transferFrom(address,address,uint256)"),
            &[
                address_word(from),
                address_word(to),
                amount.to_be_bytes::<32>(),
            ],
        );
        let out = self
            .vm()
            .call(&Call::new(), token, &data)
            .map_err(|_| RouterError::PullFailed(PullFailed { token }))?;
        if !returns_success(&out) {
            return Err(RouterError::PullFailed(PullFailed { token }));
        }
        Ok(())
    }

    /// Set `spender`'s allowance to exactly `amount`.
    ///
    /// Some tokens refuse a nonzero-to-nonzero approval; on first failure the
    /// allowance is reset to zero and the approval retried once.
    pub(crate) fn approve_exact(
        &mut self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), RouterError> {
        if self.try_approve(token, spender, amount) {
            return Ok(());
        }
        if self.try_approve(token, spender, U256::ZERO)
            && self.try_approve(token, spender, amount)
        {
            return Ok(());
        }
        Err(RouterError::ApproveFailed(ApproveFailed { token }))
    }

    fn try_approve(&mut self, token: Address, spender: Address, amount: U256) -> bool {
        let data = encode_call(
            selector("approve(address,uint256)"),
            &[address_word(spender), amount.to_be_bytes::<32>()],
        );
        match self.vm().call(&Call::new(), token, &data) {
            Ok(out) => returns_success(&out),
            Err(_) => false,
        }
    }
}
