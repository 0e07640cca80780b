//! Batch call specifications.

use alloc::vec::Vec;

use alloy_primitives::{Address, U256};

/// One element of a call batch, as assembled by the orchestrator.
///
/// The ABI surface carries this as the tuple `(address, uint256, bytes, bool)`;
/// `allow_failure` is honored by the shared batch executor, not reinterpreted
/// by the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSpec {
    pub target: Address,
    pub value: U256,
    pub payload: Vec<u8>,
    pub allow_failure: bool,
}

/// Per-call outcome reported by the batch executor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallOutcome {
    pub success: bool,
    pub return_data: Vec<u8>,
}

impl From<(Address, U256, Vec<u8>, bool)> for CallSpec {
    fn from((target, value, payload, allow_failure): (Address, U256, Vec<u8>, bool)) -> Self {
        Self {
            target,
            value,
            payload,
            allow_failure,
        }
    }
}

impl From<CallOutcome> for (bool, Vec<u8>) {
    fn from(outcome: CallOutcome) -> Self {
        (outcome.success, outcome.return_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_spec_from_tuple_preserves_field_order() {
        let target = Address::with_last_byte(0xAA);
        let spec = CallSpec::from((target, U256::from(7u64), vec![0xde, 0xad], true));
        assert_eq!(spec.target, target);
        assert_eq!(spec.value, U256::from(7u64));
        assert_eq!(spec.payload, vec![0xde, 0xad]);
        assert!(spec.allow_failure);
    }

    #[test]
    fn outcome_into_tuple() {
        let outcome = CallOutcome {
            success: false,
            return_data: vec![1, 2, 3],
        };
        let (ok, data): (bool, Vec<u8>) = outcome.into();
        assert!(!ok);
        assert_eq!(data, vec![1, 2, 3]);
    }
}
