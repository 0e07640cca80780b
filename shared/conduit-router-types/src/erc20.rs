//! ERC-20 return-data conventions.

use alloy_primitives::U256;

/// Interpret the return data of a state-changing token call (`transfer`,
/// `transferFrom`, `approve`) under the tolerant convention:
///
/// - empty return data: success (pre-ERC-20 tokens omit the boolean);
/// - at least one word: the first word must be nonzero;
/// - anything shorter than a word: malformed, treated as failure.
pub fn returns_success(return_data: &[u8]) -> bool {
    if return_data.is_empty() {
        return true;
    }
    if return_data.len() < 32 {
        return false;
    }
    U256::from_be_slice(&return_data[..32]) != U256::ZERO
}
