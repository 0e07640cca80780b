//! Calldata splicing: replace a placeholder word in a pre-built payload with
//! a value only knowable at execution time.
//!
//! A payload is an opaque selector-prefixed call buffer. ABI argument words
//! sit at `4 + 32k`, so a valid splice offset must be at least 4 (never
//! overlapping the selector) and word-aligned relative to the selector.

use alloy_primitives::{B256, U256};

/// ABI word width.
pub const WORD: usize = 32;

/// Leading function-selector width.
pub const SELECTOR_LEN: usize = 4;

/// Errors produced while validating or applying a splice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceError {
    /// Offset overlaps the selector, is misaligned, or the word does not fit
    /// inside the payload.
    InvalidOffset { offset: usize, payload_len: usize },
    /// The word at the offset did not match the expected placeholder. The
    /// payload is left unmodified.
    PlaceholderMismatch { expected: B256, found: B256 },
}

/// True when the request is the legitimate no-injection passthrough.
///
/// Both conditions are required: an OR would treat a genuine zero-offset
/// request as a no-op and let it slip through unvalidated.
pub fn is_passthrough(offset: U256, placeholder: B256) -> bool {
    offset.is_zero() && placeholder == B256::ZERO
}

/// Validate `offset` and overwrite the placeholder word with `value`,
/// left-padded to 32 bytes big-endian.
///
/// On any error the payload is untouched; on success exactly one word changes.
pub fn splice_balance(
    payload: &mut [u8],
    offset: usize,
    placeholder: B256,
    value: U256,
) -> Result<(), SpliceError> {
    let invalid = SpliceError::InvalidOffset {
        offset,
        payload_len: payload.len(),
    };
    if offset < SELECTOR_LEN || (offset - SELECTOR_LEN) % WORD != 0 {
        return Err(invalid);
    }
    let end = offset.checked_add(WORD).ok_or(invalid)?;
    if payload.len() < end {
        return Err(invalid);
    }

    let found = B256::from_slice(&payload[offset..end]);
    if found != placeholder {
        return Err(SpliceError::PlaceholderMismatch {
            expected: placeholder,
            found,
        });
    }

    payload[offset..end].copy_from_slice(&value.to_be_bytes::<32>());
    Ok(())
}
