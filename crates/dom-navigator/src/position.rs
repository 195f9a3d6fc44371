//! Ordinal position resolution.
//!
//! Positions are 1-based from the start of a collection, or negative counting
//! back from the end (`-1` is the last element). Zero is never valid.

use crate::result::PositionError;

/// Position used for scope steps whose identifier carries none
pub const DEFAULT_ORDINAL_POSITION: i64 = 1;

/// Map an ordinal position onto a zero-based index into a collection of
/// `collection_count` elements.
pub fn resolve_position(
    ordinal_position: i64,
    collection_count: usize,
) -> Result<usize, PositionError> {
    if ordinal_position == 0 {
        return Err(PositionError::CannotBeZero { collection_count });
    }

    let out_of_bounds = PositionError::OutOfBounds {
        ordinal_position,
        collection_count,
    };
    let magnitude =
        usize::try_from(ordinal_position.unsigned_abs()).map_err(|_| out_of_bounds.clone())?;
    if magnitude > collection_count {
        return Err(out_of_bounds);
    }

    if ordinal_position > 0 {
        Ok(magnitude - 1)
    } else {
        Ok(collection_count - magnitude)
    }
}
