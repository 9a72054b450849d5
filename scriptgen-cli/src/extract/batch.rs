//! Fixed-size, order-preserving grouping of extracted values

use crate::error::ExtractionError;

/// Default number of values per rendered list row
pub const DEFAULT_BATCH_SIZE: usize = 7;

/// Split `values` into consecutive groups of `size`, the last one possibly shorter
pub fn batch<T: Clone>(values: &[T], size: usize) -> Result<Vec<Vec<T>>, ExtractionError> {
    if size == 0 {
        return Err(ExtractionError::invalid_argument(
            "batch size must be a positive integer",
        ));
    }
    Ok(values.chunks(size).map(<[T]>::to_vec).collect())
}
