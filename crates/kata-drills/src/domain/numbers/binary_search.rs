//! Binary search over an ascending slice

use std::cmp::Ordering;
use thiserror::Error;

/// Search errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Value absent from the slice
    #[error("value not in array")]
    NotFound,
}

/// Return the index of `value` in the ascending slice `sorted`
///
/// When `value` occurs several times any one of its indices may be returned.
pub fn find<T: Ord>(sorted: &[T], value: &T) -> Result<usize, SearchError> {
    let mut low = 0;
    let mut high = sorted.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match sorted[mid].cmp(value) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Ok(mid),
        }
    }

    Err(SearchError::NotFound)
}
