/// Errors returned by [`crate::RangeSumTree`] operations.
///
/// Offending inputs are kept as `i64` so adapters that accept signed user input can report the
/// value that was actually entered (e.g. `-1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("index {index} is out of range for {len} elements")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("invalid range [{start}, {end}] for {len} elements")]
    InvalidRange { start: i64, end: i64, len: usize },
}

impl Error {
    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: index as i64,
            len,
        }
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self::InvalidRange {
            start: start as i64,
            end: end as i64,
            len,
        }
    }
}
