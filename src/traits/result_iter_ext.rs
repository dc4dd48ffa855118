use alloc::vec::Vec;

use crate::traits::ResultExt;
use crate::types::{BoxError, ChainResult, ErrorChain};

/// Extension trait for iterators of `Result`s.
///
/// Unlike collecting into `Result<Vec<T>, E>`, which stops at the first
/// error, [`collect_chain`](ResultIteratorExt::collect_chain) drives the
/// iterator to completion and keeps every error.
pub trait ResultIteratorExt<T, E>: Iterator<Item = Result<T, E>> + Sized
where
    E: Into<BoxError>,
{
    /// Collects all success values, or every error in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_errors::traits::ResultIteratorExt;
    ///
    /// let ok = ["1", "2"].iter().map(|s| s.parse::<u8>()).collect_chain();
    /// assert_eq!(ok.unwrap(), vec![1, 2]);
    ///
    /// let err = ["1", "300", "-1"].iter().map(|s| s.parse::<u8>()).collect_chain();
    /// let chain = err.unwrap_err();
    /// assert_eq!(chain.len(), 2);
    /// assert_eq!(chain.to_string(), "number too large to fit in target type");
    /// ```
    fn collect_chain(self) -> ChainResult<Vec<T>> {
        let mut chain = ErrorChain::new();
        let values: Vec<T> = self.filter_map(|result| result.record_err(&mut chain)).collect();
        chain.into_result().map(|()| values)
    }
}

impl<I, T, E> ResultIteratorExt<T, E> for I
where
    I: Iterator<Item = Result<T, E>>,
    E: Into<BoxError>,
{
}
