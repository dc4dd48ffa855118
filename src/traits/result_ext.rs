use crate::types::{BoxError, ErrorChain};

/// Extension trait for recording a `Result`'s error in a chain.
///
/// Independent steps can each report into the same chain instead of
/// returning at the first failure.
///
/// # Examples
///
/// ```
/// use linked_errors::traits::ResultExt;
/// use linked_errors::{ChainResult, ErrorChain};
///
/// fn parse_pair(a: &str, b: &str) -> ChainResult<(i32, i32)> {
///     let mut errors = ErrorChain::new();
///     let a = a.parse::<i32>().record_err(&mut errors);
///     let b = b.parse::<i32>().record_err(&mut errors);
///     errors.into_result()?;
///     Ok((a.unwrap_or_default(), b.unwrap_or_default()))
/// }
///
/// assert_eq!(parse_pair("1", "2").unwrap(), (1, 2));
/// assert_eq!(parse_pair("one", "two").unwrap_err().len(), 2);
/// ```
pub trait ResultExt<T> {
    /// Returns the success value, or pushes the error onto `chain` and
    /// returns `None`.
    fn record_err(self, chain: &mut ErrorChain) -> Option<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn record_err(self, chain: &mut ErrorChain) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                chain.push(error);
                None
            }
        }
    }
}
