//! Construction shorthand for [`ErrorChain`](crate::ErrorChain).

/// Builds an [`ErrorChain`](crate::ErrorChain) from a list of errors, in order.
///
/// Each expression may be anything that converts into a
/// [`BoxError`](crate::BoxError): string slices, `String`s, or concrete
/// error types.
///
/// # Examples
///
/// ```
/// use linked_errors::chain;
///
/// let errors = chain!["missing field `id`", String::from("unknown field `ip`")];
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.to_string(), "missing field `id`");
///
/// let empty = chain![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! chain {
    () => {
        $crate::ErrorChain::new()
    };
    ($($error:expr),+ $(,)?) => {{
        let mut chain = $crate::ErrorChain::new();
        $(chain.push($error);)+
        chain
    }};
}
