//! Append-only chain of errors.
//!
//! This module provides [`ErrorChain`], which records several independent
//! failures of one logical operation and presents them as a single error:
//! - `Display` renders the first recorded error
//! - [`Error::source`] unwraps to the sub-chain after the first error
//! - [`ErrorChain::matches`] tests the first error and its own causes
//!
//! Combined with [`inspect::is`], every recorded error (and every cause
//! wrapped inside it) is reachable through the standard error protocol.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::error::Error;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::inspect;
use crate::types::{BoxError, ChainResult, DynError, ErrorVec, IntoIter, Iter, Link};

/// Ordered, append-only sequence of errors usable as one error value.
///
/// The first error pushed is the *head* and is what the chain renders as.
/// Unwrapping through [`rest`](ErrorChain::rest) or [`Error::source`] yields
/// the remaining links one sub-chain at a time, so a generic walk over
/// `source()` visits every recorded error exactly once.
///
/// # Examples
///
/// ```
/// use linked_errors::{inspect, ErrorChain};
///
/// #[derive(Debug, PartialEq)]
/// struct Code(u32);
///
/// impl std::fmt::Display for Code {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "code {}", self.0)
///     }
/// }
///
/// impl std::error::Error for Code {}
///
/// let mut chain = ErrorChain::new();
/// chain.push("name is empty");
/// chain.push(Code(12));
///
/// assert_eq!(chain.to_string(), "name is empty");
/// assert_eq!(chain.len(), 2);
/// assert!(!chain.matches(&Code(12)));
/// assert!(inspect::is(&chain, &Code(12)));
/// ```
#[must_use]
pub struct ErrorChain {
    head: Option<NonNull<Link>>,
    tail: Option<NonNull<Link>>,
    len: usize,
    marker: PhantomData<Box<Link>>,
}

// SAFETY: the chain uniquely owns its links, and every stored error is
// `Send + Sync`. Appending requires `&mut self`.
unsafe impl Send for ErrorChain {}
unsafe impl Sync for ErrorChain {}

impl ErrorChain {
    /// Creates an empty chain.
    ///
    /// An empty chain is not meant to be returned as an error; push at least
    /// one error first, or use [`into_result`](ErrorChain::into_result).
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, tail: None, len: 0, marker: PhantomData }
    }

    /// Returns the number of recorded errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends an error after the current tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_errors::ErrorChain;
    ///
    /// let mut chain = ErrorChain::new();
    /// chain.push("first");
    /// chain.push(String::from("second"));
    ///
    /// let messages: Vec<String> = chain.iter().map(|e| e.to_string()).collect();
    /// assert_eq!(messages, ["first", "second"]);
    /// ```
    pub fn push<E>(&mut self, error: E)
    where
        E: Into<BoxError>,
    {
        let link = Box::new(Link::new(error.into()));

        #[cfg(feature = "tracing")]
        tracing::trace!(position = self.len, error = %link.error(), "recorded error in chain");

        let link = NonNull::from(Box::leak(link));
        match self.tail {
            // SAFETY: `tail` points at the last link this chain leaked, which
            // is still alive, and `&mut self` rules out any outstanding
            // shared borrow of it.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(link) },
            None => self.head = Some(link),
        }
        self.tail = Some(link);
        self.len += 1;
    }

    /// Returns the head link, i.e. the whole chain viewed as a [`Link`].
    #[inline]
    pub fn head(&self) -> Option<&Link> {
        // SAFETY: see `Link::rest`; the head is owned by `self`.
        self.head.map(|head| unsafe { head.as_ref() })
    }

    /// Returns the most recently pushed link.
    #[inline]
    pub fn tail(&self) -> Option<&Link> {
        // SAFETY: see `Link::rest`; the tail is owned by `self`.
        self.tail.map(|tail| unsafe { tail.as_ref() })
    }

    /// Unwraps one level: the sub-chain after the head.
    ///
    /// Returns `None` when the chain holds fewer than two errors. Every call
    /// on the returned [`Link`] yields a strictly shorter sub-chain, ending
    /// in `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_errors::chain;
    ///
    /// let errors = chain!["a", "b", "c"];
    /// let b = errors.rest().unwrap();
    /// let c = b.rest().unwrap();
    ///
    /// assert_eq!(b.errors().len(), 2);
    /// assert_eq!(c.to_string(), "c");
    /// assert!(c.rest().is_none());
    /// ```
    #[inline]
    pub fn rest(&self) -> Option<&Link> {
        self.head().and_then(Link::rest)
    }

    /// Returns an iterator over the recorded errors in append order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.head())
    }

    /// Collects the recorded errors in append order.
    ///
    /// The returned collection is independent of the chain; an empty chain
    /// yields an empty collection.
    pub fn errors(&self) -> ErrorVec<&DynError> {
        self.iter().collect()
    }

    /// Consumes the chain and returns ownership of every recorded error.
    pub fn into_errors(self) -> Vec<BoxError> {
        self.into_iter().collect()
    }

    /// Renders the head error.
    ///
    /// Equivalent to `to_string()`. An empty chain renders as an empty
    /// string.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if the head error, or any cause reachable from it,
    /// equals `target`.
    ///
    /// Only the head is consulted. Use [`contains`](ErrorChain::contains) or
    /// [`inspect::is`] to test every recorded error.
    pub fn matches<T>(&self, target: &T) -> bool
    where
        T: Error + PartialEq + 'static,
    {
        self.head().is_some_and(|head| head.matches(target))
    }

    /// Returns `true` if any recorded error, or any cause reachable from one,
    /// equals `target`.
    pub fn contains<T>(&self, target: &T) -> bool
    where
        T: Error + PartialEq + 'static,
    {
        inspect::is(self, target)
    }

    /// Turns the chain into a `Result`: `Ok(())` if nothing was recorded,
    /// otherwise `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_errors::{ChainResult, ErrorChain};
    ///
    /// fn validate(name: &str, age: u32) -> ChainResult<()> {
    ///     let mut errors = ErrorChain::new();
    ///     if name.is_empty() {
    ///         errors.push("name is empty");
    ///     }
    ///     if age > 150 {
    ///         errors.push("age is out of range");
    ///     }
    ///     errors.into_result()
    /// }
    ///
    /// assert!(validate("ada", 36).is_ok());
    /// assert_eq!(validate("", 200).unwrap_err().len(), 2);
    /// ```
    pub fn into_result(self) -> ChainResult<()> {
        if self.is_empty() {
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(errors = self.len, head = %self.message(), "returning error chain");

        Err(self)
    }

    pub(crate) fn pop_front(&mut self) -> Option<BoxError> {
        let head = self.head?;
        // SAFETY: `head` was leaked by `push` and is owned only by this
        // chain; `&mut self` guarantees no borrowed `Link` is alive.
        let link = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = link.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(link.error)
    }
}

impl Default for ErrorChain {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ErrorChain {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl fmt::Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.head() {
            Some(head) => fmt::Display::fmt(head, f),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorChain").field("errors", &self.errors()).finish()
    }
}

impl Error for ErrorChain {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.rest().map(|rest| rest as &(dyn Error + 'static))
    }
}

impl<E> FromIterator<E> for ErrorChain
where
    E: Into<BoxError>,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut chain = Self::new();
        chain.extend(iter);
        chain
    }
}

impl<E> Extend<E> for ErrorChain
where
    E: Into<BoxError>,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for error in iter {
            self.push(error);
        }
    }
}

impl IntoIterator for ErrorChain {
    type Item = BoxError;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a> IntoIterator for &'a ErrorChain {
    type Item = &'a DynError;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorChain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter().map(|err| err.to_string()))
    }
}
