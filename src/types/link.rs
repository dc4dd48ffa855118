//! A single node of an [`ErrorChain`](crate::ErrorChain).
//!
//! Links are only handed out by reference, and a `&Link` doubles as a view
//! of the chain from that node onward. Unwrapping a chain therefore yields a
//! strictly shorter chain each time instead of the bare next error.

use alloc::string::{String, ToString};
use core::error::Error;
use core::fmt;
use core::ptr::NonNull;

use crate::inspect;
use crate::types::{BoxError, DynError, ErrorVec, Iter};

/// One recorded error plus the link that follows it.
///
/// Reading a `&Link` as a sub-chain:
///
/// - `Display` renders this link's error only.
/// - [`Error::source`] returns the next link, or `None` for the last one.
/// - [`matches`](Link::matches) tests this link's error (and its own causes).
///
/// # Examples
///
/// ```
/// use linked_errors::chain;
///
/// let errors = chain!["a", "b", "c"];
/// let b = errors.rest().unwrap();
///
/// assert_eq!(b.to_string(), "b");
/// assert_eq!(b.len(), 2);
/// assert_eq!(b.rest().map(|c| c.to_string()), Some("c".into()));
/// assert!(b.rest().unwrap().rest().is_none());
/// ```
pub struct Link {
    pub(crate) error: BoxError,
    pub(crate) next: Option<NonNull<Link>>,
}

// SAFETY: the stored error is `Send + Sync`, and `next` is only ever read
// through `&self`. Ownership of the following links stays with the chain.
unsafe impl Send for Link {}
unsafe impl Sync for Link {}

impl Link {
    #[inline]
    pub(crate) fn new(error: BoxError) -> Self {
        Self { error, next: None }
    }

    /// Returns the error recorded in this link.
    #[inline]
    pub fn error(&self) -> &DynError {
        &*self.error
    }

    /// Unwraps one level: the sub-chain after this link, or `None` if this
    /// link is the tail.
    #[inline]
    pub fn rest(&self) -> Option<&Link> {
        // SAFETY: `next` comes from `Box::leak` in `ErrorChain::push` and is
        // freed only when the owning chain is dropped or consumed, both of
        // which require that no `&Link` borrowed from it is still alive.
        self.next.map(|next| unsafe { next.as_ref() })
    }

    /// Returns `true` if no link follows this one.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    /// Counts the links in this sub-chain, this one included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns an iterator over the errors from this link to the tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(Some(self))
    }

    /// Collects the errors from this link to the tail, in append order.
    pub fn errors(&self) -> ErrorVec<&DynError> {
        self.iter().collect()
    }

    /// Renders this link's error.
    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Returns `true` if this link's error, or any cause reachable from it,
    /// equals `target`.
    ///
    /// Later links are not consulted; see [`inspect::is`] for the walk that
    /// covers them.
    pub fn matches<T>(&self, target: &T) -> bool
    where
        T: Error + PartialEq + 'static,
    {
        inspect::is(self.error(), target)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("error", &self.error)
            .field("remaining", &(self.len() - 1))
            .finish()
    }
}

impl Error for Link {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.rest().map(|rest| rest as &(dyn Error + 'static))
    }
}

impl<'a> IntoIterator for &'a Link {
    type Item = &'a DynError;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Link {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter().map(|err| err.to_string()))
    }
}
