//! Generic inspection over the standard error protocol.
//!
//! These helpers walk any `dyn Error` by repeated [`Error::source`] calls and
//! treat every step uniformly:
//!
//! - a step whose concrete type is the target type is compared directly;
//! - a step that is an [`ErrorChain`] or a [`Link`] is asked through its own
//!   head-only [`matches`](Link::matches) hook, which descends into that
//!   link's wrapped causes.
//!
//! Because unwrapping a chain yields the next sub-chain rather than the bare
//! next error, the walk reaches every recorded error one link at a time.
//! There is no depth limit; chains of any length are walked to the end.
//!
//! # Examples
//!
//! ```
//! use linked_errors::{chain, inspect};
//!
//! #[derive(Debug, PartialEq)]
//! struct Timeout;
//!
//! impl std::fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("timed out")
//!     }
//! }
//!
//! impl std::error::Error for Timeout {}
//!
//! let errors = chain!["bad header", Timeout];
//!
//! assert!(inspect::is(&errors, &Timeout));
//! assert!(inspect::find::<Timeout>(&errors).is_some());
//! assert_eq!(inspect::sources(&errors).count(), 2);
//! ```

use core::error::Error;
use core::fmt;
use core::iter::FusedIterator;

use crate::types::{ErrorChain, Link};

/// Returns an iterator over `err` followed by each cause reachable through
/// [`Error::source`].
#[inline]
pub fn sources<'a>(err: &'a (dyn Error + 'static)) -> Sources<'a> {
    Sources { next: Some(err) }
}

/// Iterator created by [`sources`].
#[derive(Clone)]
pub struct Sources<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Sources<'a> {
    type Item = &'a (dyn Error + 'static);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Sources<'_> {}

impl fmt::Debug for Sources<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Returns `true` if `err`, or anything reachable from it, equals `target`.
///
/// Recorded errors inside chains are searched together with their own
/// wrapped causes.
pub fn is<T>(err: &(dyn Error + 'static), target: &T) -> bool
where
    T: Error + PartialEq + 'static,
{
    sources(err).any(|step| {
        step.downcast_ref::<T>().is_some_and(|found| found == target)
            || head_link(step).is_some_and(|head| head.matches(target))
    })
}

/// Returns the first value of type `T` reachable from `err`.
///
/// Steps are visited in walk order; at a chain step the head error and its
/// causes are searched before moving on to the next link.
pub fn find<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    sources(err).find_map(|step| {
        step.downcast_ref::<T>().or_else(|| head_link(step).and_then(|head| find::<T>(head.error())))
    })
}

/// Returns `true` if a value of type `T` is reachable from `err`.
#[inline]
pub fn is_type<T>(err: &(dyn Error + 'static)) -> bool
where
    T: Error + 'static,
{
    find::<T>(err).is_some()
}

/// The head link of a chain step, if `err` is a chain or a sub-chain.
fn head_link<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a Link> {
    match err.downcast_ref::<ErrorChain>() {
        Some(chain) => chain.head(),
        None => err.downcast_ref::<Link>(),
    }
}
