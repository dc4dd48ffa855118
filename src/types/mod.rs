//! Chain types and the aliases shared across the crate.
//!
//! # Examples
//!
//! ```
//! use linked_errors::ErrorChain;
//!
//! let mut chain = ErrorChain::new();
//! chain.push("disk full");
//! chain.push("quota exceeded");
//!
//! assert_eq!(chain.to_string(), "disk full");
//! assert_eq!(chain.rest().map(|rest| rest.to_string()), Some("quota exceeded".into()));
//! ```
use alloc::boxed::Box;
use core::error::Error;
use smallvec::SmallVec;

pub mod error_chain;
pub mod iter;
pub mod link;

pub use error_chain::*;
pub use iter::*;
pub use link::*;

/// SmallVec-backed collection returned when enumerating a chain.
///
/// Uses inline storage for up to 4 elements; most validation passes
/// record only a handful of failures.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// The opaque error value stored in every link.
pub type BoxError = Box<DynError>;

/// Trait object behind [`BoxError`].
pub type DynError = dyn Error + Send + Sync + 'static;

/// Result alias for operations that report every failure as one [`ErrorChain`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type ChainResult<T> = Result<T, ErrorChain>;
