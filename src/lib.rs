//! An append-only chain of errors that behaves like one error.
//!
//! [`ErrorChain`] collects the failures of several independent steps so that
//! none of them is lost, then takes part in the standard error protocol:
//!
//! - `Display` renders the first recorded error;
//! - [`source()`](core::error::Error::source) unwraps to the rest of the chain,
//!   one link at a time;
//! - [`inspect::is`] and [`inspect::find`] search every recorded error and the
//!   causes each one wraps.
//!
//! # Examples
//!
//! ## Collecting Failures
//!
//! ```
//! use linked_errors::{ChainResult, ErrorChain};
//!
//! fn validate(user: &str, email: &str) -> ChainResult<()> {
//!     let mut errors = ErrorChain::new();
//!     if user.len() < 3 {
//!         errors.push("user name too short");
//!     }
//!     if !email.contains('@') {
//!         errors.push(format!("invalid email: {email}"));
//!     }
//!     errors.into_result()
//! }
//!
//! let err = validate("al", "al.example.com").unwrap_err();
//! assert_eq!(err.to_string(), "user name too short");
//!
//! let all: Vec<String> = err.iter().map(|e| e.to_string()).collect();
//! assert_eq!(all, ["user name too short", "invalid email: al.example.com"]);
//! ```
//!
//! ## Matching Through Wrapped Causes
//!
//! ```
//! use linked_errors::{chain, inspect};
//! use std::fmt;
//!
//! #[derive(Debug, PartialEq)]
//! struct Code(u32);
//!
//! impl fmt::Display for Code {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{}", self.0)
//!     }
//! }
//!
//! impl std::error::Error for Code {}
//!
//! #[derive(Debug)]
//! struct Wrapped(Code);
//!
//! impl fmt::Display for Wrapped {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "wrap it up {}", self.0)
//!     }
//! }
//!
//! impl std::error::Error for Wrapped {
//!     fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
//!         Some(&self.0)
//!     }
//! }
//!
//! let errors = chain!["some error", Wrapped(Code(12))];
//!
//! assert!(inspect::is(&errors, &Code(12)));
//! assert!(!inspect::is(&errors, &Code(13)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Walking and matching across chains through the standard error protocol
pub mod inspect;
/// Construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for recording results into a chain
pub mod traits;
/// ErrorChain, Link and the shared aliases
pub mod types;

pub use traits::*;
pub use types::{BoxError, ChainResult, DynError, ErrorChain, ErrorVec, IntoIter, Iter, Link};
