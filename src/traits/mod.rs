//! Extension traits for feeding results into an [`ErrorChain`](crate::ErrorChain).
//!
//! - [`ResultExt`]: record a single failure and keep going
//! - [`ResultIteratorExt`]: run a whole batch and gather every failure
//!
//! # Examples
//!
//! ```
//! use linked_errors::traits::{ResultExt, ResultIteratorExt};
//! use linked_errors::ErrorChain;
//!
//! let mut errors = ErrorChain::new();
//! let port = "80".parse::<u16>().record_err(&mut errors);
//! let host = "".parse::<std::net::IpAddr>().record_err(&mut errors);
//!
//! assert_eq!(port, Some(80));
//! assert!(host.is_none());
//! assert_eq!(errors.len(), 1);
//!
//! let parsed = ["1", "x", "3", "y"].iter().map(|s| s.parse::<u8>()).collect_chain();
//! assert_eq!(parsed.unwrap_err().len(), 2);
//! ```

pub mod result_ext;
pub mod result_iter_ext;

pub use result_ext::ResultExt;
pub use result_iter_ext::ResultIteratorExt;
