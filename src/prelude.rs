//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use linked_errors::prelude::*;
//!
//! fn check(input: &[&str]) -> ChainResult<Vec<u32>> {
//!     input.iter().map(|s| s.parse::<u32>()).collect_chain()
//! }
//!
//! let errors = check(&["4", "four"]).unwrap_err();
//! assert!(inspect::is_type::<std::num::ParseIntError>(&errors));
//! ```

// Macros
pub use crate::chain;

// Core types
pub use crate::types::{BoxError, ChainResult, ErrorChain, Link};

// Inspection
pub use crate::inspect;

// Traits
pub use crate::traits::{ResultExt, ResultIteratorExt};
