//! # Shared Types
//!
//! Value objects and call plumbing shared by every crate in the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-crate types live here and nowhere else.
//! - **Value semantics**: `Address`, `Hash` and `Bytes` are plain data with no
//!   behaviour beyond construction, inspection and formatting.
//! - **Address-keyed composition**: components never hold references to each
//!   other; they are wired by `Address` through the [`call`] traits.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod call;
pub mod primitives;

pub use call::{CallDispatcher, CallOutcome, CallRequest, Callee};
pub use primitives::{Address, Bytes, Hash, U256};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
