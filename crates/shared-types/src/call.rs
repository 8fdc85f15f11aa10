//! # Call Plumbing
//!
//! The synchronous call seam between components. A component that can be
//! invoked at an address implements [`Callee`]; whoever performs outbound
//! calls for a component implements [`CallDispatcher`] and routes a
//! [`CallRequest`] to the callee registered at `request.to`.
//!
//! Execution is one complete call at a time: a dispatched call runs to
//! completion (or fails as a unit) before control returns to the caller.

use crate::primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

// =============================================================================
// CALL REQUEST
// =============================================================================

/// A single inbound call addressed to a component.
///
/// `caller` is set by the runtime performing the dispatch, never by the party
/// that authored `input`; callees may base trust decisions on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRequest {
    /// Immediate caller (the component or account performing this call).
    pub caller: Address,
    /// Call target.
    pub to: Address,
    /// Opaque amount forwarded with the call. Not interpreted by the plumbing.
    pub value: U256,
    /// Execution-cost ceiling for the call. Not interpreted by the plumbing.
    pub gas_limit: u64,
    /// Call payload (an encoded call for the target).
    pub input: Bytes,
}

// =============================================================================
// CALL OUTCOME
// =============================================================================

/// Result of a dispatched call.
///
/// On failure, `output` carries the callee's revert data (possibly empty).
/// A failed call leaves no observable state changes in the callee; effects
/// are applied only when `success` is true.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOutcome {
    /// Whether the call completed successfully.
    pub success: bool,
    /// Return data on success, revert data on failure.
    pub output: Bytes,
}

impl CallOutcome {
    /// Creates a successful outcome with return data.
    #[must_use]
    pub fn success(output: Bytes) -> Self {
        Self {
            success: true,
            output,
        }
    }

    /// Creates a failed outcome carrying revert data.
    #[must_use]
    pub fn revert(data: Bytes) -> Self {
        Self {
            success: false,
            output: data,
        }
    }
}

// =============================================================================
// TRAITS
// =============================================================================

/// A component reachable at an address.
///
/// Implementations must be all-or-nothing: when the returned outcome has
/// `success == false`, the call must not have left any observable state
/// change behind.
pub trait Callee {
    /// Handles a single inbound call.
    fn call(&mut self, request: CallRequest) -> CallOutcome;
}

/// Routes outbound calls by target address.
///
/// A dispatcher for an unknown target reports a failed outcome with empty
/// revert data rather than panicking.
pub trait CallDispatcher {
    /// Dispatches `request` to the callee registered at `request.to`.
    fn dispatch(&mut self, request: CallRequest) -> CallOutcome;
}

// =============================================================================
// TESTS
// =============================================================================
