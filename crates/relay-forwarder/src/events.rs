//! Observable events emitted by the forwarder.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Bytes};

/// Emitted after a forwarded call completed successfully.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaExecuted {
    /// Authenticated signer the call was performed for.
    pub from: Address,
    /// Call target.
    pub to: Address,
    /// Outcome of the forwarded call.
    pub success: bool,
    /// Return data of the forwarded call.
    pub output: Bytes,
}
