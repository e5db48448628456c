//! Typed errors for every `#[handle_result]` method.
//!
//! `near_sdk::FunctionError` makes an `Err` abort the call with the
//! Display message, so on-chain callers see the same revert strings the
//! unit tests match on.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum PresaleError {
    /// Caller lacks permission (non-owner calling a gated operation).
    Unauthorized(String),
    /// Invalid parameters from the caller.
    InvalidInput(String),
    /// Requested entity does not exist.
    NotFound(String),
    /// Attached deposit is missing or wrong.
    InsufficientDeposit(String),
    /// An escrow pull could not complete; the enclosing batch is undone.
    EscrowFailed(String),
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for PresaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::EscrowFailed(msg) => write!(f, "Escrow failed: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl PresaleError {
    pub fn invalid_fee_amount() -> Self {
        Self::InvalidInput("Invalid Fee Amount".into())
    }
    pub fn invalid_argument_length() -> Self {
        Self::InvalidInput("Invalid Argument Length".into())
    }
    pub fn not_owner() -> Self {
        Self::Unauthorized("caller is not the owner".into())
    }
}
