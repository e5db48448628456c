//! Sale domain types.

use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

/// A committed fixed-price sale offer. Immutable once created; the offered
/// `amount` sits in the registry's escrow custody for the sale's lifetime.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Sale {
    /// Sequential, starts at 1, never reused.
    pub sale_id: u64,
    /// Unix seconds; caller-supplied, not cross-validated against `end_timestamp`.
    pub start_timestamp: u64,
    /// Unix seconds.
    pub end_timestamp: u64,
    /// Quote-asset units per unit of sold asset.
    pub price: U128,
    /// Quantity pulled into escrow for this sale.
    pub amount: U128,
    /// NEP-141 contract backing the sale.
    pub token_id: AccountId,
    /// Recorded from the predecessor of `create_batch`, never caller-supplied.
    pub creator_id: AccountId,
}
