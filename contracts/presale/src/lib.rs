//! Presale registry — batch fixed-price sale offers backed by escrowed
//! NEP-141 deposits, owner-governed platform fee, NEP-297 JSON events.

use near_sdk::json_types::U128;
use near_sdk::store::IterableMap;
use near_sdk::{
    env, ext_contract, near, AccountId, BorshStorageKey, PanicOnDefault, PromiseOrValue,
};

// --- Modules ---

mod admin;
pub mod constants;
mod errors;
mod escrow;
mod events;
mod internal;
mod sale;
pub mod types;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::PresaleError;
pub use types::*;

use escrow::EscrowLedger;
use events::PresaleEvent;

// --- External Interfaces ---

#[ext_contract(ext_ft)]
pub trait FungibleToken {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);
}

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Sales,
    EscrowDeposits,
    EscrowHeld,
}

// --- Contract State ---

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,
    /// Platform fee in basis points (10000 = 100%).
    pub fee_amount_bps: u16,
    /// Next id handed out by `create_batch`; starts at 1, never reused.
    pub next_sale_id: u64,
    /// Sparse mapping; rolled-back ids are simply absent.
    pub sales: IterableMap<u64, Sale>,
    /// Pre-funded caller deposits plus per-token custody balances.
    pub escrow: EscrowLedger,
}

#[near]
impl Contract {
    #[init]
    #[handle_result]
    pub fn new(owner_id: AccountId, fee_amount_bps: u16) -> Result<Self, PresaleError> {
        internal::check_fee_bps(fee_amount_bps)?;
        Ok(Self {
            owner_id,
            fee_amount_bps,
            next_sale_id: 1,
            sales: IterableMap::new(StorageKey::Sales),
            escrow: EscrowLedger::new(),
        })
    }

    /// NEP-141 receiver hook. The predecessor is the token contract; the
    /// transferred amount is credited to the sender's escrow deposit and
    /// fully consumed (no refund).
    pub fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128> {
        let token_id = env::predecessor_account_id();
        near_sdk::require!(amount.0 > 0, "Amount must be positive");
        // The deposit is always credited to the sender; msg is part of the
        // NEP-141 receiver ABI but carries no routing here.
        let _ = msg;

        let new_balance = self
            .escrow
            .credit(&sender_id, &token_id, amount.0)
            .unwrap_or_else(|err| env::panic_str(&err.to_string()));

        PresaleEvent::EscrowDeposited {
            account_id: sender_id,
            token_id,
            amount,
            new_balance: U128(new_balance),
        }
        .emit();

        PromiseOrValue::Value(U128(0))
    }
}
