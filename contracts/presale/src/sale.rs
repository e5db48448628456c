//! Batch sale creation and sale views.

use near_sdk::json_types::{U128, U64};
use near_sdk::{env, near, AccountId};

use crate::events::PresaleEvent;
use crate::*;

#[near]
impl Contract {
    /// Creates a batch of fixed-price sale offers, pulling each offered
    /// amount from the caller's escrow deposit into registry custody.
    /// All-or-nothing: a failed pull for any item undoes the whole batch,
    /// counter included, and no events are emitted.
    ///
    /// Open to any caller; the creator is the predecessor, never an argument.
    /// Returns the assigned sale ids in input order.
    #[handle_result]
    pub fn create_batch(
        &mut self,
        start_timestamps: Vec<u64>,
        end_timestamps: Vec<u64>,
        prices: Vec<U128>,
        amounts: Vec<U128>,
        token_ids: Vec<AccountId>,
    ) -> Result<Vec<U64>, PresaleError> {
        let len = start_timestamps.len();
        if len == 0
            || end_timestamps.len() != len
            || prices.len() != len
            || amounts.len() != len
            || token_ids.len() != len
        {
            return Err(PresaleError::invalid_argument_length());
        }
        if len > MAX_BATCH_SIZE {
            return Err(PresaleError::InvalidInput(format!(
                "Batch too large (max {} items)",
                MAX_BATCH_SIZE
            )));
        }

        let creator_id = env::predecessor_account_id();
        let first_sale_id = self.next_sale_id;

        for i in 0..len {
            let sale_id = self.next_sale_id;
            // Record and counter are persisted before the escrow pull.
            self.sales.insert(
                sale_id,
                Sale {
                    sale_id,
                    start_timestamp: start_timestamps[i],
                    end_timestamp: end_timestamps[i],
                    price: prices[i],
                    amount: amounts[i],
                    token_id: token_ids[i].clone(),
                    creator_id: creator_id.clone(),
                },
            );
            self.next_sale_id += 1;

            if let Err(err) = self.escrow.pull(&creator_id, &token_ids[i], amounts[i].0) {
                self.internal_rollback_batch(first_sale_id);
                return Err(match err {
                    PresaleError::EscrowFailed(reason) => {
                        PresaleError::EscrowFailed(format!("item {}: {}", i, reason))
                    }
                    other => other,
                });
            }
        }

        // The batch is committed; notifications become visible together, in
        // ascending id order.
        let sale_ids: Vec<U64> = (first_sale_id..self.next_sale_id).map(U64).collect();
        for sale_id in first_sale_id..self.next_sale_id {
            if let Some(sale) = self.sales.get(&sale_id) {
                PresaleEvent::SaleCreated {
                    sale_id: U64(sale_id),
                    creator_id: sale.creator_id.clone(),
                    token_id: sale.token_id.clone(),
                    amount: sale.amount,
                    price: sale.price,
                }
                .emit();
            }
        }
        Ok(sale_ids)
    }

    /// Absent ids — never assigned, or assigned then rolled back — are `None`.
    pub fn get_sale(&self, sale_id: U64) -> Option<Sale> {
        self.sales.get(&sale_id.0).cloned()
    }

    pub fn get_sale_count(&self) -> u64 {
        self.next_sale_id - 1
    }

    pub fn get_sales(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<Sale> {
        let from = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(DEFAULT_VIEW_LIMIT).min(MAX_VIEW_LIMIT) as usize;
        self.sales
            .iter()
            .skip(from)
            .take(limit)
            .map(|(_, sale)| sale.clone())
            .collect()
    }
}
