// Internal guards and batch rollback helpers.

use near_sdk::{env, AccountId};

use crate::*;

impl Contract {
    pub(crate) fn is_owner(&self, account_id: &AccountId) -> bool {
        &self.owner_id == account_id
    }

    pub(crate) fn check_contract_owner(&self, account_id: &AccountId) -> Result<(), PresaleError> {
        if !self.is_owner(account_id) {
            return Err(PresaleError::not_owner());
        }
        Ok(())
    }

    /// Undoes every write `create_batch` made for the current batch: removes
    /// the inserted sales, refunds the pulls that succeeded, and restores the
    /// id counter. The failing item's pull left no escrow change, so its
    /// record is removed without a refund.
    pub(crate) fn internal_rollback_batch(&mut self, first_sale_id: u64) {
        let failed_id = self.next_sale_id - 1;
        for sale_id in first_sale_id..self.next_sale_id {
            if let Some(sale) = self.sales.remove(&sale_id) {
                if sale_id != failed_id {
                    self.escrow
                        .refund(&sale.creator_id, &sale.token_id, sale.amount.0);
                }
            }
        }
        self.next_sale_id = first_sale_id;
    }
}

/// Fee domain check shared by `new` and `set_fee_amount`; zero and the
/// 10000 maximum are both valid.
pub(crate) fn check_fee_bps(fee_amount_bps: u16) -> Result<(), PresaleError> {
    if fee_amount_bps > MAX_FEE_BPS {
        return Err(PresaleError::invalid_fee_amount());
    }
    Ok(())
}

/// Check exactly one yoctoNEAR is attached.
pub(crate) fn check_one_yocto() -> Result<(), PresaleError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(PresaleError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}
