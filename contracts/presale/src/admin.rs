//! Owner-gated administration: fee configuration and ownership transfer.

use near_sdk::{env, near, AccountId};

use crate::events::PresaleEvent;
use crate::*;

#[near]
impl Contract {
    /// Owner only. Fee is in basis points; `[0, 10000]` inclusive.
    #[handle_result]
    pub fn set_fee_amount(&mut self, fee_amount_bps: u16) -> Result<(), PresaleError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        internal::check_fee_bps(fee_amount_bps)?;
        self.fee_amount_bps = fee_amount_bps;
        PresaleEvent::FeeAmountChanged { fee_amount_bps }.emit();
        Ok(())
    }

    pub fn get_fee_amount(&self) -> u16 {
        self.fee_amount_bps
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    /// Owner only.
    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), PresaleError> {
        internal::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(PresaleError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        PresaleEvent::OwnershipTransferred {
            old_owner,
            new_owner: self.owner_id.clone(),
        }
        .emit();
        Ok(())
    }
}
