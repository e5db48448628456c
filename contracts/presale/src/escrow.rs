//! Escrow ledger: pre-funded caller deposits and per-token custody.
//!
//! Callers fund their deposit out-of-band via NEP-141 `ft_transfer_call`
//! (credited in `ft_on_transfer`); `create_batch` then pulls from that
//! balance synchronously. Custody (`held`) tracks what the registry holds
//! per token across all committed sales.

use near_sdk::json_types::U128;
use near_sdk::store::LookupMap;
use near_sdk::{env, near, AccountId, Gas, Promise};

use crate::errors::PresaleError;
use crate::events::PresaleEvent;
use crate::{
    ext_ft, internal, Contract, ContractExt, StorageKey, GAS_FT_TRANSFER, GAS_WITHDRAW_CALLBACK,
    ONE_YOCTO,
};

#[near(serializers = [borsh])]
pub struct EscrowLedger {
    /// Key: (depositor, token contract).
    deposits: LookupMap<(AccountId, AccountId), u128>,
    /// Registry custody per token contract.
    held: LookupMap<AccountId, u128>,
}

impl EscrowLedger {
    pub fn new() -> Self {
        Self {
            deposits: LookupMap::new(StorageKey::EscrowDeposits),
            held: LookupMap::new(StorageKey::EscrowHeld),
        }
    }

    pub fn deposit_of(&self, account_id: &AccountId, token_id: &AccountId) -> u128 {
        self.deposits
            .get(&(account_id.clone(), token_id.clone()))
            .copied()
            .unwrap_or(0)
    }

    pub fn held_of(&self, token_id: &AccountId) -> u128 {
        self.held.get(token_id).copied().unwrap_or(0)
    }

    /// Credits a depositor's balance. Returns the new balance.
    pub fn credit(
        &mut self,
        account_id: &AccountId,
        token_id: &AccountId,
        amount: u128,
    ) -> Result<u128, PresaleError> {
        let key = (account_id.clone(), token_id.clone());
        let balance = self.deposits.get(&key).copied().unwrap_or(0);
        let new_balance = balance
            .checked_add(amount)
            .ok_or_else(|| PresaleError::InternalError("Escrow deposit overflow".into()))?;
        self.deposits.insert(key, new_balance);
        Ok(new_balance)
    }

    /// Debits a depositor's balance without touching custody; withdrawal path.
    pub fn debit(
        &mut self,
        account_id: &AccountId,
        token_id: &AccountId,
        amount: u128,
    ) -> Result<(), PresaleError> {
        let key = (account_id.clone(), token_id.clone());
        let balance = self.deposits.get(&key).copied().unwrap_or(0);
        if balance < amount {
            return Err(PresaleError::EscrowFailed(format!(
                "withdrawal of {} exceeds deposited balance {} of {}",
                amount, balance, token_id
            )));
        }
        self.deposits.insert(key, balance - amount);
        Ok(())
    }

    /// Pulls `amount` from the depositor's balance into registry custody.
    pub fn pull(
        &mut self,
        from: &AccountId,
        token_id: &AccountId,
        amount: u128,
    ) -> Result<(), PresaleError> {
        let key = (from.clone(), token_id.clone());
        let balance = self.deposits.get(&key).copied().unwrap_or(0);
        if balance < amount {
            return Err(PresaleError::EscrowFailed(format!(
                "pull of {} exceeds deposited balance {} of {}",
                amount, balance, token_id
            )));
        }
        self.deposits.insert(key, balance - amount);

        let held = self.held.get(token_id).copied().unwrap_or(0);
        let new_held = held
            .checked_add(amount)
            .ok_or_else(|| PresaleError::InternalError("Escrow custody overflow".into()))?;
        self.held.insert(token_id.clone(), new_held);
        Ok(())
    }

    /// Exact inverse of a prior `pull`; used only by batch rollback, so the
    /// subtraction from custody cannot underflow.
    pub fn refund(&mut self, from: &AccountId, token_id: &AccountId, amount: u128) {
        let held = self.held.get(token_id).copied().unwrap_or(0);
        self.held.insert(token_id.clone(), held.saturating_sub(amount));

        let key = (from.clone(), token_id.clone());
        let balance = self.deposits.get(&key).copied().unwrap_or(0);
        self.deposits.insert(key, balance.saturating_add(amount));
    }
}

#[near]
impl Contract {
    /// Returns a caller's unused escrow deposit for a token.
    pub fn get_deposit(&self, account_id: AccountId, token_id: AccountId) -> U128 {
        U128(self.escrow.deposit_of(&account_id, &token_id))
    }

    /// Returns the registry's custody balance for a token.
    pub fn get_escrow_held(&self, token_id: AccountId) -> U128 {
        U128(self.escrow.held_of(&token_id))
    }

    /// Returns an unused escrow deposit to the caller. Panics without
    /// exactly 1 yoctoNEAR attached.
    #[payable]
    #[handle_result]
    pub fn withdraw_deposit(
        &mut self,
        token_id: AccountId,
        amount: U128,
    ) -> Result<Promise, PresaleError> {
        internal::check_one_yocto()?;
        if amount.0 == 0 {
            return Err(PresaleError::InvalidInput(
                "Withdrawal amount must be positive".into(),
            ));
        }

        let account_id = env::predecessor_account_id();
        if self.escrow.deposit_of(&account_id, &token_id) == 0 {
            return Err(PresaleError::NotFound(format!(
                "No deposit found for {}",
                token_id
            )));
        }
        self.escrow.debit(&account_id, &token_id, amount.0)?;

        Ok(ext_ft::ext(token_id.clone())
            .with_attached_deposit(ONE_YOCTO)
            .with_static_gas(Gas::from_tgas(GAS_FT_TRANSFER))
            .ft_transfer(account_id.clone(), amount, None)
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_WITHDRAW_CALLBACK))
                    .on_withdraw_deposit(account_id, token_id, amount),
            ))
    }

    /// Only callable by this contract. Re-credits the deposit if the token
    /// transfer failed; emits the withdrawal event otherwise.
    #[private]
    pub fn on_withdraw_deposit(&mut self, account_id: AccountId, token_id: AccountId, amount: U128) {
        if env::promise_results_count() == 1 && env::promise_result_checked(0, 64).is_ok() {
            PresaleEvent::EscrowWithdrawn {
                account_id,
                token_id,
                amount,
            }
            .emit();
        } else if let Err(err) = self.escrow.credit(&account_id, &token_id, amount.0) {
            env::log_str(&format!("Withdrawal re-credit failed: {}", err));
        }
    }
}
