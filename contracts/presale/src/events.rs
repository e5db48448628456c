use near_sdk::json_types::{U128, U64};
use near_sdk::{near, AccountId};

#[near(event_json(standard = "presale"))]
pub enum PresaleEvent {
    #[event_version("1.0.0")]
    FeeAmountChanged { fee_amount_bps: u16 },
    #[event_version("1.0.0")]
    SaleCreated {
        sale_id: U64,
        creator_id: AccountId,
        token_id: AccountId,
        amount: U128,
        price: U128,
    },
    #[event_version("1.0.0")]
    EscrowDeposited {
        account_id: AccountId,
        token_id: AccountId,
        amount: U128,
        new_balance: U128,
    },
    #[event_version("1.0.0")]
    EscrowWithdrawn {
        account_id: AccountId,
        token_id: AccountId,
        amount: U128,
    },
    #[event_version("1.0.0")]
    OwnershipTransferred {
        old_owner: AccountId,
        new_owner: AccountId,
    },
}
