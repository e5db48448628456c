use crate::tests::test_utils::*;
use crate::*;
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

// --- new ---

#[test]
fn new_sets_owner_and_fee() {
    let contract = new_contract();

    assert_eq!(contract.owner_id, owner());
    assert_eq!(contract.get_fee_amount(), 500);
    assert_eq!(contract.next_sale_id, 1);
}

#[test]
fn new_rejects_out_of_range_fee() {
    testing_env!(context(owner()).build());

    let err = Contract::new(owner(), 10_001).err().unwrap();
    assert!(matches!(err, PresaleError::InvalidInput(_)));
    assert!(err.to_string().contains("Invalid Fee Amount"));
}

#[test]
fn new_accepts_boundary_fees() {
    testing_env!(context(owner()).build());
    assert_eq!(Contract::new(owner(), 0).unwrap().get_fee_amount(), 0);

    testing_env!(context(owner()).build());
    assert_eq!(
        Contract::new(owner(), 10_000).unwrap().get_fee_amount(),
        10_000
    );
}

// --- set_fee_amount ---

#[test]
fn set_fee_amount_happy() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());

    contract.set_fee_amount(800).unwrap();
    assert_eq!(contract.get_fee_amount(), 800);

    let logs = get_logs();
    assert_eq!(logs.len(), 1, "Should emit exactly one event");
    assert!(logs[0].contains("fee_amount_changed"));
    assert!(logs[0].contains("800"));
}

#[test]
fn set_fee_amount_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context(other()).build());

    let err = contract.set_fee_amount(300).unwrap_err();
    assert!(matches!(err, PresaleError::Unauthorized(_)));
    assert_eq!(contract.get_fee_amount(), 500, "Fee must be unchanged");
    assert!(get_logs().is_empty());
}

#[test]
fn set_fee_amount_bounds_inclusive() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());

    contract.set_fee_amount(0).unwrap();
    assert_eq!(contract.get_fee_amount(), 0);

    contract.set_fee_amount(10_000).unwrap();
    assert_eq!(contract.get_fee_amount(), 10_000);

    let err = contract.set_fee_amount(10_001).unwrap_err();
    assert!(matches!(err, PresaleError::InvalidInput(_)));
    assert!(err.to_string().contains("Invalid Fee Amount"));
    assert_eq!(contract.get_fee_amount(), 10_000, "Fee must be unchanged");
}

// --- transfer_ownership ---

#[test]
fn transfer_ownership_happy() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());

    contract.transfer_ownership(other()).unwrap();
    assert_eq!(contract.owner_id, other());

    // Gate follows the new owner.
    testing_env!(context(owner()).build());
    let err = contract.set_fee_amount(100).unwrap_err();
    assert!(matches!(err, PresaleError::Unauthorized(_)));
}

#[test]
fn transfer_ownership_same_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());

    let err = contract.transfer_ownership(owner()).unwrap_err();
    assert!(matches!(err, PresaleError::InvalidInput(_)));
}

#[test]
fn transfer_ownership_no_deposit_fails() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());

    let err = contract.transfer_ownership(other()).unwrap_err();
    assert!(matches!(err, PresaleError::InsufficientDeposit(_)));
}

#[test]
fn transfer_ownership_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(other(), 1).build());

    let err = contract.transfer_ownership(creator()).unwrap_err();
    assert!(matches!(err, PresaleError::Unauthorized(_)));
    assert_eq!(contract.owner_id, owner());
}
