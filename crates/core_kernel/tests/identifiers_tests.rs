//! Unit tests for strongly-typed identifiers

use core_kernel::{AccountId, TransactionId, UserId};
use uuid::Uuid;

#[test]
fn test_new_ids_are_unique() {
    let a = AccountId::new();
    let b = AccountId::new();
    assert_ne!(a, b);
}

#[test]
fn test_display_carries_prefix() {
    assert!(AccountId::new().to_string().starts_with("ACC-"));
    assert!(TransactionId::new().to_string().starts_with("TXN-"));
    assert!(UserId::new().to_string().starts_with("USR-"));
}

#[test]
fn test_round_trip_through_display() {
    let id = UserId::new();
    let parsed: UserId = id.to_string().parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn test_parse_bare_uuid() {
    let uuid = Uuid::new_v4();
    let id: AccountId = uuid.to_string().parse().unwrap();
    assert_eq!(id, AccountId::from_uuid(uuid));
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert!("not-a-uuid".parse::<AccountId>().is_err());
}
