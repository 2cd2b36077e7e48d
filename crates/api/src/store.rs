//! In-memory stand-in for the storage collaborator.
//!
//! The core assumes an already-resolved record per (account, year, month);
//! concurrent submissions for the same key are serialized here as
//! last-write-wins. A real deployment would swap this for a database-backed
//! collaborator with the same surface.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use profitpulse_core::billing::SubscriptionTier;
use profitpulse_core::period::{PeriodKey, PeriodRecord};

/// One registered account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: Uuid,
    /// Contact email, default recipient for report sends.
    pub email: String,
    /// Business name.
    pub business_name: String,
    /// Business type.
    pub business_type: String,
    /// Owner name.
    pub owner_name: String,
    /// Subscription tier.
    pub tier: SubscriptionTier,
}

/// Registry of accounts known to this instance.
#[derive(Default)]
pub struct AccountRegistry {
    accounts: DashMap<Uuid, Account>,
}

impl AccountRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) an account.
    pub fn insert(&self, account: Account) {
        self.accounts.insert(account.id, account);
    }

    /// Looks up an account by ID.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<Account> {
        self.accounts.get(&id).map(|entry| entry.clone())
    }

    /// Updates an account's tier, returning false when the account is
    /// unknown.
    pub fn set_tier(&self, id: Uuid, tier: SubscriptionTier) -> bool {
        match self.accounts.get_mut(&id) {
            Some(mut entry) => {
                entry.tier = tier;
                true
            }
            None => false,
        }
    }
}

/// Period record store, keyed by (account, year, month).
#[derive(Default)]
pub struct PeriodStore {
    records: DashMap<(Uuid, PeriodKey), PeriodRecord>,
}

impl PeriodStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record for its key. Last write wins; a later
    /// submission supersedes, never merges.
    ///
    /// Returns true when an existing record was replaced.
    pub fn upsert(&self, account_id: Uuid, record: PeriodRecord) -> bool {
        self.records
            .insert((account_id, record.key), record)
            .is_some()
    }

    /// Fetches the record for one period, if present.
    #[must_use]
    pub fn get(&self, account_id: Uuid, key: PeriodKey) -> Option<PeriodRecord> {
        self.records
            .get(&(account_id, key))
            .map(|entry| entry.clone())
    }

    /// All records for an account, oldest first.
    #[must_use]
    pub fn list(&self, account_id: Uuid) -> Vec<PeriodRecord> {
        let mut records: Vec<PeriodRecord> = self
            .records
            .iter()
            .filter(|entry| entry.key().0 == account_id)
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by_key(|record| record.key);
        records
    }

    /// Deletes the record for one period, returning it when present.
    pub fn remove(&self, account_id: Uuid, key: PeriodKey) -> Option<PeriodRecord> {
        self.records.remove(&(account_id, key)).map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn key(month: u32) -> PeriodKey {
        PeriodKey { year: 2026, month }
    }

    #[test]
    fn test_upsert_last_write_wins() {
        let store = PeriodStore::new();
        let account = Uuid::new_v4();

        let mut first = PeriodRecord::zeroed(key(1));
        first.revenue_services = dec!(100);
        assert!(!store.upsert(account, first));

        let mut second = PeriodRecord::zeroed(key(1));
        second.revenue_services = dec!(200);
        assert!(store.upsert(account, second.clone()), "replace should report true");

        assert_eq!(store.get(account, key(1)), Some(second));
    }

    #[test]
    fn test_list_sorted_and_scoped_to_account() {
        let store = PeriodStore::new();
        let account = Uuid::new_v4();
        let other = Uuid::new_v4();

        store.upsert(account, PeriodRecord::zeroed(key(3)));
        store.upsert(account, PeriodRecord::zeroed(key(1)));
        store.upsert(other, PeriodRecord::zeroed(key(2)));

        let listed = store.list(account);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].key, key(1));
        assert_eq!(listed[1].key, key(3));
    }

    #[test]
    fn test_registry_set_tier() {
        let registry = AccountRegistry::new();
        let id = Uuid::new_v4();
        registry.insert(Account {
            id,
            email: "owner@example.com".to_string(),
            business_name: "Test Co".to_string(),
            business_type: "Retail".to_string(),
            owner_name: "Sam".to_string(),
            tier: SubscriptionTier::Free,
        });

        assert!(registry.set_tier(id, SubscriptionTier::Premium));
        assert_eq!(registry.get(id).unwrap().tier, SubscriptionTier::Premium);
        assert!(!registry.set_tier(Uuid::new_v4(), SubscriptionTier::Pro));
    }
}
