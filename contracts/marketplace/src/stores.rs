//! Store registry: stores keyed by (owner, per-owner id).

use soroban_sdk::{Address, Env};

use crate::error::MarketError;
use crate::storage::{self, DataKey};
use crate::types::{Store, StoreRef};

pub fn count(env: &Env, owner: &Address) -> u64 {
    storage::read(env, &DataKey::StoreCount(owner.clone())).unwrap_or(0)
}

/// Reserve the next store id for `owner`. Ids start at 1 for every owner.
pub fn next_id(env: &Env, owner: &Address) -> u64 {
    let id = count(env, owner) + 1;
    storage::write(env, &DataKey::StoreCount(owner.clone()), &id);
    id
}

pub fn load(env: &Env, owner: &Address, store_id: u64) -> Result<Store, MarketError> {
    storage::read(env, &DataKey::Store(owner.clone(), store_id)).ok_or(MarketError::StoreNotFound)
}

pub fn resolve(env: &Env, store: &StoreRef) -> Result<Store, MarketError> {
    load(env, &store.owner, store.store_id)
}

pub fn save(env: &Env, store: &Store) {
    storage::write(env, &DataKey::Store(store.owner.clone(), store.id), store);
}
