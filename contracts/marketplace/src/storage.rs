use soroban_sdk::{contracttype, Address, Env, IntoVal, TryFromVal, Val};

use crate::types::Limits;

/// Storage keys for the contract.
///
/// Configuration and id counters live in instance storage. Each record is its
/// own persistent entry so that registries grow without rewriting a shared map.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Administrator address (instance)
    Admin,
    /// Input limits (instance)
    Limits,
    /// Last assigned request id (instance)
    RequestCount,
    /// Last assigned offer id (instance)
    OfferCount,
    /// User record by identity (persistent)
    User(Address),
    /// Last assigned store id for an owner (persistent)
    StoreCount(Address),
    /// Store record by (owner, store id) (persistent)
    Store(Address, u64),
    /// Request record by id (persistent)
    Request(u64),
    /// Offer record by id (persistent)
    Offer(u64),
    /// Number of index slots handed out on a request (persistent)
    RequestOfferCount(u64),
    /// Offer id held in slot n of a request's index; removed offers leave a hole (persistent)
    RequestOffer(u64, u32),
    /// Index slot an offer occupies on its request (persistent)
    OfferSlot(u64),
    /// Id of the accepted offer on a request, once there is one (persistent)
    AcceptedOffer(u64),
}

/// Number of ledgers in a day (assuming ~5 second close time)
pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

/// Read a persistent entry. A hit also pushes the entry's expiry out, so
/// records that are only ever read (requests, stores) stay live while used.
pub fn read<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump(env, key);
    }
    value
}

pub fn has(env: &Env, key: &DataKey) -> bool {
    env.storage().persistent().has(key)
}

pub fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Write a persistent entry and push its expiry out.
pub fn write<V>(env: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    bump(env, key);
}

pub fn remove(env: &Env, key: &DataKey) {
    env.storage().persistent().remove(key);
}

/// Current value of an instance counter. Counters start at 0 and hold the
/// last id handed out.
pub fn counter(env: &Env, key: &DataKey) -> u64 {
    env.storage().instance().get(key).unwrap_or(0)
}

/// Advance an instance counter and return the new id (first id is 1).
///
/// The increment is written in the same invocation as the record it names,
/// so a rolled-back invocation never burns an id.
pub fn next_id(env: &Env, key: &DataKey) -> u64 {
    let id = counter(env, key) + 1;
    env.storage().instance().set(key, &id);
    id
}

/// The constructor always writes the admin.
pub fn read_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_limits(env: &Env) -> Limits {
    env.storage()
        .instance()
        .get(&DataKey::Limits)
        .unwrap_or_default()
}

pub fn write_limits(env: &Env, limits: &Limits) {
    env.storage().instance().set(&DataKey::Limits, limits);
}
