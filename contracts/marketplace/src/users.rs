//! Identity registry: one [`User`] per caller identity.

use soroban_sdk::{Address, Env};

use crate::error::MarketError;
use crate::storage::{self, DataKey};
use crate::types::User;

pub fn exists(env: &Env, identity: &Address) -> bool {
    storage::has(env, &DataKey::User(identity.clone()))
}

pub fn load(env: &Env, identity: &Address) -> Result<User, MarketError> {
    storage::read(env, &DataKey::User(identity.clone())).ok_or(MarketError::UserNotFound)
}

pub fn save(env: &Env, user: &User) {
    storage::write(env, &DataKey::User(user.identity.clone()), user);
}
