//! Request registry. Requests are immutable once written.

use soroban_sdk::Env;

use crate::error::MarketError;
use crate::storage::{self, DataKey};
use crate::types::Request;

pub fn count(env: &Env) -> u64 {
    storage::counter(env, &DataKey::RequestCount)
}

pub fn next_id(env: &Env) -> u64 {
    storage::next_id(env, &DataKey::RequestCount)
}

pub fn load(env: &Env, request_id: u64) -> Result<Request, MarketError> {
    storage::read(env, &DataKey::Request(request_id)).ok_or(MarketError::RequestNotFound)
}

pub fn save(env: &Env, request: &Request) {
    storage::write(env, &DataKey::Request(request.id), request);
}
