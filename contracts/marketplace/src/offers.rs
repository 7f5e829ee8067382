//! Offer registry.
//!
//! Besides the offer records themselves this keeps two per-request indexes:
//! the offers placed on a request, and the id of the accepted offer. The
//! accepted-offer entry is what makes "one winner per request" a single lookup
//! instead of a scan over every offer.
//!
//! The placed-offers index is one entry per slot (`RequestOffer(request, n)`)
//! plus a slot counter, so placing or removing an offer touches a fixed number
//! of entries however many offers the request has collected.

use soroban_sdk::{Env, Vec};

use crate::error::MarketError;
use crate::storage::{self, DataKey};
use crate::types::Offer;

/// Most offer ids returned by one page of [`page_for_request`].
pub const MAX_PAGE_SIZE: u32 = 50;

pub fn count(env: &Env) -> u64 {
    storage::counter(env, &DataKey::OfferCount)
}

pub fn next_id(env: &Env) -> u64 {
    storage::next_id(env, &DataKey::OfferCount)
}

pub fn load(env: &Env, offer_id: u64) -> Result<Offer, MarketError> {
    storage::read(env, &DataKey::Offer(offer_id)).ok_or(MarketError::OfferNotFound)
}

/// Write a new offer and give it the next slot in its request's index.
pub fn insert(env: &Env, offer: &Offer) {
    storage::write(env, &DataKey::Offer(offer.id), offer);

    let slot = slots_for_request(env, offer.request_id);
    storage::write(env, &DataKey::RequestOffer(offer.request_id, slot), &offer.id);
    storage::write(env, &DataKey::OfferSlot(offer.id), &slot);
    storage::write(env, &DataKey::RequestOfferCount(offer.request_id), &(slot + 1));
}

pub fn update(env: &Env, offer: &Offer) {
    storage::write(env, &DataKey::Offer(offer.id), offer);
}

/// Delete the record and empty its slot. Slots are not reused.
pub fn delete(env: &Env, offer: &Offer) {
    storage::remove(env, &DataKey::Offer(offer.id));

    if let Some(slot) = storage::read::<u32>(env, &DataKey::OfferSlot(offer.id)) {
        storage::remove(env, &DataKey::RequestOffer(offer.request_id, slot));
        storage::remove(env, &DataKey::OfferSlot(offer.id));
    }
}

/// Slots handed out on a request so far, removed offers included.
pub fn slots_for_request(env: &Env, request_id: u64) -> u32 {
    storage::read(env, &DataKey::RequestOfferCount(request_id)).unwrap_or(0)
}

/// Live offer ids in slots `[start, start + limit)`, oldest first. Empty
/// slots are skipped, so a page may hold fewer than `limit` ids.
pub fn page_for_request(env: &Env, request_id: u64, start: u32, limit: u32) -> Vec<u64> {
    let end = slots_for_request(env, request_id).min(start.saturating_add(limit.min(MAX_PAGE_SIZE)));

    let mut ids = Vec::new(env);
    for slot in start..end {
        if let Some(offer_id) = storage::read(env, &DataKey::RequestOffer(request_id, slot)) {
            ids.push_back(offer_id);
        }
    }
    ids
}

pub fn accepted_for(env: &Env, request_id: u64) -> Option<u64> {
    storage::read(env, &DataKey::AcceptedOffer(request_id))
}

pub fn mark_accepted(env: &Env, request_id: u64, offer_id: u64) {
    storage::write(env, &DataKey::AcceptedOffer(request_id), &offer_id);
}
