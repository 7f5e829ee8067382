/*!
 * Type Definitions for the Marketplace Contract
 *
 * Records held by the four registries (users, stores, requests, offers), the
 * value types they share, the configurable input limits and the event symbols
 * published on every state change.
 */

use soroban_sdk::{contracttype, symbol_short, Address, String, Symbol, Vec};

// ================================================================================================
// SHARED VALUE TYPES
// ================================================================================================

/// Scale applied to both coordinates: degrees * 1e6.
pub const COORD_SCALE: i64 = 1_000_000;
pub const MAX_LATITUDE: i64 = 90 * COORD_SCALE;
pub const MAX_LONGITUDE: i64 = 180 * COORD_SCALE;

/// Fixed-point geographic position.
///
/// Both coordinates are degrees scaled by [`COORD_SCALE`], so 37.7749 is
/// stored as `37_774_900`. They always travel together; there is no way to
/// set one without the other.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Location {
    pub latitude: i64,
    pub longitude: i64,
}

impl Location {
    pub fn new(latitude: i64, longitude: i64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_valid(&self) -> bool {
        (-MAX_LATITUDE..=MAX_LATITUDE).contains(&self.latitude)
            && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude)
    }
}

/// Role a user declares for themselves. Encoded as 0/1 on the wire.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AccountType {
    Buyer = 0,
    Seller = 1,
}

/// Typed reference from an offer to the store that issued it.
///
/// Store ids are only unique per owner, so the owner is part of the key.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoreRef {
    pub owner: Address,
    pub store_id: u64,
}

// ================================================================================================
// REGISTRY RECORDS
// ================================================================================================

/// A registered marketplace participant, keyed by `identity`.
///
/// `identity` and `created_at` are fixed at registration; every other field is
/// replaced wholesale by `update_user`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub identity: Address,
    pub username: String,
    pub phone: String,
    pub location: Location,
    pub account_type: AccountType,
    /// Ledger timestamp of registration
    pub created_at: u64,
    /// Ledger timestamp of the last update (equals `created_at` until then)
    pub updated_at: u64,
}

/// A store opened by `owner`. Permanent once created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Store {
    /// Per-owner id, starting at 1
    pub id: u64,
    pub owner: Address,
    pub name: String,
    pub description: String,
    pub phone: String,
    pub location: Location,
    pub created_at: u64,
}

/// A posted need for goods or services. Immutable once created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    /// Global id, starting at 1, never reused
    pub id: u64,
    pub creator: Address,
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub location: Location,
    pub created_at: u64,
}

/// A bid against a request.
///
/// # Lifecycle
/// - Created: `accepted == false`
/// - Accepted: set by the request's creator, terminal
/// - Removed: deleted by the offeror while still unaccepted; the record no
///   longer exists and its id is never handed out again
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Offer {
    /// Global id, starting at 1, never reused
    pub id: u64,
    pub offeror: Address,
    /// Price in the smallest currency unit
    pub price: i128,
    pub images: Vec<String>,
    pub request_id: u64,
    pub store: StoreRef,
    pub accepted: bool,
    pub created_at: u64,
}

// ================================================================================================
// CONFIGURATION
// ================================================================================================

pub const DEFAULT_MAX_TEXT_LEN: u32 = 512;
pub const DEFAULT_MAX_IMAGES: u32 = 8;

/// Input bounds enforced on every create/update. Set at deployment, changed
/// by the admin through `update_limits`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Limits {
    /// Maximum length in bytes of any string field
    pub max_text_len: u32,
    /// Maximum number of image references on a request or offer
    pub max_images: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_text_len: DEFAULT_MAX_TEXT_LEN,
            max_images: DEFAULT_MAX_IMAGES,
        }
    }
}

// ================================================================================================
// EVENT CONSTANTS
// ================================================================================================
// Topics are (symbol, acting identity). Data carries the ids an external caller
// needs to read the result back.

/// Contains: ()
pub const USER_CREATED: Symbol = symbol_short!("usr_crt");

/// Contains: ()
pub const USER_UPDATED: Symbol = symbol_short!("usr_upd");

/// Contains: (store_id,)
pub const STORE_CREATED: Symbol = symbol_short!("str_crt");

/// Contains: (request_id,)
pub const REQUEST_CREATED: Symbol = symbol_short!("req_crt");

/// Contains: (offer_id, request_id, price)
pub const OFFER_CREATED: Symbol = symbol_short!("offr_crt");

/// Contains: (offer_id, request_id)
pub const OFFER_ACCEPTED: Symbol = symbol_short!("offr_acc");

/// Contains: (offer_id, request_id)
pub const OFFER_REMOVED: Symbol = symbol_short!("offr_rmv");

/// Contains: (max_text_len, max_images)
pub const LIMITS_UPDATED: Symbol = symbol_short!("lim_upd");
