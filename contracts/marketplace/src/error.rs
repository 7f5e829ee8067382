use soroban_sdk::contracterror;

/// Every way an operation on the marketplace can be rejected.
///
/// Codes are grouped by kind so that clients can classify a failure from the
/// number alone:
/// - 1-9: invalid input
/// - 10-19: referenced entity not found
/// - 20-29: caller lacks the required relationship
/// - 30-39: lifecycle violation
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketError {
    // ========== Invalid input (1-9) ==========
    /// A required string (username, phone, name, image reference) is empty
    EmptyField = 1,
    /// A string is longer than the configured `max_text_len`
    FieldTooLong = 2,
    /// Latitude or longitude outside the valid scaled range
    InvalidLocation = 3,
    /// Price must be non-negative
    InvalidPrice = 4,
    /// More image references than the configured `max_images`
    TooManyImages = 5,
    /// Limits must be strictly positive
    InvalidLimits = 6,

    // ========== Not found (10-19) ==========
    /// No user is registered for the identity
    UserNotFound = 10,
    /// No store with that id under that owner
    StoreNotFound = 11,
    /// Request id was never assigned
    RequestNotFound = 12,
    /// Offer id was never assigned or the offer has been removed
    OfferNotFound = 13,

    // ========== Unauthorized (20-29) ==========
    /// Only the request's creator may accept offers on it
    NotRequestOwner = 20,
    /// Only the offer's creator may remove it
    NotOfferCreator = 21,
    /// An offer may only reference a store owned by the offeror
    NotStoreOwner = 22,

    // ========== Illegal state (30-39) ==========
    /// The identity already has a user record; use `update_user`
    UserAlreadyRegistered = 30,
    /// The offer has already been accepted
    OfferAlreadyAccepted = 31,
    /// Another offer on the same request has already been accepted
    RequestAlreadyResolved = 32,
    /// Accepted offers cannot be removed
    OfferAccepted = 33,
}

/// Coarse classification of a [`MarketError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Unauthorized,
    IllegalState,
}

impl MarketError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarketError::EmptyField
            | MarketError::FieldTooLong
            | MarketError::InvalidLocation
            | MarketError::InvalidPrice
            | MarketError::TooManyImages
            | MarketError::InvalidLimits => ErrorKind::InvalidInput,
            MarketError::UserNotFound
            | MarketError::StoreNotFound
            | MarketError::RequestNotFound
            | MarketError::OfferNotFound => ErrorKind::NotFound,
            MarketError::NotRequestOwner
            | MarketError::NotOfferCreator
            | MarketError::NotStoreOwner => ErrorKind::Unauthorized,
            MarketError::UserAlreadyRegistered
            | MarketError::OfferAlreadyAccepted
            | MarketError::RequestAlreadyResolved
            | MarketError::OfferAccepted => ErrorKind::IllegalState,
        }
    }
}
