/*!
 * Marketplace Smart Contract
 *
 * A request/offer marketplace: parties register as users, open stores, post
 * purchase requests and bid on each other's requests with offers. The creator
 * of a request accepts at most one offer on it.
 *
 * The contract holds four registries (users, stores, requests, offers) and the
 * transition rules that bind them:
 * - every reference an operation carries must point at an existing record
 * - only a request's creator can accept offers on it, and only once
 * - only an offer's creator can remove it, and only while it is unaccepted
 *
 * Every operation is fully validated before its first write. A rejected
 * invocation returns a `MarketError` and the host rolls back the whole call,
 * so partial updates are never observable.
 */

#![no_std]

mod error;
mod offers;
mod requests;
mod storage;
mod stores;
mod types;
mod users;
mod validation;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use error::{ErrorKind, MarketError};
pub use types::{
    AccountType, Limits, Location, Offer, Request, Store, StoreRef, User, COORD_SCALE,
};

use types::{
    LIMITS_UPDATED, OFFER_ACCEPTED, OFFER_CREATED, OFFER_REMOVED, REQUEST_CREATED,
    STORE_CREATED, USER_CREATED, USER_UPDATED,
};

#[contract]
pub struct MarketplaceContract;

#[contractimpl]
impl MarketplaceContract {
    /// Runs once at deployment. Records the administrator and installs the
    /// default input limits.
    pub fn __constructor(env: Env, admin: Address) {
        storage::write_admin(&env, &admin);
        storage::write_limits(&env, &Limits::default());
        storage::extend_instance_ttl(&env);
    }

    // ============================================================================================
    // IDENTITY REGISTRY
    // ============================================================================================

    /// Registers the caller as a user.
    ///
    /// # Errors
    /// - UserAlreadyRegistered: the identity already has a record (use `update_user`)
    /// - EmptyField / FieldTooLong: username or phone missing or too long
    /// - InvalidLocation: coordinates out of range
    pub fn create_user(
        env: Env,
        identity: Address,
        username: String,
        phone: String,
        location: Location,
        account_type: AccountType,
    ) -> Result<(), MarketError> {
        identity.require_auth();

        Self::_validate_profile(&env, &username, &phone, &location)?;

        if users::exists(&env, &identity) {
            log!(&env, "User already registered: {}", identity);
            return Err(MarketError::UserAlreadyRegistered);
        }

        let now = env.ledger().timestamp();
        let user = User {
            identity: identity.clone(),
            username,
            phone,
            location,
            account_type,
            created_at: now,
            updated_at: now,
        };
        users::save(&env, &user);
        storage::extend_instance_ttl(&env);

        env.events().publish((USER_CREATED, identity), ());

        Ok(())
    }

    /// Replaces every mutable field of the caller's user record. Identity and
    /// registration time are preserved.
    ///
    /// # Errors
    /// - UserNotFound: the identity was never registered
    /// - EmptyField / FieldTooLong / InvalidLocation: as for `create_user`
    pub fn update_user(
        env: Env,
        identity: Address,
        username: String,
        phone: String,
        location: Location,
        account_type: AccountType,
    ) -> Result<(), MarketError> {
        identity.require_auth();

        Self::_validate_profile(&env, &username, &phone, &location)?;

        let mut user = users::load(&env, &identity)?;
        user.username = username;
        user.phone = phone;
        user.location = location;
        user.account_type = account_type;
        user.updated_at = env.ledger().timestamp();

        users::save(&env, &user);
        storage::extend_instance_ttl(&env);

        env.events().publish((USER_UPDATED, identity), ());

        Ok(())
    }

    pub fn get_user(env: Env, identity: Address) -> Result<User, MarketError> {
        users::load(&env, &identity)
    }

    pub fn is_registered(env: Env, identity: Address) -> bool {
        users::exists(&env, &identity)
    }

    // ============================================================================================
    // STORE REGISTRY
    // ============================================================================================

    /// Opens a store owned by `owner`.
    ///
    /// # Returns
    /// The new store id. Ids are per owner and start at 1, so a store is
    /// addressed by `(owner, id)`.
    pub fn create_store(
        env: Env,
        owner: Address,
        name: String,
        description: String,
        phone: String,
        location: Location,
    ) -> Result<u64, MarketError> {
        owner.require_auth();

        let limits = storage::read_limits(&env);
        validation::require_text(&name, &limits)?;
        validation::optional_text(&description, &limits)?;
        validation::optional_text(&phone, &limits)?;
        validation::location(&location)?;

        let store_id = stores::next_id(&env, &owner);
        let store = Store {
            id: store_id,
            owner: owner.clone(),
            name,
            description,
            phone,
            location,
            created_at: env.ledger().timestamp(),
        };
        stores::save(&env, &store);
        storage::extend_instance_ttl(&env);

        env.events().publish((STORE_CREATED, owner), (store_id,));

        Ok(store_id)
    }

    pub fn get_store(env: Env, owner: Address, store_id: u64) -> Result<Store, MarketError> {
        stores::load(&env, &owner, store_id)
    }

    pub fn get_store_count(env: Env, owner: Address) -> u64 {
        stores::count(&env, &owner)
    }

    // ============================================================================================
    // REQUEST REGISTRY
    // ============================================================================================

    /// Posts a request on behalf of `creator`.
    ///
    /// # Returns
    /// The new request id (global, starting at 1).
    pub fn create_request(
        env: Env,
        creator: Address,
        name: String,
        description: String,
        images: Vec<String>,
        location: Location,
    ) -> Result<u64, MarketError> {
        creator.require_auth();

        let limits = storage::read_limits(&env);
        validation::require_text(&name, &limits)?;
        validation::optional_text(&description, &limits)?;
        validation::images(&images, &limits)?;
        validation::location(&location)?;

        let request_id = requests::next_id(&env);
        let request = Request {
            id: request_id,
            creator: creator.clone(),
            name,
            description,
            images,
            location,
            created_at: env.ledger().timestamp(),
        };
        requests::save(&env, &request);
        storage::extend_instance_ttl(&env);

        env.events().publish((REQUEST_CREATED, creator), (request_id,));

        Ok(request_id)
    }

    pub fn get_request(env: Env, request_id: u64) -> Result<Request, MarketError> {
        requests::load(&env, request_id)
    }

    /// Highest request id assigned so far.
    pub fn get_request_count(env: Env) -> u64 {
        requests::count(&env)
    }

    // ============================================================================================
    // OFFER REGISTRY & MATCHING
    // ============================================================================================

    /// Places an offer against an existing request, issued by one of the
    /// offeror's stores.
    ///
    /// Offers can still be placed on a request whose winner has already been
    /// chosen; they just can never be accepted.
    ///
    /// # Errors
    /// - InvalidPrice: price is negative
    /// - EmptyField / FieldTooLong / TooManyImages: bad image list
    /// - RequestNotFound: `request_id` was never assigned
    /// - StoreNotFound: `store` does not name an existing store
    /// - NotStoreOwner: the store belongs to someone other than the offeror
    pub fn create_offer(
        env: Env,
        offeror: Address,
        price: i128,
        images: Vec<String>,
        request_id: u64,
        store: StoreRef,
    ) -> Result<u64, MarketError> {
        offeror.require_auth();

        let limits = storage::read_limits(&env);
        validation::price(price)?;
        validation::images(&images, &limits)?;

        // Loading the request and store (not just checking for them) keeps both alive
        // for as long as offers keep arriving.
        if requests::load(&env, request_id).is_err() {
            log!(&env, "Offer references unknown request {}", request_id);
            return Err(MarketError::RequestNotFound);
        }

        let issuer = stores::resolve(&env, &store)?;
        if issuer.owner != offeror {
            log!(&env, "Offeror {} does not own store {}", offeror, store.store_id);
            return Err(MarketError::NotStoreOwner);
        }

        let offer_id = offers::next_id(&env);
        let offer = Offer {
            id: offer_id,
            offeror: offeror.clone(),
            price,
            images,
            request_id,
            store,
            accepted: false,
            created_at: env.ledger().timestamp(),
        };
        offers::insert(&env, &offer);
        storage::extend_instance_ttl(&env);

        env.events()
            .publish((OFFER_CREATED, offeror), (offer_id, request_id, price));

        Ok(offer_id)
    }

    /// Selects `offer_id` as the winning offer on its request.
    ///
    /// Authorization is against the request, not the offer: only the identity
    /// that created the request may accept, whoever placed the offer.
    ///
    /// # Errors
    /// - OfferNotFound: unknown or removed offer
    /// - NotRequestOwner: caller did not create the offer's request
    /// - OfferAlreadyAccepted: this offer already won
    /// - RequestAlreadyResolved: a different offer on the request already won
    pub fn accept_offer(env: Env, caller: Address, offer_id: u64) -> Result<(), MarketError> {
        caller.require_auth();

        let mut offer = offers::load(&env, offer_id)?;
        let request = requests::load(&env, offer.request_id)?;

        if request.creator != caller {
            log!(&env, "Caller {} does not own request {}", caller, request.id);
            return Err(MarketError::NotRequestOwner);
        }

        if offer.accepted {
            return Err(MarketError::OfferAlreadyAccepted);
        }

        if let Some(winner) = offers::accepted_for(&env, request.id) {
            log!(&env, "Request {} already resolved by offer {}", request.id, winner);
            return Err(MarketError::RequestAlreadyResolved);
        }

        offer.accepted = true;
        offers::update(&env, &offer);
        offers::mark_accepted(&env, request.id, offer_id);
        storage::extend_instance_ttl(&env);

        env.events()
            .publish((OFFER_ACCEPTED, caller), (offer_id, request.id));

        Ok(())
    }

    /// Deletes an unaccepted offer. The id is not reused.
    ///
    /// # Errors
    /// - OfferNotFound: unknown or already removed offer
    /// - NotOfferCreator: caller did not place the offer
    /// - OfferAccepted: the offer has won its request and is kept as the record of that
    pub fn remove_offer(env: Env, caller: Address, offer_id: u64) -> Result<(), MarketError> {
        caller.require_auth();

        let offer = offers::load(&env, offer_id)?;

        if offer.offeror != caller {
            log!(&env, "Caller {} did not create offer {}", caller, offer_id);
            return Err(MarketError::NotOfferCreator);
        }

        if offer.accepted {
            return Err(MarketError::OfferAccepted);
        }

        offers::delete(&env, &offer);
        storage::extend_instance_ttl(&env);

        env.events()
            .publish((OFFER_REMOVED, caller), (offer_id, offer.request_id));

        Ok(())
    }

    pub fn get_offer(env: Env, offer_id: u64) -> Result<Offer, MarketError> {
        offers::load(&env, offer_id)
    }

    /// One page of the live offers on a request, oldest first.
    ///
    /// `start` is a slot index in `[0, get_request_offer_count)`. At most
    /// `offers::MAX_PAGE_SIZE` slots are scanned per call; removed offers leave
    /// empty slots, so a page can come back shorter than `limit`.
    pub fn get_request_offers(
        env: Env,
        request_id: u64,
        start: u32,
        limit: u32,
    ) -> Result<Vec<u64>, MarketError> {
        requests::load(&env, request_id)?;
        Ok(offers::page_for_request(&env, request_id, start, limit))
    }

    /// Number of offers ever placed on a request, removed ones included.
    pub fn get_request_offer_count(env: Env, request_id: u64) -> Result<u32, MarketError> {
        requests::load(&env, request_id)?;
        Ok(offers::slots_for_request(&env, request_id))
    }

    /// The winning offer on a request, if one has been accepted.
    pub fn get_accepted_offer(env: Env, request_id: u64) -> Result<Option<u64>, MarketError> {
        requests::load(&env, request_id)?;
        Ok(offers::accepted_for(&env, request_id))
    }

    /// Highest offer id assigned so far, including removed offers.
    pub fn get_offer_count(env: Env) -> u64 {
        offers::count(&env)
    }

    // ============================================================================================
    // CONFIGURATION
    // ============================================================================================

    /// Replaces the input limits. Admin only.
    pub fn update_limits(env: Env, limits: Limits) -> Result<(), MarketError> {
        let admin = Self::_require_admin(&env);

        validation::limits(&limits)?;

        storage::write_limits(&env, &limits);
        storage::extend_instance_ttl(&env);

        env.events().publish(
            (LIMITS_UPDATED, admin),
            (limits.max_text_len, limits.max_images),
        );

        Ok(())
    }

    pub fn get_limits(env: Env) -> Limits {
        storage::read_limits(&env)
    }

    pub fn get_admin(env: Env) -> Address {
        storage::read_admin(&env)
    }

    // ============================================================================================
    // INTERNAL HELPERS
    // ============================================================================================

    /// Loads the admin and requires its signature.
    fn _require_admin(env: &Env) -> Address {
        let admin = storage::read_admin(env);
        admin.require_auth();
        admin
    }

    fn _validate_profile(
        env: &Env,
        username: &String,
        phone: &String,
        location: &Location,
    ) -> Result<(), MarketError> {
        let limits = storage::read_limits(env);
        validation::require_text(username, &limits)?;
        validation::require_text(phone, &limits)?;
        validation::location(location)
    }
}
