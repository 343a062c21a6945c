use soroban_sdk::{contracttype, Address};

use crate::SECONDS_PER_DAY;

/// Which transfer semantics the rented asset follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
#[repr(u32)]
pub enum TokenStandard {
    /// Single-unit asset; amounts are always 1.
    Single = 0,
    /// Multi-unit asset; several units of one token id can be lent at once.
    Multi = 1,
}

/// A lender's offer making an owned asset available for time-bounded rental
/// under a fixed daily price.
///
/// Stored under `(nft, token_id, lending_id)`; lending ids increase
/// monotonically per `(nft, token_id)` pair starting at 1.
#[derive(Clone, Debug)]
#[contracttype]
pub struct Lending {
    pub lender_address: Address,
    pub standard: TokenStandard,
    /// Units locked into the registry by the lender.
    pub lend_amount: u32,
    /// Units currently rentable (lend_amount minus units out on rent).
    pub available_amount: u32,
    /// Longest rent a renter may take, in whole days.
    pub max_rent_duration: u32,
    /// Packed fixed-point daily price (see `price`).
    pub daily_rent_price: u32,
    /// Payment-asset pointer resolved through the rent resolver.
    pub payment_token: u32,
    /// When false the lending is delisted as soon as all units return.
    pub will_auto_renew: bool,
}

/// A renter's accepted, prepaid occupancy of a lending.
///
/// Renting ids share the `(nft, token_id)` scope but count independently of
/// lending ids, also starting at 1. The record is removed on claim.
#[derive(Clone, Debug)]
#[contracttype]
pub struct Renting {
    pub renter_address: Address,
    pub lending_id: u64,
    pub rent_amount: u32,
    /// Rent duration in whole days.
    pub rent_duration: u32,
    pub rented_at: u64,
    /// Gross prepayment held in custody, in payment-token smallest units.
    pub paid_amount: i128,
}

impl Renting {
    /// Earliest timestamp at which the rent may be claimed.
    pub fn return_at(&self) -> u64 {
        self.rented_at + (self.rent_duration as u64) * SECONDS_PER_DAY
    }
}

/// One item of a batched `lend` call.
#[derive(Clone, Debug)]
#[contracttype]
pub struct LendOrder {
    pub standard: TokenStandard,
    pub nft: Address,
    pub token_id: u64,
    pub lend_amount: u32,
    pub max_rent_duration: u32,
    pub daily_rent_price: u32,
    pub payment_token: u32,
    pub will_auto_renew: bool,
}

/// One item of a batched `rent` call.
#[derive(Clone, Debug)]
#[contracttype]
pub struct RentOrder {
    pub nft: Address,
    pub token_id: u64,
    pub lending_id: u64,
    pub rent_duration: u32,
    pub rent_amount: u32,
}

/// One item of a batched `claim_rent` call.
#[derive(Clone, Debug)]
#[contracttype]
pub struct ClaimOrder {
    pub nft: Address,
    pub token_id: u64,
    pub lending_id: u64,
    pub renting_id: u64,
}

/// One item of a batched `stop_lend` call.
#[derive(Clone, Debug)]
#[contracttype]
pub struct StopOrder {
    pub nft: Address,
    pub token_id: u64,
    pub lending_id: u64,
}

/// A time-locked deposit. Shares are fixed at creation and never recomputed;
/// `amount` is zeroed exactly once on claim while the record is retained for
/// audit.
#[derive(Clone, Debug)]
#[contracttype]
pub struct Stake {
    pub staker: Address,
    /// Principal in whole tokens (scaled by `TOKEN_UNIT` at transfer time).
    pub amount: i128,
    /// Index into the interval tables.
    pub interval: u32,
    /// amount x interval coefficient x boost coefficient.
    pub shares: i128,
    pub locked_until: u64,
    /// Zombie presented for the boost, 0 when none.
    pub zombie_id: u64,
    /// Boost coefficient snapshot taken at stake time.
    pub boost_coefficient: u32,
}
