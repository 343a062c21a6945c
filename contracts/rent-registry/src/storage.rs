use soroban_sdk::{contracttype, Address, Env};
use undead_lib::{Lending, Renting};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    Resolver,
    /// Wallet receiving the retained rent fees.
    Beneficiary,
    Lending(Address, u64, u64),
    Renting(Address, u64, u64),
    LendingCounter(Address, u64),
    RentingCounter(Address, u64),
}

/* ---------------- CONFIG ---------------- */

pub fn set_resolver(env: &Env, resolver: &Address) {
    env.storage().instance().set(&DataKey::Resolver, resolver);
}

pub fn get_resolver(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Resolver).unwrap()
}

pub fn set_beneficiary(env: &Env, beneficiary: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Beneficiary, beneficiary);
}

pub fn get_beneficiary(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Beneficiary).unwrap()
}

/* ---------------- COUNTERS ---------------- */

/// Allocate the next lending id for a `(nft, token_id)` pair, starting at 1.
pub fn next_lending_id(env: &Env, nft: &Address, token_id: u64) -> u64 {
    let key = DataKey::LendingCounter(nft.clone(), token_id);
    let id: u64 = env.storage().persistent().get(&key).unwrap_or(0) + 1;
    env.storage().persistent().set(&key, &id);
    id
}

/// Allocate the next renting id; a numbering space distinct from lending ids.
pub fn next_renting_id(env: &Env, nft: &Address, token_id: u64) -> u64 {
    let key = DataKey::RentingCounter(nft.clone(), token_id);
    let id: u64 = env.storage().persistent().get(&key).unwrap_or(0) + 1;
    env.storage().persistent().set(&key, &id);
    id
}

/* ---------------- RECORDS ---------------- */

pub fn set_lending(env: &Env, nft: &Address, token_id: u64, lending_id: u64, lending: &Lending) {
    env.storage()
        .persistent()
        .set(&DataKey::Lending(nft.clone(), token_id, lending_id), lending);
}

pub fn get_lending(env: &Env, nft: &Address, token_id: u64, lending_id: u64) -> Option<Lending> {
    env.storage()
        .persistent()
        .get(&DataKey::Lending(nft.clone(), token_id, lending_id))
}

pub fn remove_lending(env: &Env, nft: &Address, token_id: u64, lending_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Lending(nft.clone(), token_id, lending_id));
}

pub fn set_renting(env: &Env, nft: &Address, token_id: u64, renting_id: u64, renting: &Renting) {
    env.storage()
        .persistent()
        .set(&DataKey::Renting(nft.clone(), token_id, renting_id), renting);
}

pub fn get_renting(env: &Env, nft: &Address, token_id: u64, renting_id: u64) -> Option<Renting> {
    env.storage()
        .persistent()
        .get(&DataKey::Renting(nft.clone(), token_id, renting_id))
}

pub fn remove_renting(env: &Env, nft: &Address, token_id: u64, renting_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Renting(nft.clone(), token_id, renting_id));
}
