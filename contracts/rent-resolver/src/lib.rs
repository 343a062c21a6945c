#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol, Vec};
use undead_lib::{rights, validation, ContractError};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    /// pointer -> payment token address; pointer 0 is reserved.
    PaymentToken(u32),
    /// payment token address -> rent fee in basis points.
    RentFee(Address),
}

#[contract]
pub struct RentResolver;

#[contractimpl]
impl RentResolver {
    /// Initialize with the deploy-time admin, the initial pointer table and
    /// the initial per-token fee table (basis points).
    pub fn init(
        env: Env,
        admin: Address,
        pointers: Vec<u32>,
        tokens: Vec<Address>,
        fee_tokens: Vec<Address>,
        fee_bps: Vec<u32>,
    ) {
        if env.storage().instance().has(&DataKey::Initialized) {
            panic!("Contract already initialized");
        }
        admin.require_auth();

        if pointers.len() != tokens.len() {
            panic!("RentResolver::length mismatch");
        }
        if fee_tokens.len() != fee_bps.len() {
            panic!("RentResolver::length mismatch");
        }

        rights::init_rights(&env, &admin);

        for i in 0..pointers.len() {
            let pointer = pointers.get_unchecked(i);
            if pointer == 0 {
                panic!("RentResolver::pointer zero is reserved");
            }
            env.storage()
                .instance()
                .set(&DataKey::PaymentToken(pointer), &tokens.get_unchecked(i));
        }

        for i in 0..fee_tokens.len() {
            let bps = fee_bps.get_unchecked(i);
            if validation::validate_fee_bps(bps).is_err() {
                panic!("RentResolver::invalid fee");
            }
            env.storage()
                .instance()
                .set(&DataKey::RentFee(fee_tokens.get_unchecked(i)), &bps);
        }

        env.storage().instance().set(&DataKey::Initialized, &true);
    }

    /// Point `pointer` at a new token address. Historical lendings keep their
    /// pointer and pick up the new address on the next resolution.
    pub fn set_payment_token(env: Env, caller: Address, pointer: u32, token: Address) {
        caller.require_auth();
        if !rights::is_admin(&env, &caller) {
            panic!("RentResolver::not admin");
        }
        if pointer == 0 {
            panic!("RentResolver::pointer zero is reserved");
        }

        env.storage()
            .instance()
            .set(&DataKey::PaymentToken(pointer), &token);

        env.events()
            .publish((Symbol::new(&env, "set_token"),), (pointer, token));
    }

    pub fn get_payment_token(env: Env, pointer: u32) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::PaymentToken(pointer))
            .expect("RentResolver::unknown payment token")
    }

    /// Update the fee charged on rents paid in `token`. Admin only.
    pub fn set_rent_fee(env: Env, caller: Address, token: Address, fee_bps: u32) {
        caller.require_auth();
        if !rights::is_admin(&env, &caller) {
            panic!("RentResolver::not admin");
        }
        if validation::validate_fee_bps(fee_bps).is_err() {
            panic!("RentResolver::invalid fee");
        }

        env.storage()
            .instance()
            .set(&DataKey::RentFee(token.clone()), &fee_bps);

        env.events()
            .publish((Symbol::new(&env, "set_rent_fee"),), (token, fee_bps));
    }

    /// Fee for an unconfigured token is zero.
    pub fn get_rent_fee(env: Env, token: Address) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::RentFee(token))
            .unwrap_or(0)
    }

    pub fn add_admin(env: Env, caller: Address, subject: Address) {
        if rights::add_admin(&env, &caller, &subject).is_err() {
            panic!("RentResolver::not admin");
        }
    }

    pub fn remove_admin(env: Env, caller: Address, subject: Address) {
        match rights::remove_admin(&env, &caller, &subject) {
            Ok(()) => (),
            Err(ContractError::InvalidInput) => panic!("RentResolver::cannot remove last admin"),
            Err(_) => panic!("RentResolver::not admin"),
        }
    }

    pub fn is_admin(env: Env, subject: Address) -> bool {
        rights::is_admin(&env, &subject)
    }
}
